//! Unit tests for the netbox_ipam_aggregate resource handler

#[cfg(test)]
mod tests {
    use super::super::ipam_aggregate::{IpamAggregate, TYPE_NAME};
    use crate::error::ProviderError;
    use crate::resource::Resource;
    use crate::resource_data::ResourceData;
    use crate::schema::AttributeType;
    use netbox_client::{Aggregate, MockNetBoxClient, NestedRir};
    use serde_json::json;
    use std::sync::Arc;

    fn setup() -> (MockNetBoxClient, IpamAggregate) {
        let mock_client = MockNetBoxClient::new("http://test-netbox");
        let handler = IpamAggregate::new(Arc::new(mock_client.clone()));
        (mock_client, handler)
    }

    fn declared(prefix: &str, rir_id: u64, description: Option<&str>) -> ResourceData {
        let mut attributes = json!({"prefix": prefix, "rir_id": rir_id});
        if let Some(description) = description {
            attributes["description"] = json!(description);
        }
        ResourceData::from_attributes(attributes)
    }

    fn stored_aggregate(id: u64, prefix: &str, rir_id: u64, description: &str) -> Aggregate {
        Aggregate {
            id,
            url: format!("http://test-netbox/api/ipam/aggregates/{}/", id),
            display: prefix.to_string(),
            prefix: prefix.to_string(),
            rir: NestedRir {
                id: rir_id,
                url: format!("http://test-netbox/api/ipam/rirs/{}/", rir_id),
                display: "ARIN".to_string(),
                name: "ARIN".to_string(),
                slug: "arin".to_string(),
            },
            date_added: None,
            description: description.to_string(),
            tags: vec![],
            created: None,
            last_updated: None,
        }
    }

    #[test]
    fn test_schema_declares_user_fields() {
        let (_, handler) = setup();
        let schema = handler.schema();

        assert_eq!(handler.type_name(), TYPE_NAME);
        assert_eq!(schema.attributes.len(), 3);
        assert!(schema.importable);

        let prefix = schema.attribute("prefix").unwrap();
        assert!(prefix.required);
        assert_eq!(prefix.attr_type, AttributeType::String);

        let rir_id = schema.attribute("rir_id").unwrap();
        assert!(rir_id.required);
        assert_eq!(rir_id.attr_type, AttributeType::Int);

        let description = schema.attribute("description").unwrap();
        assert!(description.optional);
        assert!(!description.required);
        assert!(schema.attribute("id").is_none());
    }

    #[tokio::test]
    async fn test_create_sets_id_only() {
        let (mock_client, handler) = setup();
        let mut data = declared("10.0.0.0/8", 1, Some("test"));
        let before = data.attributes().clone();

        handler.create(&mut data).await.unwrap();

        assert_eq!(data.id(), Some("1"));
        assert_eq!(data.attributes(), &before, "create must not echo remote fields");

        let stored = mock_client.aggregate(1).unwrap();
        assert_eq!(stored.prefix, "10.0.0.0/8");
        assert_eq!(stored.rir.id, 1);
        assert_eq!(stored.description, "test");
        assert!(stored.tags.is_empty());
        assert_eq!(mock_client.calls(), vec!["create_aggregate"]);
    }

    #[tokio::test]
    async fn test_create_without_description_sends_empty() {
        let (mock_client, handler) = setup();
        let mut data = declared("192.168.10.0/24", 2, None);

        handler.create(&mut data).await.unwrap();

        let id = data.netbox_id().unwrap();
        assert_eq!(mock_client.aggregate(id).unwrap().description, "");
    }

    #[tokio::test]
    async fn test_create_failure_leaves_id_unset() {
        let (mock_client, handler) = setup();
        mock_client.fail_with("connection refused");
        let mut data = declared("10.0.0.0/8", 1, None);

        let err = handler.create(&mut data).await.unwrap_err();

        assert!(matches!(err, ProviderError::NetBox(_)));
        assert!(err.to_string().contains("connection refused"));
        assert_eq!(data.id(), None);
        assert_eq!(mock_client.aggregate_count(), 0);
    }

    #[tokio::test]
    async fn test_create_missing_prefix_makes_no_call() {
        let (mock_client, handler) = setup();
        let mut data = ResourceData::from_attributes(json!({"rir_id": 1}));

        let err = handler.create(&mut data).await.unwrap_err();

        assert!(matches!(err, ProviderError::MissingAttribute(name) if name == "prefix"));
        assert!(mock_client.calls().is_empty());
    }

    #[tokio::test]
    async fn test_read_overwrites_local_fields() {
        let (mock_client, handler) = setup();
        mock_client.add_aggregate(stored_aggregate(7, "172.16.0.0/12", 4, "remote"));

        let mut data = declared("172.16.0.0/16", 1, Some("local"));
        data.set_id("7");
        handler.read(&mut data).await.unwrap();

        assert_eq!(data.get_string("prefix").unwrap(), "172.16.0.0/12");
        assert_eq!(data.require_u64("rir_id").unwrap(), 4);
        assert_eq!(data.get_string("description").unwrap(), "remote");
        assert_eq!(data.id(), Some("7"));
    }

    #[tokio::test]
    async fn test_read_non_numeric_id_fails_before_remote_call() {
        let (mock_client, handler) = setup();
        let mut data = ResourceData::with_id("not-a-number");

        let err = handler.read(&mut data).await.unwrap_err();

        assert!(matches!(err, ProviderError::InvalidId { .. }));
        assert!(mock_client.calls().is_empty());
    }

    #[tokio::test]
    async fn test_read_missing_is_not_found() {
        let (_, handler) = setup();
        let mut data = ResourceData::with_id("404");

        let err = handler.read(&mut data).await.unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.kind(), "not_found");
    }

    #[tokio::test]
    async fn test_read_transport_failure_is_not_not_found() {
        let (mock_client, handler) = setup();
        mock_client.add_aggregate(stored_aggregate(1, "10.0.0.0/8", 1, ""));
        mock_client.fail_with("timeout");
        let mut data = ResourceData::with_id("1");

        let err = handler.read(&mut data).await.unwrap_err();

        assert!(!err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_replaces_whole_aggregate() {
        let (mock_client, handler) = setup();
        mock_client.add_aggregate(stored_aggregate(3, "10.0.0.0/8", 1, "old"));

        let mut data = declared("10.0.0.0/8", 2, None);
        data.set_id("3");
        handler.update(&mut data).await.unwrap();

        let stored = mock_client.aggregate(3).unwrap();
        assert_eq!(stored.rir.id, 2);
        assert_eq!(stored.description, "", "omitted description replaces the old one");
    }

    #[tokio::test]
    async fn test_update_is_idempotent() {
        let (mock_client, handler) = setup();
        mock_client.add_aggregate(stored_aggregate(3, "10.0.0.0/8", 1, "old"));

        let mut data = declared("10.0.0.0/8", 1, Some("new"));
        data.set_id("3");
        handler.update(&mut data).await.unwrap();
        let first = mock_client.aggregate(3).unwrap();
        handler.update(&mut data).await.unwrap();
        let second = mock_client.aggregate(3).unwrap();

        assert_eq!(first.prefix, second.prefix);
        assert_eq!(first.rir, second.rir);
        assert_eq!(first.description, second.description);
        assert_eq!(mock_client.aggregate_count(), 1);
    }

    #[tokio::test]
    async fn test_update_failure_keeps_pending_values() {
        let (mock_client, handler) = setup();
        mock_client.add_aggregate(stored_aggregate(3, "10.0.0.0/8", 1, "old"));
        mock_client.fail_with("validation failed");

        let mut data = declared("10.0.0.0/8", 1, Some("new"));
        data.set_id("3");
        let err = handler.update(&mut data).await.unwrap_err();

        assert!(matches!(err, ProviderError::NetBox(_)));
        assert_eq!(data.get_string("description").unwrap(), "new");
        assert_eq!(mock_client.aggregate(3).unwrap().description, "old");
    }

    #[tokio::test]
    async fn test_update_missing_id() {
        let (_, handler) = setup();
        let mut data = declared("10.0.0.0/8", 1, None);

        let err = handler.update(&mut data).await.unwrap_err();
        assert!(matches!(err, ProviderError::MissingId));
    }

    #[tokio::test]
    async fn test_delete_then_read_fails_not_found() {
        let (mock_client, handler) = setup();
        mock_client.add_aggregate(stored_aggregate(5, "10.0.0.0/8", 1, ""));

        let mut data = ResourceData::with_id("5");
        handler.delete(&mut data).await.unwrap();
        assert_eq!(data.id(), None);
        assert_eq!(mock_client.aggregate_count(), 0);

        let mut stale = ResourceData::with_id("5");
        let err = handler.read(&mut stale).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_propagates_remote_errors() {
        let (mock_client, handler) = setup();
        mock_client.add_aggregate(stored_aggregate(5, "10.0.0.0/8", 1, ""));
        mock_client.fail_with("permission denied");

        let mut data = ResourceData::with_id("5");
        let err = handler.delete(&mut data).await.unwrap_err();

        assert!(matches!(err, ProviderError::NetBox(_)));
        assert_eq!(data.id(), Some("5"), "failed delete keeps the resource present");
    }

    #[tokio::test]
    async fn test_delete_invalid_id() {
        let (mock_client, handler) = setup();
        let mut data = ResourceData::with_id("-1");

        let err = handler.delete(&mut data).await.unwrap_err();

        assert!(matches!(err, ProviderError::InvalidId { .. }));
        assert!(mock_client.calls().is_empty());
    }

    #[tokio::test]
    async fn test_import_populates_declared_fields() {
        let (mock_client, handler) = setup();
        mock_client.add_aggregate(stored_aggregate(12, "2001:db8::/32", 6, "documentation"));

        let data = handler.import("12").await.unwrap();

        assert_eq!(data.id(), Some("12"));
        assert_eq!(data.get_string("prefix").unwrap(), "2001:db8::/32");
        assert_eq!(data.require_u64("rir_id").unwrap(), 6);
        assert_eq!(data.get_string("description").unwrap(), "documentation");
        assert!(handler.schema().validate(&data).is_ok());
    }

    #[tokio::test]
    async fn test_lifecycle_scenario() {
        let (_, handler) = setup();

        let mut data = declared("10.0.0.0/8", 1, Some("test"));
        handler.create(&mut data).await.unwrap();
        let id = data.netbox_id().unwrap();
        assert!(id > 0);

        let mut refreshed = ResourceData::with_id(id.to_string());
        handler.read(&mut refreshed).await.unwrap();
        assert_eq!(refreshed.get_string("prefix").unwrap(), "10.0.0.0/8");
        assert_eq!(refreshed.require_u64("rir_id").unwrap(), 1);
        assert_eq!(refreshed.get_string("description").unwrap(), "test");

        handler.delete(&mut refreshed).await.unwrap();

        let mut gone = ResourceData::with_id(id.to_string());
        assert!(handler.read(&mut gone).await.is_err());
    }
}
