//! IPAM operations for MockNetBoxClient
//!
//! Handles aggregates

use super::MockNetBoxClient;
use crate::error::NetBoxError;
use crate::models::*;

fn build_aggregate(client: &MockNetBoxClient, id: u64, request: &WritableAggregate, created: String) -> Aggregate {
    let helpers = client.helpers();
    let rir_name = client.rirs.lock().unwrap().get(&request.rir).cloned();
    Aggregate {
        id,
        url: format!("{}/api/ipam/aggregates/{}/", client.base_url, id),
        display: request.prefix.clone(),
        prefix: request.prefix.clone(),
        rir: helpers.create_nested_rir(request.rir, rir_name),
        date_added: None,
        description: request.description.clone(),
        tags: helpers.convert_tags(&request.tags),
        created: Some(created),
        last_updated: Some(chrono::Utc::now().to_rfc3339()),
    }
}

pub async fn get_aggregate(client: &MockNetBoxClient, id: u64) -> Result<Aggregate, NetBoxError> {
        client.record("get_aggregate")?;
        client.aggregates
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or_else(|| NetBoxError::NotFound(format!("Aggregate {} not found", id)))
}

pub async fn create_aggregate(client: &MockNetBoxClient, request: &WritableAggregate) -> Result<Aggregate, NetBoxError> {
        client.record("create_aggregate")?;
        let id = client.next_id();
        let aggregate = build_aggregate(client, id, request, chrono::Utc::now().to_rfc3339());

        client.aggregates.lock().unwrap().insert(id, aggregate.clone());
        Ok(aggregate)
}

pub async fn update_aggregate(client: &MockNetBoxClient, id: u64, request: &WritableAggregate) -> Result<Aggregate, NetBoxError> {
        client.record("update_aggregate")?;
        let created = client.aggregates
            .lock()
            .unwrap()
            .get(&id)
            .map(|existing| existing.created.clone())
            .ok_or_else(|| NetBoxError::NotFound(format!("Aggregate {} not found", id)))?
            .unwrap_or_else(|| chrono::Utc::now().to_rfc3339());

        let aggregate = build_aggregate(client, id, request, created);
        client.aggregates.lock().unwrap().insert(id, aggregate.clone());
        Ok(aggregate)
}

pub async fn delete_aggregate(client: &MockNetBoxClient, id: u64) -> Result<(), NetBoxError> {
        client.record("delete_aggregate")?;
        client.aggregates
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| NetBoxError::NotFound(format!("Aggregate {} not found", id)))
}
