//! `netbox_ipam_aggregate` resource handler

use crate::error::ProviderError;
use crate::resource::Resource;
use crate::resource_data::ResourceData;
use crate::schema::{Attribute, AttributeType, Schema};
use netbox_client::{NetBoxClientTrait, WritableAggregate};
use std::sync::Arc;
use tracing::{debug, info};

/// Resource type name
pub const TYPE_NAME: &str = "netbox_ipam_aggregate";

/// Lifecycle handlers for NetBox IPAM aggregates
pub struct IpamAggregate {
    netbox_client: Arc<dyn NetBoxClientTrait>,
}

impl std::fmt::Debug for IpamAggregate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IpamAggregate")
            .field("netbox_url", &self.netbox_client.base_url())
            .finish()
    }
}

impl IpamAggregate {
    /// Create the handler around an authenticated client
    pub fn new(netbox_client: Arc<dyn NetBoxClientTrait>) -> Self {
        Self { netbox_client }
    }

    /// Build the full write payload from local attributes
    ///
    /// Tags are not managed and always go out as an empty list.
    fn writable(data: &ResourceData) -> Result<WritableAggregate, ProviderError> {
        let prefix = data.require_string("prefix")?;
        let rir_id = data.require_u64("rir_id")?;
        let description = data.get_string("description")?;
        Ok(WritableAggregate::new(prefix, rir_id, description))
    }
}

#[async_trait::async_trait]
impl Resource for IpamAggregate {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn schema(&self) -> Schema {
        Schema::new()
            .with_attribute("prefix", Attribute::required(
                AttributeType::String,
                "Network prefix in slash notation for this aggregate. Example: 192.168.10.0/24.",
            ))
            .with_attribute("rir_id", Attribute::required(
                AttributeType::Int,
                "Netbox ID of the regional internet registry (RIR) that manages this prefix.",
            ))
            .with_attribute("description", Attribute::optional(
                AttributeType::String,
                "Description of this aggregate.",
            ))
            .importable()
    }

    async fn create(&self, data: &mut ResourceData) -> Result<(), ProviderError> {
        let request = Self::writable(data)?;

        debug!("Executing aggregate create against NetBox: {:?}", request);
        let created = self.netbox_client.create_aggregate(&request).await.inspect_err(|e| {
            debug!("Failed to create aggregate {}: {}", request.prefix, e);
        })?;

        data.set_id(created.id.to_string());
        info!("Created aggregate {} in NetBox (ID: {})", created.prefix, created.id);
        Ok(())
    }

    async fn read(&self, data: &mut ResourceData) -> Result<(), ProviderError> {
        let id = data.netbox_id()?;

        let aggregate = self.netbox_client.get_aggregate(id).await.inspect_err(|e| {
            debug!("Error fetching aggregate ID # {} from NetBox = {}", id, e);
        })?;

        data.set("prefix", aggregate.prefix.clone());
        data.set("rir_id", aggregate.rir.id);
        data.set("description", aggregate.description.clone());

        debug!("Read aggregate {} from NetBox = {:?}", id, aggregate);
        Ok(())
    }

    async fn update(&self, data: &mut ResourceData) -> Result<(), ProviderError> {
        let id = data.netbox_id()?;
        let request = Self::writable(data)?;

        debug!("Executing aggregate update {} against NetBox: {:?}", id, request);
        let updated = self.netbox_client.update_aggregate(id, &request).await.inspect_err(|e| {
            debug!("Failed to update aggregate {}: {}", id, e);
        })?;

        info!("Updated aggregate {} in NetBox (ID: {})", updated.prefix, id);
        Ok(())
    }

    async fn delete(&self, data: &mut ResourceData) -> Result<(), ProviderError> {
        let id = data.netbox_id()?;

        debug!("Deleting aggregate {} from NetBox", id);
        self.netbox_client.delete_aggregate(id).await.inspect_err(|e| {
            debug!("Failed to delete aggregate {}: {}", id, e);
        })?;

        data.clear_id();
        info!("Deleted aggregate {} from NetBox", id);
        Ok(())
    }
}
