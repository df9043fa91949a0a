//! Provider: resource registry and lifecycle dispatch.
//!
//! The provider owns the authenticated NetBox client and hands it to every
//! resource handler at construction time. Hosts address handlers by resource
//! type name.

use crate::config::ProviderConfig;
use crate::error::ProviderError;
use crate::resource::Resource;
use crate::resource_data::ResourceData;
use crate::resources::IpamAggregate;
use crate::schema::Schema;
use netbox_client::{NetBoxClient, NetBoxClientTrait};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Plugin protocol version this provider speaks
pub const PROTOCOL_VERSION: u32 = 5;

/// Prefix of the line printed on startup so a host can recognise the plugin
pub const HANDSHAKE_PREFIX: &str = "NETBOX_PROVIDER";

/// Handshake line: `NETBOX_PROVIDER|<protocol_version>|<transport>`
pub fn handshake_line() -> String {
    format!("{}|{}|stdio", HANDSHAKE_PREFIX, PROTOCOL_VERSION)
}

/// Registered resource handlers
pub struct Provider {
    resources: BTreeMap<&'static str, Arc<dyn Resource>>,
}

impl std::fmt::Debug for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Provider")
            .field("resources", &self.resources.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Provider {
    /// Build a provider around an already-authenticated client
    pub fn new(netbox_client: Arc<dyn NetBoxClientTrait>) -> Self {
        let mut provider = Self { resources: BTreeMap::new() };
        provider.register(Arc::new(IpamAggregate::new(netbox_client)));
        provider
    }

    /// Build the NetBox client from configuration and verify the token
    pub async fn configure(config: &ProviderConfig) -> Result<Self, ProviderError> {
        info!("Configuring NetBox provider for {}", config.url);

        let netbox_client = NetBoxClient::with_timeout(config.url.clone(), config.token.clone(), config.timeout())?;

        netbox_client.validate_token().await.inspect_err(|e| {
            error!("Failed to validate NetBox token: {}", e);
            error!("Please ensure NETBOX_TOKEN is valid and NetBox is reachable at {}", config.url);
        })?;
        info!("NetBox token validated and connectivity established");

        Ok(Self::new(Arc::new(netbox_client)))
    }

    fn register(&mut self, resource: Arc<dyn Resource>) {
        debug!("Registering resource type {}", resource.type_name());
        self.resources.insert(resource.type_name(), resource);
    }

    /// Names of all registered resource types
    pub fn resource_types(&self) -> Vec<&'static str> {
        self.resources.keys().copied().collect()
    }

    /// Handler for a resource type
    pub fn resource(&self, type_name: &str) -> Result<&Arc<dyn Resource>, ProviderError> {
        self.resources
            .get(type_name)
            .ok_or_else(|| ProviderError::UnknownResource(type_name.to_string()))
    }

    /// Schema of a resource type
    pub fn schema(&self, type_name: &str) -> Result<Schema, ProviderError> {
        Ok(self.resource(type_name)?.schema())
    }

    /// Validate declared attributes, then create
    pub async fn create(&self, type_name: &str, data: &mut ResourceData) -> Result<(), ProviderError> {
        let resource = self.resource(type_name)?;
        resource.schema().validate(data)?;
        resource.create(data).await
    }

    /// Refresh from NetBox
    pub async fn read(&self, type_name: &str, data: &mut ResourceData) -> Result<(), ProviderError> {
        self.resource(type_name)?.read(data).await
    }

    /// Validate declared attributes, then update
    pub async fn update(&self, type_name: &str, data: &mut ResourceData) -> Result<(), ProviderError> {
        let resource = self.resource(type_name)?;
        resource.schema().validate(data)?;
        resource.update(data).await
    }

    /// Delete from NetBox
    pub async fn delete(&self, type_name: &str, data: &mut ResourceData) -> Result<(), ProviderError> {
        self.resource(type_name)?.delete(data).await
    }

    /// Import an existing object by ID
    pub async fn import(&self, type_name: &str, id: &str) -> Result<ResourceData, ProviderError> {
        let resource = self.resource(type_name)?;
        if !resource.schema().importable {
            return Err(ProviderError::InvalidConfig(format!("{} does not support import", type_name)));
        }
        resource.import(id).await
    }
}
