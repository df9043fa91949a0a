//! Resource lifecycle contract.
//!
//! Any host adapter binds to resources through this trait: create, read,
//! update and delete over a [`ResourceData`] container, plus pass-through
//! import. Handlers receive their NetBox client at construction time.

use crate::error::ProviderError;
use crate::resource_data::ResourceData;
use crate::schema::Schema;
use tracing::debug;

/// Lifecycle handlers for one resource type
///
/// Implementations are shared between concurrent invocations, each of which
/// owns its own `ResourceData`.
#[async_trait::async_trait]
pub trait Resource: Send + Sync {
    /// Resource type name as used in configuration (e.g. `netbox_ipam_aggregate`)
    fn type_name(&self) -> &'static str;

    /// Declared attributes
    fn schema(&self) -> Schema;

    /// Create the remote object and record its identifier
    async fn create(&self, data: &mut ResourceData) -> Result<(), ProviderError>;

    /// Refresh attributes from the remote object
    async fn read(&self, data: &mut ResourceData) -> Result<(), ProviderError>;

    /// Push declared attributes to the remote object
    async fn update(&self, data: &mut ResourceData) -> Result<(), ProviderError>;

    /// Remove the remote object
    async fn delete(&self, data: &mut ResourceData) -> Result<(), ProviderError>;

    /// Pass-through import: adopt an existing object by ID, then read it
    async fn import(&self, id: &str) -> Result<ResourceData, ProviderError> {
        debug!("Importing {} with ID {}", self.type_name(), id);
        let mut data = ResourceData::with_id(id);
        self.read(&mut data).await?;
        Ok(data)
    }
}
