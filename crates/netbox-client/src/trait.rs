//! NetBoxClient trait for mocking
//!
//! This trait abstracts the NetBoxClient to enable mocking in unit tests.
//! The concrete NetBoxClient implements this trait, and tests can use mock implementations.

use crate::error::NetBoxError;
use crate::models::*;

/// Trait for NetBox API client operations
///
/// This trait enables mocking of NetBox API calls for unit testing.
/// All async methods must be `Send` to work with Tokio's work-stealing runtime,
/// and implementations must be safe to share between concurrent resource handlers.
#[async_trait::async_trait]
pub trait NetBoxClientTrait: Send + Sync {
    /// Get the base URL
    fn base_url(&self) -> &str;

    /// Validate the API token
    async fn validate_token(&self) -> Result<(), NetBoxError>;

    // IPAM Operations
    async fn get_aggregate(&self, id: u64) -> Result<Aggregate, NetBoxError>;
    async fn create_aggregate(&self, request: &WritableAggregate) -> Result<Aggregate, NetBoxError>;
    async fn update_aggregate(&self, id: u64, request: &WritableAggregate) -> Result<Aggregate, NetBoxError>;
    async fn delete_aggregate(&self, id: u64) -> Result<(), NetBoxError>;
}
