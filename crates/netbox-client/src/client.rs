//! NetBox API client
//!
//! Implements the NetBox REST API client for IPAM aggregate operations.
//! Based on NetBox API structure: /api/ipam/aggregates/

use crate::common::HttpClient;
use crate::error::NetBoxError;
use crate::models::*;
use crate::netbox_trait::NetBoxClientTrait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Default request timeout applied by [`NetBoxClient::new`]
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// NetBox API client
#[derive(Debug, Clone)]
pub struct NetBoxClient {
    http: HttpClient,
}

impl NetBoxClient {
    /// Create a new NetBox client
    ///
    /// # Arguments
    /// * `base_url` - NetBox base URL (e.g., "http://netbox:80")
    /// * `token` - API token for authentication
    pub fn new(base_url: String, token: String) -> Result<Self, NetBoxError> {
        Self::with_timeout(base_url, token, DEFAULT_TIMEOUT)
    }

    /// Create a new NetBox client with a custom request timeout
    pub fn with_timeout(base_url: String, token: String, timeout: Duration) -> Result<Self, NetBoxError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(NetBoxError::Http)?;

        Ok(Self {
            http: HttpClient::new(client, base_url, token),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Validate the API token by making a simple authenticated request.
    ///
    /// This method tests connectivity and token validity before proceeding with operations.
    /// It makes a lightweight request to the NetBox status endpoint.
    ///
    /// # Returns
    /// * `Ok(())` - Token is valid and NetBox is reachable
    /// * `Err(NetBoxError::Authentication)` - Token was rejected
    /// * `Err(NetBoxError)` - NetBox is unreachable or answered with an error
    pub async fn validate_token(&self) -> Result<(), NetBoxError> {
        debug!("Validating NetBox token and connectivity");
        let _status: serde_json::Value = self.http.get("/api/status/").await?;
        debug!("Token validated successfully");
        Ok(())
    }

    // ====================
    // Aggregate API Methods
    // ====================

    /// Get aggregate by ID
    ///
    /// # Returns
    /// * `Ok(Aggregate)` - The aggregate object
    /// * `Err(NetBoxError::NotFound)` - No aggregate with this ID
    pub async fn get_aggregate(&self, id: u64) -> Result<Aggregate, NetBoxError> {
        debug!("Fetching aggregate {} from NetBox", id);
        self.http.get(&format!("/api/ipam/aggregates/{}/", id)).await
    }

    /// Create a new aggregate
    pub async fn create_aggregate(&self, request: &WritableAggregate) -> Result<Aggregate, NetBoxError> {
        debug!("Creating aggregate {} in NetBox", request.prefix);
        self.http.post("/api/ipam/aggregates/", request).await
    }

    /// Replace an aggregate by ID
    ///
    /// NetBox performs a whole-object replacement, so `request` must carry every field.
    pub async fn update_aggregate(&self, id: u64, request: &WritableAggregate) -> Result<Aggregate, NetBoxError> {
        debug!("Updating aggregate {} in NetBox", id);
        self.http.put(&format!("/api/ipam/aggregates/{}/", id), request).await
    }

    /// Delete an aggregate by ID
    pub async fn delete_aggregate(&self, id: u64) -> Result<(), NetBoxError> {
        debug!("Deleting aggregate {} from NetBox", id);
        self.http.delete(&format!("/api/ipam/aggregates/{}/", id)).await
    }
}

#[async_trait::async_trait]
impl NetBoxClientTrait for NetBoxClient {
    fn base_url(&self) -> &str {
        self.base_url()
    }

    async fn validate_token(&self) -> Result<(), NetBoxError> {
        self.validate_token().await
    }

    async fn get_aggregate(&self, id: u64) -> Result<Aggregate, NetBoxError> {
        self.get_aggregate(id).await
    }

    async fn create_aggregate(&self, request: &WritableAggregate) -> Result<Aggregate, NetBoxError> {
        self.create_aggregate(request).await
    }

    async fn update_aggregate(&self, id: u64, request: &WritableAggregate) -> Result<Aggregate, NetBoxError> {
        self.update_aggregate(id, request).await
    }

    async fn delete_aggregate(&self, id: u64) -> Result<(), NetBoxError> {
        self.delete_aggregate(id).await
    }
}
