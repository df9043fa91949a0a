//! Mock NetBoxClient for unit testing
//!
//! This module provides a mock implementation of NetBoxClientTrait that can be used
//! in unit tests without requiring a running NetBox instance.
//!
//! The mock is organized into domain-specific modules:
//! - `ipam.rs` - IPAM operations (aggregates)
//! - `helpers.rs` - Helper functions for creating nested types

mod helpers;
mod ipam;

use crate::error::NetBoxError;
use crate::models::*;
use crate::netbox_trait::NetBoxClientTrait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock NetBoxClient for testing
///
/// This mock stores resources in memory and can be configured to return
/// specific responses for testing different scenarios.
#[derive(Clone, Debug)]
pub struct MockNetBoxClient {
    pub(crate) base_url: String,
    // In-memory storage for resources
    pub(crate) aggregates: Arc<Mutex<HashMap<u64, Aggregate>>>,
    pub(crate) rirs: Arc<Mutex<HashMap<u64, String>>>,
    // Every remote call made so far, by operation name
    pub(crate) calls: Arc<Mutex<Vec<String>>>,
    // When set, every call fails with this message
    pub(crate) failure: Arc<Mutex<Option<String>>>,
    // Counter for generating IDs
    pub(crate) next_id: Arc<Mutex<u64>>,
}

impl MockNetBoxClient {
    /// Create a new mock client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            aggregates: Arc::new(Mutex::new(HashMap::new())),
            rirs: Arc::new(Mutex::new(HashMap::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            failure: Arc::new(Mutex::new(None)),
            next_id: Arc::new(Mutex::new(1)),
        }
    }

    /// Add an aggregate to the mock store (for test setup)
    pub fn add_aggregate(&self, aggregate: Aggregate) {
        let mut next_id = self.next_id.lock().unwrap();
        if aggregate.id >= *next_id {
            *next_id = aggregate.id + 1;
        }
        self.aggregates.lock().unwrap().insert(aggregate.id, aggregate);
    }

    /// Register an RIR name so nested references carry it (for test setup)
    pub fn add_rir(&self, id: u64, name: impl Into<String>) {
        self.rirs.lock().unwrap().insert(id, name.into());
    }

    /// Snapshot of a stored aggregate, bypassing call recording
    pub fn aggregate(&self, id: u64) -> Option<Aggregate> {
        self.aggregates.lock().unwrap().get(&id).cloned()
    }

    /// Number of aggregates currently stored
    pub fn aggregate_count(&self) -> usize {
        self.aggregates.lock().unwrap().len()
    }

    /// Make every subsequent call fail with a NetBox API error
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.lock().unwrap() = Some(message.into());
    }

    /// Stop injecting failures
    pub fn clear_failure(&self) {
        *self.failure.lock().unwrap() = None;
    }

    /// Operation names of every call made against the mock, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Record a call and return the injected failure, if any
    pub(crate) fn record(&self, operation: &str) -> Result<(), NetBoxError> {
        self.calls.lock().unwrap().push(operation.to_string());
        match self.failure.lock().unwrap().as_ref() {
            Some(message) => Err(NetBoxError::Api(message.clone())),
            None => Ok(()),
        }
    }

    /// Generate next ID
    pub(crate) fn next_id(&self) -> u64 {
        let mut id = self.next_id.lock().unwrap();
        let current = *id;
        *id += 1;
        current
    }

    /// Get helpers instance
    pub(crate) fn helpers(&self) -> helpers::Helpers {
        helpers::Helpers::new(self.base_url.clone())
    }
}

#[async_trait::async_trait]
impl NetBoxClientTrait for MockNetBoxClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn validate_token(&self) -> Result<(), NetBoxError> {
        self.record("validate_token")
    }

    // IPAM Operations - delegated to ipam module
    async fn get_aggregate(&self, id: u64) -> Result<Aggregate, NetBoxError> {
        ipam::get_aggregate(self, id).await
    }

    async fn create_aggregate(&self, request: &WritableAggregate) -> Result<Aggregate, NetBoxError> {
        ipam::create_aggregate(self, request).await
    }

    async fn update_aggregate(&self, id: u64, request: &WritableAggregate) -> Result<Aggregate, NetBoxError> {
        ipam::update_aggregate(self, id, request).await
    }

    async fn delete_aggregate(&self, id: u64) -> Result<(), NetBoxError> {
        ipam::delete_aggregate(self, id).await
    }
}
