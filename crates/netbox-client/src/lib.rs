//! NetBox REST API Client
//!
//! A Rust client library for the parts of the NetBox REST API used by the
//! NetBox provider plugin. Provides type-safe models and methods for IPAM
//! aggregates.
//!
//! # Example
//!
//! ```no_run
//! use netbox_client::{NetBoxClient, WritableAggregate};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a client
//! let client = NetBoxClient::new(
//!     "http://netbox:80".to_string(),
//!     "your-api-token".to_string(),
//! )?;
//!
//! // Create an aggregate under RIR 1
//! let request = WritableAggregate::new("10.0.0.0/8", 1, "RFC1918 space");
//! let aggregate = client.create_aggregate(&request).await?;
//!
//! // Read it back
//! let aggregate = client.get_aggregate(aggregate.id).await?;
//! assert_eq!(aggregate.rir.id, 1);
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **IPAM Aggregates**: Create, read, replace and delete aggregates
//! - **Error classification**: Not-found and authentication failures are
//!   reported separately from transport errors
//! - **Mocking**: `MockNetBoxClient` behind the `test-util` feature

pub mod client;
pub mod common;
pub mod error;
pub mod models;
#[path = "trait.rs"]
pub mod netbox_trait;
#[cfg(feature = "test-util")]
pub mod mock;

pub use client::NetBoxClient;
pub use common::HttpClient;
pub use error::NetBoxError;
pub use models::*;
pub use netbox_trait::NetBoxClientTrait;
#[cfg(feature = "test-util")]
pub use mock::MockNetBoxClient;
