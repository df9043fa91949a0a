//! NetBox provider plugin
//!
//! Exposes the `netbox_ipam_aggregate` resource lifecycle (create, read,
//! update, delete and pass-through import) on top of the NetBox REST API.
//!
//! # Example
//!
//! ```no_run
//! use netbox_provider::{Provider, ProviderConfig, ResourceData};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ProviderConfig::from_env()?;
//! let provider = Provider::configure(&config).await?;
//!
//! let mut data = ResourceData::from_attributes(serde_json::json!({
//!     "prefix": "10.0.0.0/8",
//!     "rir_id": 1,
//!     "description": "RFC1918 space",
//! }));
//! provider.create("netbox_ipam_aggregate", &mut data).await?;
//! println!("created aggregate {}", data.id().unwrap_or_default());
//! # Ok(())
//! # }
//! ```
//!
//! Hosts that cannot link against this crate drive the same lifecycle through
//! the JSON-lines adapter in [`adapter`], served by the
//! `terraform-provider-netbox` binary.

pub mod adapter;
pub mod config;
pub mod error;
pub mod provider;
pub mod resource;
pub mod resource_data;
pub mod resources;
pub mod schema;

pub use config::ProviderConfig;
pub use error::ProviderError;
pub use provider::{Provider, HANDSHAKE_PREFIX, PROTOCOL_VERSION};
pub use resource::Resource;
pub use resource_data::ResourceData;
pub use schema::{Attribute, AttributeType, Schema};
