//! Provider-specific error types.
//!
//! This module defines error types specific to the NetBox provider
//! that are not covered by upstream library errors.

use netbox_client::NetBoxError;
use std::num::ParseIntError;
use thiserror::Error;

/// Errors that can occur while handling a resource lifecycle call.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// NetBox API error
    #[error("NetBox error: {0}")]
    NetBox(#[from] NetBoxError),

    /// The state container carries an identifier that is not a NetBox ID
    #[error("Invalid resource ID '{id}': {source}")]
    InvalidId {
        /// Identifier as stored by the host
        id: String,
        /// Underlying integer parse failure
        source: ParseIntError,
    },

    /// The operation needs an identifier but none is set
    #[error("Resource ID is not set")]
    MissingId,

    /// A required attribute is absent or null
    #[error("Missing required attribute: {0}")]
    MissingAttribute(String),

    /// An attribute holds a value of the wrong type
    #[error("Invalid attribute '{name}': {reason}")]
    InvalidAttribute {
        /// Attribute name
        name: String,
        /// What was wrong with it
        reason: String,
    },

    /// No resource type registered under this name
    #[error("Unknown resource type: {0}")]
    UnknownResource(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ProviderError {
    /// True when NetBox reported the object as missing
    ///
    /// Hosts use this to tombstone a resource instead of failing the refresh.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProviderError::NetBox(e) if e.is_not_found())
    }

    /// Short machine-readable classification of the error
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::NetBox(e) => e.kind(),
            ProviderError::InvalidId { .. } | ProviderError::MissingId => "invalid_id",
            ProviderError::MissingAttribute(_) | ProviderError::InvalidAttribute { .. } => "invalid_attribute",
            ProviderError::UnknownResource(_) => "unknown_resource",
            ProviderError::InvalidConfig(_) => "invalid_config",
        }
    }
}
