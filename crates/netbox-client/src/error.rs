//! NetBox client errors

use thiserror::Error;

/// Errors that can occur when interacting with the NetBox API
#[derive(Debug, Error)]
pub enum NetBoxError {
    /// HTTP request/response error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// NetBox API returned an error
    #[error("NetBox API error: {0}")]
    Api(String),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Authentication failed (invalid token, expired, etc.)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request (e.g., NetBox rejected the payload)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl NetBoxError {
    /// True when NetBox answered 404 for the requested object
    pub fn is_not_found(&self) -> bool {
        matches!(self, NetBoxError::NotFound(_))
    }

    /// Short machine-readable classification of the error
    pub fn kind(&self) -> &'static str {
        match self {
            NetBoxError::Http(_) => "transport",
            NetBoxError::Api(_) => "remote",
            NetBoxError::Serialization(_) => "serialization",
            NetBoxError::Authentication(_) => "authentication",
            NetBoxError::NotFound(_) => "not_found",
            NetBoxError::InvalidRequest(_) => "invalid_request",
        }
    }
}
