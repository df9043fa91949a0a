//! Provider configuration.
//!
//! The NetBox endpoint and token come from the provider block sent by the
//! host, falling back to environment variables for anything it leaves out:
//! - `NETBOX_URL` (default `http://localhost:8001`)
//! - `NETBOX_TOKEN` (required)
//! - `NETBOX_TIMEOUT_SECS` (default 30)

use crate::error::ProviderError;
use serde::Deserialize;
use std::time::Duration;

/// Default NetBox URL when neither the provider block nor the environment sets one
pub const DEFAULT_NETBOX_URL: &str = "http://localhost:8001";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Resolved provider configuration
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// NetBox base URL
    pub url: String,
    /// NetBox API token
    pub token: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

// Keep the token out of logs
impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("url", &self.url)
            .field("token", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Provider block as sent by the host; every field may be omitted
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProviderBlock {
    url: Option<String>,
    token: Option<String>,
    timeout_secs: Option<u64>,
}

impl ProviderConfig {
    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self, ProviderError> {
        Self::resolve(ProviderBlock::default(), |key| std::env::var(key).ok())
    }

    /// Load configuration from a provider block, falling back to the environment
    pub fn from_value(value: &serde_json::Value) -> Result<Self, ProviderError> {
        Self::from_value_with(value, |key| std::env::var(key).ok())
    }

    /// Same as [`ProviderConfig::from_value`] with an explicit variable lookup
    pub fn from_value_with<F>(value: &serde_json::Value, lookup: F) -> Result<Self, ProviderError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let block: ProviderBlock = if value.is_null() {
            ProviderBlock::default()
        } else {
            serde_json::from_value(value.clone())
                .map_err(|e| ProviderError::InvalidConfig(format!("provider block: {}", e)))?
        };
        Self::resolve(block, lookup)
    }

    fn resolve<F>(block: ProviderBlock, lookup: F) -> Result<Self, ProviderError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = block.url
            .or_else(|| lookup("NETBOX_URL"))
            .unwrap_or_else(|| DEFAULT_NETBOX_URL.to_string());

        let token = block.token
            .or_else(|| lookup("NETBOX_TOKEN"))
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ProviderError::InvalidConfig(
                "NETBOX_TOKEN environment variable or provider token is required".to_string()
            ))?;

        let timeout_secs = match block.timeout_secs {
            Some(secs) => secs,
            None => match lookup("NETBOX_TIMEOUT_SECS") {
                Some(raw) => raw.parse().map_err(|e| ProviderError::InvalidConfig(
                    format!("NETBOX_TIMEOUT_SECS '{}': {}", raw, e)
                ))?,
                None => DEFAULT_TIMEOUT_SECS,
            },
        };

        if timeout_secs == 0 {
            return Err(ProviderError::InvalidConfig("timeout must be at least one second".to_string()));
        }

        Ok(Self { url, token, timeout_secs })
    }

    /// Request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
