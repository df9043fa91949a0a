//! NetBox API models
//!
//! These models match the NetBox REST API serializers.
//! See: netbox/netbox/ipam/api/serializers_/ip.py

use serde::{Deserialize, Serialize};

/// Aggregate model matching NetBox AggregateSerializer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct Aggregate {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub prefix: String, // e.g., "10.0.0.0/8"
    pub rir: NestedRir,
    #[serde(default)]
    pub date_added: Option<String>, // ISO 8601 date
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<NestedTag>,
    #[serde(default)]
    pub created: Option<String>, // ISO 8601 datetime
    #[serde(default)]
    pub last_updated: Option<String>, // ISO 8601 datetime
}

/// Request body for creating or replacing an aggregate
///
/// NetBox treats PUT as a full replacement, so every field is always sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct WritableAggregate {
    pub prefix: String,
    pub description: String,
    pub rir: u64, // RIR ID (not name)
    pub tags: Vec<serde_json::Value>,
}

impl WritableAggregate {
    /// Build a payload with an empty tag list
    pub fn new(prefix: impl Into<String>, rir: u64, description: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            description: description.into(),
            rir,
            tags: Vec::new(),
        }
    }
}

/// Nested RIR reference embedded in aggregate responses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct NestedRir {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct NestedTag {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub name: String,
    pub slug: String,
}
