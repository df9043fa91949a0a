//! Helper functions for creating nested NetBox model types

use crate::models::*;

/// Helper functions for creating nested types in mock implementations
pub struct Helpers {
    base_url: String,
}

impl Helpers {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    /// Helper to create NestedRir
    pub fn create_nested_rir(&self, id: u64, name: Option<String>) -> NestedRir {
        let name_str = name.unwrap_or_else(|| format!("RIR {}", id));
        NestedRir {
            id,
            url: format!("{}/api/ipam/rirs/{}/", self.base_url, id),
            display: name_str.clone(),
            name: name_str.clone(),
            slug: name_str.to_lowercase().replace(' ', "-"),
        }
    }

    /// Helper to create NestedTag from serde_json::Value
    pub fn create_nested_tag(&self, value: &serde_json::Value) -> Option<NestedTag> {
        value.as_str().map(|s| NestedTag {
            id: 0,
            url: format!("{}/api/extras/tags/0/", self.base_url),
            display: s.to_string(),
            name: s.to_string(),
            slug: s.to_lowercase().replace(' ', "-"),
        })
    }

    /// Helper to convert a tag payload into nested tags
    pub fn convert_tags(&self, tags: &[serde_json::Value]) -> Vec<NestedTag> {
        tags.iter()
            .filter_map(|v| self.create_nested_tag(v))
            .collect()
    }
}
