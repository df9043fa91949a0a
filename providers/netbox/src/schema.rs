//! Resource schema declarations.
//!
//! A [`Schema`] lists the user-facing attributes of a resource type. The
//! host-managed `id` is never declared here.

use crate::error::ProviderError;
use crate::resource_data::ResourceData;
use serde::Serialize;
use std::collections::BTreeMap;

/// Value type of an attribute
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    /// UTF-8 string
    String,
    /// 64-bit integer
    Int,
}

impl AttributeType {
    fn matches(self, value: &serde_json::Value) -> bool {
        match self {
            AttributeType::String => value.is_string(),
            AttributeType::Int => value.is_i64() || value.is_u64(),
        }
    }
}

/// Declaration of one attribute
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Attribute {
    /// Value type
    #[serde(rename = "type")]
    pub attr_type: AttributeType,
    /// Must be set in configuration
    pub required: bool,
    /// May be omitted from configuration
    pub optional: bool,
    /// Human-readable description shown by the host
    pub description: &'static str,
}

impl Attribute {
    /// Required attribute
    pub fn required(attr_type: AttributeType, description: &'static str) -> Self {
        Self { attr_type, required: true, optional: false, description }
    }

    /// Optional attribute
    pub fn optional(attr_type: AttributeType, description: &'static str) -> Self {
        Self { attr_type, required: false, optional: true, description }
    }
}

/// Attribute declarations of a resource type
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Schema {
    /// Attributes keyed by name
    pub attributes: BTreeMap<&'static str, Attribute>,
    /// Whether the resource supports pass-through import by ID
    pub importable: bool,
}

impl Schema {
    /// Empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute
    pub fn with_attribute(mut self, name: &'static str, attribute: Attribute) -> Self {
        self.attributes.insert(name, attribute);
        self
    }

    /// Mark the resource as importable
    pub fn importable(mut self) -> Self {
        self.importable = true;
        self
    }

    /// Look up an attribute declaration
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// Check a state container against this schema
    ///
    /// Required attributes must be present and non-null, present attributes
    /// must have the declared type, and undeclared attributes are rejected.
    pub fn validate(&self, data: &ResourceData) -> Result<(), ProviderError> {
        for (name, value) in data.attributes() {
            let attribute = self.attribute(name).ok_or_else(|| ProviderError::InvalidAttribute {
                name: name.clone(),
                reason: "not declared by the resource schema".to_string(),
            })?;

            if !value.is_null() && !attribute.attr_type.matches(value) {
                return Err(ProviderError::InvalidAttribute {
                    name: name.clone(),
                    reason: format!("expected {:?}, got {}", attribute.attr_type, value),
                });
            }
        }

        for (name, attribute) in &self.attributes {
            if attribute.required && data.raw(name).is_none_or(serde_json::Value::is_null) {
                return Err(ProviderError::MissingAttribute((*name).to_string()));
            }
        }

        Ok(())
    }
}
