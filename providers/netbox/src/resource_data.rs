//! Per-invocation state container.
//!
//! [`ResourceData`] is what the host hands to a resource handler: the
//! identifier of the remote object (once it exists) and the attribute values
//! declared in configuration or last read from NetBox. Handlers only mutate it
//! while a lifecycle call is running; the host persists it afterwards.

use crate::error::ProviderError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier plus attribute values of one resource instance
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResourceData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default)]
    attributes: Map<String, Value>,
}

impl ResourceData {
    /// Empty container (resource absent)
    pub fn new() -> Self {
        Self::default()
    }

    /// Container holding only an identifier, as used by pass-through import
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            attributes: Map::new(),
        }
    }

    /// Container built from a JSON object of attribute values
    ///
    /// Anything other than an object yields an empty attribute set.
    pub fn from_attributes(attributes: Value) -> Self {
        match attributes {
            Value::Object(map) => Self { id: None, attributes: map },
            _ => Self::default(),
        }
    }

    /// Identifier, if the resource exists remotely
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Record the identifier assigned by NetBox
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    /// Forget the identifier, marking the resource absent
    pub fn clear_id(&mut self) {
        self.id = None;
    }

    /// Identifier parsed as a NetBox object ID
    pub fn netbox_id(&self) -> Result<u64, ProviderError> {
        let id = self.id.as_deref().ok_or(ProviderError::MissingId)?;
        id.parse::<u64>().map_err(|source| ProviderError::InvalidId {
            id: id.to_string(),
            source,
        })
    }

    /// All attribute values
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// Raw attribute value
    pub fn raw(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// String attribute; unset or null reads as the empty string
    pub fn get_string(&self, key: &str) -> Result<String, ProviderError> {
        match self.attributes.get(key) {
            None | Some(Value::Null) => Ok(String::new()),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(other) => Err(ProviderError::InvalidAttribute {
                name: key.to_string(),
                reason: format!("expected a string, got {}", other),
            }),
        }
    }

    /// Required string attribute
    pub fn require_string(&self, key: &str) -> Result<String, ProviderError> {
        match self.attributes.get(key) {
            None | Some(Value::Null) => Err(ProviderError::MissingAttribute(key.to_string())),
            Some(_) => self.get_string(key),
        }
    }

    /// Required non-negative integer attribute
    pub fn require_u64(&self, key: &str) -> Result<u64, ProviderError> {
        match self.attributes.get(key) {
            None | Some(Value::Null) => Err(ProviderError::MissingAttribute(key.to_string())),
            Some(value) => value.as_u64().ok_or_else(|| ProviderError::InvalidAttribute {
                name: key.to_string(),
                reason: format!("expected a non-negative integer, got {}", value),
            }),
        }
    }

    /// Set an attribute value
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.attributes.insert(key.to_string(), value.into());
    }
}
