//! The reduced config type and its type-first renderers.

use crate::error::Result;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_yaml::Value;
use std::collections::BTreeMap;

/// A component config reduced to its `type` discriminant plus at most one
/// payload entry.
///
/// Both renderers guarantee the `type` field is emitted before any other
/// key. Remaining keys come out in lexicographic order, so rendering the
/// same config twice yields byte-identical output.
///
/// # Example
///
/// ```
/// use canonfig::ReducedConfig;
///
/// let conf = ReducedConfig::new("http").with_field("http", "payload");
/// assert_eq!(conf.to_json().unwrap(), r#"{"type":"http","http":"payload"}"#);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ReducedConfig {
    /// The discriminant naming the component variant.
    type_name: String,
    /// All non-`type` entries, keyed lexicographically.
    fields: BTreeMap<String, Value>,
}

impl ReducedConfig {
    /// Creates a reduced config holding only the discriminant.
    #[must_use]
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Adds an entry alongside the discriminant.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Returns the discriminant.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns the non-`type` entries in lexicographic key order.
    #[must_use]
    pub const fn fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }

    /// Gets a non-`type` entry by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Renders the config as a YAML document with `type` as the first field.
    ///
    /// # Errors
    ///
    /// Returns an error if any value fails to encode as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Renders the config as a compact JSON object with `type` as the first
    /// key and the remaining keys in lexicographic order.
    ///
    /// The object is assembled by hand: default object encoders offer no way
    /// to force one key ahead of the rest, and the output must stay stable
    /// byte-for-byte across runs.
    ///
    /// # Errors
    ///
    /// Returns an error if any value fails to encode as JSON. No partial
    /// output is returned on failure.
    pub fn to_json(&self) -> Result<String> {
        let mut out = String::from("{\"type\":");
        out.push_str(&serde_json::to_string(&self.type_name)?);
        for (key, value) in &self.fields {
            out.push(',');
            out.push_str(&serde_json::to_string(key)?);
            out.push(':');
            out.push_str(&serde_json::to_string(value)?);
        }
        out.push('}');
        Ok(out)
    }
}

/// Serializes as a map with the `type` entry first, so a reduced config
/// embedded inside a parent document keeps the type-first ordering under
/// any insertion-order-preserving backend.
impl Serialize for ReducedConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        map.serialize_entry("type", &self.type_name)?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
