//! Reduction of arbitrary component configs to their canonical form.

use crate::config::ReducedConfig;
use crate::error::{CanonfigError, Result};
use indexmap::IndexMap;
use serde::Serialize;
use serde_yaml::Value;

/// Reduces a component config to its `type` discriminant and the one
/// sub-config that belongs to it.
///
/// The input is round-tripped through YAML into a generic string-keyed
/// mapping, so any serializable shape is accepted. The payload is the entry
/// named after the discriminant; when no such entry exists, a non-null
/// `plugin` entry is taken instead, and when neither exists the result holds
/// only the discriminant.
///
/// # Example
///
/// ```
/// use serde_yaml::Value;
///
/// let conf: Value = serde_yaml::from_str("type: http\nhttp:\n  url: x").unwrap();
/// let reduced = canonfig::reduce_component(&conf).unwrap();
/// assert_eq!(reduced.type_name(), "http");
/// assert!(reduced.get("http").is_some());
/// ```
///
/// # Errors
///
/// Returns [`CanonfigError::Yaml`] when the input fails the YAML round trip
/// (for example when its top level is not a string-keyed mapping), and
/// [`CanonfigError::MissingType`] when the mapping has no string `type`
/// entry.
pub fn reduce_component<T: Serialize>(conf: &T) -> Result<ReducedConfig> {
    let generic = serde_yaml::to_value(conf)?;
    let mut fields: IndexMap<String, Value> = serde_yaml::from_value(generic)?;

    let type_name = match fields.get("type") {
        Some(Value::String(name)) => name.clone(),
        _ => return Err(CanonfigError::MissingType),
    };

    let mut reduced = ReducedConfig::new(type_name.clone());
    if type_name == "type" {
        // A component literally named `type` would collide with the
        // discriminant key, so it carries no payload entry.
        return Ok(reduced);
    }

    if let Some(payload) = fields.shift_remove(&type_name) {
        reduced = reduced.with_field(type_name, payload);
    } else if let Some(plugin) = fields.shift_remove("plugin") {
        if !plugin.is_null() {
            reduced = reduced.with_field("plugin", plugin);
        }
    }
    Ok(reduced)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_yaml(doc: &str) -> Value {
        serde_yaml::from_str(doc).unwrap()
    }

    #[test]
    fn test_discriminant_entry_selected_as_payload() {
        let conf = from_yaml("type: http\nhttp:\n  url: x\nother: ignored");
        let reduced = reduce_component(&conf).unwrap();

        assert_eq!(reduced.type_name(), "http");
        assert_eq!(reduced.get("http"), Some(&from_yaml("url: x")));
        assert_eq!(reduced.fields().len(), 1);
    }

    #[test]
    fn test_discriminant_entry_beats_plugin() {
        let conf = from_yaml("type: http\nhttp:\n  url: x\nplugin:\n  ignored: true");
        let reduced = reduce_component(&conf).unwrap();

        assert!(reduced.get("http").is_some());
        assert!(reduced.get("plugin").is_none());
    }

    #[test]
    fn test_null_discriminant_entry_still_selected() {
        let conf = from_yaml("type: http\nhttp: null\nplugin:\n  driver: z");
        let reduced = reduce_component(&conf).unwrap();

        assert_eq!(reduced.get("http"), Some(&Value::Null));
        assert!(reduced.get("plugin").is_none());
    }

    #[test]
    fn test_plugin_fallback() {
        let conf = from_yaml("type: custom\nplugin:\n  driver: z");
        let reduced = reduce_component(&conf).unwrap();

        assert_eq!(reduced.type_name(), "custom");
        assert_eq!(reduced.get("plugin"), Some(&from_yaml("driver: z")));
    }

    #[test]
    fn test_null_plugin_not_selected() {
        let conf = from_yaml("type: custom\nplugin: null");
        let reduced = reduce_component(&conf).unwrap();

        assert_eq!(reduced.type_name(), "custom");
        assert!(reduced.fields().is_empty());
    }

    #[test]
    fn test_no_payload() {
        let conf = from_yaml("type: noop");
        let reduced = reduce_component(&conf).unwrap();

        assert_eq!(reduced.type_name(), "noop");
        assert!(reduced.fields().is_empty());
    }

    #[test]
    fn test_missing_type_fails() {
        let conf = from_yaml("http:\n  url: x");
        let err = reduce_component(&conf).unwrap_err();
        assert!(matches!(err, CanonfigError::MissingType));
    }

    #[test]
    fn test_non_string_type_fails() {
        let conf = from_yaml("type: 42");
        let err = reduce_component(&conf).unwrap_err();
        assert!(matches!(err, CanonfigError::MissingType));
    }

    #[test]
    fn test_non_mapping_input_fails() {
        let conf = from_yaml("- just\n- a\n- list");
        let err = reduce_component(&conf).unwrap_err();
        assert!(matches!(err, CanonfigError::Yaml(_)));
    }

    #[test]
    fn test_discriminant_named_type_keeps_single_key() {
        let conf = from_yaml("type: type");
        let reduced = reduce_component(&conf).unwrap();

        assert_eq!(reduced.type_name(), "type");
        assert!(reduced.fields().is_empty());
        assert_eq!(reduced.to_json().unwrap(), r#"{"type":"type"}"#);
    }

    #[test]
    fn test_typed_struct_input() {
        #[derive(Serialize)]
        struct FileConfig {
            path: String,
        }

        #[derive(Serialize)]
        struct ComponentConfig {
            #[serde(rename = "type")]
            kind: String,
            file: FileConfig,
        }

        let conf = ComponentConfig {
            kind: "file".into(),
            file: FileConfig { path: "/tmp/in".into() },
        };
        let reduced = reduce_component(&conf).unwrap();

        assert_eq!(reduced.type_name(), "file");
        assert_eq!(reduced.get("file"), Some(&from_yaml("path: /tmp/in")));
    }
}
