//! Canonfig - canonical reduced component configs
//!
//! A component config is a free-form mapping carrying a `type` field that
//! names one of many variants, with the variant's own settings nested under
//! a field of the same name. This crate reduces such a config to just the
//! discriminant and its payload, then renders the result as YAML or JSON
//! with the `type` field guaranteed to come first — deterministic,
//! human-diffable output regardless of how the input was shaped.
//!
//! # Example
//!
//! ```
//! let conf: serde_yaml::Value =
//!     serde_yaml::from_str("type: http\nhttp:\n  url: x\ntimeout: 5s").unwrap();
//!
//! let reduced = canonfig::reduce_component(&conf).unwrap();
//! assert_eq!(reduced.to_json().unwrap(), r#"{"type":"http","http":{"url":"x"}}"#);
//! ```

pub mod config;
pub mod error;
pub mod reduce;

pub use config::ReducedConfig;
pub use error::{CanonfigError, Result};
pub use reduce::reduce_component;
