//! Error types for config reduction and rendering.

use thiserror::Error;

/// Errors that can occur while reducing a config or rendering its output.
#[derive(Debug, Error)]
pub enum CanonfigError {
    /// The YAML round trip of the input config failed, or rendering the
    /// reduced config as YAML failed.
    #[error("YAML encoding failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Encoding a value as JSON failed.
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The config has no `type` field, or its value is not a string.
    #[error("cannot reduce a config without a string `type` field")]
    MissingType,
}

/// Result type alias for reduction and rendering operations.
pub type Result<T> = std::result::Result<T, CanonfigError>;
