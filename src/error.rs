//! Error types for the AIML validator
//!
//! Validation itself never fails: malformed entities become findings. These
//! errors cover configuration, document decoding and taxonomy selection.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for validator operations
pub type AimlResult<T> = Result<T, AimlError>;

/// Main error type for validator operations
#[derive(Error, Debug)]
pub enum AimlError {
    /// Invalid configuration file
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Taxonomy version selector does not name a known rule set
    #[error("unsupported taxonomy version '{version}' (supported: {supported})")]
    UnsupportedTaxonomyVersion { version: String, supported: String },

    /// Entity or module document could not be decoded
    #[error("invalid document {source_name}: {message}")]
    InvalidDocument { source_name: String, message: String },

    /// Schema directory is required for module commands
    #[error("no schema directory configured\n  → Fix: set [schemas] directory in aiml.toml\n  → Or: export AIML_SCHEMA_DIR=<path>")]
    MissingSchemaDirectory,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_config() {
        let err = AimlError::InvalidConfig {
            file: PathBuf::from("aiml.toml"),
            message: "expected a table".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid configuration in aiml.toml: expected a table"
        );
    }

    #[test]
    fn test_error_display_unsupported_version() {
        let err = AimlError::UnsupportedTaxonomyVersion {
            version: "1.0.0".to_string(),
            supported: "2.0.1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unsupported taxonomy version '1.0.0' (supported: 2.0.1)"
        );
    }
}
