//! Configuration module
//!
//! Resolution order:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (AIML_*)
//! 3. `--config <PATH>`, else `./aiml.toml`, else `$XDG_CONFIG_HOME/aiml/config.toml`
//! 4. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use env_validator::EnvVarWarning;
pub use types::{Config, OutputConfig, OutputFormat, SchemasConfig, TaxonomyConfig, Verbosity};
