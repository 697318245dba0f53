//! Configuration types

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ConfigWarning, Taxonomy, TaxonomyVersion};
use crate::error::{AimlError, AimlResult};

use super::loader;

/// Taxonomy selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyConfig {
    /// Version selector, resolved by `Config::taxonomy`
    #[serde(default = "default_taxonomy_version")]
    pub version: String,

    /// Run the stricter supplemental checks
    #[serde(default)]
    pub strict: bool,
}

impl Default for TaxonomyConfig {
    fn default() -> Self {
        Self {
            version: default_taxonomy_version(),
            strict: false,
        }
    }
}

fn default_taxonomy_version() -> String {
    TaxonomyVersion::default().as_str().to_string()
}

/// Where module and entity schemas are read from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SchemasConfig {
    /// Offline mirror of the schema host; relative paths are taken from the
    /// directory of the config file that set them
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub format: OutputFormat,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    pub const NAMES: &'static [&'static str] = &["quiet", "normal", "verbose", "debug"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "debug" => Some(Verbosity::Debug),
            _ => None,
        }
    }
}

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub taxonomy: TaxonomyConfig,

    #[serde(default)]
    pub schemas: SchemasConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> AimlResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> AimlResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit path, `aiml.toml` in `cwd`, the user config, or
    /// defaults, then apply environment overrides.
    pub fn discover(
        explicit: Option<&Path>,
        cwd: &Path,
    ) -> AimlResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(explicit, cwd)
    }

    /// Apply environment variable overrides (AIML_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Rule tables for the configured version.
    pub fn taxonomy(&self) -> AimlResult<Taxonomy> {
        let version: TaxonomyVersion = self.taxonomy.version.parse().map_err(|version| {
            AimlError::UnsupportedTaxonomyVersion {
                version,
                supported: TaxonomyVersion::supported(),
            }
        })?;
        Ok(Taxonomy::for_version(version))
    }
}
