//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::value_objects::ConfigWarning;
use crate::error::{AimlError, AimlResult};

use super::env_validator::{closest, EnvVarValidator};
use super::types::{Config, Verbosity};

/// Project-level config file name
pub const PROJECT_CONFIG_FILE: &str = "aiml.toml";

const KNOWN_KEYS: &[&str] = &[
    "taxonomy",
    "version",
    "strict",
    "schemas",
    "directory",
    "output",
    "verbosity",
    "format",
];

const BOOL_VALUES: &[&str] = &["true", "false", "1", "0", "yes", "no"];

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> AimlResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let mut config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| AimlError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if let Some(directory) = config.schemas.directory.take() {
        config.schemas.directory = Some(relative_to_config(path, directory));
    }

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: closest(&key, KNOWN_KEYS).map(String::from),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from an explicit path, the project config, the user config, or
/// defaults, then apply environment overrides.
///
/// An explicit path must exist; the other locations are skipped when absent.
pub fn discover(explicit: Option<&Path>, cwd: &Path) -> AimlResult<(Config, Vec<ConfigWarning>)> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => [Some(cwd.join(PROJECT_CONFIG_FILE)), user_config_path()]
            .into_iter()
            .flatten()
            .find(|path| path.is_file()),
    };

    let (config, warnings) = match candidate {
        Some(path) => {
            debug!(path = %path.display(), "loading configuration");
            load_with_warnings(&path)?
        }
        None => {
            debug!("no configuration file found, using defaults");
            (Config::default(), Vec::new())
        }
    };

    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (AIML_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env(config, |name| std::env::var(name).ok())
}

/// Applies overrides read through `var`; invalid values are logged and the
/// file value is kept.
pub(crate) fn apply_env<F>(mut config: Config, var: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(version) = var("AIML_TAXONOMY_VERSION").filter(|v| !v.trim().is_empty()) {
        config.taxonomy.version = version.trim().to_string();
    }

    if let Some(strict) = var("AIML_STRICT") {
        match EnvVarValidator::new("AIML_STRICT", BOOL_VALUES).parse(&strict, parse_bool) {
            Ok(strict) => config.taxonomy.strict = strict,
            Err(warning) => warn!("{warning}"),
        }
    }

    if let Some(dir) = var("AIML_SCHEMA_DIR").filter(|v| !v.trim().is_empty()) {
        config.schemas.directory = Some(PathBuf::from(dir));
    }

    if let Some(verbosity) = var("AIML_VERBOSITY") {
        match EnvVarValidator::new("AIML_VERBOSITY", Verbosity::NAMES)
            .parse(&verbosity, Verbosity::parse)
        {
            Ok(verbosity) => config.output.verbosity = verbosity,
            Err(warning) => warn!("{warning}"),
        }
    }

    config
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// `$XDG_CONFIG_HOME/aiml/config.toml`, else the platform config directory.
fn user_config_path() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("aiml").join("config.toml"))
}

fn relative_to_config(config_path: &Path, directory: PathBuf) -> PathBuf {
    if directory.is_absolute() {
        return directory;
    }
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(directory),
        _ => directory,
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}
