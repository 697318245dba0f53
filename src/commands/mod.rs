//! Command implementations for the `aiml` binary.

pub mod modules;
pub mod taxonomy;
pub mod validate;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use aiml_validator::config::{Config, ConfigWarning};

use crate::ui::context::UiContext;
use crate::ui::json::{emit_event, ConfigWarningEvent};

/// Resolved configuration and output settings for one invocation.
pub struct Session {
    pub config: Config,
    pub ui: UiContext,
}

impl Session {
    pub fn load(config_path: Option<&Path>, json: bool, verbose: u8, strict: bool) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let (mut config, warnings) = Config::discover(config_path, &cwd)?;
        if strict {
            config.taxonomy.strict = true;
        }

        let ui = UiContext::new(json, verbose, &config);
        report_config_warnings(&warnings, &ui)?;
        Ok(Self { config, ui })
    }
}

fn report_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) -> Result<()> {
    for warning in warnings {
        if ui.json {
            emit_event(&ConfigWarningEvent::new(warning))?;
        } else {
            eprintln!("Warning: {warning}");
        }
    }
    Ok(())
}

/// Text read from a file or stdin, tagged with its syntax.
pub enum Document {
    Json(String),
    /// From a `.yaml`/`.yml` file
    Yaml(String),
}

/// Reads `path` (`-` for stdin). Decoding is left to the caller.
pub fn read_document(path: &Path) -> Result<Document> {
    let text = if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        text
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?
    };

    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));
    Ok(if is_yaml {
        Document::Yaml(text)
    } else {
        Document::Json(text)
    })
}

/// Reads `path` and decodes it to a JSON value.
pub fn read_value(path: &Path) -> Result<Value> {
    let decoded = match read_document(path)? {
        Document::Yaml(text) => serde_yaml_ng::from_str(&text).map_err(aiml_validator::AimlError::from),
        Document::Json(text) => serde_json::from_str(&text).map_err(aiml_validator::AimlError::from),
    };
    decoded.with_context(|| format!("Failed to parse {}", path.display()))
}

/// Display name for an input path.
pub fn source_name(path: &Path) -> String {
    if path == Path::new("-") {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}
