//! NDJSON output: one JSON object per line on stdout.

use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use aiml_validator::config::ConfigWarning;
use aiml_validator::ValidationResult;

/// Write a single NDJSON event.
pub fn write_event<T: Serialize>(out: &mut impl Write, event: &T) -> io::Result<()> {
    let line =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Write a typed event to stdout.
pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, event)
}

#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
}

impl<'a> CompleteEvent<'a> {
    pub fn new(command: &'a str, success: bool) -> Self {
        Self {
            event: "complete",
            command,
            success,
        }
    }
}

/// One validated document.
#[derive(Debug, Clone, Serialize)]
pub struct ResultEvent<'a> {
    pub event: &'static str,
    pub source: &'a str,
    pub result: &'a ValidationResult,
}

impl<'a> ResultEvent<'a> {
    pub fn new(source: &'a str, result: &'a ValidationResult) -> Self {
        Self {
            event: "result",
            source,
            result,
        }
    }
}

/// Output of a non-validation command.
#[derive(Debug, Clone, Serialize)]
pub struct DataEvent<'a, T: Serialize> {
    pub event: &'static str,
    pub command: &'a str,
    pub data: &'a T,
}

impl<'a, T: Serialize> DataEvent<'a, T> {
    pub fn new(command: &'a str, data: &'a T) -> Self {
        Self {
            event: "data",
            command,
            data,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigWarningEvent<'a> {
    pub event: &'static str,
    pub key: &'a str,
    pub file: &'a Path,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<&'a str>,
}

impl<'a> ConfigWarningEvent<'a> {
    pub fn new(warning: &'a ConfigWarning) -> Self {
        Self {
            event: "config_warning",
            key: &warning.key,
            file: &warning.file,
            line: warning.line,
            suggestion: warning.suggestion.as_deref(),
        }
    }
}
