use aiml_validator::config::{Config, OutputFormat, Verbosity};

use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// Output decisions for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    /// Detail level: 0 quiet, 1 normal, 2+ verbose
    pub detail: u8,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(cli_json: bool, cli_verbose: u8, config: &Config) -> Self {
        Self::from_caps(cli_json, cli_verbose, config, detect_capabilities())
    }

    pub(crate) fn from_caps(
        cli_json: bool,
        cli_verbose: u8,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let json = cli_json || config.output.format == OutputFormat::Json;

        let detail = if cli_verbose > 0 {
            1 + cli_verbose
        } else {
            match config.output.verbosity {
                Verbosity::Quiet => 0,
                Verbosity::Normal => 1,
                Verbosity::Verbose | Verbosity::Debug => 2,
            }
        };

        Self {
            json,
            detail,
            color: !json && caps.supports_color && !caps.is_ci,
            unicode: caps.supports_unicode,
        }
    }
}
