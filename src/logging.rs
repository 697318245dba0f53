//! Tracing setup
//!
//! Logs go to stderr so that NDJSON on stdout stays machine-readable.
//! `AIML_LOG` takes an `EnvFilter` directive; without it the level follows
//! the `-v` count.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive, e.g. `aiml_validator=debug`
pub const LOG_ENV: &str = "AIML_LOG";

static INIT: Once = Once::new();

/// Install the global subscriber. Later calls are no-ops.
pub fn init_tracing(verbose: u8) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)));

        // Another subscriber may already be installed by an embedding host.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

/// Default level for a `-v` count.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
