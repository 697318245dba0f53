use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// aiml - graded validation of AIML entity documents
#[derive(Parser, Debug)]
#[command(name = "aiml")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of a text report
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (default: ./aiml.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Run the stricter supplemental checks
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate entity documents (JSON or YAML; `-` reads stdin)
    Validate {
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Exit non-zero on warnings as well as errors
        #[arg(long)]
        strict_warnings: bool,
    },

    /// Resolve and check capability modules (needs a schema directory)
    Modules {
        #[command(subcommand)]
        action: ModulesAction,
    },

    /// List the taxonomy tables
    Taxonomy,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ModulesAction {
    /// Resolve the module declarations of an entity or declaration array
    Resolve {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Close module types over their declared dependencies
    Close {
        #[arg(required = true, value_name = "MODULE")]
        modules: Vec<String>,
    },

    /// Check module types for declared conflicts
    Check {
        #[arg(required = true, value_name = "MODULE")]
        modules: Vec<String>,
    },

    /// Modules recommended for an entity type
    Recommend {
        #[arg(value_name = "ENTITY_TYPE")]
        entity_type: String,
    },

    /// Check a module configuration against its schema
    Verify {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}
