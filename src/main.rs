//! aiml - graded validation of AIML entity documents
//!
//! Usage: aiml <COMMAND>
//!
//! Commands:
//!   validate  Validate entity documents and report findings, score and completeness
//!   modules   Resolve, close and conflict-check capability modules
//!   taxonomy  List categories, types, subcategories and modules

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use commands::Session;

fn main() -> Result<()> {
    let cli = Cli::parse();
    aiml_validator::logging::init_tracing(cli.verbose);

    let session = Session::load(cli.config.as_deref(), cli.json, cli.verbose, cli.strict)?;

    match &cli.command {
        Commands::Validate {
            files,
            strict_warnings,
        } => commands::validate::cmd_validate(&session, files, *strict_warnings),
        Commands::Modules { action } => commands::modules::cmd_modules(&session, action),
        Commands::Taxonomy => commands::taxonomy::cmd_taxonomy(&session),
    }
}
