//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//! - Build the template each command operates on.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Exit codes (see `error` module).

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands::{self, Overrides, load_template};

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli) -> Result<()> {
    let overrides = Overrides::from_cli(&cli);
    match cli.command {
        Commands::Validate {
            source,
            profile,
            output,
        } => {
            let template = load_template(&source, overrides)?;
            commands::validate::run(&template, &profile, &output)?;
        }
        Commands::Show { source } => {
            let template = load_template(&source, overrides)?;
            commands::show::run(&template)?;
        }
    }
    Ok(())
}
