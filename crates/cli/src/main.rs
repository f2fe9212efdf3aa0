//! remedy-template - Command-line validator for Remedy to TrueSight templates.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Load a template (bundled default or file) and validate or print it.
//! - Map outcomes to structured exit codes.
//!
//! Does NOT handle:
//! - Template parsing or validation rules (see `crates/template`).
//! - Forwarding events; this tool only checks templates.
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Global overrides (like `--host`) are applied consistently across all subcommands.

mod args;
mod commands;
mod dispatch;
mod error;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use remedy_template::TemplateLoader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = TemplateLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run_command(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
