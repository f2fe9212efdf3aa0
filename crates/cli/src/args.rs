//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not build templates (see `commands::load_template`).

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "remedy-template")]
#[command(about = "Validate Remedy to TrueSight integration templates", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  remedy-template validate --form change\n  remedy-template validate --template ./incident.json --profile strict\n  remedy-template --host ar.example.com --token $TSI_API_TOKEN validate --output json\n  remedy-template show --form incident\n"
)]
pub struct Cli {
    /// Host name of the Remedy AR server
    #[arg(long, global = true, env = "REMEDY_HOST_NAME")]
    pub host: Option<String>,

    /// AR server login
    #[arg(short, long, global = true, env = "REMEDY_USER_NAME")]
    pub user: Option<String>,

    /// AR server password
    #[arg(short, long, global = true, env = "REMEDY_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// URL events are posted to
    #[arg(long, global = true, env = "TSI_EVENT_ENDPOINT")]
    pub endpoint: Option<String>,

    /// API token for the event endpoint
    #[arg(short, long, global = true, env = "TSI_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Start of the query window (e.g., '2024-01-01T00:00:00')
    #[arg(long, global = true, env = "REMEDY_START_DATE_TIME")]
    pub start: Option<String>,

    /// End of the query window (e.g., '2024-01-02T00:00:00Z')
    #[arg(long, global = true, env = "REMEDY_END_DATE_TIME")]
    pub end: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the template is read from.
#[derive(Args, Debug, Clone)]
pub struct TemplateSource {
    /// AR server form whose bundled default template is used (incident, change)
    #[arg(short, long, default_value = "incident")]
    pub form: String,

    /// Path to a template file (overrides --form)
    #[arg(long, env = "REMEDY_TEMPLATE_PATH", value_name = "FILE")]
    pub template: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load a template and check it is consistent enough to run an integration
    Validate {
        #[command(flatten)]
        source: TemplateSource,

        /// Validation profile (standard, strict, lenient)
        #[arg(long, default_value = "standard")]
        profile: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        output: String,
    },

    /// Print the loaded template as JSON with credentials redacted
    Show {
        #[command(flatten)]
        source: TemplateSource,
    },
}
