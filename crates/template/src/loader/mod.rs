//! Template loader for bundled defaults, template files and environment variables.
//!
//! Responsibilities:
//! - Map a template JSON document onto the typed records.
//! - Provide a builder-pattern `TemplateLoader` layering file, environment and
//!   builder values.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Validation of the loaded template (see `validation`).
//!
//! Invariants / Assumptions:
//! - A template is only built when all three top-level sections are present.
//! - Environment variables take precedence over template file values.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;
mod form;
mod parse;

#[cfg(test)]
mod tests;

pub use builder::TemplateLoader;
pub use env::env_var_or_none;
pub use error::ParsingError;
pub use form::ArServerForm;
pub use parse::parse_template;
