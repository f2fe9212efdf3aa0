//! Error types for template loading.
//!
//! Responsibilities:
//! - Define error variants for every way a template cannot be built.
//!
//! Does NOT handle:
//! - Consistency errors in a loaded template (see `validation::ValidationError`).
//!
//! Invariants:
//! - All error variants include context for debugging (section names, paths, variables).
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building a [`Template`](crate::Template).
#[derive(Error, Debug)]
pub enum ParsingError {
    #[error(
        "Could not read the template file from location ({path}) or it has different encoding than UTF8"
    )]
    TemplateFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("The template json is not a valid JSON, {0}")]
    InvalidJson(String),

    #[error("The template does not contain the '{0}' section")]
    MissingSection(&'static str),

    #[error(
        "Either the template does not contain a proper '{section}' property, or its fields are not correct. {message}"
    )]
    InvalidSection {
        section: &'static str,
        message: String,
    },

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Unknown template form '{0}' (expected incident or change)")]
    UnknownForm(String),

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}
