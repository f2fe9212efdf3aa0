//! Environment variable overrides for template configuration.
//!
//! Responsibilities:
//! - Read and parse the `REMEDY_*` / `TSI_*` environment variables.
//! - Apply environment variable values to a TemplateLoader instance.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Reading template files (see builder.rs).
//! - .env file loading (handled by TemplateLoader::load_dotenv).
//!
//! Invariants:
//! - Environment variables take precedence over template file values.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric or date values return ParsingError::InvalidValue.

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use std::path::PathBuf;
use std::str::FromStr;

use super::builder::TemplateLoader;
use super::error::ParsingError;
use crate::types::parse_date_time;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_env<T: FromStr>(key: &str, expected: &str) -> Result<Option<T>, ParsingError> {
    env_var_or_none(key)
        .map(|raw| {
            raw.parse().map_err(|_| ParsingError::InvalidValue {
                var: key.to_string(),
                message: expected.to_string(),
            })
        })
        .transpose()
}

fn parse_env_date_time(key: &str) -> Result<Option<DateTime<Utc>>, ParsingError> {
    env_var_or_none(key)
        .map(|raw| {
            parse_date_time(&raw).map_err(|e| ParsingError::InvalidValue {
                var: key.to_string(),
                message: format!("must be an ISO 8601 date-time: {e}"),
            })
        })
        .transpose()
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut TemplateLoader) -> Result<(), ParsingError> {
    if let Some(host) = env_var_or_none("REMEDY_HOST_NAME") {
        loader.set_host_name(Some(host));
    }
    if let Some(port) = parse_env::<u16>("REMEDY_PORT", "must be a port number")? {
        loader.set_port(Some(port));
    }
    if let Some(user) = env_var_or_none("REMEDY_USER_NAME") {
        loader.set_user_name(Some(user));
    }
    if let Some(password) = env_var_or_none("REMEDY_PASSWORD") {
        loader.set_password(Some(SecretString::new(password.into())));
    }
    if let Some(endpoint) = env_var_or_none("TSI_EVENT_ENDPOINT") {
        loader.set_endpoint(Some(endpoint));
    }
    if let Some(token) = env_var_or_none("TSI_API_TOKEN") {
        loader.set_api_token(Some(SecretString::new(token.into())));
    }
    if let Some(chunk) = parse_env::<i64>("REMEDY_CHUNK_SIZE", "must be a number")? {
        loader.set_chunk_size(Some(chunk));
    }
    if let Some(retries) = parse_env::<i64>("REMEDY_RETRY_CONFIG", "must be a number")? {
        loader.set_retry_config(Some(retries));
    }
    if let Some(wait) = parse_env::<i64>("REMEDY_WAIT_MS_BEFORE_RETRY", "must be a number")? {
        loader.set_wait_ms_before_retry(Some(wait));
    }
    if let Some(start) = parse_env_date_time("REMEDY_START_DATE_TIME")? {
        loader.set_start_date_time(Some(start));
    }
    if let Some(end) = parse_env_date_time("REMEDY_END_DATE_TIME")? {
        loader.set_end_date_time(Some(end));
    }

    // Template path from environment (only if not already set via CLI)
    if loader.template_path().is_none()
        && let Some(path) = env_var_or_none("REMEDY_TEMPLATE_PATH")
    {
        loader.set_template_path(Some(PathBuf::from(path)));
    }

    Ok(())
}
