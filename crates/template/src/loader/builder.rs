//! Template loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `TemplateLoader` that reads a template from a
//!   file or the bundled defaults and layers overrides on top.
//! - Build the final `Template` from the loaded values.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Mapping JSON onto the typed records (delegated to parse.rs).
//! - Deciding whether the template is usable (see `validation`).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - Environment variables take precedence over template file values.
//! - An explicit template path takes precedence over the form's bundled default.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use std::path::{Path, PathBuf};

use super::env::apply_env;
use super::error::ParsingError;
use super::form::ArServerForm;
use super::parse::parse_template;
use crate::types::{Configuration, Template};

/// Loader that builds a template from a template document plus overrides.
#[derive(Default)]
pub struct TemplateLoader {
    form: Option<ArServerForm>,
    template_path: Option<PathBuf>,
    host_name: Option<String>,
    port: Option<u16>,
    user_name: Option<String>,
    password: Option<SecretString>,
    endpoint: Option<String>,
    api_token: Option<SecretString>,
    chunk_size: Option<i64>,
    retry_config: Option<i64>,
    wait_ms_before_retry: Option<i64>,
    start_date_time: Option<DateTime<Utc>>,
    end_date_time: Option<DateTime<Utc>>,
}

impl TemplateLoader {
    /// Create a new template loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    /// Missing `.env` files are silently ignored.
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ParsingError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ParsingError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ParsingError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ParsingError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration overrides from environment variables.
    pub fn from_env(mut self) -> Result<Self, ParsingError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Use the bundled default template of `form`.
    pub fn with_form(mut self, form: ArServerForm) -> Self {
        self.form = Some(form);
        self
    }

    /// Read the template from a file instead of the bundled default.
    pub fn with_template_path(mut self, path: PathBuf) -> Self {
        self.template_path = Some(path);
        self
    }

    pub fn with_host_name(mut self, host: String) -> Self {
        self.host_name = Some(host);
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_user_name(mut self, user: String) -> Self {
        self.user_name = Some(user);
        self
    }

    pub fn with_password(mut self, password: String) -> Self {
        self.password = Some(SecretString::new(password.into()));
        self
    }

    pub fn with_endpoint(mut self, endpoint: String) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    pub fn with_api_token(mut self, token: String) -> Self {
        self.api_token = Some(SecretString::new(token.into()));
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: i64) -> Self {
        self.chunk_size = Some(chunk_size);
        self
    }

    pub fn with_retry_config(mut self, retries: i64) -> Self {
        self.retry_config = Some(retries);
        self
    }

    pub fn with_wait_ms_before_retry(mut self, wait_ms: i64) -> Self {
        self.wait_ms_before_retry = Some(wait_ms);
        self
    }

    /// Set the start of the query window.
    pub fn with_start_date_time(mut self, start: DateTime<Utc>) -> Self {
        self.start_date_time = Some(start);
        self
    }

    /// Set the end of the query window.
    pub fn with_end_date_time(mut self, end: DateTime<Utc>) -> Self {
        self.end_date_time = Some(end);
        self
    }

    /// Build the template.
    ///
    /// Reads the template file if a path was given, otherwise the bundled
    /// default of the selected form (incident when none was selected), then
    /// applies the overrides.
    pub fn build(self) -> Result<Template, ParsingError> {
        let mut template = match &self.template_path {
            Some(path) => {
                let json = read_template_file(path)?;
                tracing::debug!(path = %path.display(), "loaded template file");
                parse_template(&json)?
            }
            None => {
                let form = self.form.unwrap_or_default();
                tracing::debug!(%form, file = form.template_file_name(), "loaded default template");
                parse_template(form.default_template())?
            }
        };

        if template.field_definition_map.is_empty() {
            tracing::debug!("template defines no placeholder fields");
        }

        self.apply_overrides(&mut template.config);
        Ok(template)
    }

    fn apply_overrides(self, config: &mut Configuration) {
        if let Some(host) = self.host_name {
            config.remedy_host_name = host;
        }
        if let Some(port) = self.port {
            config.remedy_port = Some(port);
        }
        if let Some(user) = self.user_name {
            config.remedy_user_name = user;
        }
        if let Some(password) = self.password {
            config.remedy_password = Some(password);
        }
        if let Some(endpoint) = self.endpoint {
            config.tsi_event_endpoint = endpoint;
        }
        if let Some(token) = self.api_token {
            config.tsi_api_token = Some(token);
        }
        if let Some(chunk_size) = self.chunk_size {
            config.chunk_size = chunk_size;
        }
        if let Some(retries) = self.retry_config {
            config.retry_config = retries;
        }
        if let Some(wait_ms) = self.wait_ms_before_retry {
            config.wait_ms_before_retry = wait_ms;
        }
        if let Some(start) = self.start_date_time {
            config.start_date_time = Some(start);
        }
        if let Some(end) = self.end_date_time {
            config.end_date_time = Some(end);
        }
    }

    // Internal accessor methods for use by other loader modules

    pub(crate) fn template_path(&self) -> Option<&PathBuf> {
        self.template_path.as_ref()
    }

    pub(crate) fn set_template_path(&mut self, path: Option<PathBuf>) {
        self.template_path = path;
    }

    pub(crate) fn set_host_name(&mut self, host: Option<String>) {
        self.host_name = host;
    }

    pub(crate) fn set_port(&mut self, port: Option<u16>) {
        self.port = port;
    }

    pub(crate) fn set_user_name(&mut self, user: Option<String>) {
        self.user_name = user;
    }

    pub(crate) fn set_password(&mut self, password: Option<SecretString>) {
        self.password = password;
    }

    pub(crate) fn set_endpoint(&mut self, endpoint: Option<String>) {
        self.endpoint = endpoint;
    }

    pub(crate) fn set_api_token(&mut self, token: Option<SecretString>) {
        self.api_token = token;
    }

    pub(crate) fn set_chunk_size(&mut self, chunk_size: Option<i64>) {
        self.chunk_size = chunk_size;
    }

    pub(crate) fn set_retry_config(&mut self, retries: Option<i64>) {
        self.retry_config = retries;
    }

    pub(crate) fn set_wait_ms_before_retry(&mut self, wait_ms: Option<i64>) {
        self.wait_ms_before_retry = wait_ms;
    }

    pub(crate) fn set_start_date_time(&mut self, start: Option<DateTime<Utc>>) {
        self.start_date_time = start;
    }

    pub(crate) fn set_end_date_time(&mut self, end: Option<DateTime<Utc>>) {
        self.end_date_time = end;
    }
}

fn read_template_file(path: &Path) -> Result<String, ParsingError> {
    std::fs::read_to_string(path).map_err(|source| ParsingError::TemplateFileRead {
        path: path.to_path_buf(),
        source,
    })
}
