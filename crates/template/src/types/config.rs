//! Operational settings for an integration run.
//!
//! Responsibilities:
//! - Define the `config` block of a template (AR server, event endpoint,
//!   chunking, retry policy and the query window).
//! - Supply defaults for the optional tuning values.
//!
//! Does NOT handle:
//! - Deciding whether the values are usable (see the `validation` module).
//! - Environment or builder overrides (see the `loader` module).
//!
//! Invariants:
//! - Credentials are `SecretString` and never appear in `Debug` output.
//! - Numeric values keep their sign as written so that the validator can
//!   reject non-positive values instead of the parser silently clamping them.

use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::serde_helpers::{lenient_int, lenient_port, optional_date_time, optional_secret};
use crate::constants::{
    DEFAULT_CHUNK_SIZE, DEFAULT_RETRY_CHUNK_SIZE, DEFAULT_RETRY_CONFIG, DEFAULT_THREAD_COUNT,
    DEFAULT_WAIT_MS_BEFORE_RETRY,
};

/// The `config` block of a template.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    /// Host name of the Remedy AR server.
    #[serde(default)]
    pub remedy_host_name: String,
    /// Port of the Remedy AR server, if not the server default.
    #[serde(default, deserialize_with = "lenient_port::deserialize")]
    pub remedy_port: Option<u16>,
    /// AR server login.
    #[serde(default)]
    pub remedy_user_name: String,
    /// AR server password.
    #[serde(default, with = "optional_secret")]
    pub remedy_password: Option<SecretString>,
    /// URL events are posted to.
    #[serde(default)]
    pub tsi_event_endpoint: String,
    /// API token for the event endpoint.
    #[serde(default, with = "optional_secret")]
    pub tsi_api_token: Option<SecretString>,
    /// Records fetched from the AR server per request.
    #[serde(default = "default_chunk_size", deserialize_with = "lenient_int::deserialize")]
    pub chunk_size: i64,
    /// Events re-sent per request when retrying a failed chunk.
    #[serde(default, deserialize_with = "lenient_int::option::deserialize")]
    pub retry_chunk_size: Option<u32>,
    /// Worker threads used to forward events.
    #[serde(default, deserialize_with = "lenient_int::option::deserialize")]
    pub thread_count: Option<u32>,
    /// AR field ids whose date ranges select the records to forward.
    #[serde(default)]
    pub condition_fields: Vec<u32>,
    /// Status values a record must have to be forwarded.
    #[serde(default)]
    pub query_status_list: Vec<u32>,
    /// Retries for a failed dispatch.
    #[serde(default = "default_retry_config", deserialize_with = "lenient_int::deserialize")]
    pub retry_config: i64,
    /// Wait between retries in milliseconds.
    #[serde(
        default = "default_wait_ms_before_retry",
        deserialize_with = "lenient_int::deserialize"
    )]
    pub wait_ms_before_retry: i64,
    /// Start of the query window.
    #[serde(default, with = "optional_date_time")]
    pub start_date_time: Option<DateTime<Utc>>,
    /// End of the query window.
    #[serde(default, with = "optional_date_time")]
    pub end_date_time: Option<DateTime<Utc>>,
}

fn default_chunk_size() -> i64 {
    DEFAULT_CHUNK_SIZE
}

fn default_retry_config() -> i64 {
    DEFAULT_RETRY_CONFIG
}

fn default_wait_ms_before_retry() -> i64 {
    DEFAULT_WAIT_MS_BEFORE_RETRY
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            remedy_host_name: String::new(),
            remedy_port: None,
            remedy_user_name: String::new(),
            remedy_password: None,
            tsi_event_endpoint: String::new(),
            tsi_api_token: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
            retry_chunk_size: None,
            thread_count: None,
            condition_fields: Vec::new(),
            query_status_list: Vec::new(),
            retry_config: DEFAULT_RETRY_CONFIG,
            wait_ms_before_retry: DEFAULT_WAIT_MS_BEFORE_RETRY,
            start_date_time: None,
            end_date_time: None,
        }
    }
}

impl Configuration {
    /// Retry chunk size, falling back to the default.
    pub fn effective_retry_chunk_size(&self) -> u32 {
        self.retry_chunk_size.unwrap_or(DEFAULT_RETRY_CHUNK_SIZE)
    }

    /// Thread count, falling back to the default.
    pub fn effective_thread_count(&self) -> u32 {
        self.thread_count.unwrap_or(DEFAULT_THREAD_COUNT)
    }

    /// Whether a non-blank password is configured.
    pub fn has_password(&self) -> bool {
        has_secret(self.remedy_password.as_ref())
    }

    /// Whether a non-blank API token is configured.
    pub fn has_api_token(&self) -> bool {
        has_secret(self.tsi_api_token.as_ref())
    }
}

fn has_secret(secret: Option<&SecretString>) -> bool {
    secret.is_some_and(|s| !s.expose_secret().trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_defaults_when_fields_missing() {
        let config: Configuration = serde_json::from_str("{}").unwrap();
        assert_eq!(config.chunk_size, DEFAULT_CHUNK_SIZE);
        assert_eq!(config.retry_config, DEFAULT_RETRY_CONFIG);
        assert_eq!(config.wait_ms_before_retry, DEFAULT_WAIT_MS_BEFORE_RETRY);
        assert_eq!(config.effective_thread_count(), DEFAULT_THREAD_COUNT);
        assert_eq!(config.effective_retry_chunk_size(), DEFAULT_RETRY_CHUNK_SIZE);
        assert!(config.start_date_time.is_none());
        assert!(!config.has_password());
    }

    #[test]
    fn test_configuration_accepts_numeric_strings() {
        let config: Configuration = serde_json::from_str(
            r#"{"chunkSize": "250", "retryChunkSize": "5", "threadCount": 8, "retryConfig": "0"}"#,
        )
        .unwrap();
        assert_eq!(config.chunk_size, 250);
        assert_eq!(config.retry_chunk_size, Some(5));
        assert_eq!(config.thread_count, Some(8));
        assert_eq!(config.retry_config, 0);
    }

    #[test]
    fn test_configuration_rejects_non_numeric_chunk_size() {
        let result: Result<Configuration, _> = serde_json::from_str(r#"{"chunkSize": "lots"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_port_is_ignored() {
        let config: Configuration =
            serde_json::from_str(r#"{"remedyPort": "not-a-port"}"#).unwrap();
        assert_eq!(config.remedy_port, None);

        let config: Configuration = serde_json::from_str(r#"{"remedyPort": "46262"}"#).unwrap();
        assert_eq!(config.remedy_port, Some(46262));
    }

    #[test]
    fn test_blank_date_time_is_missing() {
        let config: Configuration =
            serde_json::from_str(r#"{"startDateTime": "  ", "endDateTime": "2023-01-02T00:00"}"#)
                .unwrap();
        assert!(config.start_date_time.is_none());
        assert!(config.end_date_time.is_some());
    }

    #[test]
    fn test_secrets_are_redacted() {
        let config: Configuration = serde_json::from_str(
            r#"{"remedyPassword": "hunter2", "tsiApiToken": "abc123"}"#,
        )
        .unwrap();
        assert!(config.has_password());
        assert!(config.has_api_token());

        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("hunter2"));
        assert!(!json.contains("abc123"));
        assert!(!format!("{config:?}").contains("hunter2"));
    }

    #[test]
    fn test_whitespace_secret_is_not_configured() {
        let config: Configuration = serde_json::from_str(r#"{"tsiApiToken": "   "}"#).unwrap();
        assert!(!config.has_api_token());
    }
}
