//! Error types for template validation.
//!
//! Responsibilities:
//! - Define one variant per distinguishable reason a template is rejected.
//! - Render each reason as the human-readable message shown to operators.
//!
//! Invariants:
//! - Every variant carries the offending value(s) so the message can name them.
//! - Errors compare equal when kind and payload match, so repeated validation
//!   of the same template yields an identical error.
//! - Configuration errors name fields, never secret values.

use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;

/// Reasons a template is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "The fields for config elements are empty or out of range, they should be nonempty and valid: {}",
        .fields.join(", ")
    )]
    ConfigIncomplete { fields: Vec<String> },

    #[error("Invalid date range: {0}")]
    DateRangeInvalid(DateRangeViolation),

    #[error("The definition for payload placeholder {token} is missing in the configuration file")]
    PlaceholderUnresolved { token: String },

    #[error("{}", fingerprint_message(.field, .allowed.as_deref()))]
    FingerprintFieldInvalid {
        field: String,
        allowed: Option<Vec<String>>,
    },

    #[error("The properties field count ({count}) exceeds the maximum supported count ({max})")]
    PropertyCountExceeded { count: usize, max: usize },

    #[error(
        "The property name {key:?} is not valid, it should start with a letter or underscore and contain only letters, digits and underscores"
    )]
    IdentifierInvalid { key: String },

    #[error("The app_id value {value:?} is not valid, it contains special characters")]
    AppIdInvalid { value: String },
}

impl ValidationError {
    /// Stable snake_case name of the error kind, for machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ConfigIncomplete { .. } => "config_incomplete",
            Self::DateRangeInvalid(_) => "date_range_invalid",
            Self::PlaceholderUnresolved { .. } => "placeholder_unresolved",
            Self::FingerprintFieldInvalid { .. } => "fingerprint_field_invalid",
            Self::PropertyCountExceeded { .. } => "property_count_exceeded",
            Self::IdentifierInvalid { .. } => "identifier_invalid",
            Self::AppIdInvalid { .. } => "app_id_invalid",
        }
    }
}

fn fingerprint_message(field: &str, allowed: Option<&[String]>) -> String {
    match allowed {
        Some(allowed) => format!(
            "The fingerprint field @{field} is not a supported event field, supported fields are [{}]",
            allowed.join(", ")
        ),
        None => format!(
            "The fingerprint field {field} is not present in the event properties"
        ),
    }
}

/// Why the query window was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateRangeViolation {
    /// Start of the window is after its end.
    StartAfterEnd {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    /// End of the window is later than the time of validation.
    EndInFuture {
        end: DateTime<Utc>,
        now: DateTime<Utc>,
    },
}

impl fmt::Display for DateRangeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartAfterEnd { start, end } => write!(
                f,
                "start date-time {} is after end date-time {}",
                start.to_rfc3339(),
                end.to_rfc3339()
            ),
            Self::EndInFuture { end, now } => write!(
                f,
                "end date-time {} is in the future (now {})",
                end.to_rfc3339(),
                now.to_rfc3339()
            ),
        }
    }
}
