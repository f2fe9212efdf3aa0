//! Template validation command.
//!
//! Responsibilities:
//! - Load the selected template and run the validator with the chosen profile.
//! - Report the outcome as text or JSON.
//!
//! Does NOT handle:
//! - Mapping the outcome to an exit code (see `error`).
//!
//! Invariants:
//! - A rejected template is returned as an error carrying the original
//!   `ValidationError`, so the exit code can be derived from it.
//! - JSON output is written to stdout for both outcomes.

use anyhow::{Result, anyhow};
use serde::Serialize;

use remedy_template::{Template, ValidationError, ValidationProfile, Validator};

/// Output format for the validation report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: text, json", s),
        }
    }
}

/// Machine-readable validation report.
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub profile: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ReportedError>,
}

#[derive(Debug, Serialize)]
pub struct ReportedError {
    pub kind: &'static str,
    pub message: String,
}

impl ValidationReport {
    fn new(profile: ValidationProfile, outcome: &Result<bool, ValidationError>) -> Self {
        let error = outcome.as_ref().err().map(|e| ReportedError {
            kind: e.kind(),
            message: e.to_string(),
        });
        Self {
            valid: error.is_none(),
            profile: profile.to_string(),
            error,
        }
    }
}

pub fn run(template: &Template, profile: &str, output: &str) -> Result<()> {
    let format = OutputFormat::from_str(output)?;
    let profile: ValidationProfile = profile.parse().map_err(|e: String| anyhow!(e))?;

    let outcome = Validator::new(profile).validate(template);
    match &outcome {
        Ok(_) => tracing::debug!(%profile, "template accepted"),
        Err(e) => tracing::debug!(%profile, kind = e.kind(), "template rejected"),
    }

    match format {
        OutputFormat::Json => {
            let report = ValidationReport::new(profile, &outcome);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            if outcome.is_ok() {
                println!("Template is valid (profile: {profile})");
            }
        }
    }

    outcome.map(|_| ()).map_err(anyhow::Error::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert!(OutputFormat::from_str("xml").is_err());
    }

    #[test]
    fn test_report_for_rejection() {
        let outcome = Err(ValidationError::AppIdInvalid {
            value: "my*app".to_string(),
        });
        let report = ValidationReport::new(ValidationProfile::strict(), &outcome);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(json["profile"], "strict");
        assert_eq!(json["error"]["kind"], "app_id_invalid");
    }

    #[test]
    fn test_report_for_success_omits_error() {
        let report = ValidationReport::new(ValidationProfile::standard(), &Ok(true));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["valid"], true);
        assert!(json.get("error").is_none());
    }
}
