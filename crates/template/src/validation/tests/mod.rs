//! Tests for the template validator.
//!
//! Responsibilities:
//! - Test each rule in isolation starting from a known-good template.
//! - Test rule ordering and fail-fast behavior.
//! - Test the differences between validation profiles.
//!
//! Invariants:
//! - Tests inject a fixed clock so the future-date rule is deterministic.

use chrono::{DateTime, TimeZone, Utc};
use secrecy::SecretString;

use crate::types::{Configuration, EventDefinition, FieldDefinitionTable, FieldItem, Template};
use crate::validation::{ValidationProfile, Validator};


/// Fixed "now" used by every validator in these tests.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

pub fn validator() -> Validator {
    Validator::new(ValidationProfile::standard()).with_clock(fixed_now())
}

pub fn secret(value: &str) -> Option<SecretString> {
    Some(SecretString::new(value.to_string().into()))
}

/// The reference configuration: every required value set, window in the past.
pub fn valid_config() -> Configuration {
    Configuration {
        remedy_host_name: "ar.example.com".to_string(),
        remedy_user_name: "svc".to_string(),
        tsi_api_token: secret("abc123"),
        tsi_event_endpoint: "https://tsi.example.com/events".to_string(),
        condition_fields: vec![1],
        chunk_size: 100,
        retry_config: 3,
        wait_ms_before_retry: 5000,
        start_date_time: Some(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()),
        end_date_time: Some(Utc.with_ymd_and_hms(2023, 1, 2, 0, 0, 0).unwrap()),
        ..Configuration::default()
    }
}

/// Reference template: literal title, no fingerprints, no properties.
pub fn valid_template() -> Template {
    Template::new(
        valid_config(),
        EventDefinition {
            title: Some("Incident".to_string()),
            ..EventDefinition::default()
        },
        FieldDefinitionTable::new(),
    )
}

pub fn table(tokens: &[&str]) -> FieldDefinitionTable {
    tokens
        .iter()
        .enumerate()
        .map(|(i, t)| (*t, FieldItem::new(1000 + i as u32)))
        .collect()
}
