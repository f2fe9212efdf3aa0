//! Property-based tests for template validation.
//!
//! These tests generate templates around a known-good baseline and check the
//! validator's contract holds for arbitrary inputs rather than hand-picked ones.
//!
//! Test coverage:
//! - Literal values never trip the placeholder rules
//! - A title placeholder fails exactly when its token is undefined
//! - Property counts above the maximum are always rejected
//! - Validation is idempotent
//! - A blank host name is always reported as incomplete configuration
//! - A start after the end is always rejected

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use secrecy::SecretString;

use remedy_template::constants::MAX_PROPERTY_FIELD_SUPPORTED;
use remedy_template::{
    Configuration, DateRangeViolation, EventDefinition, FieldDefinitionTable, FieldItem, Template,
    ValidationError, Validator,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

fn validator() -> Validator {
    Validator::default().with_clock(now())
}

fn baseline() -> Template {
    let config = Configuration {
        remedy_host_name: "ar.example.com".to_string(),
        remedy_user_name: "svc".to_string(),
        tsi_api_token: Some(SecretString::new("abc123".to_string().into())),
        tsi_event_endpoint: "https://tsi.example.com/events".to_string(),
        condition_fields: vec![1],
        start_date_time: Some(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()),
        end_date_time: Some(Utc.with_ymd_and_hms(2023, 1, 2, 0, 0, 0).unwrap()),
        ..Configuration::default()
    };
    let event = EventDefinition {
        title: Some("Incident".to_string()),
        ..EventDefinition::default()
    };
    Template::new(config, event, FieldDefinitionTable::new())
}

/// Values that never start with the placeholder sentinel.
fn literal_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 _.-]{0,24}"
}

/// Valid property keys.
fn identifier_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_]{0,15}"
}

/// Placeholder names without the sentinel.
fn token_name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][A-Z_]{0,15}"
}

proptest! {
    #[test]
    fn prop_literal_values_always_pass(
        title in literal_strategy(),
        status in literal_strategy(),
        source_name in literal_strategy(),
        properties in prop::collection::btree_map(identifier_strategy(), literal_strategy(), 0..16),
    ) {
        let mut template = baseline();
        template.event_definition.title = Some(title);
        template.event_definition.status = Some(status);
        template.event_definition.source.name = Some(source_name);
        template.event_definition.properties = properties
            .into_iter()
            .filter(|(k, _)| k != "app_id")
            .collect();

        prop_assert_eq!(validator().validate(&template), Ok(true));
    }

    #[test]
    fn prop_title_placeholder_fails_iff_undefined(
        name in token_name_strategy(),
        defined in any::<bool>(),
    ) {
        let token = format!("@{name}");
        let mut template = baseline();
        template.event_definition.title = Some(token.clone());
        if defined {
            template
                .field_definition_map
                .insert(token.clone(), FieldItem::new(1000000000));
        }

        let result = validator().validate(&template);
        if defined {
            prop_assert_eq!(result, Ok(true));
        } else {
            prop_assert_eq!(result, Err(ValidationError::PlaceholderUnresolved { token }));
        }
    }

    #[test]
    fn prop_property_count_above_max_is_rejected(extra in 1usize..32) {
        let count = MAX_PROPERTY_FIELD_SUPPORTED + extra;
        let mut template = baseline();
        template.event_definition.properties = (0..count)
            .map(|i| (format!("field_{i}"), "value".to_string()))
            .collect();

        prop_assert_eq!(
            validator().validate(&template),
            Err(ValidationError::PropertyCountExceeded {
                count,
                max: MAX_PROPERTY_FIELD_SUPPORTED,
            })
        );
    }

    #[test]
    fn prop_validation_is_idempotent(
        title in prop_oneof![literal_strategy(), token_name_strategy().prop_map(|n| format!("@{n}"))],
        key in prop_oneof![identifier_strategy(), Just("bad key".to_string())],
        start_offset_hours in -48i64..48,
    ) {
        let mut template = baseline();
        template.event_definition.title = Some(title);
        template.event_definition.properties.insert(key, "value".to_string());
        template.config.start_date_time =
            Some(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap() + Duration::hours(start_offset_hours));

        let v = validator();
        let first = v.validate(&template);
        let second = v.validate(&template);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_blank_host_is_incomplete(host in "[ \t]{0,8}") {
        let mut template = baseline();
        template.config.remedy_host_name = host;

        match validator().validate(&template) {
            Err(ValidationError::ConfigIncomplete { fields }) => {
                prop_assert!(fields.contains(&"remedyHostName".to_string()));
            }
            other => prop_assert!(false, "expected ConfigIncomplete, got {:?}", other),
        }
    }

    #[test]
    fn prop_start_after_end_is_rejected(gap_minutes in 1i64..100_000) {
        let mut template = baseline();
        let end = Utc.with_ymd_and_hms(2023, 1, 2, 0, 0, 0).unwrap();
        template.config.end_date_time = Some(end);
        template.config.start_date_time = Some(end + Duration::minutes(gap_minutes));

        let is_start_after_end = matches!(
            validator().validate(&template),
            Err(ValidationError::DateRangeInvalid(DateRangeViolation::StartAfterEnd { .. }))
        );
        prop_assert!(is_start_after_end);
    }
}
