//! The ordered rule set applied to a template.
//!
//! Responsibilities:
//! - Implement each consistency rule as an independent check.
//! - Fix the order the checks run in, so the first reported error is
//!   reproducible.
//!
//! Does NOT handle:
//! - Running the rules or logging (see `Validator`).
//!
//! Invariants:
//! - Checks only read the template; none keep state between calls.
//! - Property maps are iterated in key order.

use chrono::{DateTime, Utc};

use super::error::{DateRangeViolation, ValidationError};
use super::profile::{FingerprintMode, ValidationProfile};
use crate::constants::{
    APP_ID_DISALLOWED_CHARS, APP_ID_PROPERTY, FINGERPRINT_EVENT_FIELDS,
    MAX_PROPERTY_FIELD_SUPPORTED,
};
use crate::placeholder::{
    FingerprintResolution, FingerprintTargets, Resolution, resolve, resolve_fingerprint,
};
use crate::types::{FieldDefinitionTable, Template};

/// Inputs shared by every rule during one validation pass.
pub(crate) struct RuleContext<'a> {
    pub template: &'a Template,
    pub profile: ValidationProfile,
    pub now: DateTime<Utc>,
}

/// A named check; the first failing rule aborts the pass.
pub(crate) struct Rule {
    pub name: &'static str,
    pub check: fn(&RuleContext<'_>) -> Result<(), ValidationError>,
}

pub(crate) const RULES: &[Rule] = &[
    Rule {
        name: "config_completeness",
        check: check_config_completeness,
    },
    Rule {
        name: "date_range",
        check: check_date_range,
    },
    Rule {
        name: "title_placeholder",
        check: check_title,
    },
    Rule {
        name: "fingerprint_fields",
        check: check_fingerprint_fields,
    },
    Rule {
        name: "property_count",
        check: check_property_count,
    },
    Rule {
        name: "app_id",
        check: check_app_id,
    },
    Rule {
        name: "property_entries",
        check: check_property_entries,
    },
    Rule {
        name: "scalar_placeholders",
        check: check_scalar_placeholders,
    },
    Rule {
        name: "source_and_sender",
        check: check_source_and_sender,
    },
];

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn check_config_completeness(ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
    let config = &ctx.template.config;
    let checks = [
        ("remedyHostName", is_blank(&config.remedy_host_name)),
        ("remedyUserName", is_blank(&config.remedy_user_name)),
        (
            "remedyPassword",
            ctx.profile.require_password && !config.has_password(),
        ),
        ("tsiEventEndpoint", is_blank(&config.tsi_event_endpoint)),
        ("tsiApiToken", !config.has_api_token()),
        ("conditionFields", config.condition_fields.is_empty()),
        ("chunkSize", config.chunk_size <= 0),
        ("retryChunkSize", config.retry_chunk_size == Some(0)),
        ("threadCount", config.thread_count == Some(0)),
        ("retryConfig", config.retry_config < 0),
        ("waitMsBeforeRetry", config.wait_ms_before_retry <= 0),
        ("startDateTime", config.start_date_time.is_none()),
        ("endDateTime", config.end_date_time.is_none()),
    ];

    let fields: Vec<String> = checks
        .iter()
        .filter(|(_, failed)| *failed)
        .map(|(name, _)| (*name).to_string())
        .collect();

    if fields.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::ConfigIncomplete { fields })
    }
}

fn check_date_range(ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
    let config = &ctx.template.config;
    // Presence is guaranteed by the completeness rule.
    let (Some(start), Some(end)) = (config.start_date_time, config.end_date_time) else {
        return Ok(());
    };

    if start > end {
        return Err(ValidationError::DateRangeInvalid(
            DateRangeViolation::StartAfterEnd { start, end },
        ));
    }
    if ctx.profile.reject_future_end && end > ctx.now {
        return Err(ValidationError::DateRangeInvalid(
            DateRangeViolation::EndInFuture { end, now: ctx.now },
        ));
    }
    Ok(())
}

/// Generic rule for an optional placeholder-eligible value.
fn check_placeholder(
    value: Option<&str>,
    table: &FieldDefinitionTable,
) -> Result<(), ValidationError> {
    match value.map(|v| resolve(v, table)) {
        Some(Resolution::Unresolved(token)) => Err(ValidationError::PlaceholderUnresolved {
            token: token.to_string(),
        }),
        _ => Ok(()),
    }
}

fn check_title(ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
    let template = ctx.template;
    check_placeholder(
        template.event_definition.title.as_deref(),
        &template.field_definition_map,
    )
}

fn check_fingerprint_fields(ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
    let event = &ctx.template.event_definition;
    let targets = match ctx.profile.fingerprint_mode {
        FingerprintMode::Intrinsic => FingerprintTargets::Intrinsic(FINGERPRINT_EVENT_FIELDS),
        FingerprintMode::FieldTable => {
            FingerprintTargets::FieldTable(&ctx.template.field_definition_map)
        }
    };

    for field in &event.fingerprint_fields {
        match resolve_fingerprint(field, &event.properties, targets) {
            FingerprintResolution::Intrinsic(_)
            | FingerprintResolution::FieldDefinition(_)
            | FingerprintResolution::Property(_) => {}
            FingerprintResolution::UnknownIntrinsic(name) => {
                return Err(ValidationError::FingerprintFieldInvalid {
                    field: name.to_string(),
                    allowed: Some(
                        FINGERPRINT_EVENT_FIELDS
                            .iter()
                            .map(|f| (*f).to_string())
                            .collect(),
                    ),
                });
            }
            FingerprintResolution::UndefinedPlaceholder(token) => {
                return Err(ValidationError::PlaceholderUnresolved {
                    token: token.to_string(),
                });
            }
            FingerprintResolution::UnknownProperty(key) => {
                return Err(ValidationError::FingerprintFieldInvalid {
                    field: key.to_string(),
                    allowed: None,
                });
            }
        }
    }
    Ok(())
}

fn check_property_count(ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
    let count = ctx.template.event_definition.properties.len();
    if count > MAX_PROPERTY_FIELD_SUPPORTED {
        return Err(ValidationError::PropertyCountExceeded {
            count,
            max: MAX_PROPERTY_FIELD_SUPPORTED,
        });
    }
    Ok(())
}

fn check_app_id(ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
    let Some(app_id) = ctx.template.event_definition.properties.get(APP_ID_PROPERTY) else {
        return Ok(());
    };
    if app_id.chars().any(|c| APP_ID_DISALLOWED_CHARS.contains(c)) {
        return Err(ValidationError::AppIdInvalid {
            value: app_id.clone(),
        });
    }
    Ok(())
}

/// Letters, digits and underscore, not starting with a digit.
pub(crate) fn is_valid_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

fn check_property_entries(ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
    let template = ctx.template;
    for (key, value) in &template.event_definition.properties {
        if !is_valid_identifier(key) {
            return Err(ValidationError::IdentifierInvalid {
                key: key.trim().to_string(),
            });
        }
        check_placeholder(Some(value.as_str()), &template.field_definition_map)?;
    }
    Ok(())
}

fn check_scalar_placeholders(ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
    let event = &ctx.template.event_definition;
    let table = &ctx.template.field_definition_map;
    for value in [
        event.severity.as_deref(),
        event.status.as_deref(),
        event.event_class.as_deref(),
        event.created_at.as_deref(),
    ] {
        check_placeholder(value, table)?;
    }
    Ok(())
}

fn check_source_and_sender(ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
    let event = &ctx.template.event_definition;
    let table = &ctx.template.field_definition_map;
    for origin in [&event.source, &event.sender] {
        for (_, value) in origin.attributes() {
            check_placeholder(value, table)?;
        }
    }
    Ok(())
}
