//! Template validation.
//!
//! Responsibilities:
//! - Decide whether a loaded template is consistent enough to drive an
//!   integration run.
//! - Report the first violated rule as a typed [`ValidationError`].
//!
//! Does NOT handle:
//! - Parsing template files (see `loader`).
//! - Recovering from a violation: any error means the template is rejected.
//!
//! Invariants / Assumptions:
//! - Rules run in a fixed order and the pass stops at the first failure.
//! - Validation never mutates the template and keeps no state between calls;
//!   validating the same template twice gives the same outcome.
//! - "Now" is read once per pass (or injected with [`Validator::with_clock`]).

mod error;
mod profile;
mod rules;

#[cfg(test)]
mod tests;

pub use error::{DateRangeViolation, ValidationError};
pub use profile::{FingerprintMode, ValidationProfile};

use chrono::{DateTime, Utc};

use crate::types::Template;
use rules::{RULES, RuleContext};

/// Validate `template` with the standard profile against the current time.
///
/// Returns `Ok(true)` when every rule passes.
pub fn validate(template: &Template) -> Result<bool, ValidationError> {
    Validator::default().validate(template)
}

/// Stateless template validator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    profile: ValidationProfile,
    clock: Option<DateTime<Utc>>,
}

impl Validator {
    pub fn new(profile: ValidationProfile) -> Self {
        Self {
            profile,
            clock: None,
        }
    }

    /// Use a fixed time instead of the wall clock for the future-date check.
    pub fn with_clock(mut self, now: DateTime<Utc>) -> Self {
        self.clock = Some(now);
        self
    }

    pub fn profile(&self) -> ValidationProfile {
        self.profile
    }

    /// Run every rule in order, stopping at the first failure.
    pub fn validate(&self, template: &Template) -> Result<bool, ValidationError> {
        let ctx = RuleContext {
            template,
            profile: self.profile,
            now: self.clock.unwrap_or_else(Utc::now),
        };

        for rule in RULES {
            tracing::trace!(rule = rule.name, profile = %self.profile, "checking template rule");
            if let Err(err) = (rule.check)(&ctx) {
                tracing::debug!(
                    rule = rule.name,
                    kind = err.kind(),
                    error = %err,
                    "template rejected"
                );
                return Err(err);
            }
        }

        tracing::debug!(
            profile = %self.profile,
            properties = template.event_definition.properties.len(),
            fingerprint_fields = template.event_definition.fingerprint_fields.len(),
            field_definitions = template.field_definition_map.len(),
            "template validated"
        );
        Ok(true)
    }
}
