//! Placeholder classification and resolution.
//!
//! Responsibilities:
//! - Decide whether a template value is a literal or a placeholder reference.
//! - Resolve placeholder references against the field definition table.
//! - Resolve fingerprint entries against the intrinsic event fields or the
//!   event's property keys.
//!
//! Does NOT handle:
//! - Turning unresolved references into errors (see `validation`).
//! - Substituting runtime values for placeholders.
//!
//! Invariants:
//! - `is_placeholder` is the only place the sentinel prefix is tested.
//! - Resolution is pure: same inputs, same classification.

use std::collections::BTreeMap;

use crate::constants::PLACEHOLDER_TOKEN;
use crate::types::FieldDefinitionTable;

/// Classification of a placeholder-eligible value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Not a placeholder; used as written.
    Literal(&'a str),
    /// Placeholder with a definition in the field table.
    Resolved(&'a str),
    /// Placeholder with no definition in the field table.
    Unresolved(&'a str),
}

impl Resolution<'_> {
    pub fn is_unresolved(&self) -> bool {
        matches!(self, Self::Unresolved(_))
    }
}

/// Classification of a fingerprint entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FingerprintResolution<'a> {
    /// `@field` where `field` is an intrinsic event field.
    Intrinsic(&'a str),
    /// `@field` defined in the field table.
    FieldDefinition(&'a str),
    /// Literal naming an existing property key.
    Property(&'a str),
    /// `@field` where `field` is not an intrinsic event field.
    UnknownIntrinsic(&'a str),
    /// `@field` with no definition in the field table.
    UndefinedPlaceholder(&'a str),
    /// Literal that is not a property key.
    UnknownProperty(&'a str),
}

/// Where fingerprint placeholders are looked up.
#[derive(Debug, Clone, Copy)]
pub enum FingerprintTargets<'a> {
    /// Placeholder remainder must be one of these intrinsic field names.
    Intrinsic(&'a [&'a str]),
    /// Full placeholder token must be defined in the field table.
    FieldTable(&'a FieldDefinitionTable),
}

/// Returns true if `value` starts with the placeholder sentinel.
pub fn is_placeholder(value: &str) -> bool {
    value.starts_with(PLACEHOLDER_TOKEN)
}

/// Strip the sentinel from a placeholder, or `None` for a literal.
pub(crate) fn placeholder_name(value: &str) -> Option<&str> {
    value.strip_prefix(PLACEHOLDER_TOKEN)
}

/// Resolve a value by the generic rule: a placeholder must be present,
/// sentinel included, in `table`.
pub fn resolve<'a>(value: &'a str, table: &FieldDefinitionTable) -> Resolution<'a> {
    if !is_placeholder(value) {
        Resolution::Literal(value)
    } else if table.contains(value) {
        Resolution::Resolved(value)
    } else {
        Resolution::Unresolved(value)
    }
}

/// Resolve a fingerprint entry.
///
/// Placeholders are checked against `targets`; literals must be keys of
/// `properties`. Intrinsic outcomes carry the name without the sentinel.
pub fn resolve_fingerprint<'a>(
    value: &'a str,
    properties: &BTreeMap<String, String>,
    targets: FingerprintTargets<'_>,
) -> FingerprintResolution<'a> {
    match (placeholder_name(value), targets) {
        (Some(name), FingerprintTargets::Intrinsic(allowed)) => {
            if allowed.contains(&name) {
                FingerprintResolution::Intrinsic(name)
            } else {
                FingerprintResolution::UnknownIntrinsic(name)
            }
        }
        (Some(_), FingerprintTargets::FieldTable(table)) => {
            if table.contains(value) {
                FingerprintResolution::FieldDefinition(value)
            } else {
                FingerprintResolution::UndefinedPlaceholder(value)
            }
        }
        (None, _) => {
            if properties.contains_key(value) {
                FingerprintResolution::Property(value)
            } else {
                FingerprintResolution::UnknownProperty(value)
            }
        }
    }
}
