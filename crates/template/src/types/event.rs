//! Shape of the outbound event.
//!
//! Every textual attribute is either a literal or a placeholder (`@name`)
//! resolved against the template's field definition table at run time.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::serde_helpers::lenient_string;

/// Originator of an event (the `source` and `sender` blocks).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSource {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default, rename = "ref")]
    pub reference: Option<String>,
}

impl EventSource {
    /// Name, type and ref in that order, labelled for diagnostics.
    pub fn attributes(&self) -> [(&'static str, Option<&str>); 3] {
        [
            ("name", self.name.as_deref()),
            ("type", self.kind.as_deref()),
            ("ref", self.reference.as_deref()),
        ]
    }
}

/// The `eventDefinition` block of a template.
///
/// Properties are kept in a `BTreeMap` so that iteration (and therefore the
/// first reported error) is the same on every run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDefinition {
    #[serde(default)]
    pub title: Option<String>,
    /// Attributes identifying duplicate events; `@field` names an intrinsic
    /// event field, anything else a key of `properties`.
    #[serde(default, deserialize_with = "lenient_string::list::deserialize")]
    pub fingerprint_fields: Vec<String>,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub event_class: Option<String>,
    #[serde(default)]
    pub source: EventSource,
    #[serde(default)]
    pub sender: EventSource,
    #[serde(default, deserialize_with = "lenient_string::map::deserialize")]
    pub properties: BTreeMap<String, String>,
}
