//! Field definitions backing placeholder tokens.
//!
//! Responsibilities:
//! - Describe where a placeholder's runtime value comes from (`FieldItem`).
//! - Provide the membership lookup used by placeholder resolution.
//!
//! Invariants:
//! - Keys are the full placeholder token as written in the template,
//!   including the leading `@`.
//! - The table is read-only while a template is being validated.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Source mapping for one placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldItem {
    /// AR System field id the value is read from.
    #[serde(default)]
    pub field_id: Option<u32>,
    /// Translation of raw field values into event values (e.g. enum ids to labels).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub value_map: BTreeMap<String, String>,
}

impl FieldItem {
    pub fn new(field_id: u32) -> Self {
        Self {
            field_id: Some(field_id),
            value_map: BTreeMap::new(),
        }
    }
}

/// Mapping from placeholder token to its [`FieldItem`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldDefinitionTable(HashMap<String, FieldItem>);

impl FieldDefinitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the definition of a placeholder token.
    pub fn lookup(&self, token: &str) -> Option<&FieldItem> {
        self.0.get(token)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains_key(token)
    }

    pub fn insert(&mut self, token: impl Into<String>, item: FieldItem) -> Option<FieldItem> {
        self.0.insert(token.into(), item)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, FieldItem)> for FieldDefinitionTable {
    fn from_iter<I: IntoIterator<Item = (K, FieldItem)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
