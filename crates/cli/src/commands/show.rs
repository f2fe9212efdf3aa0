//! Print a loaded template.
//!
//! The output is the template document plus an `effective` block with the
//! tuning values that apply after defaults are filled in.

use anyhow::{Context, Result};
use serde::Serialize;

use remedy_template::Template;

/// Values the integration runs with once unset options take their defaults.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveSettings {
    pub retry_chunk_size: u32,
    pub thread_count: u32,
    pub field_definitions: usize,
    pub properties: usize,
}

impl EffectiveSettings {
    pub fn from_template(template: &Template) -> Self {
        Self {
            retry_chunk_size: template.config.effective_retry_chunk_size(),
            thread_count: template.config.effective_thread_count(),
            field_definitions: template.field_definition_map.len(),
            properties: template.event_definition.properties.len(),
        }
    }
}

#[derive(Serialize)]
struct ShowOutput<'a> {
    #[serde(flatten)]
    template: &'a Template,
    effective: EffectiveSettings,
}

/// Print `template` as pretty JSON. Credentials serialize redacted.
pub fn run(template: &Template) -> Result<()> {
    let output = ShowOutput {
        template,
        effective: EffectiveSettings::from_template(template),
    };
    let json = serde_json::to_string_pretty(&output).context("Failed to serialize template")?;
    println!("{json}");
    Ok(())
}
