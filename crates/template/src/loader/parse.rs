//! Mapping of a template document onto the typed records.
//!
//! Invariants:
//! - `config`, `eventDefinition` and `fieldDefinitionMap` must all be present
//!   and non-null; a template missing any of them is never built.

use serde::Deserialize;
use serde_json::Value;

use super::error::ParsingError;
use crate::constants::{CONFIG_NODE_NAME, EVENTDEF_NODE_NAME, FIELDDEFINITIONMAP_NODE_NAME};
use crate::types::{Configuration, EventDefinition, FieldDefinitionTable, Template};

/// Parse a template document.
pub fn parse_template(json: &str) -> Result<Template, ParsingError> {
    let root: Value =
        serde_json::from_str(json).map_err(|e| ParsingError::InvalidJson(e.to_string()))?;

    let config: Configuration = section(&root, CONFIG_NODE_NAME)?;
    let event_definition: EventDefinition = section(&root, EVENTDEF_NODE_NAME)?;
    let field_definition_map: FieldDefinitionTable =
        section(&root, FIELDDEFINITIONMAP_NODE_NAME)?;

    Ok(Template::new(config, event_definition, field_definition_map))
}

fn section<'a, T>(root: &'a Value, name: &'static str) -> Result<T, ParsingError>
where
    T: Deserialize<'a>,
{
    let node = root
        .get(name)
        .filter(|v| !v.is_null())
        .ok_or(ParsingError::MissingSection(name))?;
    T::deserialize(node).map_err(|e| ParsingError::InvalidSection {
        section: name,
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "config": {"remedyHostName": "ar.example.com"},
        "eventDefinition": {"title": "@TITLE"},
        "fieldDefinitionMap": {"@TITLE": {"fieldId": 1000000000}}
    }"#;

    #[test]
    fn test_parse_minimal_template() {
        let template = parse_template(MINIMAL).unwrap();
        assert_eq!(template.config.remedy_host_name, "ar.example.com");
        assert_eq!(template.event_definition.title.as_deref(), Some("@TITLE"));
        assert!(template.field_definition_map.contains("@TITLE"));
    }

    #[test]
    fn test_scalar_event_values_are_read_as_text() {
        let json = r#"{
            "config": {},
            "eventDefinition": {
                "fingerprintFields": ["count", null],
                "properties": {"count": 5, "enabled": false}
            },
            "fieldDefinitionMap": {}
        }"#;
        let template = parse_template(json).unwrap();
        let event = &template.event_definition;
        assert_eq!(event.fingerprint_fields, ["count"]);
        assert_eq!(event.properties.get("count").map(String::as_str), Some("5"));
        assert_eq!(event.properties.get("enabled").map(String::as_str), Some("false"));
    }

    #[test]
    fn test_invalid_json() {
        let err = parse_template("{not json").unwrap_err();
        assert!(matches!(err, ParsingError::InvalidJson(_)));
    }

    #[test]
    fn test_missing_sections() {
        for (name, json) in [
            ("config", r#"{"eventDefinition": {}, "fieldDefinitionMap": {}}"#),
            ("eventDefinition", r#"{"config": {}, "fieldDefinitionMap": {}}"#),
            ("fieldDefinitionMap", r#"{"config": {}, "eventDefinition": {}}"#),
        ] {
            let err = parse_template(json).unwrap_err();
            match err {
                ParsingError::MissingSection(section) => assert_eq!(section, name),
                other => panic!("Expected MissingSection for {name}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_null_section_is_missing() {
        let json = r#"{"config": {}, "eventDefinition": null, "fieldDefinitionMap": {}}"#;
        let err = parse_template(json).unwrap_err();
        assert!(matches!(err, ParsingError::MissingSection("eventDefinition")));
    }

    #[test]
    fn test_non_object_root_reports_missing_config() {
        let err = parse_template("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, ParsingError::MissingSection("config")));
    }

    #[test]
    fn test_malformed_section() {
        let json = r#"{
            "config": {"conditionFields": "not-a-list"},
            "eventDefinition": {},
            "fieldDefinitionMap": {}
        }"#;
        let err = parse_template(json).unwrap_err();
        assert!(matches!(
            err,
            ParsingError::InvalidSection {
                section: "config",
                ..
            }
        ));
    }
}
