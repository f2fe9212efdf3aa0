use serde::{Deserialize, Serialize};

use super::{Configuration, EventDefinition, FieldDefinitionTable};

/// A loaded integration template.
///
/// Built by the loader and handed to the validator, which either accepts it
/// whole or rejects it; nothing in between is exposed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub config: Configuration,
    pub event_definition: EventDefinition,
    pub field_definition_map: FieldDefinitionTable,
}

impl Template {
    pub fn new(
        config: Configuration,
        event_definition: EventDefinition,
        field_definition_map: FieldDefinitionTable,
    ) -> Self {
        Self {
            config,
            event_definition,
            field_definition_map,
        }
    }
}
