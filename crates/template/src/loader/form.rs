//! Supported AR server forms and their bundled default templates.

use std::fmt;
use std::str::FromStr;

use super::error::ParsingError;

const INCIDENT_DEFAULT_TEMPLATE: &str =
    include_str!("../../templates/incidentDefaultTemplate.json");
const CHANGE_DEFAULT_TEMPLATE: &str = include_str!("../../templates/changeDefaultTemplate.json");

/// AR server form records are read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArServerForm {
    #[default]
    Incident,
    Change,
}

impl ArServerForm {
    pub const ALL: [ArServerForm; 2] = [ArServerForm::Incident, ArServerForm::Change];

    /// File name of the bundled default template.
    pub fn template_file_name(&self) -> &'static str {
        match self {
            Self::Incident => "incidentDefaultTemplate.json",
            Self::Change => "changeDefaultTemplate.json",
        }
    }

    /// Contents of the bundled default template.
    pub fn default_template(&self) -> &'static str {
        match self {
            Self::Incident => INCIDENT_DEFAULT_TEMPLATE,
            Self::Change => CHANGE_DEFAULT_TEMPLATE,
        }
    }
}

impl fmt::Display for ArServerForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incident => f.write_str("incident"),
            Self::Change => f.write_str("change"),
        }
    }
}

impl FromStr for ArServerForm {
    type Err = ParsingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "incident" => Ok(Self::Incident),
            "change" => Ok(Self::Change),
            _ => Err(ParsingError::UnknownForm(s.to_string())),
        }
    }
}
