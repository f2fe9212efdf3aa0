//! Default integration templates for Remedy to TrueSight event forwarding.
//!
//! This crate provides the template data model, a loader that builds a
//! [`Template`] from the bundled default JSON files (with environment and
//! builder overrides), and the validator that decides whether a loaded
//! template is consistent enough to drive an integration run.

pub mod constants;
pub mod loader;
pub mod placeholder;
pub mod types;
pub mod validation;

pub use loader::{ArServerForm, ParsingError, TemplateLoader, env_var_or_none, parse_template};
pub use placeholder::{FingerprintResolution, Resolution, is_placeholder};
pub use types::{
    Configuration, EventDefinition, EventSource, FieldDefinitionTable, FieldItem, Template,
};
pub use validation::{
    DateRangeViolation, FingerprintMode, ValidationError, ValidationProfile, Validator, validate,
};
