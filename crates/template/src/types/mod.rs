//! Template data model.
//!
//! Responsibilities:
//! - Define the configuration, event definition and field definition records
//!   a default template file deserializes into.
//! - Provide serde adapters for the loosely typed values those files contain.
//!
//! Does NOT handle:
//! - Locating or reading template files (see `loader`).
//! - Consistency checks across fields (see `validation`).

mod config;
mod event;
mod field;
mod serde_helpers;
mod template;

pub use config::Configuration;
pub use event::{EventDefinition, EventSource};
pub use field::{FieldDefinitionTable, FieldItem};
pub use serde_helpers::{REDACTED, parse_date_time};
pub use template::Template;
