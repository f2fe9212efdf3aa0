//! Centralized constants for template loading and validation.
//!
//! This module contains the placeholder sentinel, validation limits and
//! configuration defaults shared by the loader and the validator.

// =============================================================================
// Placeholders
// =============================================================================

/// Sentinel prefix marking a value as a placeholder reference.
pub const PLACEHOLDER_TOKEN: &str = "@";

/// Built-in event attributes a fingerprint placeholder may name.
///
/// `severity` is not part of an event's identity and is intentionally absent.
pub const FINGERPRINT_EVENT_FIELDS: &[&str] = &[
    "title",
    "status",
    "class",
    "created_at",
    "source.name",
    "source.type",
    "source.ref",
    "sender.name",
    "sender.type",
    "sender.ref",
];

// =============================================================================
// Event Definition Limits
// =============================================================================

/// Maximum number of properties the event endpoint accepts per event.
pub const MAX_PROPERTY_FIELD_SUPPORTED: usize = 128;

/// Name of the property holding the application identifier.
pub const APP_ID_PROPERTY: &str = "app_id";

/// Characters that may not appear in an `app_id` value.
pub const APP_ID_DISALLOWED_CHARS: &str = "~!@#$%^&*()+={}[]|\\:;\"'<>,.?/";

// =============================================================================
// Configuration Defaults
// =============================================================================

/// Default number of records fetched from the AR server per request.
pub const DEFAULT_CHUNK_SIZE: i64 = 100;

/// Default number of events re-sent per request when retrying a failed chunk.
pub const DEFAULT_RETRY_CHUNK_SIZE: u32 = 25;

/// Default number of worker threads used to forward events.
pub const DEFAULT_THREAD_COUNT: u32 = 4;

/// Default number of retries for a failed dispatch.
pub const DEFAULT_RETRY_CONFIG: i64 = 3;

/// Default wait between retries in milliseconds.
pub const DEFAULT_WAIT_MS_BEFORE_RETRY: i64 = 5000;

// =============================================================================
// Template Files
// =============================================================================

/// Top-level JSON section holding the configuration block.
pub const CONFIG_NODE_NAME: &str = "config";

/// Top-level JSON section holding the event definition.
pub const EVENTDEF_NODE_NAME: &str = "eventDefinition";

/// Top-level JSON section holding the field definition table.
pub const FIELDDEFINITIONMAP_NODE_NAME: &str = "fieldDefinitionMap";
