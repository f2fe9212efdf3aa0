//! Tests for the template loader builder.
//!
//! Responsibilities:
//! - Test loading bundled defaults and template files.
//! - Test environment variable handling and precedence.
//! - Test dotenv gating.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::path::{Path, PathBuf};
use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Write a small template file into `dir` and return its path.
pub fn create_test_template_file(dir: &Path) -> PathBuf {
    let path = dir.join("template.json");
    std::fs::write(
        &path,
        r#"{
            "config": {
                "remedyHostName": "file-host.example.com",
                "remedyUserName": "file-user",
                "tsiEventEndpoint": "https://tsi.example.com/events",
                "tsiApiToken": "file-token",
                "conditionFields": [3],
                "chunkSize": 50,
                "startDateTime": "2023-01-01T00:00",
                "endDateTime": "2023-01-02T00:00"
            },
            "eventDefinition": {
                "title": "@TITLE",
                "fingerprintFields": ["@title"],
                "properties": {"app_id": "FileApp"}
            },
            "fieldDefinitionMap": {"@TITLE": {"fieldId": 1000000000}}
        }"#,
    )
    .unwrap();
    path
}
