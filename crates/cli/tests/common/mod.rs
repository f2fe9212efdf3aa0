//! Shared test utilities for remedy-template integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Provide template fixtures written to temporary files.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - No `REMEDY_*` or `TSI_*` variable from the host reaches the binary.

use assert_cmd::Command;
use std::path::{Path, PathBuf};

const ENV_VARS: &[&str] = &[
    "REMEDY_HOST_NAME",
    "REMEDY_PORT",
    "REMEDY_USER_NAME",
    "REMEDY_PASSWORD",
    "TSI_EVENT_ENDPOINT",
    "TSI_API_TOKEN",
    "REMEDY_CHUNK_SIZE",
    "REMEDY_RETRY_CONFIG",
    "REMEDY_WAIT_MS_BEFORE_RETRY",
    "REMEDY_START_DATE_TIME",
    "REMEDY_END_DATE_TIME",
    "REMEDY_TEMPLATE_PATH",
];

/// Returns a hermetic `remedy-template` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Template-related env vars are cleared to ensure no leakage from the host.
pub fn remedy_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("remedy-template");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    for var in ENV_VARS {
        cmd.env_remove(var);
    }

    cmd
}

/// A fully configured template whose query window lies in the past.
pub const VALID_TEMPLATE: &str = r#"{
    "config": {
        "remedyHostName": "ar.example.com",
        "remedyUserName": "svc",
        "remedyPassword": "file-password",
        "tsiEventEndpoint": "https://tsi.example.com/events",
        "tsiApiToken": "file-token",
        "conditionFields": [3, 6],
        "chunkSize": 100,
        "retryConfig": 3,
        "waitMsBeforeRetry": 5000,
        "startDateTime": "2023-01-01T00:00:00",
        "endDateTime": "2023-01-02T00:00:00"
    },
    "eventDefinition": {
        "title": "@SUMMARY",
        "fingerprintFields": ["IncidentNumber", "@title"],
        "status": "OPEN",
        "source": {"name": "Remedy", "type": "ITSM", "ref": "@HOSTNAME"},
        "properties": {
            "app_id": "Remedy",
            "IncidentNumber": "@INCIDENT_NUMBER"
        }
    },
    "fieldDefinitionMap": {
        "@SUMMARY": {"fieldId": 1000000000},
        "@HOSTNAME": {"fieldId": 1000000001},
        "@INCIDENT_NUMBER": {"fieldId": 1000000161}
    }
}"#;

/// Write `contents` to `template.json` under `dir` and return its path.
pub fn write_template(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("template.json");
    std::fs::write(&path, contents).expect("Failed to write template");
    path
}
