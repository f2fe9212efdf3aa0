//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to tell a rejected
//!   template apart from a template that could not be loaded at all.
//! - Map errors surfaced by commands to the appropriate exit code.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - A `ValidationError` anywhere in the error chain maps to exit code 5.

use remedy_template::ValidationError;

/// Structured exit codes for remedy-template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - the command completed and the template is usable.
    Success = 0,

    /// General error - bad arguments, unreadable or malformed template.
    GeneralError = 1,

    /// Validation error - the template loaded but was rejected.
    ///
    /// Scripts should fix the template and not retry unchanged.
    ValidationError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError unless the error is a rejected template.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        if self
            .chain()
            .any(|cause| cause.downcast_ref::<ValidationError>().is_some())
        {
            ExitCode::ValidationError
        } else {
            ExitCode::GeneralError
        }
    }
}
