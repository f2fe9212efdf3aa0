//! Selectable validation profiles.
//!
//! Two validator variants exist in deployed integrations. They differ on
//! whether the AR password is required, how fingerprint placeholders are
//! resolved, and whether a future-dated query window is rejected. Each of
//! those is a switch here; `standard()` is the default.

use std::fmt;
use std::str::FromStr;

/// How `@field` fingerprint entries are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FingerprintMode {
    /// The name after `@` must be an intrinsic event field.
    #[default]
    Intrinsic,
    /// The full `@field` token must be defined in the field table.
    FieldTable,
}

/// Switches selecting which variant of the rules applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationProfile {
    pub require_password: bool,
    pub fingerprint_mode: FingerprintMode,
    pub reject_future_end: bool,
}

impl ValidationProfile {
    /// Password optional, intrinsic fingerprints, future-dated end rejected.
    pub const fn standard() -> Self {
        Self {
            require_password: false,
            fingerprint_mode: FingerprintMode::Intrinsic,
            reject_future_end: true,
        }
    }

    /// `standard()` with the AR password required.
    pub const fn strict() -> Self {
        Self {
            require_password: true,
            ..Self::standard()
        }
    }

    /// Password optional, fingerprint placeholders looked up in the field
    /// table, no check against the current time.
    pub const fn lenient() -> Self {
        Self {
            require_password: false,
            fingerprint_mode: FingerprintMode::FieldTable,
            reject_future_end: false,
        }
    }

    /// Name of the matching preset, if any.
    pub fn name(&self) -> Option<&'static str> {
        if *self == Self::standard() {
            Some("standard")
        } else if *self == Self::strict() {
            Some("strict")
        } else if *self == Self::lenient() {
            Some("lenient")
        } else {
            None
        }
    }
}

impl Default for ValidationProfile {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for ValidationProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(
                f,
                "custom(require_password={}, fingerprint_mode={:?}, reject_future_end={})",
                self.require_password, self.fingerprint_mode, self.reject_future_end
            ),
        }
    }
}

impl FromStr for ValidationProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::standard()),
            "strict" => Ok(Self::strict()),
            "lenient" => Ok(Self::lenient()),
            other => Err(format!(
                "unknown validation profile '{other}' (expected standard, strict or lenient)"
            )),
        }
    }
}
