//! Severity level definitions and the level gate

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered severity tier of a log call.
///
/// Lower numeric value means higher priority: a configured minimum of
/// `Debug` (3) permits everything, a configured minimum of `Error` (0)
/// permits only error calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum Severity {
    Error = 0,
    Warn = 1,
    #[default]
    Info = 2,
    Debug = 3,
}

impl Severity {
    /// All severities in priority order (highest priority first).
    pub const ALL: [Severity; 4] = [
        Severity::Error,
        Severity::Warn,
        Severity::Info,
        Severity::Debug,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warn => "WARN",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
        }
    }

    /// Lowercase tag used in rotated file names (`error-2025-01-08.log`).
    pub fn file_tag(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warn => "warn",
            Severity::Info => "info",
            Severity::Debug => "debug",
        }
    }

    /// The level gate: does a logger configured at minimum `self` process
    /// a call at `candidate`?
    ///
    /// True iff `self as u8 >= candidate as u8`. Evaluated independently
    /// on every call path before any formatting or I/O happens.
    #[inline]
    pub fn permits(&self, candidate: Severity) -> bool {
        *self as u8 >= candidate as u8
    }

    /// Resolve the configured minimum from an optional override string.
    ///
    /// Exactly `"ERROR"`, `"WARN"`, `"INFO"` or `"DEBUG"` (case-sensitive)
    /// is accepted; any other value, or absence, resolves to `Info`.
    pub fn resolve_override(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }

    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Severity::Error => Red,
            Severity::Warn => Yellow,
            Severity::Info => Green,
            Severity::Debug => Blue,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ERROR" => Ok(Severity::Error),
            "WARN" => Ok(Severity::Warn),
            "INFO" => Ok(Severity::Info),
            "DEBUG" => Ok(Severity::Debug),
            _ => Err(format!("Unrecognized log level: '{}'", s)),
        }
    }
}
