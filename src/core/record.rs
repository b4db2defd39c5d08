//! Log record structure

use super::meta::MetaValue;
use super::severity::Severity;
use chrono::{DateTime, Local};

/// Ephemeral value produced per log call; exists only while the call's
/// sinks serialize it. Structured `meta` is only populated on the error
/// channel, every other severity pre-renders metadata into `message`.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub severity: Severity,
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub meta: Vec<MetaValue>,
}

impl LogRecord {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// so every record stays a single line in file and console output.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(severity: Severity, message: impl AsRef<str>) -> Self {
        Self {
            severity,
            message: Self::sanitize_message(message.as_ref()),
            timestamp: Local::now(),
            meta: Vec::new(),
        }
    }

    pub fn with_meta(mut self, meta: Vec<MetaValue>) -> Self {
        self.meta = meta;
        self
    }
}
