//! Logger output configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output configuration, read once at logger construction and immutable
/// for the logger's lifetime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogOptions {
    /// Directory for rotated log files. Created recursively at logger
    /// construction when missing.
    pub log_directory: Option<PathBuf>,
    pub log_to_file: bool,
    pub log_to_console: bool,
}

impl LogOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_directory = Some(dir.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_file(mut self, enabled: bool) -> Self {
        self.log_to_file = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_console(mut self, enabled: bool) -> Self {
        self.log_to_console = enabled;
        self
    }

    /// A file sink is only built when file output is requested and a
    /// directory is actually configured.
    #[must_use]
    pub fn file_sink_enabled(&self) -> bool {
        self.log_to_file && self.log_directory.is_some()
    }
}
