//! Console sink implementation

use crate::core::render;
use crate::core::{error::Result, record::LogRecord, severity::Severity};
use crate::sinks::Sink;
use colored::Colorize;
use std::io::Write;

/// Writes one JSON line per record to the standard streams, colorized by
/// severity. Error records go to stderr, everything else to stdout.
pub struct ConsoleSink {
    severity: Severity,
    use_colors: bool,
}

impl ConsoleSink {
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            use_colors: true,
        }
    }

    pub fn with_colors(severity: Severity, use_colors: bool) -> Self {
        Self {
            severity,
            use_colors,
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }
}

impl Sink for ConsoleSink {
    fn write(&self, record: &LogRecord) -> Result<()> {
        let line = render::json_line(record);
        let output = if self.use_colors {
            line.color(record.severity.color_code()).to_string()
        } else {
            line
        };

        // The locked handles serialize concurrent writes per stream
        match record.severity {
            Severity::Error => writeln!(std::io::stderr().lock(), "{}", output)?,
            _ => writeln!(std::io::stdout().lock(), "{}", output)?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        match self.severity {
            Severity::Error => std::io::stderr().flush()?,
            _ => std::io::stdout().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
