//! Sink construction policy

use crate::core::{options::LogOptions, severity::Severity};
use crate::sinks::{ConsoleSink, RotatingFileSink, Sink};

/// Build the ordered sink set for one severity level.
///
/// Policy:
/// 1. A rotating file sink is included iff file output is enabled and a
///    log directory is configured.
/// 2. A console sink is included iff console output is enabled, or no
///    file sink was built. Every level always gets at least one sink, so
///    a log call is never silently dropped by missing configuration.
/// 3. File sink first, console sink second. Order only affects time of
///    write; the sinks are independent.
///
/// The log directory itself is created by the logger constructor before
/// any sink set is built.
pub fn build_sinks(severity: Severity, options: &LogOptions) -> Vec<Box<dyn Sink>> {
    let mut sinks: Vec<Box<dyn Sink>> = Vec::new();

    let file_enabled = options.file_sink_enabled();
    if file_enabled {
        if let Some(dir) = options.log_directory.as_ref() {
            sinks.push(Box::new(RotatingFileSink::new(dir, severity)));
        }
    }

    if options.log_to_console || !file_enabled {
        sinks.push(Box::new(ConsoleSink::new(severity)));
    }

    sinks
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_fallback_console_when_nothing_configured() {
        let options = LogOptions::new();
        for severity in Severity::ALL {
            let sinks = build_sinks(severity, &options);
            assert_eq!(sinks.len(), 1);
            assert_eq!(sinks[0].name(), "console");
        }
    }

    #[test]
    fn test_file_only() {
        let dir = tempdir().unwrap();
        let options = LogOptions::new().with_directory(dir.path()).with_file(true);

        let sinks = build_sinks(Severity::Error, &options);
        assert_eq!(sinks.len(), 1);
        assert_eq!(sinks[0].name(), "file:error");
    }

    #[test]
    fn test_file_and_console_order() {
        let dir = tempdir().unwrap();
        let options = LogOptions::new()
            .with_directory(dir.path())
            .with_file(true)
            .with_console(true);

        let sinks = build_sinks(Severity::Warn, &options);
        assert_eq!(sinks.len(), 2);
        assert_eq!(sinks[0].name(), "file:warn");
        assert_eq!(sinks[1].name(), "console");
    }

    #[test]
    fn test_file_flag_without_directory_falls_back_to_console() {
        let options = LogOptions::new().with_file(true);
        let sinks = build_sinks(Severity::Info, &options);
        assert_eq!(sinks.len(), 1);
        assert_eq!(sinks[0].name(), "console");
    }

    #[test]
    fn test_console_only() {
        let options = LogOptions::new().with_console(true);
        let sinks = build_sinks(Severity::Debug, &options);
        assert_eq!(sinks.len(), 1);
        assert_eq!(sinks[0].name(), "console");
    }
}
