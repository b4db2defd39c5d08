//! Leveled logger implementation
//!
//! One independent sink set per severity, fixed at construction. Every
//! public operation re-checks the level gate before doing any formatting
//! or I/O, then fans the record out to its own severity's sinks.

use super::{
    error::{LoggerError, Result},
    meta::MetaValue,
    options::LogOptions,
    record::LogRecord,
    render,
    severity::Severity,
};
use crate::sinks::{build_sinks, Sink};
use std::fs;

/// Environment variable consulted by [`LeveledLogger::from_env`].
pub const LEVEL_ENV_VAR: &str = "LOG_LEVEL";

/// The fixed ordered group of sinks serving one severity.
pub struct SinkSet {
    sinks: Vec<Box<dyn Sink>>,
}

impl SinkSet {
    fn new(sinks: Vec<Box<dyn Sink>>) -> Self {
        Self { sinks }
    }

    /// Fan a record out to every sink. A failing sink is reported to
    /// stderr and skipped; it never prevents the other sinks from
    /// writing, and never reaches the logging caller.
    fn write(&self, record: &LogRecord) {
        for sink in &self.sinks {
            if let Err(e) = sink.write(record) {
                eprintln!("[LOGGER ERROR] Sink '{}' failed: {}", sink.name(), e);
            }
        }
    }

    fn flush(&self) {
        for sink in &self.sinks {
            if let Err(e) = sink.flush() {
                eprintln!("[LOGGER ERROR] Sink '{}' flush failed: {}", sink.name(), e);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

/// Leveled logging facade.
///
/// Configuration (options, minimum level, sink sets) is resolved once at
/// construction and immutable afterwards; the logger is freely shared
/// across threads by reference. Log calls are fire-and-forget: they never
/// return an error and never signal completion.
///
/// # Example
///
/// ```no_run
/// use leveled_logger::{LeveledLogger, LogOptions};
///
/// let options = LogOptions::new()
///     .with_directory("/var/log/app")
///     .with_file(true)
///     .with_console(true);
/// let logger = LeveledLogger::new(options, Some("DEBUG")).unwrap();
///
/// logger.info("server started", &[]);
/// logger.debug("listening", &[8080.into()]);
/// ```
pub struct LeveledLogger {
    min_level: Severity,
    error_sinks: SinkSet,
    warn_sinks: SinkSet,
    info_sinks: SinkSet,
    debug_sinks: SinkSet,
}

impl LeveledLogger {
    /// Construct a logger from options and an optional minimum-level
    /// override string.
    ///
    /// The override accepts exactly `"ERROR" | "WARN" | "INFO" | "DEBUG"`;
    /// anything else, or `None`, resolves to `INFO`.
    ///
    /// # Errors
    ///
    /// Fails only when the configured log directory is missing and cannot
    /// be created. Every other failure mode is deferred to the sinks and
    /// handled there.
    pub fn new(options: LogOptions, level_override: Option<&str>) -> Result<Self> {
        let min_level = Severity::resolve_override(level_override);

        if let Some(dir) = options.log_directory.as_ref() {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(|e| {
                    LoggerError::directory_creation(dir.display().to_string(), e)
                })?;
            }
        }

        Ok(Self {
            min_level,
            error_sinks: SinkSet::new(build_sinks(Severity::Error, &options)),
            warn_sinks: SinkSet::new(build_sinks(Severity::Warn, &options)),
            info_sinks: SinkSet::new(build_sinks(Severity::Info, &options)),
            debug_sinks: SinkSet::new(build_sinks(Severity::Debug, &options)),
        })
    }

    /// Construct a logger reading the minimum-level override from the
    /// `LOG_LEVEL` environment variable, once, at construction.
    pub fn from_env(options: LogOptions) -> Result<Self> {
        let level = std::env::var(LEVEL_ENV_VAR).ok();
        Self::new(options, level.as_deref())
    }

    /// The configured minimum severity, fixed for this logger's lifetime.
    #[must_use]
    pub fn min_level(&self) -> Severity {
        self.min_level
    }

    /// Log at INFO. Metadata is pre-rendered into the message text.
    pub fn info(&self, message: impl AsRef<str>, meta: &[MetaValue]) {
        if !self.min_level.permits(Severity::Info) {
            return;
        }
        let rendered = render::render_message(message.as_ref(), meta);
        self.info_sinks.write(&LogRecord::new(Severity::Info, rendered));
    }

    /// Log at WARN. Metadata is pre-rendered into the message text.
    pub fn warn(&self, message: impl AsRef<str>, meta: &[MetaValue]) {
        if !self.min_level.permits(Severity::Warn) {
            return;
        }
        let rendered = render::render_message(message.as_ref(), meta);
        self.warn_sinks.write(&LogRecord::new(Severity::Warn, rendered));
    }

    /// Log at DEBUG. Metadata is pre-rendered into the message text.
    pub fn debug(&self, message: impl AsRef<str>, meta: &[MetaValue]) {
        if !self.min_level.permits(Severity::Debug) {
            return;
        }
        let rendered = render::render_message(message.as_ref(), meta);
        self.debug_sinks.write(&LogRecord::new(Severity::Debug, rendered));
    }

    /// Log at ERROR.
    ///
    /// Unlike the other levels, metadata is passed through to the sinks
    /// structurally instead of being folded into the message text, so the
    /// error channel keeps `{message, stack}` objects intact in its JSON
    /// output.
    pub fn error(&self, message: impl AsRef<str>, meta: &[MetaValue]) {
        if !self.min_level.permits(Severity::Error) {
            return;
        }
        let record =
            LogRecord::new(Severity::Error, message.as_ref()).with_meta(meta.to_vec());
        self.error_sinks.write(&record);
    }

    /// Best-effort flush of every sink across all four levels.
    pub fn flush(&self) {
        self.error_sinks.flush();
        self.warn_sinks.flush();
        self.info_sinks.flush();
        self.debug_sinks.flush();
    }

    /// The sink set serving one severity.
    #[must_use]
    pub fn sink_set(&self, severity: Severity) -> &SinkSet {
        match severity {
            Severity::Error => &self.error_sinks,
            Severity::Warn => &self.warn_sinks,
            Severity::Info => &self.info_sinks,
            Severity::Debug => &self.debug_sinks,
        }
    }
}

impl Drop for LeveledLogger {
    fn drop(&mut self) {
        self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    struct CapturingSink {
        records: Arc<Mutex<Vec<LogRecord>>>,
    }

    impl Sink for CapturingSink {
        fn write(&self, record: &LogRecord) -> Result<()> {
            self.records.lock().push(record.clone());
            Ok(())
        }

        fn flush(&self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "capturing"
        }
    }

    struct FailingSink;

    impl Sink for FailingSink {
        fn write(&self, _record: &LogRecord) -> Result<()> {
            Err(LoggerError::writer("intentional failure"))
        }

        fn flush(&self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    fn capturing_logger(min_level: Severity) -> (LeveledLogger, [Arc<Mutex<Vec<LogRecord>>>; 4]) {
        let buffers: [Arc<Mutex<Vec<LogRecord>>>; 4] = Default::default();
        let set = |i: usize| {
            SinkSet::new(vec![Box::new(CapturingSink {
                records: Arc::clone(&buffers[i]),
            }) as Box<dyn Sink>])
        };
        let logger = LeveledLogger {
            min_level,
            error_sinks: set(0),
            warn_sinks: set(1),
            info_sinks: set(2),
            debug_sinks: set(3),
        };
        (logger, buffers)
    }

    #[test]
    fn test_gating_suppresses_below_minimum() {
        let (logger, buffers) = capturing_logger(Severity::Warn);

        logger.error("e", &[]);
        logger.warn("w", &[]);
        logger.info("i", &[]);
        logger.debug("d", &[]);

        assert_eq!(buffers[0].lock().len(), 1);
        assert_eq!(buffers[1].lock().len(), 1);
        assert_eq!(buffers[2].lock().len(), 0);
        assert_eq!(buffers[3].lock().len(), 0);
    }

    #[test]
    fn test_debug_minimum_permits_everything() {
        let (logger, buffers) = capturing_logger(Severity::Debug);

        logger.error("e", &[]);
        logger.warn("w", &[]);
        logger.info("i", &[]);
        logger.debug("d", &[]);

        for buffer in &buffers {
            assert_eq!(buffer.lock().len(), 1);
        }
    }

    #[test]
    fn test_info_prerenders_meta_into_message() {
        let (logger, buffers) = capturing_logger(Severity::Debug);

        logger.info("x", &[MetaValue::Map(vec![("a".to_string(), 1.into())])]);

        let records = buffers[2].lock();
        assert_eq!(records[0].message, "x meta: [{ a: 1 }]");
        assert!(records[0].meta.is_empty());
    }

    #[test]
    fn test_error_passes_meta_through_structurally() {
        let (logger, buffers) = capturing_logger(Severity::Debug);

        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        logger.error("failed", &[MetaValue::from_error(&io_err)]);

        let records = buffers[0].lock();
        assert_eq!(records[0].message, "failed");
        assert_eq!(records[0].meta.len(), 1);
        assert!(matches!(records[0].meta[0], MetaValue::Error { .. }));
    }

    #[test]
    fn test_no_meta_leaves_message_unchanged() {
        let (logger, buffers) = capturing_logger(Severity::Info);
        logger.info("x", &[]);
        assert_eq!(buffers[2].lock()[0].message, "x");
    }

    #[test]
    fn test_failing_sink_does_not_block_others() {
        let records = Arc::new(Mutex::new(Vec::new()));
        let logger = LeveledLogger {
            min_level: Severity::Info,
            error_sinks: SinkSet::new(vec![]),
            warn_sinks: SinkSet::new(vec![]),
            info_sinks: SinkSet::new(vec![
                Box::new(FailingSink),
                Box::new(CapturingSink {
                    records: Arc::clone(&records),
                }),
            ]),
            debug_sinks: SinkSet::new(vec![]),
        };

        logger.info("still delivered", &[]);
        assert_eq!(records.lock().len(), 1);
    }

    #[test]
    fn test_directory_auto_creation() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join("logs");
        let options = LogOptions::new().with_directory(&nested).with_file(true);

        let logger = LeveledLogger::new(options, None).unwrap();
        assert!(nested.is_dir());
        drop(logger);
    }

    #[test]
    fn test_unrecognized_override_defaults_to_info() {
        let logger =
            LeveledLogger::new(LogOptions::new().with_console(true), Some("TRACE")).unwrap();
        assert_eq!(logger.min_level(), Severity::Info);
    }

    #[test]
    fn test_every_level_has_a_sink_without_configuration() {
        let logger = LeveledLogger::new(LogOptions::new(), None).unwrap();
        for severity in Severity::ALL {
            assert!(!logger.sink_set(severity).is_empty());
        }
    }
}
