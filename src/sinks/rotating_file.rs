//! Daily-rotating file sink
//!
//! One file per severity per calendar day, named `{level}-{YYYY-MM-DD}.log`
//! inside the configured directory. When the local date changes, the
//! previous day's file is closed, gzip-compressed, and the oldest rotated
//! files beyond the retention limit are pruned.

use crate::core::render;
use crate::core::{
    error::{LoggerError, Result},
    record::LogRecord,
    severity::Severity,
};
use crate::sinks::Sink;
use chrono::{Local, NaiveDate};
use parking_lot::Mutex;
use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

/// Default number of rotated files kept per severity (24 * 10).
pub const DEFAULT_MAX_RETAINED: usize = 240;

/// Retention configuration for rotated files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetentionPolicy {
    /// Maximum number of rotated files to keep
    pub max_retained: usize,
    /// Whether to gzip rotated files
    pub compress: bool,
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self {
            max_retained: DEFAULT_MAX_RETAINED,
            compress: true,
        }
    }
}

impl RetentionPolicy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_max_retained(mut self, count: usize) -> Self {
        self.max_retained = count;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_compression(mut self, enabled: bool) -> Self {
        self.compress = enabled;
        self
    }
}

struct Inner {
    directory: PathBuf,
    tag: &'static str,
    policy: RetentionPolicy,
    writer: Option<BufWriter<File>>,
    current_date: Option<NaiveDate>,
}

/// Rotating file sink serving a single severity tier.
///
/// The file is opened lazily on the first write, so only the log directory
/// itself has to exist at construction time. All writes go through an
/// internal mutex; concurrent callers never interleave bytes.
pub struct RotatingFileSink {
    name: String,
    inner: Mutex<Inner>,
}

impl RotatingFileSink {
    pub fn new(directory: impl Into<PathBuf>, severity: Severity) -> Self {
        Self::with_policy(directory, severity, RetentionPolicy::default())
    }

    pub fn with_policy(
        directory: impl Into<PathBuf>,
        severity: Severity,
        policy: RetentionPolicy,
    ) -> Self {
        let tag = severity.file_tag();
        Self {
            name: format!("file:{}", tag),
            inner: Mutex::new(Inner {
                directory: directory.into(),
                tag,
                policy,
                writer: None,
                current_date: None,
            }),
        }
    }

    /// Current log file path for the given date.
    #[must_use]
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.inner.lock().path_for(date)
    }

    fn append(&self, today: NaiveDate, record: &LogRecord) -> Result<()> {
        let mut inner = self.inner.lock();
        inner.ensure_writer(today)?;

        let line = render::json_line(record);
        let path = inner.path_for(today);
        if let Some(ref mut writer) = inner.writer {
            writer
                .write_all(line.as_bytes())
                .and_then(|_| writer.write_all(b"\n"))
                .map_err(|e| {
                    LoggerError::file_sink(
                        path.display().to_string(),
                        format!("Failed to write log entry: {}", e),
                    )
                })?;
            Ok(())
        } else {
            Err(LoggerError::writer("Writer not initialized"))
        }
    }
}

impl Inner {
    fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.directory
            .join(format!("{}-{}.log", self.tag, date.format("%Y-%m-%d")))
    }

    /// Open today's file, rolling the previous day's file first when the
    /// date boundary was crossed.
    fn ensure_writer(&mut self, today: NaiveDate) -> Result<()> {
        match self.current_date {
            Some(date) if date == today && self.writer.is_some() => return Ok(()),
            Some(date) if date != today => self.roll(date, today),
            _ => {}
        }

        let path = self.path_for(today);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::file_sink(
                    path.display().to_string(),
                    format!("Failed to open: {}", e),
                )
            })?;

        self.writer = Some(BufWriter::new(file));
        self.current_date = Some(today);
        Ok(())
    }

    /// Close the file for `closed_date`, compress it, and prune retention.
    ///
    /// Rotation failures never propagate; a failed rotation leaves the old
    /// file uncompressed and logging continues into the new day's file.
    fn roll(&mut self, closed_date: NaiveDate, today: NaiveDate) {
        if let Some(mut writer) = self.writer.take() {
            let _ = writer.flush();
        }

        let closed_path = self.path_for(closed_date);
        if self.policy.compress && closed_path.exists() {
            if let Err(e) = self.compress_file(&closed_path) {
                eprintln!(
                    "[WARN] Failed to compress rotated file {}: {}",
                    closed_path.display(),
                    e
                );
            }
        }

        self.prune(today);
    }

    /// Delete the oldest rotated files beyond the retention limit.
    ///
    /// Date-stamped names sort chronologically, so a lexicographic sort
    /// orders files oldest first.
    fn prune(&self, active_date: NaiveDate) {
        let active_name = format!("{}-{}.log", self.tag, active_date.format("%Y-%m-%d"));
        let prefix = format!("{}-", self.tag);

        let entries = match fs::read_dir(&self.directory) {
            Ok(entries) => entries,
            Err(e) => {
                eprintln!(
                    "[WARN] Failed to scan log directory {} for pruning: {}",
                    self.directory.display(),
                    e
                );
                return;
            }
        };

        let mut rotated: Vec<String> = entries
            .filter_map(|e| e.ok())
            .filter_map(|e| e.file_name().into_string().ok())
            .filter(|name| {
                name.starts_with(&prefix)
                    && (name.ends_with(".log") || name.ends_with(".log.gz"))
                    && *name != active_name
            })
            .collect();
        rotated.sort();

        let excess = rotated.len().saturating_sub(self.policy.max_retained);
        for name in rotated.into_iter().take(excess) {
            let path = self.directory.join(&name);
            if let Err(e) = fs::remove_file(&path) {
                eprintln!(
                    "[WARN] Failed to remove expired log file {}: {}",
                    path.display(),
                    e
                );
            }
        }
    }

    /// Compress a closed log file with transactional safety.
    ///
    /// Streams through a temporary `.log.gz.tmp` and only removes the
    /// original after the rename succeeds, so a failed compression never
    /// loses data.
    fn compress_file(&self, path: &Path) -> Result<()> {
        let gz_path = path.with_extension("log.gz");
        let temp_gz_path = path.with_extension("log.gz.tmp");

        let input = File::open(path).map_err(|e| {
            LoggerError::io_operation(
                "compressing rotated file",
                format!("Failed to open file for compression: {}", path.display()),
                e,
            )
        })?;
        let mut reader = BufReader::with_capacity(64 * 1024, input);

        let output = File::create(&temp_gz_path).map_err(|e| {
            LoggerError::io_operation(
                "compressing rotated file",
                format!(
                    "Failed to create temporary compressed file: {}",
                    temp_gz_path.display()
                ),
                e,
            )
        })?;
        let buffered_output = BufWriter::with_capacity(64 * 1024, output);
        let mut encoder =
            flate2::write::GzEncoder::new(buffered_output, flate2::Compression::default());

        let mut buffer = vec![0u8; 64 * 1024];
        loop {
            let bytes_read = reader.read(&mut buffer).map_err(|e| {
                let _ = fs::remove_file(&temp_gz_path);
                LoggerError::io_operation(
                    "compressing rotated file",
                    format!("Failed to read from file: {}", path.display()),
                    e,
                )
            })?;
            if bytes_read == 0 {
                break;
            }
            encoder.write_all(&buffer[..bytes_read]).map_err(|e| {
                let _ = fs::remove_file(&temp_gz_path);
                LoggerError::io_operation(
                    "compressing rotated file",
                    "Failed to compress data chunk".to_string(),
                    e,
                )
            })?;
        }

        encoder.finish().map_err(|e| {
            let _ = fs::remove_file(&temp_gz_path);
            LoggerError::io_operation(
                "compressing rotated file",
                "Failed to finish compression".to_string(),
                e,
            )
        })?;

        fs::rename(&temp_gz_path, &gz_path).map_err(|e| {
            let _ = fs::remove_file(&temp_gz_path);
            LoggerError::io_operation(
                "compressing rotated file",
                format!("Failed to rename compressed file to: {}", gz_path.display()),
                e,
            )
        })?;

        // Only remove the original once the compressed copy is in place
        if let Err(e) = fs::remove_file(path) {
            eprintln!(
                "[WARN] Compression succeeded but failed to remove original file {}: {}",
                path.display(),
                e
            );
        }

        Ok(())
    }
}

impl Sink for RotatingFileSink {
    fn write(&self, record: &LogRecord) -> Result<()> {
        self.append(Local::now().date_naive(), record)
    }

    fn flush(&self) -> Result<()> {
        let mut inner = self.inner.lock();
        let path = inner
            .current_date
            .map(|d| inner.path_for(d))
            .unwrap_or_else(|| inner.directory.clone());
        if let Some(ref mut writer) = inner.writer {
            writer.flush().map_err(|e| {
                LoggerError::file_sink(
                    path.display().to_string(),
                    format!("Failed to flush: {}", e),
                )
            })?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for RotatingFileSink {
    fn drop(&mut self) {
        // Release the file handle with a best-effort flush
        let mut inner = self.inner.lock();
        if let Some(mut writer) = inner.writer.take() {
            let _ = writer.flush();
        }
    }
}
