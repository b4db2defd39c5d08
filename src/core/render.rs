//! Record formatting
//!
//! Two independent steps, mirroring how records flow to sinks:
//!
//! 1. [`render_message`] folds call metadata into the message text
//!    (applied by the logger before dispatch for every severity except
//!    error, which passes metadata through structurally).
//! 2. [`json_line`] serializes a record into the one-JSON-object-per-line
//!    format every sink writes.

use super::meta::{MetaValue, MAX_INSPECT_DEPTH};
use super::record::LogRecord;
use serde_json::Value;

/// Timestamp format used in serialized lines: `YYYY-MM-DD HH:mm:ss`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Fold metadata into the message text.
///
/// Empty metadata returns the message unchanged. Otherwise the message is
/// suffixed with `" meta: "` and a deep rendering of the values, bounded
/// at five levels of nesting and never truncated on line length.
#[must_use]
pub fn render_message(message: &str, meta: &[MetaValue]) -> String {
    if meta.is_empty() {
        return message.to_string();
    }
    let rendered: Vec<String> = meta
        .iter()
        .map(|v| v.inspect(MAX_INSPECT_DEPTH))
        .collect();
    format!("{} meta: [{}]", message, rendered.join(", "))
}

/// Serialize a record as a single JSON line: `{timestamp, level, message}`
/// plus a `meta` array when the record carries structured metadata.
///
/// Error values at any depth of `meta` serialize as `{message, stack}`,
/// so a captured error can never produce a circular-reference or
/// non-serializable failure. Should serialization fail anyway, the line
/// degrades to a best-effort plain rendering instead of propagating.
#[must_use]
pub fn json_line(record: &LogRecord) -> String {
    let timestamp = record.timestamp.format(TIMESTAMP_FORMAT).to_string();

    let mut obj = serde_json::Map::new();
    obj.insert("timestamp".to_string(), Value::String(timestamp.clone()));
    obj.insert(
        "level".to_string(),
        Value::String(record.severity.to_str().to_string()),
    );
    obj.insert(
        "message".to_string(),
        Value::String(record.message.clone()),
    );
    if !record.meta.is_empty() {
        obj.insert(
            "meta".to_string(),
            Value::Array(record.meta.iter().map(MetaValue::to_json_value).collect()),
        );
    }

    serde_json::to_string(&Value::Object(obj)).unwrap_or_else(|_| {
        // Degraded best-effort line; a log call must never fail its caller
        format!(
            "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":\"{}\"}}",
            timestamp,
            record.severity,
            record.message.replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}
