//! Structured metadata values attached to log calls
//!
//! A log call carries an ordered sequence of `MetaValue`s standing in for
//! "arbitrary values": scalars, nested sequences and maps, and captured
//! errors. Errors are always carried as `{message, stack}` so they can
//! never poison JSON serialization further down the pipeline.

use serde_json::Value;
use std::fmt;

/// Maximum nesting depth rendered by [`MetaValue::inspect`].
pub const MAX_INSPECT_DEPTH: usize = 5;

/// Value type for structured log metadata
#[derive(Debug, Clone, PartialEq)]
pub enum MetaValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// A captured error: its message and a rendered cause chain.
    Error { message: String, stack: String },
    Seq(Vec<MetaValue>),
    Map(Vec<(String, MetaValue)>),
}

impl MetaValue {
    /// Capture an error as `{message, stack}`.
    ///
    /// The stack is the error's own message followed by its `source()`
    /// chain, one cause per line.
    pub fn from_error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        let message = err.to_string();
        let mut stack = message.clone();
        let mut source = err.source();
        while let Some(cause) = source {
            stack.push_str(&format!("\n    caused by: {}", cause));
            source = cause.source();
        }
        MetaValue::Error { message, stack }
    }

    /// Convert to `serde_json::Value` for line serialization.
    ///
    /// The `{message, stack}` replacement for errors is applied here,
    /// structurally, so an error embedded at any depth serializes as a
    /// plain two-field object.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        match self {
            MetaValue::Null => Value::Null,
            MetaValue::Bool(b) => Value::Bool(*b),
            MetaValue::Int(i) => Value::Number((*i).into()),
            MetaValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            MetaValue::String(s) => Value::String(s.clone()),
            MetaValue::Error { message, stack } => {
                let mut obj = serde_json::Map::new();
                obj.insert("message".to_string(), Value::String(message.clone()));
                obj.insert("stack".to_string(), Value::String(stack.clone()));
                Value::Object(obj)
            }
            MetaValue::Seq(items) => {
                Value::Array(items.iter().map(MetaValue::to_json_value).collect())
            }
            MetaValue::Map(fields) => {
                let mut obj = serde_json::Map::new();
                for (key, value) in fields {
                    obj.insert(key.clone(), value.to_json_value());
                }
                Value::Object(obj)
            }
        }
    }

    /// Deep, human-readable rendering used for the `" meta: "` suffix.
    ///
    /// Never truncates on line length; recursion stops at `depth` levels,
    /// beyond which nested containers render as `[...]` / `{...}`.
    #[must_use]
    pub fn inspect(&self, depth: usize) -> String {
        match self {
            MetaValue::Null => "null".to_string(),
            MetaValue::Bool(b) => b.to_string(),
            MetaValue::Int(i) => i.to_string(),
            MetaValue::Float(f) => f.to_string(),
            MetaValue::String(s) => format!("\"{}\"", s),
            MetaValue::Error { message, stack } => {
                format!("{{ message: \"{}\", stack: \"{}\" }}", message, stack)
            }
            MetaValue::Seq(items) => {
                if depth == 0 {
                    return "[...]".to_string();
                }
                let parts: Vec<String> =
                    items.iter().map(|v| v.inspect(depth - 1)).collect();
                format!("[{}]", parts.join(", "))
            }
            MetaValue::Map(fields) => {
                if depth == 0 {
                    return "{...}".to_string();
                }
                let parts: Vec<String> = fields
                    .iter()
                    .map(|(k, v)| format!("{}: {}", k, v.inspect(depth - 1)))
                    .collect();
                format!("{{ {} }}", parts.join(", "))
            }
        }
    }
}

impl fmt::Display for MetaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inspect(MAX_INSPECT_DEPTH))
    }
}

impl From<String> for MetaValue {
    fn from(s: String) -> Self {
        MetaValue::String(s)
    }
}

impl From<&str> for MetaValue {
    fn from(s: &str) -> Self {
        MetaValue::String(s.to_string())
    }
}

impl From<i64> for MetaValue {
    fn from(i: i64) -> Self {
        MetaValue::Int(i)
    }
}

impl From<i32> for MetaValue {
    fn from(i: i32) -> Self {
        MetaValue::Int(i64::from(i))
    }
}

impl From<u32> for MetaValue {
    fn from(i: u32) -> Self {
        MetaValue::Int(i64::from(i))
    }
}

impl From<f64> for MetaValue {
    fn from(f: f64) -> Self {
        MetaValue::Float(f)
    }
}

impl From<bool> for MetaValue {
    fn from(b: bool) -> Self {
        MetaValue::Bool(b)
    }
}

impl From<Vec<MetaValue>> for MetaValue {
    fn from(items: Vec<MetaValue>) -> Self {
        MetaValue::Seq(items)
    }
}
