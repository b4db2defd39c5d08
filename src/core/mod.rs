//! Core logger types

pub mod error;
pub mod logger;
pub mod meta;
pub mod options;
pub mod record;
pub mod render;
pub mod severity;

pub use error::{LoggerError, Result};
pub use logger::{LeveledLogger, SinkSet, LEVEL_ENV_VAR};
pub use meta::{MetaValue, MAX_INSPECT_DEPTH};
pub use options::LogOptions;
pub use record::LogRecord;
pub use severity::Severity;
