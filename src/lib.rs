//! # Leveled Logger
//!
//! A leveled logging facade that routes records to per-severity sinks:
//! console and/or daily-rotating, gzip-compressed files.
//!
//! ## Features
//!
//! - **Per-Level Sink Sets**: Each severity owns an independent, fixed set
//!   of sinks built once at construction
//! - **Level Gating**: A configured minimum severity (overridable via
//!   `LOG_LEVEL`) is re-checked on every call before any work happens
//! - **Fire and Forget**: Log calls never fail their caller; sink errors
//!   are intercepted and reported to stderr
//! - **Guaranteed Output**: Levels with no configured sink fall back to
//!   the console, so calls are never silently dropped

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        LeveledLogger, LogOptions, LogRecord, LoggerError, MetaValue, Result, Severity,
        SinkSet, LEVEL_ENV_VAR,
    };
    pub use crate::sinks::{ConsoleSink, RetentionPolicy, RotatingFileSink, Sink};
}

pub use crate::core::{
    LeveledLogger, LogOptions, LogRecord, LoggerError, MetaValue, Result, Severity, SinkSet,
    LEVEL_ENV_VAR, MAX_INSPECT_DEPTH,
};
pub use crate::sinks::{
    build_sinks, ConsoleSink, RetentionPolicy, RotatingFileSink, Sink, DEFAULT_MAX_RETAINED,
};
