//! Logging macros for the variadic call shape
//!
//! The logger methods take a message and a slice of [`crate::MetaValue`]s.
//! These macros provide the `info!(logger, "msg", value, value, ...)`
//! shape, converting each trailing argument with `MetaValue::from`.
//!
//! # Examples
//!
//! ```
//! use leveled_logger::prelude::*;
//! use leveled_logger::{info, meta, warn};
//!
//! let logger = LeveledLogger::new(LogOptions::new().with_console(true), None).unwrap();
//!
//! info!(logger, "server started");
//! info!(logger, "request handled", meta! { "status" => 200, "path" => "/health" });
//! warn!(logger, "slow response", 1500);
//! ```

/// Build a map-shaped [`crate::MetaValue`] from `key => value` pairs.
///
/// # Examples
///
/// ```
/// use leveled_logger::meta;
///
/// let value = meta! { "user" => "alice", "attempts" => 3 };
/// ```
#[macro_export]
macro_rules! meta {
    () => {
        $crate::MetaValue::Map(Vec::new())
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::MetaValue::Map(vec![
            $(($key.into(), $crate::MetaValue::from($value))),+
        ])
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $msg:expr $(,)?) => {
        $logger.info($msg, &[])
    };
    ($logger:expr, $msg:expr, $($meta:expr),+ $(,)?) => {
        $logger.info($msg, &[$($crate::MetaValue::from($meta)),+])
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $msg:expr $(,)?) => {
        $logger.warn($msg, &[])
    };
    ($logger:expr, $msg:expr, $($meta:expr),+ $(,)?) => {
        $logger.warn($msg, &[$($crate::MetaValue::from($meta)),+])
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $msg:expr $(,)?) => {
        $logger.debug($msg, &[])
    };
    ($logger:expr, $msg:expr, $($meta:expr),+ $(,)?) => {
        $logger.debug($msg, &[$($crate::MetaValue::from($meta)),+])
    };
}

/// Log an error-level message. Metadata stays structured on this channel.
#[macro_export]
macro_rules! error {
    ($logger:expr, $msg:expr $(,)?) => {
        $logger.error($msg, &[])
    };
    ($logger:expr, $msg:expr, $($meta:expr),+ $(,)?) => {
        $logger.error($msg, &[$($crate::MetaValue::from($meta)),+])
    };
}
