//! Sink implementations

pub mod console;
pub mod factory;
pub mod rotating_file;

pub use console::ConsoleSink;
pub use factory::build_sinks;
pub use rotating_file::{RetentionPolicy, RotatingFileSink, DEFAULT_MAX_RETAINED};

use crate::core::{error::Result, record::LogRecord};

/// A concrete output destination bound to one severity.
///
/// Implementations serialize their own writes internally; concurrent calls
/// through a shared sink must not interleave bytes. Write failures are
/// reported via `Result` but are intercepted at the dispatch boundary and
/// never reach the logging caller.
pub trait Sink: Send + Sync {
    fn write(&self, record: &LogRecord) -> Result<()>;
    fn flush(&self) -> Result<()>;
    fn name(&self) -> &str;
}
