//! # Category Logger
//!
//! A logging facade for packages and plugins. Each package owns a
//! [`CategoryLogger`] that prefixes its messages with a group id and lets any
//! consumer switch individual severities on or off for that package alone,
//! independent of the sink's own configuration.
//!
//! ## Features
//!
//! - **Per-package filtering**: five severities, each toggled independently
//! - **Group prefixes**: `"[MyPlugin] message"` without touching call sites
//! - **Injected sinks**: explicit, or a process-wide default looked up once
//! - **Never fails**: sink errors and panics are absorbed and counted
//!
//! ```
//! use category_logger::prelude::*;
//! use std::sync::{Arc, LazyLock};
//!
//! static SINK: LazyLock<Arc<MemorySink>> = LazyLock::new(|| Arc::new(MemorySink::new()));
//!
//! // Inside the plugin
//! static LOGGER: LazyLock<CategoryLogger> =
//!     LazyLock::new(|| CategoryLogger::with_sink(Some("MyPlugin"), SINK.clone()));
//!
//! fn do_test_log() {
//!     LOGGER.info("This is a test log!");
//! }
//!
//! // In the host
//! do_test_log();
//! LOGGER.set_all_enabled(false);
//! do_test_log();
//!
//! assert_eq!(SINK.messages(), vec!["[MyPlugin] This is a test log!".to_string()]);
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub use crate::core::registry;

pub mod prelude {
    pub use crate::core::{
        CategoryLogger, CategoryLoggerBuilder, FilterHandle, FilterMetrics, LogRecord, LogSink,
        LoggerConfig, LoggerError, OutputFormat, Result, Severity, TimestampFormat,
    };
    #[cfg(feature = "console")]
    pub use crate::sinks::ConsoleSink;
    pub use crate::sinks::{MemorySink, NullSink};
}

pub use crate::core::{
    slot_of_code, CategoryLogger, CategoryLoggerBuilder, FilterHandle, FilterMetrics, LogRecord,
    LogSink, LoggerConfig, LoggerError, OutputFormat, RecordKind, Result, Severity,
    TimestampFormat, ASSERTIONS_ENABLED,
};
#[cfg(feature = "console")]
pub use crate::sinks::ConsoleSink;
pub use crate::sinks::{MemorySink, NullSink};
