//! Process-wide default sink
//!
//! Loggers built without an explicit sink look the default up once, when they
//! are constructed. Replacing the default later does not affect loggers that
//! already exist.
//!
//! # Example
//!
//! ```
//! use category_logger::registry;
//! use category_logger::sinks::MemorySink;
//! use category_logger::CategoryLogger;
//! use std::sync::Arc;
//!
//! let sink = Arc::new(MemorySink::new());
//! registry::set_default_sink(sink.clone());
//!
//! let logger = CategoryLogger::new(Some("Audio"));
//! logger.info("mixer ready");
//! assert_eq!(sink.messages(), vec!["[Audio] mixer ready".to_string()]);
//! # registry::take_default_sink();
//! ```

use super::sink::LogSink;
use parking_lot::RwLock;
use std::sync::Arc;

static DEFAULT_SINK: RwLock<Option<Arc<dyn LogSink>>> = parking_lot::const_rwlock(None);

/// Install the default sink, returning the one it replaces
pub fn set_default_sink(sink: Arc<dyn LogSink>) -> Option<Arc<dyn LogSink>> {
    DEFAULT_SINK.write().replace(sink)
}

/// Remove the default sink, returning it
pub fn take_default_sink() -> Option<Arc<dyn LogSink>> {
    DEFAULT_SINK.write().take()
}

/// Current default sink, if one is installed
pub fn default_sink() -> Option<Arc<dyn LogSink>> {
    DEFAULT_SINK.read().clone()
}
