//! Sink implementations

#[cfg(feature = "console")]
pub mod console;
pub mod memory;
pub mod null;

#[cfg(feature = "console")]
pub use console::ConsoleSink;
pub use memory::MemorySink;
pub use null::NullSink;

pub use crate::core::LogSink;
