//! Core facade types and traits

pub mod category_logger;
pub mod config;
pub mod error;
pub mod metrics;
pub mod output_format;
pub mod record;
pub mod registry;
pub mod severity;
pub mod sink;
pub mod timestamp;

pub use category_logger::{CategoryLogger, CategoryLoggerBuilder, FilterHandle, ASSERTIONS_ENABLED};
pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use metrics::FilterMetrics;
pub use output_format::OutputFormat;
pub use record::{LogRecord, RecordKind};
pub use severity::{slot_of_code, Severity, SEVERITY_COUNT};
pub use sink::{describe_exception, LogSink};
pub use timestamp::TimestampFormat;
