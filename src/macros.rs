//! Logging macros for formatted messages.
//!
//! The arguments are captured with `format_args!`, so nothing is formatted
//! unless the severity is enabled on the logger.
//!
//! # Examples
//!
//! ```
//! use category_logger::prelude::*;
//! use category_logger::{info, warning};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(MemorySink::new());
//! let logger = CategoryLogger::with_sink(Some("Net"), sink.clone());
//!
//! let port = 8080;
//! info!(logger, "listening on port {}", port);
//!
//! logger.set_enabled(Severity::Warning, false);
//! warning!(logger, "retry {} of {}", 3, 5);
//!
//! assert_eq!(sink.messages(), vec!["[Net] listening on port 8080".to_string()]);
//! ```

/// Log a formatted message at the given severity.
///
/// # Examples
///
/// ```
/// # use category_logger::prelude::*;
/// # let logger = CategoryLogger::detached(None);
/// use category_logger::log;
/// log!(logger, Severity::Info, "Simple message");
/// log!(logger, Severity::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log($severity, format_args!($($arg)+))
    };
}

/// Log a formatted info message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a formatted warning message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warning, $($arg)+)
    };
}

/// Log a formatted error message.
///
/// # Examples
///
/// ```
/// # use category_logger::prelude::*;
/// # let logger = CategoryLogger::detached(Some("Db"));
/// use category_logger::error;
/// error!(logger, "Failed to connect to {}", "primary");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a formatted assertion message.
///
/// In builds without `debug_assertions` the whole call is skipped, so neither
/// the logger expression nor the format arguments are evaluated. Calling
/// [`CategoryLogger::assertion`](crate::CategoryLogger::assertion) directly
/// still evaluates its argument, and only skips formatting it.
#[macro_export]
macro_rules! assertion {
    ($logger:expr, $($arg:tt)+) => {
        if cfg!(debug_assertions) {
            $logger.assertion(format_args!($($arg)+))
        }
    };
}
