//! Sink trait for log output destinations

use super::{error::Result, severity::Severity};
use std::error::Error;
use std::fmt;

/// Destination a [`CategoryLogger`](crate::CategoryLogger) forwards entries to.
///
/// `context` is an optional reference to whatever object the message concerns;
/// sinks may render it through its `Debug` form or ignore it.
pub trait LogSink: Send + Sync {
    fn log(&self, severity: Severity, message: &str, context: Option<&dyn fmt::Debug>)
        -> Result<()>;

    fn log_exception(
        &self,
        exception: &(dyn Error + 'static),
        context: Option<&dyn fmt::Debug>,
    ) -> Result<()>;

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}

/// Render an error and its `source()` chain as a single line.
pub fn describe_exception(exception: &(dyn Error + 'static)) -> String {
    let mut text = exception.to_string();
    let mut source = exception.source();
    while let Some(cause) = source {
        text.push_str(": caused by: ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}
