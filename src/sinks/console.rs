//! Console sink implementation

use crate::core::output_format::format_text;
use crate::core::{LogRecord, LogSink, LoggerError, OutputFormat, Result, Severity, TimestampFormat};
use colored::Colorize;
use std::error::Error;
use std::fmt;
use std::io::Write;

/// Writes records to the terminal.
///
/// `Error`, `Assert` and `Exception` entries go to stderr, the rest to stdout.
pub struct ConsoleSink {
    use_colors: bool,
    timestamp_format: TimestampFormat,
    output_format: OutputFormat,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            timestamp_format: TimestampFormat::default(),
            output_format: OutputFormat::default(),
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            ..Self::new()
        }
    }

    /// Set the output format for this sink
    ///
    /// # Example
    ///
    /// ```
    /// use category_logger::sinks::ConsoleSink;
    /// use category_logger::OutputFormat;
    ///
    /// let sink = ConsoleSink::new().with_output_format(OutputFormat::Json);
    /// ```
    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    fn render(&self, record: &LogRecord) -> String {
        match self.output_format {
            OutputFormat::Text if self.use_colors => {
                let label = format!("{:9}", record.severity.to_str())
                    .color(record.severity.color_code())
                    .to_string();
                format_text(record, &self.timestamp_format, &label)
            }
            _ => self.output_format.format(record, &self.timestamp_format),
        }
    }

    fn write_record(&self, record: &LogRecord) -> Result<()> {
        let line = self.render(record);
        let written = if record.severity.is_critical() {
            writeln!(std::io::stderr().lock(), "{}", line)
        } else {
            writeln!(std::io::stdout().lock(), "{}", line)
        };
        written.map_err(|e| {
            LoggerError::io_operation("writing to console", "console sink failed", e)
        })
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for ConsoleSink {
    fn log(
        &self,
        severity: Severity,
        message: &str,
        context: Option<&dyn fmt::Debug>,
    ) -> Result<()> {
        self.write_record(&LogRecord::new(severity, message).with_context(context))
    }

    fn log_exception(
        &self,
        exception: &(dyn Error + 'static),
        context: Option<&dyn fmt::Debug>,
    ) -> Result<()> {
        self.write_record(&LogRecord::from_exception(exception).with_context(context))
    }

    fn flush(&self) -> Result<()> {
        // Flush both stdout and stderr since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
