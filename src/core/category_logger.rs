//! Per-package logger with an independent severity filter

use super::{
    config::LoggerConfig,
    error::{LoggerError, Result},
    metrics::FilterMetrics,
    registry,
    severity::{slot_of_code, Severity, SEVERITY_COUNT},
    sink::LogSink,
};
use std::error::Error;
use std::fmt::{self, Write as _};
use std::io::Write;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// Mask value with every severity enabled
const ALL_ENABLED: u8 = (1 << SEVERITY_COUNT) - 1;

/// Whether [`CategoryLogger::assertion`] is compiled into this build
pub const ASSERTIONS_ENABLED: bool = cfg!(debug_assertions);

/// Sink failures are reported on the first one and then every this many
const FAILURE_ALERT_INTERVAL: u64 = 1000;

/// Logger for one package, plugin or subsystem.
///
/// Every forwarded message is prefixed with `"[<group_id>] "` when a group id
/// is set, and each [`Severity`] can be switched on or off for this logger
/// alone, without touching the sink's own configuration.
///
/// Filtering state is atomic, so a logger can live in a `static` and be
/// reconfigured from any thread.
///
/// # Example
///
/// ```
/// use category_logger::prelude::*;
/// use std::sync::Arc;
///
/// let sink = Arc::new(MemorySink::new());
/// let logger = CategoryLogger::with_sink(Some("MyPlugin"), sink.clone());
///
/// logger.info("hello");
/// logger.set_all_enabled(false);
/// logger.info("hello");
///
/// assert_eq!(sink.messages(), vec!["[MyPlugin] hello".to_string()]);
/// ```
pub struct CategoryLogger {
    group_id: Option<String>,
    enabled_mask: AtomicU8,
    sink: Option<Arc<dyn LogSink>>,
    metrics: FilterMetrics,
}

impl CategoryLogger {
    /// Create a logger that forwards to the process-wide default sink.
    ///
    /// The default sink is looked up here, once; see [`registry`].
    #[must_use]
    pub fn new(group_id: Option<&str>) -> Self {
        Self::from_parts(group_id, registry::default_sink(), ALL_ENABLED)
    }

    /// Create a logger that forwards to `sink`
    #[must_use]
    pub fn with_sink(group_id: Option<&str>, sink: Arc<dyn LogSink>) -> Self {
        Self::from_parts(group_id, Some(sink), ALL_ENABLED)
    }

    /// Create a logger with no sink; every emission is a silent no-op
    #[must_use]
    pub fn detached(group_id: Option<&str>) -> Self {
        Self::from_parts(group_id, None, ALL_ENABLED)
    }

    /// Create a logger from configuration, forwarding to the default sink
    #[must_use]
    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::builder().config(config).build()
    }

    fn from_parts(group_id: Option<&str>, sink: Option<Arc<dyn LogSink>>, mask: u8) -> Self {
        Self {
            group_id: resolve_group_id(group_id),
            enabled_mask: AtomicU8::new(mask & ALL_ENABLED),
            sink,
            metrics: FilterMetrics::new(),
        }
    }

    /// Identifier prepended to messages, or `None` if none was given
    pub fn group_id(&self) -> Option<&str> {
        self.group_id.as_deref()
    }

    pub fn has_sink(&self) -> bool {
        self.sink.is_some()
    }

    pub fn metrics(&self) -> &FilterMetrics {
        &self.metrics
    }

    /// Borrow a control surface that can query and toggle severities but not emit
    pub fn filter(&self) -> FilterHandle<'_> {
        FilterHandle { logger: self }
    }

    #[inline]
    fn bit(slot: u32) -> u8 {
        1 << slot
    }

    #[inline]
    pub fn is_enabled(&self, severity: Severity) -> bool {
        self.enabled_mask.load(Ordering::Acquire) & Self::bit(severity.slot()) != 0
    }

    /// Enable state for a raw severity code.
    ///
    /// Unknown codes report the state of [`Severity::Info`].
    #[inline]
    pub fn is_code_enabled(&self, code: i32) -> bool {
        self.enabled_mask.load(Ordering::Acquire) & Self::bit(slot_of_code(code)) != 0
    }

    /// Enable or disable a single severity, leaving the others untouched
    pub fn set_enabled(&self, severity: Severity, enabled: bool) {
        let bit = Self::bit(severity.slot());
        if enabled {
            self.enabled_mask.fetch_or(bit, Ordering::AcqRel);
        } else {
            self.enabled_mask.fetch_and(!bit, Ordering::AcqRel);
        }
    }

    pub fn set_all_enabled(&self, enabled: bool) {
        let mask = if enabled { ALL_ENABLED } else { 0 };
        self.enabled_mask.store(mask, Ordering::Release);
    }

    /// Currently enabled severities, in code order
    pub fn enabled_severities(&self) -> Vec<Severity> {
        let mask = self.enabled_mask.load(Ordering::Acquire);
        Severity::ALL
            .into_iter()
            .filter(|severity| mask & Self::bit(severity.slot()) != 0)
            .collect()
    }

    #[inline]
    pub fn log(&self, severity: Severity, message: impl fmt::Display) {
        self.log_with_context(severity, message, None);
    }

    /// Forward `message` to the sink if `severity` is enabled.
    ///
    /// A disabled severity returns before `message` is formatted. A missing
    /// sink, a sink error or a sink panic is absorbed here and never reaches
    /// the caller. A `Display` impl that reports an error drops the entry and
    /// counts it as failed.
    pub fn log_with_context(
        &self,
        severity: Severity,
        message: impl fmt::Display,
        context: Option<&dyn fmt::Debug>,
    ) {
        if !self.is_enabled(severity) {
            return;
        }

        let Some(sink) = self.sink.as_deref() else {
            self.metrics.record_unrouted();
            return;
        };

        let mut text = String::new();
        let formatted = match self.group_id {
            Some(ref id) => write!(text, "[{}] {}", id, message),
            None => write!(text, "{}", message),
        };
        if formatted.is_err() {
            let error =
                LoggerError::formatter("message", "Display implementation returned an error");
            self.record_failure(sink, &error);
            return;
        }

        let outcome = catch_unwind(AssertUnwindSafe(|| sink.log(severity, &text, context)));
        self.settle(sink, outcome);
    }

    #[inline]
    pub fn info(&self, message: impl fmt::Display) {
        self.log_with_context(Severity::Info, message, None);
    }

    #[inline]
    pub fn warning(&self, message: impl fmt::Display) {
        self.log_with_context(Severity::Warning, message, None);
    }

    #[inline]
    pub fn error(&self, message: impl fmt::Display) {
        self.log_with_context(Severity::Error, message, None);
    }

    /// Log an assertion message.
    ///
    /// Compiled to an empty body when `debug_assertions` is off; see
    /// [`ASSERTIONS_ENABLED`]. The argument is still evaluated by the caller
    /// but never formatted. Use [`assertion!`](crate::assertion) to skip the
    /// arguments as well.
    #[cfg(debug_assertions)]
    #[inline]
    pub fn assertion(&self, message: impl fmt::Display) {
        self.log_with_context(Severity::Assert, message, None);
    }

    #[cfg(not(debug_assertions))]
    #[inline(always)]
    pub fn assertion(&self, _message: impl fmt::Display) {}

    /// Log an error value through the sink's exception form.
    ///
    /// `None` returns immediately, whatever the filter says. The error is
    /// passed through as-is, without the group prefix.
    pub fn exception(&self, exception: Option<&(dyn Error + 'static)>) {
        self.exception_impl(exception, None);
    }

    pub fn info_with_context(&self, message: impl fmt::Display, context: &dyn fmt::Debug) {
        self.log_with_context(Severity::Info, message, Some(context));
    }

    pub fn warning_with_context(&self, message: impl fmt::Display, context: &dyn fmt::Debug) {
        self.log_with_context(Severity::Warning, message, Some(context));
    }

    pub fn error_with_context(&self, message: impl fmt::Display, context: &dyn fmt::Debug) {
        self.log_with_context(Severity::Error, message, Some(context));
    }

    #[cfg(debug_assertions)]
    pub fn assertion_with_context(&self, message: impl fmt::Display, context: &dyn fmt::Debug) {
        self.log_with_context(Severity::Assert, message, Some(context));
    }

    #[cfg(not(debug_assertions))]
    #[inline(always)]
    pub fn assertion_with_context(&self, _message: impl fmt::Display, _context: &dyn fmt::Debug) {}

    pub fn exception_with_context(
        &self,
        exception: Option<&(dyn Error + 'static)>,
        context: &dyn fmt::Debug,
    ) {
        self.exception_impl(exception, Some(context));
    }

    fn exception_impl(
        &self,
        exception: Option<&(dyn Error + 'static)>,
        context: Option<&dyn fmt::Debug>,
    ) {
        let Some(exception) = exception else {
            return;
        };

        if !self.is_enabled(Severity::Exception) {
            return;
        }

        let Some(sink) = self.sink.as_deref() else {
            self.metrics.record_unrouted();
            return;
        };

        let outcome = catch_unwind(AssertUnwindSafe(|| sink.log_exception(exception, context)));
        self.settle(sink, outcome);
    }

    /// Flush the sink, if any
    pub fn flush(&self) -> Result<()> {
        match self.sink.as_deref() {
            Some(sink) => sink.flush(),
            None => Ok(()),
        }
    }

    /// Account for the outcome of one sink call.
    fn settle(&self, sink: &dyn LogSink, outcome: std::thread::Result<Result<()>>) {
        let error = match outcome {
            Ok(Ok(())) => {
                self.metrics.record_forwarded();
                return;
            }
            Ok(Err(e)) => e,
            Err(panic_info) => {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                LoggerError::sink_panicked(sink.name(), panic_msg)
            }
        };

        self.record_failure(sink, &error);
    }

    /// Count a dropped entry and report it on stderr on the first failure and
    /// periodically after that. Writing the alert itself must not panic, so
    /// `eprintln!` is avoided.
    fn record_failure(&self, sink: &dyn LogSink, error: &LoggerError) {
        let previous = self.metrics.record_failed();
        if previous == 0 || (previous + 1) % FAILURE_ALERT_INTERVAL == 0 {
            let _ = writeln!(
                std::io::stderr(),
                "[LOGGER ERROR] Sink '{}' failed for group '{}': {} ({} failures so far)",
                sink.name(),
                self.group_id().unwrap_or("-"),
                error,
                previous + 1
            );
        }
    }

    /// Create a builder for CategoryLogger
    ///
    /// # Example
    /// ```
    /// use category_logger::prelude::*;
    /// use std::sync::Arc;
    ///
    /// let logger = CategoryLogger::builder()
    ///     .group_id("Renderer")
    ///     .sink(Arc::new(NullSink))
    ///     .disable(Severity::Info)
    ///     .build();
    ///
    /// assert!(!logger.is_enabled(Severity::Info));
    /// assert!(logger.is_enabled(Severity::Error));
    /// ```
    #[must_use]
    pub fn builder() -> CategoryLoggerBuilder {
        CategoryLoggerBuilder::new()
    }
}

impl Default for CategoryLogger {
    fn default() -> Self {
        Self::new(None)
    }
}

impl fmt::Debug for CategoryLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CategoryLogger")
            .field("group_id", &self.group_id)
            .field("enabled", &self.enabled_severities())
            .field("sink", &self.sink.as_deref().map(|sink| sink.name()))
            .finish()
    }
}

fn resolve_group_id(group_id: Option<&str>) -> Option<String> {
    group_id
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(String::from)
}

/// Narrow view of a [`CategoryLogger`] that can change its filter but not emit.
///
/// A package can hand this to host code to let it adjust verbosity.
#[derive(Clone, Copy)]
pub struct FilterHandle<'a> {
    logger: &'a CategoryLogger,
}

impl FilterHandle<'_> {
    pub fn group_id(&self) -> Option<&str> {
        self.logger.group_id()
    }

    pub fn is_enabled(&self, severity: Severity) -> bool {
        self.logger.is_enabled(severity)
    }

    pub fn is_code_enabled(&self, code: i32) -> bool {
        self.logger.is_code_enabled(code)
    }

    pub fn set_enabled(&self, severity: Severity, enabled: bool) {
        self.logger.set_enabled(severity, enabled);
    }

    pub fn set_all_enabled(&self, enabled: bool) {
        self.logger.set_all_enabled(enabled);
    }

    pub fn enabled_severities(&self) -> Vec<Severity> {
        self.logger.enabled_severities()
    }
}

impl fmt::Debug for FilterHandle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterHandle")
            .field("group_id", &self.group_id())
            .field("enabled", &self.enabled_severities())
            .finish()
    }
}

enum SinkChoice {
    Default,
    Explicit(Arc<dyn LogSink>),
    Detached,
}

/// Builder for constructing CategoryLogger with a fluent API
pub struct CategoryLoggerBuilder {
    group_id: Option<String>,
    sink: SinkChoice,
    disabled: Vec<Severity>,
}

impl CategoryLoggerBuilder {
    /// Create a new builder: no group id, default sink, everything enabled
    pub fn new() -> Self {
        Self {
            group_id: None,
            sink: SinkChoice::Default,
            disabled: Vec::new(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn group_id(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    /// Forward to `sink` instead of the registry default
    #[must_use = "builder methods return a new value"]
    pub fn sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = SinkChoice::Explicit(sink);
        self
    }

    /// Build a logger with no sink
    #[must_use = "builder methods return a new value"]
    pub fn no_sink(mut self) -> Self {
        self.sink = SinkChoice::Detached;
        self
    }

    /// Start with `severity` disabled
    #[must_use = "builder methods return a new value"]
    pub fn disable(mut self, severity: Severity) -> Self {
        self.disabled.push(severity);
        self
    }

    /// Apply a configuration. Its group id, if set, replaces the current one;
    /// its disabled severities are added to the current ones.
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: &LoggerConfig) -> Self {
        if let Some(ref id) = config.group_id {
            self.group_id = Some(id.clone());
        }
        self.disabled.extend(config.disabled.iter().copied());
        self
    }

    pub fn build(self) -> CategoryLogger {
        let sink = match self.sink {
            SinkChoice::Default => registry::default_sink(),
            SinkChoice::Explicit(sink) => Some(sink),
            SinkChoice::Detached => None,
        };

        let mask = self
            .disabled
            .iter()
            .fold(ALL_ENABLED, |mask, severity| mask & !(1u8 << severity.slot()));

        CategoryLogger::from_parts(self.group_id.as_deref(), sink, mask)
    }
}

impl Default for CategoryLoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
