//! Log record captured by the bundled sinks

use super::severity::Severity;
use super::sink::describe_exception;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::error::Error;
use std::fmt;

// Thread-local caches for thread information to avoid repeated allocations
thread_local! {
    static THREAD_ID_CACHE: RefCell<Option<String>> = const { RefCell::new(None) };
    static THREAD_NAME_CACHE: RefCell<Option<Option<String>>> = const { RefCell::new(None) };
}

fn get_thread_id() -> String {
    THREAD_ID_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| format!("{:?}", std::thread::current().id()))
            .clone()
    })
}

fn get_thread_name() -> Option<String> {
    THREAD_NAME_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| std::thread::current().name().map(String::from))
            .clone()
    })
}

/// Which sink entry point produced a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordKind {
    Message,
    Exception,
}

/// One entry as a sink received it.
///
/// `message` and `context` are stored verbatim. Escaping happens when the
/// record is rendered by [`OutputFormat`](crate::OutputFormat).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    pub severity: Severity,
    pub kind: RecordKind,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub thread_id: String,
    pub thread_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl LogRecord {
    pub fn new(severity: Severity, message: &str) -> Self {
        Self {
            severity,
            kind: RecordKind::Message,
            message: message.to_string(),
            timestamp: Utc::now(),
            thread_id: get_thread_id(),
            thread_name: get_thread_name(),
            context: None,
        }
    }

    /// Build an `Exception` record from an error and its source chain
    pub fn from_exception(exception: &(dyn Error + 'static)) -> Self {
        let mut record = Self::new(Severity::Exception, &describe_exception(exception));
        record.kind = RecordKind::Exception;
        record
    }

    pub fn with_context(mut self, context: Option<&dyn fmt::Debug>) -> Self {
        self.context = context.map(|ctx| format!("{:?}", ctx));
        self
    }

    /// Thread name if the thread has one, otherwise its id
    pub fn thread_label(&self) -> &str {
        self.thread_name.as_deref().unwrap_or(&self.thread_id)
    }
}
