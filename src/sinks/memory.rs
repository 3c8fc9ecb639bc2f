//! In-memory sink
//!
//! Keeps every record it receives, message and context verbatim. Meant for tests and for hosts that show a
//! package's recent output themselves; nothing is ever written anywhere.

use crate::core::{LogRecord, LogSink, Result, Severity};
use parking_lot::Mutex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<LogRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records received so far
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    /// Messages received so far, in order
    pub fn messages(&self) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .map(|record| record.message.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Remove and return all records
    pub fn drain(&self) -> Vec<LogRecord> {
        std::mem::take(&mut *self.records.lock())
    }
}

impl LogSink for MemorySink {
    fn log(
        &self,
        severity: Severity,
        message: &str,
        context: Option<&dyn fmt::Debug>,
    ) -> Result<()> {
        let record = LogRecord::new(severity, message).with_context(context);
        self.records.lock().push(record);
        Ok(())
    }

    fn log_exception(
        &self,
        exception: &(dyn Error + 'static),
        context: Option<&dyn fmt::Debug>,
    ) -> Result<()> {
        let record = LogRecord::from_exception(exception).with_context(context);
        self.records.lock().push(record);
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
