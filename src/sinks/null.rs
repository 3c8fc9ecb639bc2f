//! Sink that discards everything

use crate::core::{LogSink, Result, Severity};
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl LogSink for NullSink {
    fn log(&self, _: Severity, _: &str, _: Option<&dyn fmt::Debug>) -> Result<()> {
        Ok(())
    }

    fn log_exception(&self, _: &(dyn Error + 'static), _: Option<&dyn fmt::Debug>) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }
}
