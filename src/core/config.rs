//! Serializable logger configuration
//!
//! Lets a host describe a package logger's filter in its own settings file
//! instead of calling the enable/disable operations by hand.

use super::error::{LoggerError, Result};
use super::severity::Severity;
use serde::{Deserialize, Serialize};

/// Configuration for a [`CategoryLogger`](crate::CategoryLogger)
///
/// Every severity not listed in `disabled` starts enabled.
///
/// # Example
///
/// ```
/// use category_logger::{LoggerConfig, Severity};
///
/// let config = LoggerConfig::from_json(
///     r#"{ "group_id": "Physics", "disabled": ["Info", "Warning"] }"#,
/// ).unwrap();
///
/// assert_eq!(config.group_id.as_deref(), Some("Physics"));
/// assert!(config.disabled.contains(&Severity::Info));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    /// Identifier prepended to messages; trimmed, and ignored if blank
    pub group_id: Option<String>,

    /// Severities that start disabled
    pub disabled: Vec<Severity>,
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_group_id(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_disabled(mut self, severity: Severity) -> Self {
        if !self.disabled.contains(&severity) {
            self.disabled.push(severity);
        }
        self
    }

    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| LoggerError::config("LoggerConfig", e.to_string()))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
