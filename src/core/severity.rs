//! Severity categories and their bit slots

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of severity categories, and so of meaningful mask bits.
pub const SEVERITY_COUNT: u32 = 5;

/// Category of a log message.
///
/// The discriminant is the integer code of the severity and doubles as its
/// bit slot in a [`CategoryLogger`](crate::CategoryLogger) filter mask.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Severity {
    Error = 0,
    Assert = 1,
    Warning = 2,
    #[default]
    Info = 3,
    Exception = 4,
}

impl Severity {
    pub const ALL: [Severity; SEVERITY_COUNT as usize] = [
        Severity::Error,
        Severity::Assert,
        Severity::Warning,
        Severity::Info,
        Severity::Exception,
    ];

    /// Integer code of this severity
    #[inline]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Bit slot of this severity, always in `0..SEVERITY_COUNT`
    #[inline]
    pub const fn slot(self) -> u32 {
        self as u32
    }

    /// Look up a severity by integer code
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Severity::Error),
            1 => Some(Severity::Assert),
            2 => Some(Severity::Warning),
            3 => Some(Severity::Info),
            4 => Some(Severity::Exception),
            _ => None,
        }
    }

    /// Look up a severity by integer code, falling back to [`Severity::Info`]
    /// for codes outside the known set.
    pub const fn from_code_or_default(code: i32) -> Self {
        match Self::from_code(code) {
            Some(severity) => severity,
            None => Severity::Info,
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Assert => "ASSERT",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
            Severity::Exception => "EXCEPTION",
        }
    }

    /// Severities that terminal sinks route to stderr
    pub fn is_critical(&self) -> bool {
        matches!(self, Severity::Error | Severity::Assert | Severity::Exception)
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Severity::Error => Red,
            Severity::Assert => Magenta,
            Severity::Warning => Yellow,
            Severity::Info => Green,
            Severity::Exception => BrightRed,
        }
    }
}

/// Map a raw severity code to its bit slot.
///
/// Codes outside the known set map to the slot of [`Severity::Info`].
#[inline]
pub const fn slot_of_code(code: i32) -> u32 {
    Severity::from_code_or_default(code).slot()
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl From<Severity> for i32 {
    fn from(severity: Severity) -> Self {
        severity.code()
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ERROR" => Ok(Severity::Error),
            "ASSERT" | "ASSERTION" => Ok(Severity::Assert),
            "WARN" | "WARNING" => Ok(Severity::Warning),
            "INFO" | "LOG" => Ok(Severity::Info),
            "EXCEPTION" => Ok(Severity::Exception),
            _ => Err(format!("Invalid severity: '{}'", s)),
        }
    }
}
