//! Output format for rendered records
//!
//! - Text: human-readable single line (default)
//! - Json: one JSON object per line

use super::record::{LogRecord, RecordKind};
use super::timestamp::TimestampFormat;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Example: `[2025-01-08T10:30:45.000Z] [INFO     ] main - [MyPlugin] ready`
    #[default]
    Text,

    /// Example:
    /// `{"timestamp":"2025-01-08T10:30:45.000Z","severity":"INFO","message":"[MyPlugin] ready"}`
    Json,
}

impl OutputFormat {
    pub fn format(&self, record: &LogRecord, timestamp_format: &TimestampFormat) -> String {
        match self {
            OutputFormat::Text => format_text(record, timestamp_format, record.severity.to_str()),
            OutputFormat::Json => format_json(record, timestamp_format),
        }
    }
}

/// Escape newlines, carriage returns and tabs so one entry always renders as
/// one line and a message cannot forge further entries.
fn escape_control(text: &str) -> String {
    text.replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Text rendering with a caller-supplied severity label, so terminal sinks
/// can substitute a colored one.
pub(crate) fn format_text(
    record: &LogRecord,
    timestamp_format: &TimestampFormat,
    severity_label: &str,
) -> String {
    let mut line = format!(
        "[{}] [{:9}] {} - {}",
        timestamp_format.format(&record.timestamp),
        severity_label,
        record.thread_label(),
        escape_control(&record.message)
    );

    if let Some(ref context) = record.context {
        line.push_str(" (context: ");
        line.push_str(&escape_control(context));
        line.push(')');
    }

    line
}

/// JSON string encoding already escapes control characters, so values are
/// inserted verbatim.
fn format_json(record: &LogRecord, timestamp_format: &TimestampFormat) -> String {
    let mut json_obj = serde_json::Map::new();

    json_obj.insert(
        "timestamp".to_string(),
        timestamp_format.to_json_value(&record.timestamp),
    );
    json_obj.insert(
        "severity".to_string(),
        serde_json::Value::String(record.severity.to_str().to_string()),
    );
    json_obj.insert(
        "message".to_string(),
        serde_json::Value::String(record.message.clone()),
    );
    if record.kind == RecordKind::Exception {
        json_obj.insert("exception".to_string(), serde_json::Value::Bool(true));
    }
    json_obj.insert(
        "thread_id".to_string(),
        serde_json::Value::String(record.thread_id.clone()),
    );
    if let Some(ref name) = record.thread_name {
        json_obj.insert(
            "thread_name".to_string(),
            serde_json::Value::String(name.clone()),
        );
    }
    if let Some(ref context) = record.context {
        json_obj.insert(
            "context".to_string(),
            serde_json::Value::String(context.clone()),
        );
    }

    serde_json::Value::Object(json_obj).to_string()
}
