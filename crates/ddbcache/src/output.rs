//! Output formatting functions.

use ddbcache_core::storage::WriteAck;
use ddbcache_core::value::Value;

use crate::cli::OutputFormat;

/// Format a cached value for output.
///
/// Pretty output prints strings bare and everything else as indented JSON.
pub fn format_value(value: &Value, format: OutputFormat) -> String {
    match (format, value) {
        (OutputFormat::Pretty, Value::String(s)) => s.clone(),
        (OutputFormat::Pretty, _) => {
            serde_json::to_string_pretty(&serde_json::Value::from(value.clone()))
                .unwrap_or_default()
        }
        (OutputFormat::Json, _) => {
            serde_json::to_string(&serde_json::Value::from(value.clone())).unwrap_or_default()
        }
    }
}

/// Format a write acknowledgement for output.
///
/// Returns `None` when there is nothing to print.
pub fn format_ack(ack: &WriteAck, format: OutputFormat) -> Option<String> {
    match format {
        OutputFormat::Json => Some(serde_json::to_string(ack).unwrap_or_default()),
        OutputFormat::Pretty if *ack == WriteAck::default() => None,
        OutputFormat::Pretty => Some(serde_json::to_string_pretty(ack).unwrap_or_default()),
    }
}
