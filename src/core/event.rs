//! Log event and rendered record structures

use super::field::FieldValue;
use super::severity::Severity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One logging call, captured before formatting.
///
/// Created fresh on every facade call and consumed by the pipeline; the
/// timestamp is read from the system clock at call time, not at render time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEvent {
    pub level: Severity,
    pub message: String,
    pub timestamp: Option<DateTime<Utc>>,
    pub context: String,
    pub extra: Vec<FieldValue>,
}

impl LogEvent {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// so a caller-supplied message cannot forge additional log records.
    pub(crate) fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(
        level: Severity,
        message: impl Into<String>,
        context: impl Into<String>,
        extra: Vec<FieldValue>,
    ) -> Self {
        Self {
            level,
            message: Self::sanitize_message(&message.into()),
            timestamp: Some(Utc::now()),
            context: context.into(),
            extra,
        }
    }

    /// Build an event from an already-composed message body.
    ///
    /// Used for error records where a serialized trace has been appended;
    /// the trace is allowed to span multiple lines, so the body is not
    /// re-sanitized. The caller message must be sanitized beforehand.
    pub(crate) fn raw(
        level: Severity,
        message: String,
        context: impl Into<String>,
        extra: Vec<FieldValue>,
    ) -> Self {
        Self {
            level,
            message,
            timestamp: Some(Utc::now()),
            context: context.into(),
            extra,
        }
    }

    /// Replace the event timestamp, keeping everything else.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// Structured metadata carried alongside a rendered line.
///
/// Sinks may use either the rendered string or these fields.
#[derive(Debug, Clone)]
pub struct RecordMeta {
    pub level: Severity,
    /// Formatted timestamp, ISO-8601 under the default format
    pub timestamp: String,
    /// Context label of the emitting facade, always non-empty
    pub context: String,
    /// Interpolation arguments left over after placeholder substitution
    pub extras: Vec<FieldValue>,
}

/// Final record handed to sinks: the display string, an advisory styling
/// hint from the Colorize stage, and the metadata side channel.
#[derive(Debug, Clone)]
pub struct RenderedLine {
    pub line: String,
    pub style: Option<colored::Color>,
    pub meta: RecordMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_sanitization() {
        let event = LogEvent::new(
            Severity::Info,
            "line one\nline two\ttabbed",
            "app",
            Vec::new(),
        );
        assert_eq!(event.message, "line one\\nline two\\ttabbed");
    }

    #[test]
    fn test_timestamp_set_at_construction() {
        let before = Utc::now();
        let event = LogEvent::new(Severity::Info, "msg", "app", Vec::new());
        let after = Utc::now();

        let ts = event.timestamp.expect("constructor stamps the event");
        assert!(ts >= before && ts <= after);
    }

    #[test]
    fn test_raw_preserves_newlines() {
        let event = LogEvent::raw(Severity::Error, "boom -> ({\n})".to_string(), "app", Vec::new());
        assert!(event.message.contains('\n'));
    }
}
