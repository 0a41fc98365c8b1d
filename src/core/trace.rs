//! Error trace handling
//!
//! An error record may carry a trace. Instead of inspecting the argument at
//! runtime, callers pass an explicit tagged variant: absent, structured
//! key-value data, or free text. Structured traces serialize to pretty-printed
//! JSON with stable key ordering, so the same trace always renders the same
//! bytes. An absent trace renders an explicit marker, never silence.

use std::collections::BTreeMap;

/// Marker substituted when no trace was supplied
pub const TRACE_NOT_PROVIDED: &str = "trace not provided !";

/// Trace attached to an error record
#[derive(Debug, Clone, PartialEq)]
pub enum Trace {
    /// No trace supplied; renders as the explicit marker
    Absent,
    /// Structured key-value trace; serialized deterministically
    Structured(BTreeMap<String, serde_json::Value>),
    /// Free-text trace, e.g. a captured backtrace string
    Text(String),
}

impl Trace {
    /// Build a structured trace from key-value pairs
    pub fn structured<K, V, I>(fields: I) -> Self
    where
        K: Into<String>,
        V: Into<serde_json::Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Trace::Structured(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Render the trace for inclusion in the error message body.
    ///
    /// Structured traces use two-space-indented JSON; the BTreeMap backing
    /// keeps key order stable across invocations. Serialization failures
    /// degrade to the map's debug representation rather than erroring out
    /// of a logging call.
    pub fn render(&self) -> String {
        match self {
            Trace::Absent => TRACE_NOT_PROVIDED.to_string(),
            Trace::Text(s) if s.is_empty() => TRACE_NOT_PROVIDED.to_string(),
            Trace::Text(s) => s.clone(),
            Trace::Structured(map) => {
                serde_json::to_string_pretty(map).unwrap_or_else(|_| format!("{:?}", map))
            }
        }
    }
}

impl From<&str> for Trace {
    fn from(s: &str) -> Self {
        Trace::Text(s.to_string())
    }
}

impl From<String> for Trace {
    fn from(s: String) -> Self {
        Trace::Text(s)
    }
}

impl From<BTreeMap<String, serde_json::Value>> for Trace {
    fn from(map: BTreeMap<String, serde_json::Value>) -> Self {
        Trace::Structured(map)
    }
}

impl From<serde_json::Value> for Trace {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Trace::Absent,
            serde_json::Value::String(s) => Trace::Text(s),
            serde_json::Value::Object(map) => {
                Trace::Structured(map.into_iter().collect())
            }
            other => Trace::Text(other.to_string()),
        }
    }
}
