//! Sink trait for log output destinations

use super::error::Result;
use super::event::RenderedLine;
use super::severity::Severity;

/// Destination for rendered records.
///
/// Sinks receive already-filtered, already-formatted records. A failing
/// `write` is reported on the stderr fallback channel by the facade and
/// never reaches the code that issued the log call.
pub trait Sink: Send + Sync {
    fn write(&mut self, record: &RenderedLine) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

/// A sink together with its own minimum severity.
///
/// Filtering is per-sink: multiple bindings on one facade may apply
/// different thresholds to the same event stream.
pub struct SinkBinding {
    pub min_severity: Severity,
    pub sink: Box<dyn Sink>,
}

impl SinkBinding {
    pub fn new(min_severity: Severity, sink: impl Sink + 'static) -> Self {
        Self {
            min_severity,
            sink: Box::new(sink),
        }
    }

    /// Whether a record at `level` passes this binding's filter
    pub fn accepts(&self, level: Severity) -> bool {
        level >= self.min_severity
    }
}
