//! In-memory sink
//!
//! Buffers every rendered record in a shared vector. Cloning a `MemorySink`
//! shares the buffer, so a test can keep a handle after handing the sink to
//! a facade.

use crate::core::{RenderedLine, Result, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Clone)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<RenderedLine>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Snapshot of the rendered display strings, in delivery order
    pub fn lines(&self) -> Vec<String> {
        self.records.lock().iter().map(|r| r.line.clone()).collect()
    }

    /// Snapshot of the full records including metadata
    pub fn records(&self) -> Vec<RenderedLine> {
        self.records.lock().clone()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for MemorySink {
    fn write(&mut self, record: &RenderedLine) -> Result<()> {
        self.records.lock().push(record.clone());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RecordMeta, Severity};

    fn record(line: &str) -> RenderedLine {
        RenderedLine {
            line: line.to_string(),
            style: None,
            meta: RecordMeta {
                level: Severity::Info,
                timestamp: "2025-01-08T10:30:45.123Z".to_string(),
                context: "test".to_string(),
                extras: Vec::new(),
            },
        }
    }

    #[test]
    fn test_clone_shares_buffer() {
        let sink = MemorySink::new();
        let mut handle = sink.clone();
        handle.write(&record("one")).expect("memory write");

        assert_eq!(sink.lines(), vec!["one".to_string()]);
    }

    #[test]
    fn test_clear() {
        let mut sink = MemorySink::new();
        sink.write(&record("one")).expect("memory write");
        sink.clear();
        assert!(sink.lines().is_empty());
    }
}
