//! In-memory diagnostic sink

use parking_lot::Mutex;

use super::traits::{DiagnosticLevel, DiagnosticSink};

/// A sink that keeps every message, for tests and host inspection
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<(DiagnosticLevel, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far
    pub fn records(&self) -> Vec<(DiagnosticLevel, String)> {
        self.records.lock().clone()
    }

    /// Messages recorded at `level`
    pub fn messages(&self, level: DiagnosticLevel) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .filter(|(recorded, _)| *recorded == level)
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }

    fn record(&self, level: DiagnosticLevel, message: &str) {
        self.records.lock().push((level, message.to_string()));
    }
}

impl DiagnosticSink for MemorySink {
    fn debug(&self, message: &str) {
        self.record(DiagnosticLevel::Debug, message);
    }

    fn warn(&self, message: &str) {
        self.record(DiagnosticLevel::Warn, message);
    }
}
