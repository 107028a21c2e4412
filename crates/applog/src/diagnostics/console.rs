//! Stderr sink for hosts that want to see lost entries

use super::traits::{DiagnosticLevel, DiagnosticSink};

/// Prints the logger's diagnostics to stderr
///
/// Write failures and encoding placeholders are always printed. Dropped
/// `Debug` entries are only printed by a [`verbose`](ConsoleSink::verbose)
/// sink, since a production build drops every one of them.
///
/// ```no_run
/// use std::sync::Arc;
/// use applog::{ConsoleSink, Logger};
///
/// let log = Logger::new("service.txt").with_diagnostics(Arc::new(ConsoleSink::new("service")));
/// ```
#[derive(Debug, Clone)]
pub struct ConsoleSink {
    label: String,
    verbose: bool,
}

impl ConsoleSink {
    /// `label` names the application in each printed line
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            verbose: false,
        }
    }

    /// Also print suppressed `Debug` entries
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// The line printed for a diagnostic, if any
    pub fn line(&self, level: DiagnosticLevel, message: &str) -> Option<String> {
        match level {
            DiagnosticLevel::Warn => Some(format!("{} applog: {}", self.label, message)),
            DiagnosticLevel::Debug if self.verbose => {
                Some(format!("{} applog (skipped): {}", self.label, message))
            }
            DiagnosticLevel::Debug => None,
        }
    }

    fn print(&self, level: DiagnosticLevel, message: &str) {
        if let Some(line) = self.line(level, message) {
            eprintln!("{line}");
        }
    }
}

impl DiagnosticSink for ConsoleSink {
    fn debug(&self, message: &str) {
        self.print(DiagnosticLevel::Debug, message);
    }

    fn warn(&self, message: &str) {
        self.print(DiagnosticLevel::Warn, message);
    }
}
