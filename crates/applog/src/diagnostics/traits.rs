//! Diagnostic sink trait definition

use std::sync::Arc;

/// Receiver for the logger's own diagnostics
///
/// `Logger::report` never fails visibly. What it would otherwise have to
/// signal arrives here instead:
/// - `debug`: a `Debug` entry was dropped outside a debug build
/// - `warn`: the entry was replaced by the encoding placeholder, or the write failed
pub trait DiagnosticSink: Send + Sync {
    fn debug(&self, message: &str);

    fn warn(&self, message: &str);
}

/// Type alias for an Arc-wrapped sink
pub type SharedSink = Arc<dyn DiagnosticSink>;

/// Formatted warnings without building a `String` at the call site
pub trait DiagnosticSinkExt: DiagnosticSink {
    fn warn_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.warn(&args.to_string());
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSinkExt for T {}

/// Which trait method a diagnostic arrived through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Debug,
    Warn,
}
