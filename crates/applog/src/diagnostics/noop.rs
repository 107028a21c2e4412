//! Default sink: diagnostics are dropped

use super::traits::DiagnosticSink;

/// Discards every diagnostic, so a failed write leaves no trace anywhere
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl DiagnosticSink for NoOpSink {
    fn debug(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
}
