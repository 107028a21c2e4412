//! Severity of a log entry

use serde::{Deserialize, Serialize};

/// Severity of a reported event
///
/// Each variant picks the template the entry is rendered with (see
/// [`render_entry`](crate::render::render_entry)). `Debug` entries are
/// additionally dropped by loggers that are not in a debug build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Major failures and fatal errors. Rendered as a multi-line banner.
    Critical,
    /// Standard error reporting. Rendered as an indented block.
    Error,
    /// The default. Rendered as a single line.
    #[default]
    Normal,
    /// Same format as `Normal`, only written by debug-build loggers.
    Debug,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Error => "error",
            Severity::Normal => "normal",
            Severity::Debug => "debug",
        }
    }

    /// Whether an entry of this severity is dropped by a logger with the given build flag
    pub fn is_suppressed(&self, debug_build: bool) -> bool {
        matches!(self, Severity::Debug) && !debug_build
    }
}
