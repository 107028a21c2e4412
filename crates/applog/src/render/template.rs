//! Per-severity entry templates

use crate::types::{CallSite, Severity};

/// Render one entry
///
/// Pure: the same inputs always produce the same text. `date` is the
/// already formatted timestamp.
///
/// `Critical`:
/// ```text
///
///
/// --- CRITICAL ---
///
/// <content>
///
/// DATE: <date>
///
/// SENDER-FILE: <file>
/// SENDER-FUNCTION: <function>
/// SENDER-LINE: <line>
///
/// IMMEDIATE ACTION REQUIRED
///
/// --- END CRITICAL ---
/// ```
///
/// `Error` (fields indented with one tab):
/// ```text
/// ERROR:
///     <content>
///     DATE: <date>
///     SENDER: <file>, <function>, <line>
/// ```
///
/// `Normal` and `Debug`:
/// ```text
/// <date>, <file>, <function>, <line> --- <content>
/// ```
pub fn render_entry(severity: Severity, content: &str, site: &CallSite, date: &str) -> String {
    let file = site.short_file();
    let function = &site.function;
    let line = site.line;

    match severity {
        Severity::Critical => format!(
            "\n\n--- CRITICAL ---\n\n{content}\n\nDATE: {date}\n\n\
             SENDER-FILE: {file}\nSENDER-FUNCTION: {function}\nSENDER-LINE: {line}\n\n\
             IMMEDIATE ACTION REQUIRED\n\n--- END CRITICAL ---\n"
        ),
        Severity::Error => format!(
            "ERROR:\n\t{content}\n\tDATE: {date}\n\tSENDER: {file}, {function}, {line}"
        ),
        Severity::Normal | Severity::Debug => {
            format!("{date}, {file}, {function}, {line} --- {content}")
        }
    }
}
