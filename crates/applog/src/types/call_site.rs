//! Call-site metadata attached to each entry

/// Written in place of a file name that has no usable final component
pub const UNKNOWN_FILE: &str = "error";

/// Where a log request came from
///
/// Usually built by the [`call_site!`](crate::call_site) macro at the
/// caller's location; the `report!` family does this implicitly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallSite {
    /// Source path as given (full or relative)
    pub file: String,
    /// Name of the calling function or method
    pub function: String,
    /// Source line of the call
    pub line: u32,
}

impl CallSite {
    pub fn new(file: impl Into<String>, function: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            function: function.into(),
            line,
        }
    }

    /// Final path component of `file`
    pub fn short_file(&self) -> &str {
        short_file(&self.file)
    }
}

/// Final component of a source path, split on either separator style
///
/// Falls back to [`UNKNOWN_FILE`] for an empty path or one ending in a separator.
pub fn short_file(path: &str) -> &str {
    match path.rsplit(|c: char| c == '/' || c == '\\').next() {
        Some(last) if !last.is_empty() => last,
        _ => UNKNOWN_FILE,
    }
}

/// Reduce the type name of a marker fn nested in the caller to the caller's name
///
/// `my_app::worker::run::__here` becomes `run`; closure and async-block
/// frames are skipped so the named function is reported.
#[doc(hidden)]
pub fn enclosing_function(marker: &'static str) -> &'static str {
    let mut path = marker.strip_suffix("::__here").unwrap_or(marker);
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    path.rsplit("::").next().unwrap_or(path)
}
