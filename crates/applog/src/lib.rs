//! AppLog
//!
//! Append-only application log file. Callers hand over a message (text or
//! error values) with a severity; the logger stamps it with a date and the
//! caller's file, function and line, renders it with the severity's template,
//! and appends it to a single text file in the per-user documents directory.
//!
//! ## Reporting
//!
//! The macros capture the call site for you:
//!
//! ```rust,no_run
//! use applog::{report, report_critical, report_debug, Logger, Severity};
//!
//! let log = Logger::new("applog.txt");
//!
//! report!(log, "user ", 42, " signed in");
//! report!(log, severity = Severity::Error, "sync failed: ", "timeout");
//! report_debug!(log, "only written in debug builds");
//! report_critical!(log, "out of disk space");
//! ```
//!
//! Reporting never returns an error or panics. A write that fails is dropped
//! and described to the logger's diagnostics sink, which discards it unless
//! the host installs one (see [`diagnostics`]).
//!
//! ## Output
//!
//! - `Normal` / `Debug`: `<date>, <file>, <function>, <line> --- <content>`
//! - `Error`: an `ERROR:` header with tab-indented content, date and sender
//! - `Critical`: a `--- CRITICAL ---` banner ending in `IMMEDIATE ACTION REQUIRED`
//!
//! Entries are separated by a single newline. Several processes or threads
//! writing the same file at once may interleave; nothing coordinates them.

pub mod types;
pub mod render;
pub mod sink;
pub mod config;
pub mod diagnostics;
mod logger;
mod macros;

pub use logger::Logger;

// Re-export commonly used types
pub use types::{CallSite, Content, EncodingError, Severity, short_file};

pub use render::{Clock, SharedClock, SystemClock, FixedClock, DateFormat, render_entry};

pub use sink::{SinkError, SinkResult, ENCODING_SENTINEL};

pub use config::{LoggerConfig, ConfigError, ConfigResult, DEFAULT_FILENAME};

pub use diagnostics::{DiagnosticSink, SharedSink, NoOpSink, ConsoleSink, MemorySink};
