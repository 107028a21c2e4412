//! Core types for log requests

mod severity;
mod call_site;
mod content;

pub use severity::Severity;
pub use call_site::{CallSite, short_file, UNKNOWN_FILE};
#[doc(hidden)]
pub use call_site::enclosing_function;
pub use content::{Content, EncodingError, join_pieces};
