//! The on-disk log file

mod error;
mod append;

pub use error::{SinkError, SinkResult};
pub use append::{append_entry, default_directory, AppendOutcome, ENCODING_SENTINEL};
