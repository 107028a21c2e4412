//! Sink error types

use thiserror::Error;

/// Errors that can occur while appending an entry
///
/// These never leave [`Logger`](crate::Logger); they are surfaced here so the
/// append path can be tested and reported to a diagnostics sink.
#[derive(Error, Debug)]
pub enum SinkError {
    /// Opening, creating, seeking or writing the file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The new file could not be moved into place
    #[error("failed to persist new log file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

pub type SinkResult<T> = Result<T, SinkError>;
