//! Configuration error types

/// Errors that can occur while building a logger from configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Log filename must not be empty")]
    EmptyFilename,

    #[error("Invalid date format: {0:?}")]
    InvalidDateFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
