//! Content pieces of a log request

use std::fmt::Display;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Content that could not be turned into UTF-8 text
#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("content is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),
}

/// One piece of a log message
///
/// Strings, errors and other `Display` values all normalize to `Text`.
/// `Bytes` is kept raw until the message is assembled, where invalid UTF-8
/// becomes an [`EncodingError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    Bytes(Vec<u8>),
}

impl Content {
    /// Human-readable description of any displayable value, typically an error
    pub fn describe<T: Display + ?Sized>(value: &T) -> Self {
        Content::Text(value.to_string())
    }
}

impl From<&str> for Content {
    fn from(value: &str) -> Self {
        Content::Text(value.to_string())
    }
}

impl From<String> for Content {
    fn from(value: String) -> Self {
        Content::Text(value)
    }
}

impl From<&String> for Content {
    fn from(value: &String) -> Self {
        Content::Text(value.clone())
    }
}

impl From<&[u8]> for Content {
    fn from(value: &[u8]) -> Self {
        Content::Bytes(value.to_vec())
    }
}

impl From<Vec<u8>> for Content {
    fn from(value: Vec<u8>) -> Self {
        Content::Bytes(value)
    }
}

/// Concatenate pieces in order with no separator
pub fn join_pieces<I>(pieces: I) -> Result<String, EncodingError>
where
    I: IntoIterator<Item = Content>,
{
    let mut joined = String::new();
    for piece in pieces {
        match piece {
            Content::Text(text) => joined.push_str(&text),
            Content::Bytes(bytes) => joined.push_str(&String::from_utf8(bytes)?),
        }
    }
    Ok(joined)
}
