//! Logger configuration
//!
//! - `LoggerConfig`: serde-friendly settings, optionally loaded from YAML
//! - `ConfigError`: raised only while building a logger, never while reporting

mod error;
mod file;

pub use error::{ConfigError, ConfigResult};
pub use file::{LoggerConfig, DEFAULT_FILENAME};
