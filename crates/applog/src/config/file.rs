//! Logger configuration (YAML)
//!
//! The logger never reads configuration on its own. Hosts that keep their
//! settings in a YAML file can embed or load a `LoggerConfig` and hand it to
//! [`Logger::from_config`](crate::Logger::from_config).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::render::DateFormat;
use super::error::{ConfigError, ConfigResult};

/// Filename used when none is configured
pub const DEFAULT_FILENAME: &str = "applog.txt";

/// Settings a `Logger` is built from
///
/// Every field is optional in YAML:
///
/// ```yaml
/// filename: service.log
/// directory: /var/tmp/service
/// debug_build: false
/// date_format: "%Y-%m-%d %H:%M"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Name of the log file inside `directory`
    pub filename: String,

    /// Directory holding the log file; the per-user documents directory when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,

    /// Whether `Debug` entries are written
    pub debug_build: bool,

    /// `strftime` pattern for entry timestamps
    pub date_format: DateFormat,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            filename: DEFAULT_FILENAME.to_string(),
            directory: None,
            debug_build: cfg!(debug_assertions),
            date_format: DateFormat::default(),
        }
    }
}

impl LoggerConfig {
    /// Default settings with a different filename
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            ..Self::default()
        }
    }

    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    pub fn with_debug_build(mut self, debug_build: bool) -> Self {
        self.debug_build = debug_build;
        self
    }

    pub fn with_date_format(mut self, date_format: DateFormat) -> Self {
        self.date_format = date_format;
        self
    }

    /// Check the settings can build a logger
    pub fn validate(&self) -> ConfigResult<()> {
        if self.filename.trim().is_empty() {
            return Err(ConfigError::EmptyFilename);
        }
        Ok(())
    }

    /// Parse settings from YAML
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let config: LoggerConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load settings from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Serialize settings to YAML
    pub fn to_yaml_string(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.filename, "applog.txt");
        assert!(config.directory.is_none());
        assert_eq!(config.debug_build, cfg!(debug_assertions));
        assert_eq!(config.date_format.pattern(), DateFormat::SHORT);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = LoggerConfig::from_yaml_str("filename: service.log\ndebug_build: false\n").unwrap();
        assert_eq!(config.filename, "service.log");
        assert!(!config.debug_build);
        assert!(config.directory.is_none());
        assert_eq!(config.date_format, DateFormat::short());
    }

    #[test]
    fn test_full_yaml() {
        let yaml = "filename: t.txt\ndirectory: /var/tmp/app\ndebug_build: true\ndate_format: \"%Y-%m-%d\"\n";
        let config = LoggerConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.directory, Some(PathBuf::from("/var/tmp/app")));
        assert!(config.debug_build);
        assert_eq!(config.date_format.pattern(), "%Y-%m-%d");
    }

    #[test]
    fn test_invalid_yaml_values() {
        assert!(matches!(
            LoggerConfig::from_yaml_str("filename: \"  \"\n"),
            Err(ConfigError::EmptyFilename)
        ));
        assert!(matches!(
            LoggerConfig::from_yaml_str("date_format: \"%!\"\n"),
            Err(ConfigError::Serialization(_))
        ));
    }

    #[test]
    fn test_yaml_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("applog.yaml");
        let config = LoggerConfig::new("t.txt")
            .with_directory(dir.path())
            .with_debug_build(false);

        fs::write(&path, config.to_yaml_string().unwrap()).unwrap();

        assert_eq!(LoggerConfig::from_yaml_file(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_yaml_file() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            LoggerConfig::from_yaml_file(dir.path().join("absent.yaml")),
            Err(ConfigError::Io(_))
        ));
    }
}
