//! Date pattern used in rendered entries

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, ConfigResult};

/// A validated `strftime` pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateFormat {
    pattern: String,
}

impl DateFormat {
    /// Short date and short time, e.g. `10/18/26, 4:57 PM`
    pub const SHORT: &'static str = "%-m/%-d/%y, %-I:%M %p";

    pub fn new(pattern: impl Into<String>) -> ConfigResult<Self> {
        let pattern = pattern.into();
        if pattern.is_empty() || StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::InvalidDateFormat(pattern));
        }
        Ok(Self { pattern })
    }

    pub fn short() -> Self {
        Self {
            pattern: Self::SHORT.to_string(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn format(&self, at: &DateTime<Local>) -> String {
        let mut out = String::new();
        if write!(out, "{}", at.format(&self.pattern)).is_err() {
            // specifier not representable for this value
            out.clear();
            let _ = write!(out, "{}", at.format(Self::SHORT));
        }
        out
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self::short()
    }
}

impl TryFrom<String> for DateFormat {
    type Error = ConfigError;

    fn try_from(pattern: String) -> Result<Self, Self::Error> {
        Self::new(pattern)
    }
}

impl From<DateFormat> for String {
    fn from(format: DateFormat) -> Self {
        format.pattern
    }
}
