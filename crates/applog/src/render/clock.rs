//! Time sources for entry timestamps

use std::sync::Arc;

use chrono::{DateTime, Duration, Local};
use parking_lot::Mutex;

/// Source of the timestamp stamped on each entry
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Type alias for an Arc-wrapped clock
pub type SharedClock = Arc<dyn Clock>;

/// Wall-clock time in the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock frozen at a settable instant
///
/// Lets tests render byte-identical entries.
#[derive(Debug)]
pub struct FixedClock {
    instant: Mutex<DateTime<Local>>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Local>) -> Self {
        Self {
            instant: Mutex::new(instant),
        }
    }

    /// Move the clock to a new instant
    pub fn set(&self, instant: DateTime<Local>) {
        *self.instant.lock() = instant;
    }

    /// Move the clock forward
    pub fn advance(&self, by: Duration) {
        let mut instant = self.instant.lock();
        *instant = *instant + by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        *self.instant.lock()
    }
}
