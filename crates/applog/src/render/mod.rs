//! Turning a log request into text

mod clock;
mod date;
mod template;

pub use clock::{Clock, SharedClock, SystemClock, FixedClock};
pub use date::DateFormat;
pub use template::render_entry;
