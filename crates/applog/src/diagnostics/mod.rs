//! Where the logger describes its own failures

mod traits;
mod noop;
mod console;
mod memory;

pub use traits::{DiagnosticSink, DiagnosticSinkExt, DiagnosticLevel, SharedSink};
pub use noop::NoOpSink;
pub use console::ConsoleSink;
pub use memory::MemorySink;
