//! Output sink adapters.
//!
//! - `InMemoryOutputSink` - buffer for tests
//! - `StdoutOutputSink` - terminal output

mod in_memory;
mod stdout;

pub use in_memory::InMemoryOutputSink;
pub use stdout::StdoutOutputSink;
