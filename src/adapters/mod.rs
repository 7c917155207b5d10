//! Adapters - Implementations of port interfaces.
//!
//! - `ai` - Execution bridges (Gemini, mock)
//! - `output` - Output sinks (in-memory, stdout)

pub mod ai;
pub mod output;

pub use ai::{GeminiConfig, GeminiExecutionBridge, MockError, MockExecutionBridge};
pub use output::{InMemoryOutputSink, StdoutOutputSink};
