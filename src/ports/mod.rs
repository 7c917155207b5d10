//! Ports - interfaces to the outside world.
//!
//! - `ExecutionBridge` - runs compiled prompts against a model
//! - `OutputSink` - copy-to-output hook

mod execution_bridge;
mod output_sink;

pub use execution_bridge::{BridgeError, BridgeInfo, ExecutionBridge};
pub use output_sink::OutputSink;
