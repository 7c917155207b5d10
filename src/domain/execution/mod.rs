//! Execution - what comes back from running a compiled prompt.

mod result;

pub use result::{ExecutionResult, FailureKind, GeneratedContent, ImagePayload};
