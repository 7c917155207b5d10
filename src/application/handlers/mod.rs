//! Command handlers.

mod copy_output;
mod execute_prompt;

pub use copy_output::{CopyOutputCommand, CopyOutputHandler, CopySource};
pub use execute_prompt::{ExecutePromptCommand, ExecutePromptHandler, ExecutePromptResult};
