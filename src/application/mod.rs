//! Application layer - handlers and the view controller.
//!
//! Handlers coordinate ports for a single command. The view controller
//! owns screen flow and the active wizard run.

pub mod handlers;
mod view_controller;

pub use handlers::{
    CopyOutputCommand, CopyOutputHandler, CopySource, ExecutePromptCommand, ExecutePromptHandler,
    ExecutePromptResult,
};
pub use view_controller::{ExecutionState, ExecutionTicket, Screen, ViewController};
