//! Domain layer containing the wizard logic and its value types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (content kind, IDs, errors, state machine)
//! - `catalog` - Fixed choice sets and the template/example/course library
//! - `wizard` - Step definitions, answer record and the step sequencer
//! - `prompt` - Pure prompt compiler and its augmentation tables
//! - `execution` - Results of running a prompt against a model

pub mod catalog;
pub mod execution;
pub mod foundation;
pub mod prompt;
pub mod wizard;
