//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the prompt studio domain.

mod content_kind;
mod errors;
mod ids;
mod state_machine;

pub use content_kind::ContentKind;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::RunId;
pub use state_machine::StateMachine;
