//! State machine trait for enumerated flow states.
//!
//! Provides a consistent interface for validating and performing transitions
//! over the wizard steps and the top-level screens.

use super::ValidationError;

/// Trait for enums that represent state machines.
///
/// Implementors define the transition table and get validated
/// transition methods for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for Screen {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!(
///             (self, target),
///             (Home, AiTargetSelection) |
///             (AiTargetSelection, TextWizard) |
///             // ... etc
///         )
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Home => vec![AiTargetSelection, Templates, Examples, Course],
///             // ... etc
///         }
///     }
/// }
///
/// let next = Screen::Home.transition_to(Screen::AiTargetSelection)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
