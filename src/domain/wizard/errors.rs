//! Wizard error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::prompt::CompileError;

use super::WizardStep;

/// Errors raised by the step sequencer.
///
/// Every variant leaves the sequencer unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    /// A required free-text answer is blank.
    #[error("step '{step}' requires a non-empty answer")]
    InputIncomplete { step: WizardStep },

    /// The submitted value does not belong to the current question.
    #[error("input does not fit step '{step}'")]
    UnexpectedInput { step: WizardStep },

    /// The sequence already reached its terminal state.
    #[error("the wizard is already complete")]
    SequenceComplete,

    /// In-wizard step back is not enabled.
    #[error("stepping back is disabled")]
    StepBackDisabled,

    /// Step back requested at the first question.
    #[error("already at the first step")]
    AtFirstStep,

    /// The transition table rejected a move.
    #[error(transparent)]
    InvalidTransition(#[from] ValidationError),

    /// The compiler found the record incomplete.
    #[error(transparent)]
    Compile(#[from] CompileError),
}

impl WizardError {
    /// Returns the matching domain error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            WizardError::InputIncomplete { .. } => ErrorCode::InputIncomplete,
            WizardError::UnexpectedInput { .. } => ErrorCode::UnexpectedInput,
            WizardError::SequenceComplete => ErrorCode::SequenceComplete,
            WizardError::StepBackDisabled => ErrorCode::StepBackDisabled,
            WizardError::AtFirstStep => ErrorCode::AtFirstStep,
            WizardError::InvalidTransition(_) => ErrorCode::InvalidStateTransition,
            WizardError::Compile(_) => ErrorCode::IncompleteAnswers,
        }
    }
}

impl From<WizardError> for DomainError {
    fn from(err: WizardError) -> Self {
        let error = DomainError::new(err.code(), err.to_string());
        match &err {
            WizardError::InputIncomplete { step } | WizardError::UnexpectedInput { step } => {
                error.with_detail("step", step.field_name())
            }
            _ => error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_incomplete_names_the_step() {
        let err = WizardError::InputIncomplete {
            step: WizardStep::Objective,
        };
        assert_eq!(err.to_string(), "step 'objective' requires a non-empty answer");
    }

    #[test]
    fn converts_to_domain_error_with_step_detail() {
        let err: DomainError = WizardError::UnexpectedInput {
            step: WizardStep::Tone,
        }
        .into();
        assert_eq!(err.code, ErrorCode::UnexpectedInput);
        assert_eq!(err.details.get("step"), Some(&"tone".to_string()));
    }

    #[test]
    fn compile_errors_map_to_incomplete_answers() {
        let err = WizardError::from(CompileError::Incomplete {
            step: WizardStep::Audience,
        });
        assert_eq!(err.code(), ErrorCode::IncompleteAnswers);
    }
}
