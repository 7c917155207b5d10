//! Wizard - the step-by-step question flow.
//!
//! - `WizardStep` - named states with the transition table
//! - `StepSequence` - ordered questions per content kind
//! - `AnswerRecord` - accumulated answers
//! - `StepSequencer` - the state machine driving one run

mod answers;
mod errors;
mod input;
mod options;
mod sequencer;
mod step;
mod step_sequence;

pub use answers::{AnswerRecord, ImageAnswers, TextAnswers};
pub use errors::WizardError;
pub use input::StepInput;
pub use options::WizardOptions;
pub use sequencer::{StepOutcome, StepSequencer};
pub use step::WizardStep;
pub use step_sequence::StepSequence;
