//! StepSequencer - drives one wizard run through its questions.
//!
//! The sequencer owns the answer record for the run. It accepts input only
//! for the current step, refuses to move past a free-text step whose answer
//! is blank, and compiles the prompt on the transition out of the last step.
//!
//! # Usage
//!
//! ```ignore
//! let mut seq = StepSequencer::new(ContentKind::Image, AiTarget::Midjourney, &options);
//!
//! seq.submit_step(StepInput::text("a crystal tiger"))?;   // Recorded(Subject)
//! seq.advance()?;                                         // Advanced(Style)
//! let outcome = seq.submit_step(StepInput::Style(ImageStyle::Cyberpunk))?;
//! // Completed(prompt)
//! ```

use tracing::{debug, error, info};

use crate::domain::catalog::AiTarget;
use crate::domain::foundation::{ContentKind, StateMachine};
use crate::domain::prompt::{CompiledPrompt, PromptCompiler};

use super::{AnswerRecord, StepInput, StepSequence, WizardError, WizardOptions, WizardStep};

/// What a successful sequencer call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Free text stored; the user still has to continue.
    Recorded(WizardStep),
    /// Moved to the given step.
    Advanced(WizardStep),
    /// Left the last step; the prompt is compiled.
    Completed(CompiledPrompt),
}

/// Finite linear state machine over the questions of one run.
#[derive(Debug, Clone)]
pub struct StepSequencer {
    target: AiTarget,
    sequence: StepSequence,
    current: WizardStep,
    answers: AnswerRecord,
    compiler: PromptCompiler,
    allow_step_back: bool,
    compiled: Option<CompiledPrompt>,
}

impl StepSequencer {
    /// Starts a run at the first question with an empty record.
    pub fn new(kind: ContentKind, target: AiTarget, options: &WizardOptions) -> Self {
        Self::with_compiler(
            kind,
            target,
            options,
            PromptCompiler::for_profile(options.augmentation),
        )
    }

    /// Starts a run with a custom compiler.
    pub fn with_compiler(
        kind: ContentKind,
        target: AiTarget,
        options: &WizardOptions,
        compiler: PromptCompiler,
    ) -> Self {
        let sequence = StepSequence::for_kind(kind, options.include_image_type_step);
        Self {
            target,
            sequence,
            current: sequence.first(),
            answers: AnswerRecord::empty(kind),
            compiler,
            allow_step_back: options.allow_step_back,
            compiled: None,
        }
    }

    pub fn kind(&self) -> ContentKind {
        self.answers.kind()
    }

    pub fn target(&self) -> AiTarget {
        self.target
    }

    /// The question being asked, or `Complete`.
    pub fn current_step(&self) -> WizardStep {
        self.current
    }

    /// 1-based index of the current question. Stays at the last index once
    /// complete; there is no step beyond the last.
    pub fn step_index(&self) -> usize {
        self.sequence
            .position(self.current)
            .unwrap_or_else(|| self.sequence.last_step())
    }

    pub fn last_step(&self) -> usize {
        self.sequence.last_step()
    }

    pub fn sequence(&self) -> StepSequence {
        self.sequence
    }

    pub fn answers(&self) -> &AnswerRecord {
        &self.answers
    }

    pub fn is_complete(&self) -> bool {
        self.current == WizardStep::Complete
    }

    /// The prompt compiled at completion.
    pub fn compiled_prompt(&self) -> Option<&CompiledPrompt> {
        self.compiled.as_ref()
    }

    /// Writes an answer for the current step.
    ///
    /// Choice steps advance immediately. Free-text steps only record the
    /// value; blank text is rejected without touching the record.
    pub fn submit_step(&mut self, input: StepInput) -> Result<StepOutcome, WizardError> {
        let step = self.current;
        if step == WizardStep::Complete {
            return Err(WizardError::SequenceComplete);
        }
        if !input.fits(step) {
            return Err(WizardError::UnexpectedInput { step });
        }
        if input.is_blank() {
            debug!(step = %step, "Rejected blank answer");
            return Err(WizardError::InputIncomplete { step });
        }

        self.answers.set(step, input)?;
        debug!(step = %step, index = self.step_index(), "Answer recorded");

        if step.is_choice() {
            self.advance()
        } else {
            Ok(StepOutcome::Recorded(step))
        }
    }

    /// Continues past the current step.
    ///
    /// Gated on the current slot being filled. From the last question this
    /// compiles the prompt and enters `Complete`.
    pub fn advance(&mut self) -> Result<StepOutcome, WizardError> {
        let step = self.current;
        if step == WizardStep::Complete {
            return Err(WizardError::SequenceComplete);
        }
        if !self.answers.is_filled(step) {
            return Err(WizardError::InputIncomplete { step });
        }

        let next = self
            .sequence
            .next(step)
            .ok_or(WizardError::UnexpectedInput { step })?;
        let next = step.transition_to(next)?;

        if next == WizardStep::Complete {
            let prompt = self.compiler.compile(self.target, &self.answers).map_err(|e| {
                error!(error = %e, "Compiler rejected a record the sequencer accepted");
                WizardError::from(e)
            })?;

            info!(
                kind = %self.kind(),
                target = %self.target,
                chars = prompt.as_str().chars().count(),
                "Prompt compiled"
            );
            self.current = next;
            self.compiled = Some(prompt.clone());
            return Ok(StepOutcome::Completed(prompt));
        }

        self.current = next;
        debug!(step = %next, index = self.step_index(), "Advanced");
        Ok(StepOutcome::Advanced(next))
    }

    /// Steps back one question, clearing the current and later answers.
    ///
    /// Only available when enabled in the options and not after completion.
    pub fn retreat(&mut self) -> Result<WizardStep, WizardError> {
        if !self.allow_step_back {
            return Err(WizardError::StepBackDisabled);
        }
        if self.current == WizardStep::Complete {
            return Err(WizardError::SequenceComplete);
        }
        let previous = self
            .sequence
            .previous(self.current)
            .ok_or(WizardError::AtFirstStep)?;

        for &step in self.sequence.from_step(self.current) {
            self.answers.clear(step);
        }
        self.current = previous;
        debug!(step = %previous, "Stepped back");
        Ok(previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{ImageStyle, ImageType, LengthFormat, TextCategory, Tone};
    use crate::domain::wizard::TextAnswers;

    fn text_sequencer() -> StepSequencer {
        StepSequencer::new(ContentKind::Text, AiTarget::ChatGpt, &WizardOptions::default())
    }

    #[test]
    fn starts_at_step_one() {
        let seq = text_sequencer();
        assert_eq!(seq.step_index(), 1);
        assert_eq!(seq.current_step(), WizardStep::Category);
        assert_eq!(seq.last_step(), 5);
        assert!(seq.answers().is_empty());
    }

    #[test]
    fn choice_step_advances_on_selection() {
        let mut seq = text_sequencer();
        let outcome = seq
            .submit_step(StepInput::Category(TextCategory::Emails))
            .unwrap();
        assert_eq!(outcome, StepOutcome::Advanced(WizardStep::Objective));
        assert_eq!(seq.step_index(), 2);
    }

    #[test]
    fn free_text_step_waits_for_continue() {
        let mut seq = text_sequencer();
        seq.submit_step(StepInput::Category(TextCategory::Emails)).unwrap();

        let outcome = seq.submit_step(StepInput::text("vender curso")).unwrap();
        assert_eq!(outcome, StepOutcome::Recorded(WizardStep::Objective));
        assert_eq!(seq.step_index(), 2);

        assert_eq!(seq.advance().unwrap(), StepOutcome::Advanced(WizardStep::Audience));
        assert_eq!(seq.step_index(), 3);
    }

    #[test]
    fn blank_objective_never_advances() {
        let mut seq = text_sequencer();
        seq.submit_step(StepInput::Category(TextCategory::Trabalho)).unwrap();

        let err = seq.submit_step(StepInput::text("   ")).unwrap_err();
        assert_eq!(err, WizardError::InputIncomplete { step: WizardStep::Objective });
        assert_eq!(seq.advance().unwrap_err(), err);
        assert_eq!(seq.step_index(), 2);
    }

    #[test]
    fn blank_resubmission_keeps_previous_answer() {
        let mut seq = text_sequencer();
        seq.submit_step(StepInput::Category(TextCategory::Trabalho)).unwrap();
        seq.submit_step(StepInput::text("relatório")).unwrap();
        assert!(seq.submit_step(StepInput::text("")).is_err());

        match seq.answers() {
            AnswerRecord::Text(TextAnswers { objective, .. }) => {
                assert_eq!(objective.as_deref(), Some("relatório"))
            }
            other => panic!("unexpected record {:?}", other),
        }
    }

    #[test]
    fn wrong_input_shape_is_rejected_without_change() {
        let mut seq = text_sequencer();
        let err = seq.submit_step(StepInput::Tone(Tone::Serio)).unwrap_err();
        assert_eq!(err, WizardError::UnexpectedInput { step: WizardStep::Category });
        assert!(seq.answers().is_empty());
        assert_eq!(seq.step_index(), 1);
    }

    #[test]
    fn full_text_run_completes_with_prompt() {
        let mut seq = text_sequencer();
        seq.submit_step(StepInput::Category(TextCategory::Emails)).unwrap();
        seq.submit_step(StepInput::text("vender curso")).unwrap();
        seq.advance().unwrap();
        seq.submit_step(StepInput::text("VIP")).unwrap();
        seq.advance().unwrap();
        seq.submit_step(StepInput::Tone(Tone::Persuasivo)).unwrap();

        let outcome = seq.submit_step(StepInput::Length(LengthFormat::Curto)).unwrap();
        let prompt = match outcome {
            StepOutcome::Completed(prompt) => prompt,
            other => panic!("expected completion, got {:?}", other),
        };

        assert!(seq.is_complete());
        assert_eq!(seq.step_index(), 5);
        assert_eq!(seq.compiled_prompt(), Some(&prompt));
        assert!(prompt.as_str().ends_with("Otimizado para ChatGPT."));
    }

    #[test]
    fn nothing_is_accepted_after_completion() {
        let options = WizardOptions::default();
        let mut seq = StepSequencer::new(ContentKind::Image, AiTarget::DallE, &options);
        seq.submit_step(StepInput::text("a lighthouse")).unwrap();
        seq.advance().unwrap();
        seq.submit_step(StepInput::Style(ImageStyle::Pintura)).unwrap();

        assert_eq!(seq.advance().unwrap_err(), WizardError::SequenceComplete);
        assert_eq!(
            seq.submit_step(StepInput::text("again")).unwrap_err(),
            WizardError::SequenceComplete
        );
    }

    #[test]
    fn image_type_step_is_first_when_enabled() {
        let options = WizardOptions::default().with_image_type_step(true);
        let mut seq = StepSequencer::new(ContentKind::Image, AiTarget::Midjourney, &options);
        assert_eq!(seq.last_step(), 3);
        assert_eq!(seq.current_step(), WizardStep::ImageType);

        seq.submit_step(StepInput::ImageType(ImageType::Paisagem)).unwrap();
        assert_eq!(seq.current_step(), WizardStep::Subject);
    }

    #[test]
    fn retreat_is_disabled_by_default() {
        let mut seq = text_sequencer();
        seq.submit_step(StepInput::Category(TextCategory::Emails)).unwrap();
        assert_eq!(seq.retreat().unwrap_err(), WizardError::StepBackDisabled);
    }

    #[test]
    fn retreat_clears_current_and_later_answers() {
        let options = WizardOptions::default().with_step_back(true);
        let mut seq = StepSequencer::new(ContentKind::Text, AiTarget::Claude, &options);
        seq.submit_step(StepInput::Category(TextCategory::Emails)).unwrap();
        seq.submit_step(StepInput::text("draft")).unwrap();

        assert_eq!(seq.retreat().unwrap(), WizardStep::Category);
        assert_eq!(seq.step_index(), 1);
        assert!(seq.answers().is_filled(WizardStep::Category));
        assert!(!seq.answers().is_filled(WizardStep::Objective));
        assert_eq!(seq.retreat().unwrap_err(), WizardError::AtFirstStep);
    }
}
