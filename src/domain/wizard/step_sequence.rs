//! StepSequence - Centralized ordering logic for wizard steps.
//!
//! The text flow always has 5 questions. The image flow has 2, or 3 when the
//! image-type pre-step is enabled. All position arithmetic goes through this
//! type so the sequencer never compares raw step numbers.

use crate::domain::foundation::ContentKind;

use super::WizardStep;

const TEXT_STEPS: [WizardStep; 5] = [
    WizardStep::Category,
    WizardStep::Objective,
    WizardStep::Audience,
    WizardStep::Tone,
    WizardStep::Length,
];

const IMAGE_STEPS: [WizardStep; 2] = [WizardStep::Subject, WizardStep::Style];

const IMAGE_STEPS_WITH_TYPE: [WizardStep; 3] =
    [WizardStep::ImageType, WizardStep::Subject, WizardStep::Style];

/// Ordered list of questions for one flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSequence {
    steps: &'static [WizardStep],
}

impl StepSequence {
    /// Returns the sequence for a content kind.
    pub fn for_kind(kind: ContentKind, include_image_type_step: bool) -> Self {
        let steps: &'static [WizardStep] = match kind {
            ContentKind::Text => &TEXT_STEPS,
            ContentKind::Image if include_image_type_step => &IMAGE_STEPS_WITH_TYPE,
            ContentKind::Image => &IMAGE_STEPS,
        };
        Self { steps }
    }

    /// Returns all steps in order.
    pub fn steps(&self) -> &'static [WizardStep] {
        self.steps
    }

    /// Number of questions; also the 1-based index of the last step.
    pub fn last_step(&self) -> usize {
        self.steps.len()
    }

    /// Returns the first question.
    pub fn first(&self) -> WizardStep {
        self.steps.first().copied().unwrap_or(WizardStep::Complete)
    }

    /// Returns the 1-based position of a step, if it belongs to this sequence.
    pub fn position(&self, step: WizardStep) -> Option<usize> {
        self.steps.iter().position(|&s| s == step).map(|idx| idx + 1)
    }

    /// Returns true if the step is the last question.
    pub fn is_last(&self, step: WizardStep) -> bool {
        self.steps.last() == Some(&step)
    }

    /// Returns the step after `step`; `Complete` after the last question.
    pub fn next(&self, step: WizardStep) -> Option<WizardStep> {
        let idx = self.steps.iter().position(|&s| s == step)?;
        Some(self.steps.get(idx + 1).copied().unwrap_or(WizardStep::Complete))
    }

    /// Returns the step before `step`, or None at the first question.
    pub fn previous(&self, step: WizardStep) -> Option<WizardStep> {
        let idx = self.steps.iter().position(|&s| s == step)?;
        idx.checked_sub(1).map(|prev| self.steps[prev])
    }

    /// Returns `step` and every step after it.
    pub fn from_step(&self, step: WizardStep) -> &'static [WizardStep] {
        match self.steps.iter().position(|&s| s == step) {
            Some(idx) => &self.steps[idx..],
            None => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::StateMachine;

    #[test]
    fn first_is_the_opening_question() {
        assert_eq!(StepSequence::for_kind(ContentKind::Text, false).first(), WizardStep::Category);
        assert_eq!(StepSequence::for_kind(ContentKind::Image, false).first(), WizardStep::Subject);
        assert_eq!(StepSequence::for_kind(ContentKind::Image, true).first(), WizardStep::ImageType);
    }

    #[test]
    fn last_step_per_flow() {
        assert_eq!(StepSequence::for_kind(ContentKind::Text, false).last_step(), 5);
        assert_eq!(StepSequence::for_kind(ContentKind::Text, true).last_step(), 5);
        assert_eq!(StepSequence::for_kind(ContentKind::Image, false).last_step(), 2);
        assert_eq!(StepSequence::for_kind(ContentKind::Image, true).last_step(), 3);
    }

    #[test]
    fn every_consecutive_pair_is_a_valid_transition() {
        for (kind, with_type) in [
            (ContentKind::Text, false),
            (ContentKind::Image, false),
            (ContentKind::Image, true),
        ] {
            let seq = StepSequence::for_kind(kind, with_type);
            for &step in seq.steps() {
                let next = seq.next(step).unwrap();
                assert!(step.can_transition_to(&next), "{:?} -> {:?}", step, next);
            }
        }
    }

    #[test]
    fn next_after_last_is_complete() {
        let seq = StepSequence::for_kind(ContentKind::Image, false);
        assert_eq!(seq.next(WizardStep::Style), Some(WizardStep::Complete));
        assert_eq!(seq.next(WizardStep::Category), None);
    }

    #[test]
    fn previous_stops_at_first_step() {
        let seq = StepSequence::for_kind(ContentKind::Text, false);
        assert_eq!(seq.previous(WizardStep::Audience), Some(WizardStep::Objective));
        assert_eq!(seq.previous(WizardStep::Category), None);
    }

    #[test]
    fn positions_are_one_based() {
        let seq = StepSequence::for_kind(ContentKind::Image, true);
        assert_eq!(seq.position(WizardStep::ImageType), Some(1));
        assert_eq!(seq.position(WizardStep::Style), Some(3));
        assert_eq!(seq.position(WizardStep::Tone), None);
    }

    #[test]
    fn from_step_returns_tail() {
        let seq = StepSequence::for_kind(ContentKind::Text, false);
        assert_eq!(
            seq.from_step(WizardStep::Tone),
            &[WizardStep::Tone, WizardStep::Length]
        );
        assert!(seq.from_step(WizardStep::Subject).is_empty());
    }
}
