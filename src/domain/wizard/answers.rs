//! AnswerRecord - the accumulated answers of one wizard run.
//!
//! The record is created empty when the user picks a content kind and is
//! only written by the step sequencer, which guarantees fields are filled in
//! step order.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{ImageStyle, ImageType, LengthFormat, TextCategory, Tone};
use crate::domain::foundation::ContentKind;

use super::{StepInput, WizardError, WizardStep};

/// Answers of the text flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextAnswers {
    pub category: Option<TextCategory>,
    pub objective: Option<String>,
    pub audience: Option<String>,
    pub tone: Option<Tone>,
    pub length: Option<LengthFormat>,
}

/// Answers of the image flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAnswers {
    pub image_type: Option<ImageType>,
    pub subject: Option<String>,
    pub style: Option<ImageStyle>,
}

/// Per-kind answer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AnswerRecord {
    Text(TextAnswers),
    Image(ImageAnswers),
}

impl AnswerRecord {
    /// Creates an empty record for a content kind.
    pub fn empty(kind: ContentKind) -> Self {
        match kind {
            ContentKind::Text => AnswerRecord::Text(TextAnswers::default()),
            ContentKind::Image => AnswerRecord::Image(ImageAnswers::default()),
        }
    }

    /// Returns the content kind of this record.
    pub fn kind(&self) -> ContentKind {
        match self {
            AnswerRecord::Text(_) => ContentKind::Text,
            AnswerRecord::Image(_) => ContentKind::Image,
        }
    }

    /// Returns true if no field has been answered.
    pub fn is_empty(&self) -> bool {
        match self {
            AnswerRecord::Text(a) => *a == TextAnswers::default(),
            AnswerRecord::Image(a) => *a == ImageAnswers::default(),
        }
    }

    /// Returns true if the slot owned by `step` holds an answer.
    ///
    /// Free-text slots count as filled only when not blank.
    pub fn is_filled(&self, step: WizardStep) -> bool {
        fn text_filled(value: &Option<String>) -> bool {
            value.as_deref().is_some_and(|v| !v.trim().is_empty())
        }

        match (self, step) {
            (AnswerRecord::Text(a), WizardStep::Category) => a.category.is_some(),
            (AnswerRecord::Text(a), WizardStep::Objective) => text_filled(&a.objective),
            (AnswerRecord::Text(a), WizardStep::Audience) => text_filled(&a.audience),
            (AnswerRecord::Text(a), WizardStep::Tone) => a.tone.is_some(),
            (AnswerRecord::Text(a), WizardStep::Length) => a.length.is_some(),
            (AnswerRecord::Image(a), WizardStep::ImageType) => a.image_type.is_some(),
            (AnswerRecord::Image(a), WizardStep::Subject) => text_filled(&a.subject),
            (AnswerRecord::Image(a), WizardStep::Style) => a.style.is_some(),
            _ => false,
        }
    }

    /// Writes `input` into the slot owned by `step`.
    pub(crate) fn set(&mut self, step: WizardStep, input: StepInput) -> Result<(), WizardError> {
        match (self, step, input) {
            (AnswerRecord::Text(a), WizardStep::Category, StepInput::Category(v)) => {
                a.category = Some(v)
            }
            (AnswerRecord::Text(a), WizardStep::Objective, StepInput::Text(v)) => {
                a.objective = Some(v)
            }
            (AnswerRecord::Text(a), WizardStep::Audience, StepInput::Text(v)) => {
                a.audience = Some(v)
            }
            (AnswerRecord::Text(a), WizardStep::Tone, StepInput::Tone(v)) => a.tone = Some(v),
            (AnswerRecord::Text(a), WizardStep::Length, StepInput::Length(v)) => {
                a.length = Some(v)
            }
            (AnswerRecord::Image(a), WizardStep::ImageType, StepInput::ImageType(v)) => {
                a.image_type = Some(v)
            }
            (AnswerRecord::Image(a), WizardStep::Subject, StepInput::Text(v)) => {
                a.subject = Some(v)
            }
            (AnswerRecord::Image(a), WizardStep::Style, StepInput::Style(v)) => a.style = Some(v),
            _ => return Err(WizardError::UnexpectedInput { step }),
        }
        Ok(())
    }

    /// Clears the slot owned by `step`.
    pub(crate) fn clear(&mut self, step: WizardStep) {
        match (self, step) {
            (AnswerRecord::Text(a), WizardStep::Category) => a.category = None,
            (AnswerRecord::Text(a), WizardStep::Objective) => a.objective = None,
            (AnswerRecord::Text(a), WizardStep::Audience) => a.audience = None,
            (AnswerRecord::Text(a), WizardStep::Tone) => a.tone = None,
            (AnswerRecord::Text(a), WizardStep::Length) => a.length = None,
            (AnswerRecord::Image(a), WizardStep::ImageType) => a.image_type = None,
            (AnswerRecord::Image(a), WizardStep::Subject) => a.subject = None,
            (AnswerRecord::Image(a), WizardStep::Style) => a.style = None,
            _ => {}
        }
    }
}
