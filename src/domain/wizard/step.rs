//! WizardStep - named states of the guided prompt flow.
//!
//! Each question the wizard can ask is a variant; `Complete` is the single
//! terminal state reached after the last question of either flow. The
//! transition table below is the only place that knows which question
//! follows which, so an order such as "tone before objective" cannot be
//! expressed.
//!
//! # Text flow
//!
//! Category → Objective → Audience → Tone → Length → Complete
//!
//! # Image flow
//!
//! (ImageType →) Subject → Style → Complete

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{ContentKind, StateMachine};

/// A question in the wizard, or the terminal `Complete` state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Category,
    Objective,
    Audience,
    Tone,
    Length,
    ImageType,
    Subject,
    Style,
    Complete,
}

impl WizardStep {
    /// Returns true for steps answered with free text and an explicit continue.
    pub fn is_free_text(&self) -> bool {
        matches!(
            self,
            WizardStep::Objective | WizardStep::Audience | WizardStep::Subject
        )
    }

    /// Returns true for single-tap choice steps that advance on selection.
    pub fn is_choice(&self) -> bool {
        !self.is_free_text() && *self != WizardStep::Complete
    }

    /// Returns the content kind whose flow owns this step.
    pub fn kind(&self) -> Option<ContentKind> {
        match self {
            WizardStep::Category
            | WizardStep::Objective
            | WizardStep::Audience
            | WizardStep::Tone
            | WizardStep::Length => Some(ContentKind::Text),
            WizardStep::ImageType | WizardStep::Subject | WizardStep::Style => {
                Some(ContentKind::Image)
            }
            WizardStep::Complete => None,
        }
    }

    /// Returns the field name used in errors and logs.
    pub fn field_name(&self) -> &'static str {
        match self {
            WizardStep::Category => "category",
            WizardStep::Objective => "objective",
            WizardStep::Audience => "audience",
            WizardStep::Tone => "tone",
            WizardStep::Length => "length",
            WizardStep::ImageType => "image_type",
            WizardStep::Subject => "subject",
            WizardStep::Style => "style",
            WizardStep::Complete => "complete",
        }
    }

    /// Returns the question shown to the user.
    pub fn question(&self) -> &'static str {
        match self {
            WizardStep::Category => "Qual a categoria do texto?",
            WizardStep::Objective => "Qual o seu objetivo?",
            WizardStep::Audience => "Para quem é o texto?",
            WizardStep::Tone => "Qual o tom?",
            WizardStep::Length => "Qual o tamanho?",
            WizardStep::ImageType => "Que tipo de imagem?",
            WizardStep::Subject => "O que deseja ver?",
            WizardStep::Style => "Qual o estilo?",
            WizardStep::Complete => "Prompt pronto!",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field_name())
    }
}

impl StateMachine for WizardStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        use WizardStep::*;
        matches!(
            (self, target),
            (Category, Objective)
                | (Objective, Audience)
                | (Audience, Tone)
                | (Tone, Length)
                | (Length, Complete)
                | (ImageType, Subject)
                | (Subject, Style)
                | (Style, Complete)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use WizardStep::*;
        match self {
            Category => vec![Objective],
            Objective => vec![Audience],
            Audience => vec![Tone],
            Tone => vec![Length],
            Length => vec![Complete],
            ImageType => vec![Subject],
            Subject => vec![Style],
            Style => vec![Complete],
            Complete => vec![],
        }
    }
}
