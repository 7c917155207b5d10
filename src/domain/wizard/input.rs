//! StepInput - a typed answer to one wizard question.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{ImageStyle, ImageType, LengthFormat, TextCategory, Tone};
use crate::domain::foundation::ValidationError;

use super::WizardStep;

/// Value submitted for the current step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum StepInput {
    Category(TextCategory),
    /// Free text for objective, audience or subject.
    Text(String),
    Tone(Tone),
    Length(LengthFormat),
    ImageType(ImageType),
    Style(ImageStyle),
}

impl StepInput {
    /// Creates a free-text input.
    pub fn text(value: impl Into<String>) -> Self {
        StepInput::Text(value.into())
    }

    /// Returns true if this input has the shape `step` expects.
    pub fn fits(&self, step: WizardStep) -> bool {
        matches!(
            (self, step),
            (StepInput::Category(_), WizardStep::Category)
                | (StepInput::Text(_), WizardStep::Objective)
                | (StepInput::Text(_), WizardStep::Audience)
                | (StepInput::Text(_), WizardStep::Subject)
                | (StepInput::Tone(_), WizardStep::Tone)
                | (StepInput::Length(_), WizardStep::Length)
                | (StepInput::ImageType(_), WizardStep::ImageType)
                | (StepInput::Style(_), WizardStep::Style)
        )
    }

    /// Returns true for free text that is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        matches!(self, StepInput::Text(value) if value.trim().is_empty())
    }

    /// Parses raw user input for `step`.
    ///
    /// Choice steps accept a catalog id or label; free-text steps take the
    /// raw value unchanged (blank values are gated later by the sequencer).
    pub fn parse_for(step: WizardStep, raw: &str) -> Result<Self, ValidationError> {
        match step {
            WizardStep::Category => Ok(StepInput::Category(raw.parse()?)),
            WizardStep::Objective | WizardStep::Audience | WizardStep::Subject => {
                Ok(StepInput::text(raw))
            }
            WizardStep::Tone => Ok(StepInput::Tone(raw.parse()?)),
            WizardStep::Length => Ok(StepInput::Length(raw.parse()?)),
            WizardStep::ImageType => Ok(StepInput::ImageType(raw.parse()?)),
            WizardStep::Style => Ok(StepInput::Style(raw.parse()?)),
            WizardStep::Complete => Err(ValidationError::invalid_format(
                "step",
                "the wizard is already complete",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_fits_only_free_text_steps() {
        let input = StepInput::text("hello");
        assert!(input.fits(WizardStep::Objective));
        assert!(input.fits(WizardStep::Subject));
        assert!(!input.fits(WizardStep::Tone));
        assert!(!input.fits(WizardStep::Complete));
    }

    #[test]
    fn blank_detects_whitespace_only_text() {
        assert!(StepInput::text("   \t").is_blank());
        assert!(!StepInput::text(" x ").is_blank());
        assert!(!StepInput::Tone(Tone::Serio).is_blank());
    }

    #[test]
    fn parse_for_uses_step_catalog() {
        assert_eq!(
            StepInput::parse_for(WizardStep::Tone, "Persuasivo").unwrap(),
            StepInput::Tone(Tone::Persuasivo)
        );
        assert_eq!(
            StepInput::parse_for(WizardStep::Style, "arte digital").unwrap(),
            StepInput::Style(ImageStyle::ArteDigital)
        );
        assert!(StepInput::parse_for(WizardStep::Length, "Enorme").is_err());
    }

    #[test]
    fn parse_for_keeps_free_text_verbatim() {
        assert_eq!(
            StepInput::parse_for(WizardStep::Audience, "  Meus clientes VIP ").unwrap(),
            StepInput::text("  Meus clientes VIP ")
        );
    }

    #[test]
    fn parse_for_complete_is_rejected() {
        assert!(StepInput::parse_for(WizardStep::Complete, "anything").is_err());
    }
}
