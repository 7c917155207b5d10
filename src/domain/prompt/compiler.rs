//! PromptCompiler - pure rendering of an answer record into a prompt.
//!
//! # Text rule
//!
//! ```text
//! Atue como um [<CATEGORY>] sênior. Objetivo: <objective>. <category clauses>
//! Público: <audience>. Tom: <tone>. Tamanho: <length>. Otimizado para <target>.
//! ```
//!
//! # Image rule
//!
//! ```text
//! <style> <noun> of <subject>, 8k resolution, highly detailed, professional photography style. <target suffix>
//! ```
//!
//! Clause order is fixed. The compiler has no I/O and given the same inputs
//! always returns the same bytes.

use thiserror::Error;

use crate::domain::catalog::AiTarget;
use crate::domain::wizard::{AnswerRecord, ImageAnswers, TextAnswers, WizardStep};

use super::{AugmentationProfile, AugmentationTable, CompiledPrompt};

/// Quality descriptors appended to every image prompt.
pub const IMAGE_QUALITY: &str = "8k resolution, highly detailed, professional photography style";

/// Noun used when the run has no image-type answer.
const DEFAULT_IMAGE_NOUN: &str = "image";

/// Errors from the compiler. Only reachable when a caller bypasses the
/// step sequencer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("answer record is incomplete: '{step}' has no answer")]
    Incomplete { step: WizardStep },
}

/// Compiles answer records using an augmentation table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptCompiler {
    table: AugmentationTable,
}

impl Default for PromptCompiler {
    fn default() -> Self {
        Self::for_profile(AugmentationProfile::default())
    }
}

impl PromptCompiler {
    /// Creates a compiler over a custom table.
    pub fn new(table: AugmentationTable) -> Self {
        Self { table }
    }

    /// Creates a compiler over a built-in profile.
    pub fn for_profile(profile: AugmentationProfile) -> Self {
        Self::new(AugmentationTable::for_profile(profile))
    }

    /// Returns the lookup table in use.
    pub fn table(&self) -> &AugmentationTable {
        &self.table
    }

    /// Renders `answers` for `target`.
    pub fn compile(
        &self,
        target: AiTarget,
        answers: &AnswerRecord,
    ) -> Result<CompiledPrompt, CompileError> {
        let text = match answers {
            AnswerRecord::Text(a) => self.compile_text(target, a)?,
            AnswerRecord::Image(a) => self.compile_image(target, a)?,
        };
        Ok(CompiledPrompt::new(text, answers.kind(), target))
    }

    fn compile_text(&self, target: AiTarget, answers: &TextAnswers) -> Result<String, CompileError> {
        let category = required(answers.category, WizardStep::Category)?;
        let objective = required_text(&answers.objective, WizardStep::Objective)?;
        let audience = required_text(&answers.audience, WizardStep::Audience)?;
        let tone = required(answers.tone, WizardStep::Tone)?;
        let length = required(answers.length, WizardStep::Length)?;

        let mut prompt = format!(
            "Atue como um [{}] sênior. Objetivo: {}. ",
            category.label().to_uppercase(),
            objective
        );
        for clause in self.table.clauses_for(category) {
            prompt.push_str(clause);
        }
        prompt.push_str(&format!(
            "Público: {}. Tom: {}. Tamanho: {}. ",
            audience,
            tone.label(),
            length.label()
        ));
        prompt.push_str(&format!("Otimizado para {}.", target.label()));

        Ok(prompt)
    }

    fn compile_image(&self, target: AiTarget, answers: &ImageAnswers) -> Result<String, CompileError> {
        let subject = required_text(&answers.subject, WizardStep::Subject)?;
        let style = required(answers.style, WizardStep::Style)?;
        let noun = answers
            .image_type
            .map(|t| t.subject_noun())
            .unwrap_or(DEFAULT_IMAGE_NOUN);

        let mut prompt = format!(
            "{} {} of {}, {}. ",
            style.label(),
            noun,
            subject,
            IMAGE_QUALITY
        );
        if let Some(suffix) = self.table.suffix_for(target) {
            prompt.push_str(suffix);
        }

        Ok(prompt)
    }
}

fn required<T: Copy>(value: Option<T>, step: WizardStep) -> Result<T, CompileError> {
    value.ok_or(CompileError::Incomplete { step })
}

fn required_text(value: &Option<String>, step: WizardStep) -> Result<&str, CompileError> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(CompileError::Incomplete { step }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{ImageStyle, ImageType, LengthFormat, TextCategory, Tone};
    use crate::domain::foundation::ContentKind;
    use crate::domain::prompt::{EMAIL_CLAUSE, FEYNMAN_CLAUSE, MIDJOURNEY_SUFFIX, PERSUASION_CLAUSE};

    fn text_answers(category: TextCategory) -> AnswerRecord {
        AnswerRecord::Text(TextAnswers {
            category: Some(category),
            objective: Some("vender curso".to_string()),
            audience: Some("VIP".to_string()),
            tone: Some(Tone::Persuasivo),
            length: Some(LengthFormat::Curto),
        })
    }

    fn image_answers(image_type: Option<ImageType>) -> AnswerRecord {
        AnswerRecord::Image(ImageAnswers {
            image_type,
            subject: Some("a crystal tiger".to_string()),
            style: Some(ImageStyle::Cyberpunk),
        })
    }

    fn compiler() -> PromptCompiler {
        PromptCompiler::for_profile(AugmentationProfile::Full)
    }

    #[test]
    fn email_prompt_renders_exactly() {
        let prompt = compiler()
            .compile(AiTarget::ChatGpt, &text_answers(TextCategory::Emails))
            .unwrap();

        assert_eq!(
            prompt.as_str(),
            "Atue como um [E-MAILS E MENSAGENS] sênior. Objetivo: vender curso. \
             Foque em linha de assunto chamativa e CTA clara. \
             Público: VIP. Tom: Persuasivo. Tamanho: Curto. Otimizado para ChatGPT."
        );
        assert_eq!(prompt.kind(), ContentKind::Text);
        assert_eq!(prompt.target(), AiTarget::ChatGpt);
    }

    #[test]
    fn clauses_appear_in_contract_order() {
        let prompt = compiler()
            .compile(AiTarget::Claude, &text_answers(TextCategory::Estudos))
            .unwrap();
        let text = prompt.as_str();

        let role = text.find("Atue como um [ESTUDOS E APRENDIZADO] sênior.").unwrap();
        let objective = text.find("Objetivo: vender curso. ").unwrap();
        let clause = text.find(FEYNMAN_CLAUSE).unwrap();
        let audience = text.find("Público: VIP.").unwrap();
        let tone = text.find("Tom: Persuasivo.").unwrap();
        let length = text.find("Tamanho: Curto.").unwrap();
        let target = text.find("Otimizado para Claude.").unwrap();

        assert!(role < objective);
        assert!(objective < clause);
        assert!(clause < audience);
        assert!(audience < tone);
        assert!(tone < length);
        assert!(length < target);
        assert!(text.ends_with("Otimizado para Claude."));
    }

    #[test]
    fn unmatched_category_adds_no_clause() {
        let text = compiler()
            .compile(AiTarget::Gemini, &text_answers(TextCategory::Social))
            .unwrap()
            .into_string();
        assert!(text.contains("Objetivo: vender curso. Público: VIP."));
        for clause in [EMAIL_CLAUSE, PERSUASION_CLAUSE, FEYNMAN_CLAUSE] {
            assert!(!text.contains(clause));
        }
    }

    #[test]
    fn email_only_profile_skips_marketing_clause() {
        let text = PromptCompiler::for_profile(AugmentationProfile::EmailOnly)
            .compile(AiTarget::ChatGpt, &text_answers(TextCategory::Marketing))
            .unwrap()
            .into_string();
        assert!(!text.contains(PERSUASION_CLAUSE));
    }

    #[test]
    fn image_prompt_for_midjourney_ends_with_suffix() {
        let text = compiler()
            .compile(AiTarget::Midjourney, &image_answers(None))
            .unwrap()
            .into_string();
        assert_eq!(
            text,
            "Cyberpunk image of a crystal tiger, 8k resolution, highly detailed, \
             professional photography style.  --v 6.0"
        );
        assert!(text.ends_with(MIDJOURNEY_SUFFIX));
    }

    #[test]
    fn image_prompt_for_dalle_has_no_suffix() {
        let text = compiler()
            .compile(AiTarget::DallE, &image_answers(None))
            .unwrap()
            .into_string();
        assert!(!text.contains(MIDJOURNEY_SUFFIX));
        assert!(text.ends_with("professional photography style. "));
    }

    #[test]
    fn image_type_replaces_default_noun() {
        let text = compiler()
            .compile(AiTarget::DallE, &image_answers(Some(ImageType::Produto)))
            .unwrap()
            .into_string();
        assert!(text.starts_with("Cyberpunk product shot of a crystal tiger, "));
    }

    #[test]
    fn incomplete_text_record_is_a_precondition_error() {
        let mut record = text_answers(TextCategory::Emails);
        if let AnswerRecord::Text(a) = &mut record {
            a.audience = Some("   ".to_string());
        }
        let err = compiler().compile(AiTarget::ChatGpt, &record).unwrap_err();
        assert_eq!(err, CompileError::Incomplete { step: WizardStep::Audience });
    }

    #[test]
    fn empty_image_record_reports_first_missing_field() {
        let err = compiler()
            .compile(AiTarget::Midjourney, &AnswerRecord::empty(ContentKind::Image))
            .unwrap_err();
        assert_eq!(err, CompileError::Incomplete { step: WizardStep::Subject });
    }

    #[test]
    fn compiling_twice_is_byte_identical() {
        let record = text_answers(TextCategory::Vendas);
        let a = compiler().compile(AiTarget::Gemini, &record).unwrap();
        let b = compiler().compile(AiTarget::Gemini, &record).unwrap();
        assert_eq!(a.as_str().as_bytes(), b.as_str().as_bytes());
    }
}
