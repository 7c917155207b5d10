//! Prompt compilation.
//!
//! - `PromptCompiler` - pure `(AiTarget, AnswerRecord) -> CompiledPrompt`
//! - `AugmentationTable` - category clauses and target suffixes
//! - `CompiledPrompt` - immutable result

mod augmentation;
mod compiled;
mod compiler;

pub use augmentation::{
    AugmentationProfile, AugmentationTable, EMAIL_CLAUSE, FEYNMAN_CLAUSE, MIDJOURNEY_SUFFIX,
    PERSUASION_CLAUSE,
};
pub use compiled::CompiledPrompt;
pub use compiler::{CompileError, PromptCompiler, IMAGE_QUALITY};
