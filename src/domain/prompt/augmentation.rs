//! Static lookup tables for conditional prompt clauses.
//!
//! The compiler never branches on a specific category or target. It asks
//! the table: categories map to extra clauses inserted after the objective,
//! targets map to a parameter suffix appended to image prompts. Supporting a
//! new category or target is a table entry.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::catalog::{AiTarget, TextCategory};

/// Clause for email-like categories.
pub const EMAIL_CLAUSE: &str = "Foque em linha de assunto chamativa e CTA clara. ";

/// Clause for marketing-like categories.
pub const PERSUASION_CLAUSE: &str = "Use gatilhos de escassez e copywriting persuasivo. ";

/// Clause for study/education categories.
pub const FEYNMAN_CLAUSE: &str = "Use a técnica Feynman para explicar. ";

/// Midjourney model/version parameters.
pub const MIDJOURNEY_SUFFIX: &str = " --v 6.0";

/// Which built-in augmentation table to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AugmentationProfile {
    /// Email, marketing/sales and study clauses.
    #[default]
    Full,
    /// Only the email clause.
    EmailOnly,
}

/// Category → clauses and target → suffix lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AugmentationTable {
    category_clauses: HashMap<TextCategory, Vec<String>>,
    target_suffixes: HashMap<AiTarget, String>,
}

impl AugmentationTable {
    /// Table with no entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Built-in table for a profile.
    pub fn for_profile(profile: AugmentationProfile) -> Self {
        let table = Self::empty()
            .with_category_clause(TextCategory::Emails, EMAIL_CLAUSE)
            .with_target_suffix(AiTarget::Midjourney, MIDJOURNEY_SUFFIX);

        match profile {
            AugmentationProfile::EmailOnly => table,
            AugmentationProfile::Full => table
                .with_category_clause(TextCategory::Marketing, PERSUASION_CLAUSE)
                .with_category_clause(TextCategory::Vendas, PERSUASION_CLAUSE)
                .with_category_clause(TextCategory::Estudos, FEYNMAN_CLAUSE),
        }
    }

    /// Appends a clause for a category. Clauses render in insertion order.
    pub fn with_category_clause(mut self, category: TextCategory, clause: impl Into<String>) -> Self {
        self.category_clauses
            .entry(category)
            .or_default()
            .push(clause.into());
        self
    }

    /// Sets the suffix for a target, replacing any previous one.
    pub fn with_target_suffix(mut self, target: AiTarget, suffix: impl Into<String>) -> Self {
        self.target_suffixes.insert(target, suffix.into());
        self
    }

    /// Clauses for a category; empty when unmatched.
    pub fn clauses_for(&self, category: TextCategory) -> &[String] {
        self.category_clauses
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Suffix for a target, if any.
    pub fn suffix_for(&self, target: AiTarget) -> Option<&str> {
        self.target_suffixes.get(&target).map(String::as_str)
    }
}
