//! ContentKind enum: what a wizard run produces.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Whether a run produces a text-oriented or an image-oriented prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Text,
    Image,
}

impl ContentKind {
    /// Returns both kinds in menu order.
    pub fn all() -> &'static [ContentKind] {
        &[ContentKind::Text, ContentKind::Image]
    }

    /// Returns the wire identifier.
    pub fn id(&self) -> &'static str {
        match self {
            ContentKind::Text => "text",
            ContentKind::Image => "image",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ContentKind::Text => "Texto",
            ContentKind::Image => "Imagem",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for ContentKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ContentKind::all()
            .iter()
            .copied()
            .find(|k| {
                k.id().eq_ignore_ascii_case(needle) || k.display_name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| ValidationError::unknown_entry("content kind", s))
    }
}
