//! CompiledPrompt - the immutable output of the prompt compiler.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::catalog::AiTarget;
use crate::domain::foundation::ContentKind;

/// Final prompt string together with the kind and target it was built for.
///
/// Fields are private and there are no mutators: a new run produces a new
/// value, copying or executing one never changes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledPrompt {
    text: String,
    kind: ContentKind,
    target: AiTarget,
}

impl CompiledPrompt {
    pub(crate) fn new(text: String, kind: ContentKind, target: AiTarget) -> Self {
        Self { text, kind, target }
    }

    /// Returns the prompt text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    pub fn target(&self) -> AiTarget {
        self.target
    }

    /// Consumes the prompt, returning the text.
    pub fn into_string(self) -> String {
        self.text
    }
}

impl AsRef<str> for CompiledPrompt {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for CompiledPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
