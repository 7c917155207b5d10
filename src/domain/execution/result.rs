//! Execution outcomes.
//!
//! `GeneratedContent` is what a bridge hands back on success.
//! `ExecutionResult` is what the view shows once a run resolves: exactly
//! one of text, image or failure.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Raw image bytes with their MIME type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePayload {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImagePayload {
    pub fn new(mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// PNG payload, the format image models return by default.
    pub fn png(bytes: Vec<u8>) -> Self {
        Self::new("image/png", bytes)
    }

    /// Renders as `data:<mime>;base64,<data>` for inline display.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Successful bridge output.
///
/// Image requests may come back as text (a refusal or a caption only).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedContent {
    Text(String),
    Image {
        payload: ImagePayload,
        caption: Option<String>,
    },
}

/// Why an execution failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Credential missing or rejected. Fixable by the operator.
    Misconfiguration,
    /// The remote service failed or refused the request.
    Service,
}

/// Terminal state of one execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionResult {
    Text {
        content: String,
    },
    Image {
        payload: ImagePayload,
        caption: Option<String>,
    },
    Failure {
        kind: FailureKind,
        reason: String,
    },
}

impl ExecutionResult {
    pub fn failure(kind: FailureKind, reason: impl Into<String>) -> Self {
        Self::Failure {
            kind,
            reason: reason.into(),
        }
    }

    pub fn text_result(&self) -> Option<&str> {
        match self {
            Self::Text { content } => Some(content),
            _ => None,
        }
    }

    pub fn image_result(&self) -> Option<(&ImagePayload, Option<&str>)> {
        match self {
            Self::Image { payload, caption } => Some((payload, caption.as_deref())),
            _ => None,
        }
    }

    pub fn failure_reason(&self) -> Option<(FailureKind, &str)> {
        match self {
            Self::Failure { kind, reason } => Some((*kind, reason)),
            _ => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }
}

impl From<GeneratedContent> for ExecutionResult {
    fn from(content: GeneratedContent) -> Self {
        match content {
            GeneratedContent::Text(content) => Self::Text { content },
            GeneratedContent::Image { payload, caption } => Self::Image { payload, caption },
        }
    }
}
