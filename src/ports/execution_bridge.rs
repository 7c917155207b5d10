//! Execution Bridge Port - runs a compiled prompt against a generative model.
//!
//! The wizard never talks to a model directly. The execution handler calls
//! this port once per run and converts any error into a failure result.
//!
//! # Design
//!
//! - One call per execution, no retries
//! - Image requests may yield text; callers handle both content shapes
//! - Errors separate misconfiguration from service failures
//!
//! # Example
//!
//! ```ignore
//! struct EchoBridge;
//!
//! #[async_trait]
//! impl ExecutionBridge for EchoBridge {
//!     async fn execute(
//!         &self,
//!         prompt: &CompiledPrompt,
//!         _kind: ContentKind,
//!     ) -> Result<GeneratedContent, BridgeError> {
//!         Ok(GeneratedContent::Text(prompt.as_str().to_string()))
//!     }
//!
//!     fn bridge_info(&self) -> BridgeInfo {
//!         BridgeInfo::new("echo", "echo", "echo")
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::execution::GeneratedContent;
use crate::domain::foundation::ContentKind;
use crate::domain::prompt::CompiledPrompt;

/// Port for running prompts.
#[async_trait]
pub trait ExecutionBridge: Send + Sync {
    /// Runs `prompt` and returns the generated content.
    ///
    /// `kind` selects the model family (text or image).
    async fn execute(
        &self,
        prompt: &CompiledPrompt,
        kind: ContentKind,
    ) -> Result<GeneratedContent, BridgeError>;

    /// Get bridge information (name and models).
    fn bridge_info(&self) -> BridgeInfo;
}

/// Bridge identification for logs and the result screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeInfo {
    /// Bridge name (e.g., "gemini", "mock").
    pub name: String,
    /// Model used for text runs.
    pub text_model: String,
    /// Model used for image runs.
    pub image_model: String,
}

impl BridgeInfo {
    pub fn new(
        name: impl Into<String>,
        text_model: impl Into<String>,
        image_model: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            text_model: text_model.into(),
            image_model: image_model.into(),
        }
    }

    /// Model that serves `kind`.
    pub fn model_for(&self, kind: ContentKind) -> &str {
        match kind {
            ContentKind::Text => &self.text_model,
            ContentKind::Image => &self.image_model,
        }
    }
}

/// Execution bridge errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BridgeError {
    /// No API key configured.
    #[error("API key is not configured")]
    MissingCredential,

    /// API key rejected by the service.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Quota or rate limit hit.
    #[error("quota exceeded: {0}")]
    QuotaExceeded(String),

    /// Prompt or output blocked by the service's content policy.
    #[error("content policy rejection: {reason}")]
    ContentPolicy {
        /// Block reason reported by the service.
        reason: String,
    },

    /// Service rejected the request as malformed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Service is unavailable.
    #[error("service unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// Response could not be understood.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl BridgeError {
    /// Creates a content policy error.
    pub fn content_policy(reason: impl Into<String>) -> Self {
        Self::ContentPolicy {
            reason: reason.into(),
        }
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a malformed response error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }

    /// Returns true when the operator, not the service, has to act.
    pub fn is_misconfiguration(&self) -> bool {
        matches!(
            self,
            BridgeError::MissingCredential | BridgeError::AuthenticationFailed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_errors_are_misconfiguration() {
        assert!(BridgeError::MissingCredential.is_misconfiguration());
        assert!(BridgeError::AuthenticationFailed.is_misconfiguration());
    }

    #[test]
    fn service_errors_are_not_misconfiguration() {
        let errors = [
            BridgeError::QuotaExceeded("daily".to_string()),
            BridgeError::content_policy("SAFETY"),
            BridgeError::InvalidRequest("bad".to_string()),
            BridgeError::unavailable("503"),
            BridgeError::network("reset"),
            BridgeError::Timeout { timeout_secs: 60 },
            BridgeError::malformed("no candidates"),
        ];
        for err in errors {
            assert!(!err.is_misconfiguration(), "{err}");
        }
    }

    #[test]
    fn bridge_info_picks_model_per_kind() {
        let info = BridgeInfo::new("gemini", "gemini-2.5-flash", "gemini-2.5-flash-image");
        assert_eq!(info.model_for(ContentKind::Text), "gemini-2.5-flash");
        assert_eq!(info.model_for(ContentKind::Image), "gemini-2.5-flash-image");
    }

    #[test]
    fn error_messages_are_readable() {
        assert_eq!(
            BridgeError::content_policy("SAFETY").to_string(),
            "content policy rejection: SAFETY"
        );
        assert_eq!(
            BridgeError::Timeout { timeout_secs: 60 }.to_string(),
            "request timed out after 60s"
        );
    }
}
