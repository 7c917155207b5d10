//! Mock Execution Bridge for testing.
//!
//! Provides a configurable mock implementation of the ExecutionBridge port,
//! allowing tests and offline runs to proceed without calling a real model.
//!
//! # Features
//!
//! - Pre-configured responses (consumed in order)
//! - Simulated delays for in-flight testing
//! - Error injection
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let bridge = MockExecutionBridge::new()
//!     .with_text("Subject: 50% off")
//!     .with_delay(Duration::from_millis(100));
//!
//! let content = bridge.execute(&prompt, ContentKind::Text).await?;
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::execution::{GeneratedContent, ImagePayload};
use crate::domain::foundation::ContentKind;
use crate::domain::prompt::CompiledPrompt;
use crate::ports::{BridgeError, BridgeInfo, ExecutionBridge};

/// A recorded call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockCall {
    pub prompt: String,
    pub kind: ContentKind,
}

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return generated content.
    Success(GeneratedContent),
    /// Return an error.
    Error(MockError),
}

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockError {
    /// Simulate a missing API key.
    MissingCredential,
    /// Simulate a rejected API key.
    AuthenticationFailed,
    /// Simulate quota exhaustion.
    QuotaExceeded { message: String },
    /// Simulate a content-policy block.
    ContentPolicy { reason: String },
    /// Simulate service unavailable.
    Unavailable { message: String },
    /// Simulate network error.
    Network { message: String },
    /// Simulate timeout.
    Timeout { timeout_secs: u64 },
}

impl From<MockError> for BridgeError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::MissingCredential => BridgeError::MissingCredential,
            MockError::AuthenticationFailed => BridgeError::AuthenticationFailed,
            MockError::QuotaExceeded { message } => BridgeError::QuotaExceeded(message),
            MockError::ContentPolicy { reason } => BridgeError::content_policy(reason),
            MockError::Unavailable { message } => BridgeError::unavailable(message),
            MockError::Network { message } => BridgeError::network(message),
            MockError::Timeout { timeout_secs } => BridgeError::Timeout { timeout_secs },
        }
    }
}

/// Mock execution bridge.
#[derive(Debug, Clone)]
pub struct MockExecutionBridge {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    delay: Duration,
    calls: Arc<Mutex<Vec<MockCall>>>,
}

impl Default for MockExecutionBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl MockExecutionBridge {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queues a text response.
    pub fn with_text(self, content: impl Into<String>) -> Self {
        self.with_response(MockResponse::Success(GeneratedContent::Text(content.into())))
    }

    /// Queues an image response.
    pub fn with_image(self, payload: ImagePayload, caption: Option<&str>) -> Self {
        self.with_response(MockResponse::Success(GeneratedContent::Image {
            payload,
            caption: caption.map(str::to_string),
        }))
    }

    /// Queues an error response.
    pub fn with_error(self, error: MockError) -> Self {
        self.with_response(MockResponse::Error(error))
    }

    fn with_response(self, response: MockResponse) -> Self {
        lock(&self.responses).push_back(response);
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of calls made to this bridge.
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<MockCall> {
        lock(&self.calls).clone()
    }

    /// Gets the next response or an echo of the prompt.
    fn next_response(&self, prompt: &CompiledPrompt) -> MockResponse {
        lock(&self.responses).pop_front().unwrap_or_else(|| {
            MockResponse::Success(GeneratedContent::Text(format!(
                "Mock response to: {}",
                prompt.as_str()
            )))
        })
    }
}

/// Locks, recovering the data from a poisoned mutex.
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl ExecutionBridge for MockExecutionBridge {
    async fn execute(
        &self,
        prompt: &CompiledPrompt,
        kind: ContentKind,
    ) -> Result<GeneratedContent, BridgeError> {
        lock(&self.calls).push(MockCall {
            prompt: prompt.as_str().to_string(),
            kind,
        });

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_response(prompt) {
            MockResponse::Success(content) => Ok(content),
            MockResponse::Error(err) => Err(err.into()),
        }
    }

    fn bridge_info(&self) -> BridgeInfo {
        BridgeInfo::new("mock", "mock-text", "mock-image")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{AiTarget, LengthFormat, TextCategory, Tone};
    use crate::domain::prompt::PromptCompiler;
    use crate::domain::wizard::{AnswerRecord, TextAnswers};

    fn prompt() -> CompiledPrompt {
        let record = AnswerRecord::Text(TextAnswers {
            category: Some(TextCategory::Social),
            objective: Some("post".to_string()),
            audience: Some("devs".to_string()),
            tone: Some(Tone::Divertido),
            length: Some(LengthFormat::Curto),
        });
        PromptCompiler::default()
            .compile(AiTarget::Gemini, &record)
            .unwrap()
    }

    #[tokio::test]
    async fn returns_queued_responses_in_order() {
        let bridge = MockExecutionBridge::new()
            .with_text("first")
            .with_error(MockError::QuotaExceeded {
                message: "daily".to_string(),
            });

        assert_eq!(
            bridge.execute(&prompt(), ContentKind::Text).await.unwrap(),
            GeneratedContent::Text("first".to_string())
        );
        assert_eq!(
            bridge.execute(&prompt(), ContentKind::Text).await.unwrap_err(),
            BridgeError::QuotaExceeded("daily".to_string())
        );
    }

    #[tokio::test]
    async fn echoes_prompt_when_queue_is_empty() {
        let bridge = MockExecutionBridge::new();
        let p = prompt();
        match bridge.execute(&p, ContentKind::Text).await.unwrap() {
            GeneratedContent::Text(t) => assert!(t.ends_with(p.as_str())),
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn records_calls() {
        let bridge = MockExecutionBridge::new();
        bridge.execute(&prompt(), ContentKind::Image).await.unwrap();

        assert_eq!(bridge.call_count(), 1);
        let calls = bridge.get_calls();
        assert_eq!(calls[0].kind, ContentKind::Image);
        assert_eq!(calls[0].prompt, prompt().as_str());
    }

    #[test]
    fn mock_errors_keep_their_category() {
        assert!(BridgeError::from(MockError::MissingCredential).is_misconfiguration());
        assert!(!BridgeError::from(MockError::Timeout { timeout_secs: 1 }).is_misconfiguration());
    }
}
