//! Gemini Bridge - ExecutionBridge over Google's Generative Language API.
//!
//! Text runs go to the text model, image runs to the image model. Both use
//! the same `generateContent` endpoint.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GeminiConfig::new(Some(api_key))
//!     .with_text_model("gemini-2.5-flash")
//!     .with_image_model("gemini-2.5-flash-image");
//!
//! let bridge = GeminiExecutionBridge::new(config)?;
//! ```
//!
//! # Response mapping
//!
//! Text parts are concatenated. The first `inlineData` part is decoded into
//! the image payload and any text becomes its caption. A prompt blocked by
//! the service surfaces as a content-policy error.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::domain::execution::{GeneratedContent, ImagePayload};
use crate::domain::foundation::ContentKind;
use crate::domain::prompt::CompiledPrompt;
use crate::ports::{BridgeError, BridgeInfo, ExecutionBridge};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

/// Finish reasons that mean the candidate was withheld by policy.
const BLOCKING_FINISH_REASONS: &[&str] = &["SAFETY", "PROHIBITED_CONTENT", "BLOCKLIST", "SPII"];

/// Configuration for the Gemini bridge.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key; absent means every execution fails as misconfiguration.
    api_key: Option<Secret<String>>,
    /// Model for text runs.
    pub text_model: String,
    /// Model for image runs.
    pub image_model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Creates a configuration. Blank keys count as missing.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key
                .filter(|k| !k.trim().is_empty())
                .map(Secret::new),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    pub fn with_text_model(mut self, model: impl Into<String>) -> Self {
        self.text_model = model.into();
        self
    }

    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_ref().map(|k| k.expose_secret().as_str())
    }

    fn model_for(&self, kind: ContentKind) -> &str {
        match kind {
            ContentKind::Text => &self.text_model,
            ContentKind::Image => &self.image_model,
        }
    }
}

/// Gemini implementation of the execution bridge.
pub struct GeminiExecutionBridge {
    config: GeminiConfig,
    client: Client,
}

impl GeminiExecutionBridge {
    /// Creates a bridge, building its HTTP client.
    pub fn new(config: GeminiConfig) -> Result<Self, BridgeError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| BridgeError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds the generateContent endpoint URL for `model`.
    fn generate_url(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        )
    }

    async fn send_request(
        &self,
        api_key: &str,
        model: &str,
        prompt: &CompiledPrompt,
    ) -> Result<String, BridgeError> {
        let request = GenerateRequest::from_prompt(prompt.as_str());

        let response = self
            .client
            .post(self.generate_url(model))
            .header("x-goog-api-key", api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    BridgeError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    BridgeError::network(format!("Connection failed: {}", e))
                } else {
                    BridgeError::network(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BridgeError::network(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(map_status(status, &body));
        }
        Ok(body)
    }
}

#[async_trait]
impl ExecutionBridge for GeminiExecutionBridge {
    async fn execute(
        &self,
        prompt: &CompiledPrompt,
        kind: ContentKind,
    ) -> Result<GeneratedContent, BridgeError> {
        let api_key = match self.config.api_key() {
            Some(key) => key,
            None => {
                warn!("Execution requested without an API key");
                return Err(BridgeError::MissingCredential);
            }
        };

        let model = self.config.model_for(kind);
        info!(model = %model, kind = %kind, "Calling generateContent");

        let body = self.send_request(api_key, model, prompt).await?;
        let content = parse_generate_response(&body)?;

        debug!(
            model = %model,
            image = matches!(content, GeneratedContent::Image { .. }),
            "generateContent succeeded"
        );
        Ok(content)
    }

    fn bridge_info(&self) -> BridgeInfo {
        BridgeInfo::new("gemini", &self.config.text_model, &self.config.image_model)
    }
}

/// Maps a non-success HTTP status to a bridge error.
pub fn map_status(status: StatusCode, body: &str) -> BridgeError {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error);

    // Google reports a bad key as 400 INVALID_ARGUMENT with an API_KEY_INVALID reason.
    if detail.as_ref().is_some_and(ErrorDetail::is_credential_error) {
        return BridgeError::AuthenticationFailed;
    }

    let message = detail
        .and_then(|e| e.message)
        .unwrap_or_else(|| body.trim().to_string());
    match status.as_u16() {
        401 | 403 => BridgeError::AuthenticationFailed,
        429 => BridgeError::QuotaExceeded(message),
        400 => BridgeError::InvalidRequest(message),
        500..=599 => BridgeError::unavailable(format!("Server error {}: {}", status, message)),
        _ => BridgeError::network(format!("Unexpected status {}: {}", status, message)),
    }
}

/// Converts a successful `generateContent` body into generated content.
pub fn parse_generate_response(body: &str) -> Result<GeneratedContent, BridgeError> {
    let response: GenerateResponse = serde_json::from_str(body)
        .map_err(|e| BridgeError::malformed(format!("Failed to parse response: {}", e)))?;

    if let Some(reason) = response
        .prompt_feedback
        .and_then(|f| f.block_reason)
    {
        return Err(BridgeError::content_policy(reason));
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| BridgeError::malformed("No candidates in response"))?;

    let parts = candidate.content.map(|c| c.parts).unwrap_or_default();

    let mut text = String::new();
    let mut image: Option<InlineData> = None;
    for part in parts {
        if let Some(t) = part.text {
            text.push_str(&t);
        }
        if image.is_none() {
            image = part.inline_data;
        }
    }

    if let Some(inline) = image {
        let bytes = STANDARD
            .decode(inline.data.as_bytes())
            .map_err(|e| BridgeError::malformed(format!("Invalid inline image data: {}", e)))?;
        let caption = Some(text).filter(|t| !t.trim().is_empty());
        return Ok(GeneratedContent::Image {
            payload: ImagePayload::new(inline.mime_type, bytes),
            caption,
        });
    }

    if !text.is_empty() {
        return Ok(GeneratedContent::Text(text));
    }

    match candidate.finish_reason {
        Some(reason) if BLOCKING_FINISH_REASONS.contains(&reason.as_str()) => {
            Err(BridgeError::content_policy(reason))
        }
        _ => Err(BridgeError::malformed("Response has no content")),
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Gemini API types
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
}

impl GenerateRequest {
    fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    text: Option<String>,
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: Option<String>,
    status: Option<String>,
    #[serde(default)]
    details: Vec<ErrorReason>,
}

#[derive(Debug, Deserialize)]
struct ErrorReason {
    reason: Option<String>,
}

impl ErrorDetail {
    fn is_credential_error(&self) -> bool {
        const CREDENTIAL_REASONS: [&str; 2] = ["API_KEY_INVALID", "API_KEY_EXPIRED"];
        self.status.as_deref() == Some("PERMISSION_DENIED")
            || self.status.as_deref() == Some("UNAUTHENTICATED")
            || self
                .details
                .iter()
                .filter_map(|d| d.reason.as_deref())
                .any(|r| CREDENTIAL_REASONS.contains(&r))
    }
}
