//! ExecutePromptHandler - runs a compiled prompt through the execution bridge.
//!
//! Bridge errors never escape this handler. They are converted into an
//! `ExecutionResult::Failure` that names whether the operator or the service
//! is at fault, so the result screen always has exactly one outcome to show.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::execution::{ExecutionResult, FailureKind};
use crate::domain::foundation::RunId;
use crate::domain::prompt::CompiledPrompt;
use crate::ports::{BridgeError, ExecutionBridge};

/// Command to execute a compiled prompt.
#[derive(Debug, Clone)]
pub struct ExecutePromptCommand {
    /// Run the prompt belongs to.
    pub run_id: RunId,
    /// The prompt to execute. Its kind selects the model.
    pub prompt: CompiledPrompt,
}

/// Outcome of an execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutePromptResult {
    /// Run the result belongs to.
    pub run_id: RunId,
    /// Exactly one of text, image or failure.
    pub result: ExecutionResult,
}

/// Handler for executing prompts.
#[derive(Clone)]
pub struct ExecutePromptHandler {
    bridge: Arc<dyn ExecutionBridge>,
}

impl ExecutePromptHandler {
    pub fn new(bridge: Arc<dyn ExecutionBridge>) -> Self {
        Self { bridge }
    }

    pub async fn handle(&self, cmd: ExecutePromptCommand) -> ExecutePromptResult {
        let kind = cmd.prompt.kind();
        let info = self.bridge.bridge_info();
        info!(
            run_id = %cmd.run_id,
            bridge = %info.name,
            model = %info.model_for(kind),
            "Executing prompt"
        );

        let result = match self.bridge.execute(&cmd.prompt, kind).await {
            Ok(content) => ExecutionResult::from(content),
            Err(err) => {
                warn!(run_id = %cmd.run_id, error = %err, "Execution failed");
                failure_from(err)
            }
        };

        ExecutePromptResult {
            run_id: cmd.run_id,
            result,
        }
    }
}

fn failure_from(err: BridgeError) -> ExecutionResult {
    if err.is_misconfiguration() {
        ExecutionResult::failure(
            FailureKind::Misconfiguration,
            format!("Configuração inválida: {}", err),
        )
    } else {
        ExecutionResult::failure(FailureKind::Service, format!("Erro no serviço de IA: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockError, MockExecutionBridge};
    use crate::domain::catalog::{AiTarget, ImageStyle};
    use crate::domain::execution::ImagePayload;
    use crate::domain::prompt::PromptCompiler;
    use crate::domain::wizard::{AnswerRecord, ImageAnswers};

    fn command() -> ExecutePromptCommand {
        let record = AnswerRecord::Image(ImageAnswers {
            image_type: None,
            subject: Some("a red fox".to_string()),
            style: Some(ImageStyle::Pintura),
        });
        ExecutePromptCommand {
            run_id: RunId::new(),
            prompt: PromptCompiler::default()
                .compile(AiTarget::DallE, &record)
                .unwrap(),
        }
    }

    #[tokio::test]
    async fn image_content_becomes_image_result() {
        let bridge = MockExecutionBridge::new().with_image(ImagePayload::png(vec![7]), None);
        let handler = ExecutePromptHandler::new(Arc::new(bridge));

        let cmd = command();
        let run_id = cmd.run_id;
        let out = handler.handle(cmd).await;

        assert_eq!(out.run_id, run_id);
        assert!(out.result.image_result().is_some());
    }

    #[tokio::test]
    async fn missing_key_is_misconfiguration_failure() {
        let bridge = MockExecutionBridge::new().with_error(MockError::MissingCredential);
        let handler = ExecutePromptHandler::new(Arc::new(bridge));

        let out = handler.handle(command()).await;
        let (kind, reason) = out.result.failure_reason().unwrap();
        assert_eq!(kind, FailureKind::Misconfiguration);
        assert!(reason.contains("API key"));
    }

    #[tokio::test]
    async fn service_errors_are_service_failures() {
        let bridge = MockExecutionBridge::new().with_error(MockError::ContentPolicy {
            reason: "SAFETY".to_string(),
        });
        let handler = ExecutePromptHandler::new(Arc::new(bridge));

        let out = handler.handle(command()).await;
        assert_eq!(out.result.failure_reason().unwrap().0, FailureKind::Service);
    }

    #[tokio::test]
    async fn passes_prompt_kind_to_bridge() {
        let bridge = MockExecutionBridge::new();
        let handler = ExecutePromptHandler::new(Arc::new(bridge.clone()));

        handler.handle(command()).await;
        assert_eq!(bridge.get_calls()[0].kind, crate::domain::foundation::ContentKind::Image);
    }
}
