//! ViewController - screen flow and run state for the wizard.
//!
//! Owns the current screen, the active run (kind, target, sequencer,
//! compiled prompt, execution state) and the copy hook. Every operation
//! runs to completion before the next one; the only asynchronous step is
//! the bridge call inside `execute`.
//!
//! # Screen flow
//!
//! ```text
//! Home ─► AiTargetSelection ─► TextWizard | ImageWizard ─► Result ─► Home
//!   │
//!   └──► Templates | Examples | Course ─► Home
//! ```
//!
//! # Execution
//!
//! `begin_execution` hands out a ticket tagged with the run id and marks
//! the run as loading. `finish_execution` applies a result only if that run
//! is still current and still loading, so a result arriving after a
//! restart is dropped.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::catalog::{AiTarget, ContentLibrary, CourseModule, Example, Template, TemplateFilter};
use crate::domain::execution::ExecutionResult;
use crate::domain::foundation::{
    ContentKind, DomainError, ErrorCode, RunId, StateMachine, ValidationError,
};
use crate::domain::prompt::{CompiledPrompt, PromptCompiler};
use crate::domain::wizard::{
    AnswerRecord, StepInput, StepOutcome, StepSequencer, WizardOptions, WizardStep,
};
use crate::ports::OutputSink;

use super::handlers::{
    CopyOutputCommand, CopyOutputHandler, CopySource, ExecutePromptCommand, ExecutePromptHandler,
};

/// Top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Home,
    AiTargetSelection,
    TextWizard,
    ImageWizard,
    Result,
    Templates,
    Examples,
    Course,
}

impl Screen {
    /// Wizard screen for a content kind.
    pub fn wizard_for(kind: ContentKind) -> Self {
        match kind {
            ContentKind::Text => Screen::TextWizard,
            ContentKind::Image => Screen::ImageWizard,
        }
    }

    pub fn is_wizard(&self) -> bool {
        matches!(self, Screen::TextWizard | Screen::ImageWizard)
    }

    pub fn is_side_screen(&self) -> bool {
        matches!(self, Screen::Templates | Screen::Examples | Screen::Course)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Screen::Home => "home",
            Screen::AiTargetSelection => "ai_target_selection",
            Screen::TextWizard => "text_wizard",
            Screen::ImageWizard => "image_wizard",
            Screen::Result => "result",
            Screen::Templates => "templates",
            Screen::Examples => "examples",
            Screen::Course => "course",
        };
        write!(f, "{}", name)
    }
}

impl StateMachine for Screen {
    fn can_transition_to(&self, target: &Self) -> bool {
        use Screen::*;
        matches!(
            (self, target),
            (Home, AiTargetSelection)
                | (Home, Templates)
                | (Home, Examples)
                | (Home, Course)
                | (AiTargetSelection, TextWizard)
                | (AiTargetSelection, ImageWizard)
                | (AiTargetSelection, Home)
                | (TextWizard, Result)
                | (TextWizard, AiTargetSelection)
                | (TextWizard, Home)
                | (ImageWizard, Result)
                | (ImageWizard, AiTargetSelection)
                | (ImageWizard, Home)
                | (Result, Home)
                | (Templates, Home)
                | (Examples, Home)
                | (Course, Home)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use Screen::*;
        match self {
            Home => vec![AiTargetSelection, Templates, Examples, Course],
            AiTargetSelection => vec![TextWizard, ImageWizard, Home],
            TextWizard | ImageWizard => vec![Result, AiTargetSelection, Home],
            Result | Templates | Examples | Course => vec![Home],
        }
    }
}

/// Where the current run's execution stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionState {
    Idle,
    Loading,
    Resolved(ExecutionResult),
}

/// Proof that an execution was started for a specific run.
#[derive(Debug, Clone)]
pub struct ExecutionTicket {
    run_id: RunId,
    prompt: CompiledPrompt,
}

impl ExecutionTicket {
    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    pub fn prompt(&self) -> &CompiledPrompt {
        &self.prompt
    }

    /// Builds the handler command for this ticket.
    pub fn command(&self) -> ExecutePromptCommand {
        ExecutePromptCommand {
            run_id: self.run_id,
            prompt: self.prompt.clone(),
        }
    }
}

/// State of one pass through the wizard.
#[derive(Debug)]
struct Run {
    id: RunId,
    kind: ContentKind,
    sequencer: Option<StepSequencer>,
    prompt: Option<CompiledPrompt>,
    execution: ExecutionState,
}

impl Run {
    fn new(kind: ContentKind) -> Self {
        Self {
            id: RunId::new(),
            kind,
            sequencer: None,
            prompt: None,
            execution: ExecutionState::Idle,
        }
    }
}

/// Drives screens and the active run.
pub struct ViewController {
    options: WizardOptions,
    compiler: PromptCompiler,
    library: Arc<ContentLibrary>,
    copier: CopyOutputHandler,
    screen: Screen,
    run: Option<Run>,
}

impl ViewController {
    pub fn new(
        options: WizardOptions,
        library: Arc<ContentLibrary>,
        sink: Arc<dyn OutputSink>,
    ) -> Self {
        Self {
            options,
            compiler: PromptCompiler::for_profile(options.augmentation),
            library,
            copier: CopyOutputHandler::new(sink),
            screen: Screen::Home,
            run: None,
        }
    }

    /// Controller over the built-in library.
    pub fn with_builtin_library(options: WizardOptions, sink: Arc<dyn OutputSink>) -> Self {
        Self::new(options, Arc::new(ContentLibrary::builtin().clone()), sink)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Read access
    // ─────────────────────────────────────────────────────────────────────

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn options(&self) -> &WizardOptions {
        &self.options
    }

    pub fn run_id(&self) -> Option<RunId> {
        self.run.as_ref().map(|r| r.id)
    }

    pub fn kind(&self) -> Option<ContentKind> {
        self.run.as_ref().map(|r| r.kind)
    }

    pub fn target(&self) -> Option<AiTarget> {
        self.sequencer().map(|s| s.target())
    }

    pub fn current_step(&self) -> Option<WizardStep> {
        self.sequencer().map(|s| s.current_step())
    }

    /// 1-based step index and the total, for the progress indicator.
    pub fn progress(&self) -> Option<(usize, usize)> {
        self.sequencer().map(|s| (s.step_index(), s.last_step()))
    }

    pub fn answers(&self) -> Option<&AnswerRecord> {
        self.sequencer().map(|s| s.answers())
    }

    pub fn prompt(&self) -> Option<&CompiledPrompt> {
        self.run.as_ref().and_then(|r| r.prompt.as_ref())
    }

    pub fn execution_state(&self) -> Option<&ExecutionState> {
        self.run.as_ref().map(|r| &r.execution)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.execution_state(), Some(ExecutionState::Loading))
    }

    pub fn result(&self) -> Option<&ExecutionResult> {
        match self.execution_state() {
            Some(ExecutionState::Resolved(result)) => Some(result),
            _ => None,
        }
    }

    /// Targets offered on the selection screen.
    pub fn available_targets(&self) -> Vec<AiTarget> {
        AiTarget::available(self.options.include_other_target)
    }

    pub fn templates(&self, filter: &TemplateFilter) -> Vec<&Template> {
        self.library.filter_templates(filter)
    }

    pub fn examples(&self) -> &[Example] {
        &self.library.examples
    }

    pub fn course_modules(&self) -> &[CourseModule] {
        &self.library.course_modules
    }

    // ─────────────────────────────────────────────────────────────────────
    // Flow
    // ─────────────────────────────────────────────────────────────────────

    /// Home → AiTargetSelection with a fresh, empty run.
    pub fn start_flow(&mut self, kind: ContentKind) -> Result<RunId, DomainError> {
        self.go(Screen::AiTargetSelection)?;
        let run = Run::new(kind);
        let id = run.id;
        self.run = Some(run);
        info!(run_id = %id, kind = %kind, "Flow started");
        Ok(id)
    }

    /// AiTargetSelection → the wizard for the run's kind.
    pub fn select_target(&mut self, target: AiTarget) -> Result<Screen, DomainError> {
        if !self.available_targets().contains(&target) {
            return Err(ValidationError::unknown_entry("ai_target", target.id()).into());
        }
        let kind = self.active_run()?.kind;
        let screen = Screen::wizard_for(kind);
        self.go(screen)?;

        let sequencer =
            StepSequencer::with_compiler(kind, target, &self.options, self.compiler.clone());
        if let Some(run) = self.run.as_mut() {
            run.sequencer = Some(sequencer);
        }
        info!(target = %target, "Target selected");
        Ok(screen)
    }

    /// Answers the current question. Completion moves to the result screen.
    pub fn submit_step(&mut self, input: StepInput) -> Result<StepOutcome, DomainError> {
        let outcome = self.wizard_sequencer()?.submit_step(input)?;
        self.apply_outcome(&outcome)?;
        Ok(outcome)
    }

    /// Continues past a free-text question.
    pub fn advance(&mut self) -> Result<StepOutcome, DomainError> {
        let outcome = self.wizard_sequencer()?.advance()?;
        self.apply_outcome(&outcome)?;
        Ok(outcome)
    }

    /// Steps back one question inside the wizard.
    pub fn retreat(&mut self) -> Result<WizardStep, DomainError> {
        Ok(self.wizard_sequencer()?.retreat()?)
    }

    /// One screen back. Leaving the wizard discards its progress; leaving
    /// target selection discards the run.
    pub fn back(&mut self) -> Result<Screen, DomainError> {
        match self.screen {
            Screen::TextWizard | Screen::ImageWizard => {
                self.go(Screen::AiTargetSelection)?;
                if let Some(run) = self.run.as_mut() {
                    run.sequencer = None;
                    run.prompt = None;
                    run.execution = ExecutionState::Idle;
                }
            }
            Screen::AiTargetSelection => {
                self.go(Screen::Home)?;
                self.run = None;
            }
            screen if screen.is_side_screen() => self.go(Screen::Home)?,
            screen => {
                return Err(DomainError::new(
                    ErrorCode::InvalidStateTransition,
                    format!("No previous screen from {}", screen),
                ))
            }
        }
        debug!(screen = %self.screen, "Went back");
        Ok(self.screen)
    }

    /// Returns to Home from anywhere, discarding the run.
    pub fn restart(&mut self) {
        if let Some(run) = self.run.take() {
            info!(run_id = %run.id, "Run discarded");
        }
        self.screen = Screen::Home;
    }

    pub fn open_templates(&mut self) -> Result<(), DomainError> {
        self.go(Screen::Templates)
    }

    pub fn open_examples(&mut self) -> Result<(), DomainError> {
        self.go(Screen::Examples)
    }

    pub fn open_course(&mut self) -> Result<(), DomainError> {
        self.go(Screen::Course)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Execution
    // ─────────────────────────────────────────────────────────────────────

    /// Marks the run as loading and returns a ticket for the bridge call.
    ///
    /// Returns `None` when there is no compiled prompt or a call is
    /// already in flight.
    pub fn begin_execution(&mut self) -> Option<ExecutionTicket> {
        if self.screen != Screen::Result {
            return None;
        }
        let run = self.run.as_mut()?;
        let prompt = run.prompt.clone()?;
        if run.execution == ExecutionState::Loading {
            debug!(run_id = %run.id, "Execution already in flight");
            return None;
        }
        run.execution = ExecutionState::Loading;
        Some(ExecutionTicket {
            run_id: run.id,
            prompt,
        })
    }

    /// Applies a result if its run is still current and loading.
    pub fn finish_execution(&mut self, ticket: ExecutionTicket, result: ExecutionResult) -> bool {
        match self.run.as_mut() {
            Some(run) if run.id == ticket.run_id && run.execution == ExecutionState::Loading => {
                info!(run_id = %run.id, failed = result.is_failure(), "Execution resolved");
                run.execution = ExecutionState::Resolved(result);
                true
            }
            _ => {
                debug!(run_id = %ticket.run_id, "Dropping result for a run that is no longer current");
                false
            }
        }
    }

    /// Runs the compiled prompt through `handler` and stores the result.
    pub async fn execute(&mut self, handler: &ExecutePromptHandler) -> Option<&ExecutionResult> {
        let ticket = self.begin_execution()?;
        let outcome = handler.handle(ticket.command()).await;
        self.finish_execution(ticket, outcome.result);
        self.result()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Copy
    // ─────────────────────────────────────────────────────────────────────

    pub fn copy_prompt(&self) -> bool {
        match self.prompt() {
            Some(prompt) => {
                self.copy(CopySource::Prompt, prompt.as_str());
                true
            }
            None => false,
        }
    }

    pub fn copy_result_text(&self) -> bool {
        match self.result().and_then(|r| r.text_result()) {
            Some(text) => {
                self.copy(CopySource::ResultText, text);
                true
            }
            None => false,
        }
    }

    pub fn copy_template(&self, id: &str) -> bool {
        match self.library.find_template(id) {
            Some(template) => {
                self.copy(CopySource::Template(template.id.clone()), &template.prompt);
                true
            }
            None => false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────

    fn copy(&self, source: CopySource, text: &str) {
        self.copier.handle(CopyOutputCommand {
            source,
            text: text.to_string(),
        });
    }

    fn go(&mut self, target: Screen) -> Result<(), DomainError> {
        let next = self.screen.transition_to(target).map_err(|e| {
            DomainError::new(ErrorCode::InvalidStateTransition, e.to_string())
                .with_detail("from", self.screen.to_string())
                .with_detail("to", target.to_string())
        })?;
        debug!(from = %self.screen, to = %next, "Screen changed");
        self.screen = next;
        Ok(())
    }

    fn active_run(&self) -> Result<&Run, DomainError> {
        self.run
            .as_ref()
            .ok_or_else(|| DomainError::new(ErrorCode::NoActiveRun, "No wizard run in progress"))
    }

    fn sequencer(&self) -> Option<&StepSequencer> {
        self.run.as_ref().and_then(|r| r.sequencer.as_ref())
    }

    fn wizard_sequencer(&mut self) -> Result<&mut StepSequencer, DomainError> {
        if !self.screen.is_wizard() {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Not in a wizard (current screen: {})", self.screen),
            ));
        }
        self.run
            .as_mut()
            .and_then(|r| r.sequencer.as_mut())
            .ok_or_else(|| DomainError::new(ErrorCode::NoActiveRun, "No wizard run in progress"))
    }

    fn apply_outcome(&mut self, outcome: &StepOutcome) -> Result<(), DomainError> {
        if let StepOutcome::Completed(prompt) = outcome {
            self.go(Screen::Result)?;
            if let Some(run) = self.run.as_mut() {
                run.prompt = Some(prompt.clone());
                run.execution = ExecutionState::Idle;
            }
        }
        Ok(())
    }
}
