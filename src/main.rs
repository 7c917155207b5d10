//! Terminal front-end for Prompt Studio.
//!
//! Reads one line at a time from stdin and renders each screen as a
//! numbered menu. Logs go to stderr so the screens stay readable.

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::error;
use tracing_subscriber::EnvFilter;

use prompt_studio::adapters::{GeminiConfig, GeminiExecutionBridge, StdoutOutputSink};
use prompt_studio::application::{ExecutePromptHandler, Screen, ViewController};
use prompt_studio::config::{AiConfig, AppConfig, LoggingConfig};
use prompt_studio::domain::catalog::{
    ContentLibrary, ImageStyle, ImageType, LengthFormat, TemplateFilter, TextCategory, Tone,
};
use prompt_studio::domain::execution::ExecutionResult;
use prompt_studio::domain::foundation::{ContentKind, DomainError};
use prompt_studio::domain::wizard::{StepInput, WizardStep};

type BoxError = Box<dyn std::error::Error>;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Prompt Studio stopped");
            eprintln!("erro: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    init_tracing(&config.logging);
    config.validate()?;

    let library = match &config.catalog.library_path {
        Some(path) => ContentLibrary::from_path(path)?,
        None => ContentLibrary::builtin().clone(),
    };
    let bridge = GeminiExecutionBridge::new(gemini_config(&config.ai))?;
    let handler = ExecutePromptHandler::new(Arc::new(bridge));
    let mut vc = ViewController::new(
        config.wizard.options(),
        Arc::new(library),
        Arc::new(StdoutOutputSink::new()),
    );

    let mut term = Terminal::stdin();
    let mut filter = TemplateFilter::all();

    loop {
        let keep_going = match vc.screen() {
            Screen::Home => home(&mut vc, &mut term).await?,
            Screen::AiTargetSelection => target_selection(&mut vc, &mut term).await?,
            Screen::TextWizard | Screen::ImageWizard => wizard(&mut vc, &mut term).await?,
            Screen::Result => result(&mut vc, &mut term, &handler).await?,
            Screen::Templates => templates(&mut vc, &mut term, &mut filter).await?,
            Screen::Examples => examples(&mut vc, &mut term).await?,
            Screen::Course => course(&mut vc, &mut term).await?,
        };
        if !keep_going {
            return Ok(());
        }
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn gemini_config(ai: &AiConfig) -> GeminiConfig {
    GeminiConfig::new(ai.api_key())
        .with_text_model(&ai.text_model)
        .with_image_model(&ai.image_model)
        .with_base_url(&ai.base_url)
        .with_timeout(ai.timeout())
}

// ════════════════════════════════════════════════════════════════════════════════
// Line input
// ════════════════════════════════════════════════════════════════════════════════

struct Terminal<R = BufReader<Stdin>> {
    lines: Lines<R>,
}

impl Terminal {
    fn stdin() -> Self {
        Self::from_reader(BufReader::new(tokio::io::stdin()))
    }
}

impl<R: AsyncBufRead + Unpin> Terminal<R> {
    fn from_reader(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }

    /// Prompts and reads one trimmed line. `None` on end of input.
    async fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        let line = self.lines.next_line().await?;
        Ok(line.map(|l| l.trim().to_string()))
    }

    /// Reads a menu choice; `None` on end of input.
    async fn choose(&mut self) -> io::Result<Option<String>> {
        self.ask(">").await
    }
}

fn print_menu<S: AsRef<str>>(title: &str, options: &[S]) {
    println!();
    println!("== {} ==", title);
    for (i, option) in options.iter().enumerate() {
        println!("  {}. {}", i + 1, option.as_ref());
    }
}

/// Parses a 1-based menu index.
fn pick<T: Copy>(input: &str, items: &[T]) -> Option<T> {
    input
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| items.get(i).copied())
}

// ════════════════════════════════════════════════════════════════════════════════
// Screens
// ════════════════════════════════════════════════════════════════════════════════

async fn home(vc: &mut ViewController, term: &mut Terminal) -> Result<bool, BoxError> {
    print_menu(
        "Prompt Studio",
        &["Criar texto", "Criar imagem", "Templates", "Exemplos", "Curso"],
    );
    println!("  0. Sair");

    let Some(choice) = term.choose().await? else {
        return Ok(false);
    };
    let outcome = match choice.as_str() {
        "1" => vc.start_flow(ContentKind::Text).map(|_| ()),
        "2" => vc.start_flow(ContentKind::Image).map(|_| ()),
        "3" => vc.open_templates(),
        "4" => vc.open_examples(),
        "5" => vc.open_course(),
        "0" => return Ok(false),
        _ => Ok(()),
    };
    if let Err(e) = outcome {
        println!("{}", e.message);
    }
    Ok(true)
}

async fn target_selection(vc: &mut ViewController, term: &mut Terminal) -> Result<bool, BoxError> {
    let targets = vc.available_targets();
    let labels: Vec<&str> = targets.iter().map(|t| t.label()).collect();
    print_menu("Para qual IA é o prompt?", &labels);
    println!("  0. Voltar");

    let Some(choice) = term.choose().await? else {
        return Ok(false);
    };
    if choice == "0" {
        vc.back()?;
    } else if let Some(target) = pick(&choice, &targets) {
        vc.select_target(target)?;
    }
    Ok(true)
}

async fn wizard(vc: &mut ViewController, term: &mut Terminal) -> Result<bool, BoxError> {
    let (Some(step), Some((index, total))) = (vc.current_step(), vc.progress()) else {
        vc.back()?;
        return Ok(true);
    };

    println!();
    println!("Passo {} de {}: {}", index, total, step.question());
    println!("  ('<' volta para a escolha de IA, '-' volta uma pergunta)");

    let options = choice_labels(step);
    for (i, label) in options.iter().enumerate() {
        println!("  {}. {}", i + 1, label);
    }

    let Some(answer) = term.choose().await? else {
        return Ok(false);
    };
    match answer.as_str() {
        "<" => {
            vc.back()?;
            return Ok(true);
        }
        "-" => {
            if let Err(e) = vc.retreat() {
                println!("{}", e.message);
            }
            return Ok(true);
        }
        _ => {}
    }

    let raw = if options.is_empty() {
        answer
    } else {
        match pick(&answer, &options) {
            Some(label) => label.to_string(),
            None => {
                println!("Escolha uma das opções.");
                return Ok(true);
            }
        }
    };

    let submitted = StepInput::parse_for(step, &raw)
        .map_err(DomainError::from)
        .and_then(|input| vc.submit_step(input));
    let submitted = match submitted {
        Ok(_) if step.is_free_text() => vc.advance(),
        other => other,
    };
    if let Err(e) = submitted {
        println!("{}", e.message);
    }
    Ok(true)
}

fn choice_labels(step: WizardStep) -> Vec<&'static str> {
    match step {
        WizardStep::Category => TextCategory::all().iter().map(|c| c.label()).collect(),
        WizardStep::Tone => Tone::all().iter().map(|c| c.label()).collect(),
        WizardStep::Length => LengthFormat::all().iter().map(|c| c.label()).collect(),
        WizardStep::ImageType => ImageType::all().iter().map(|c| c.label()).collect(),
        WizardStep::Style => ImageStyle::all().iter().map(|c| c.label()).collect(),
        WizardStep::Objective | WizardStep::Audience | WizardStep::Subject | WizardStep::Complete => {
            Vec::new()
        }
    }
}

async fn result(
    vc: &mut ViewController,
    term: &mut Terminal,
    handler: &ExecutePromptHandler,
) -> Result<bool, BoxError> {
    if let Some(prompt) = vc.prompt() {
        println!();
        println!("== Seu prompt para {} ==", prompt.target());
        println!("{}", prompt);
    }
    print_menu(
        "O que fazer agora?",
        &["Gerar com IA", "Copiar prompt", "Copiar resultado", "Novo prompt"],
    );

    let Some(choice) = term.choose().await? else {
        return Ok(false);
    };
    match choice.as_str() {
        "1" => {
            println!("Gerando...");
            match vc.execute(handler).await {
                Some(outcome) => show_result(outcome),
                None => println!("Nada para executar."),
            }
        }
        "2" => {
            vc.copy_prompt();
        }
        "3" => {
            if !vc.copy_result_text() {
                println!("Ainda não há texto gerado.");
            }
        }
        "4" => vc.restart(),
        _ => {}
    }
    Ok(true)
}

fn show_result(result: &ExecutionResult) {
    println!();
    match result {
        ExecutionResult::Text { content } => println!("{}", content),
        ExecutionResult::Image { payload, caption } => {
            println!("Imagem gerada ({}, {} bytes)", payload.mime_type, payload.len());
            if let Some(caption) = caption {
                println!("{}", caption);
            }
            let uri = payload.data_uri();
            println!("{}...", &uri[..uri.len().min(96)]);
        }
        ExecutionResult::Failure { kind, reason } => {
            println!("Falha ({:?}): {}", kind, reason);
        }
    }
}

async fn templates(
    vc: &mut ViewController,
    term: &mut Terminal,
    filter: &mut TemplateFilter,
) -> Result<bool, BoxError> {
    let ids: Vec<String> = {
        let found = vc.templates(filter);
        println!();
        println!("== Templates ==");
        for (i, t) in found.iter().enumerate() {
            println!("  {}. [{}] {} - {}", i + 1, t.kind.display_name(), t.title, t.preview);
        }
        found.iter().map(|t| t.id.clone()).collect()
    };
    println!("  t/i/a filtra por texto, imagem ou todos; /busca pesquisa; 0 volta");

    let Some(choice) = term.choose().await? else {
        return Ok(false);
    };
    match choice.as_str() {
        "0" => {
            *filter = TemplateFilter::all();
            vc.back()?;
        }
        "t" => filter.kind = Some(ContentKind::Text),
        "i" => filter.kind = Some(ContentKind::Image),
        "a" => *filter = TemplateFilter::all(),
        query if query.starts_with('/') => filter.query = query[1..].to_string(),
        other => {
            let picked = other
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| ids.get(i));
            if let Some(id) = picked {
                vc.copy_template(id);
            }
        }
    }
    Ok(true)
}

async fn examples(vc: &mut ViewController, term: &mut Terminal) -> Result<bool, BoxError> {
    println!();
    println!("== Exemplos ==");
    for example in vc.examples() {
        println!();
        println!("{}", example.title);
        println!("  Antes:  {}", example.before);
        println!("  Depois: {}", example.after);
        println!("  Por quê: {}", example.improvement);
    }
    if term.ask("Enter para voltar").await?.is_none() {
        return Ok(false);
    }
    vc.back()?;
    Ok(true)
}

async fn course(vc: &mut ViewController, term: &mut Terminal) -> Result<bool, BoxError> {
    let titles: Vec<String> = vc
        .course_modules()
        .iter()
        .map(|m| format!("{} - {}", m.title, m.description))
        .collect();
    print_menu("Curso", &titles);
    println!("  0. Voltar");

    let Some(choice) = term.choose().await? else {
        return Ok(false);
    };
    if choice == "0" {
        vc.back()?;
        return Ok(true);
    }
    let indices: Vec<usize> = (0..titles.len()).collect();
    if let Some(module) = pick(&choice, &indices).and_then(|i| vc.course_modules().get(i)) {
        println!();
        println!("== {} ==", module.title);
        for paragraph in &module.content {
            println!("  {}", paragraph);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn terminal_trims_lines_and_signals_end_of_input() {
        let mut term = Terminal::from_reader(&b"  2 \numa frase\n"[..]);

        assert_eq!(term.choose().await.unwrap(), Some("2".to_string()));
        assert_eq!(term.ask("Objetivo?").await.unwrap(), Some("uma frase".to_string()));
        assert_eq!(term.choose().await.unwrap(), None);
    }

    #[test]
    fn pick_maps_one_based_choices() {
        let items = [Tone::Persuasivo, Tone::Tecnico];
        assert_eq!(pick("2", &items), Some(Tone::Tecnico));
        assert_eq!(pick("0", &items), None);
        assert_eq!(pick("x", &items), None);
    }
}
