//! CLI entrypoint for quizzly
//!
//! This is the main binary that wires together all layers using
//! dependency injection: configuration, the question source, and one of
//! the front ends (TUI, print mode or topic listing).

use anyhow::{Context, Result, bail};
use clap::Parser;
use quizzly_application::{
    BankQuestionProvider, BehaviorConfig, LlmQuestionProvider, NoProgress, ProgressNotifier,
    QuestionProvider, QuizOrchestrator,
};
use quizzly_domain::{Model, QuizSettings};
use quizzly_infrastructure::{
    BankLoader, ConfigLoader, FileConfig, FileProviderKind, GeminiConfig, GeminiLlmGateway,
};
use quizzly_presentation::{Cli, ConsoleFormatter, ProgressReporter, SimpleProgress, TuiApp};
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    // Load configuration (defaults <- files <- environment)
    let loaded = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    };
    let mut config = loaded.context("Failed to load configuration")?;

    // CLI flags override everything loaded above
    apply_cli_overrides(&mut config, &cli);
    config.validate().context("Invalid configuration")?;

    // The TUI owns the terminal, so its logs go to a file
    let uses_tui = !cli.print && !cli.list_topics;
    let _log_guard = init_logging(cli.verbose, uses_tui, &config)?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    info!("Starting quizzly");
    debug!(
        provider = %config.provider.kind,
        model = %config.provider.model,
        "Configuration resolved"
    );

    if cli.list_topics {
        let bank = BankLoader::load(config.bank.path.as_deref())?;
        print!(
            "{}",
            ConsoleFormatter::format_topics("local bank", &bank.topics())
        );
        return Ok(());
    }

    let settings = config
        .quiz
        .to_settings()
        .context("Invalid quiz settings")?;
    let behavior = BehaviorConfig::with_timeout_seconds(config.provider.timeout_seconds)
        .with_replay(config.quiz.replay);

    // === Dependency Injection ===
    let provider = build_provider(&config, &behavior)?;

    if cli.print {
        return run_print(provider, behavior, settings, &config, cli.quiet).await;
    }

    let orchestrator = QuizOrchestrator::new(provider, behavior);
    let mut app = TuiApp::new(orchestrator, &settings);
    app.run().await?;

    Ok(())
}

/// Fold command-line flags into the loaded configuration
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if cli.local {
        config.provider.kind = FileProviderKind::Local;
    }
    if let Some(model) = &cli.model {
        config.provider.model = Model::from(model.as_str());
    }
    if let Some(topic) = &cli.topic {
        config.quiz.topic = topic.clone();
    }
    if let Some(count) = cli.count {
        config.quiz.question_count = count as usize;
    }
    if let Some(difficulty) = cli.difficulty {
        config.quiz.difficulty = difficulty.into();
    }
    if let Some(replay) = cli.replay {
        config.quiz.replay = replay.into();
    }
    if let Some(seed) = cli.seed {
        config.quiz.seed = Some(seed);
    }
    if let Some(output) = cli.output {
        config.output.format = output.into();
    }
}

/// Initialize logging based on verbosity level
///
/// Returns the appender guard, which must live until exit so buffered lines
/// are flushed.
fn init_logging(verbose: u8, to_file: bool, config: &FileConfig) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    if !to_file {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    }

    let Some(path) = config
        .logging
        .file
        .clone()
        .or_else(ConfigLoader::default_log_path)
    else {
        // Nowhere to write; stderr would corrupt the TUI
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::sink)
            .init();
        return Ok(None);
    };

    let Some(file_name) = path.file_name() else {
        bail!("Log file path has no file name: {}", path.display());
    };
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| std::path::Path::new("."));
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

/// Create the question source selected by the configuration
fn build_provider(
    config: &FileConfig,
    behavior: &BehaviorConfig,
) -> Result<Arc<dyn QuestionProvider>> {
    let seed = config.quiz.seed;
    match config.provider.kind {
        FileProviderKind::Local => {
            let bank = Arc::new(BankLoader::load(config.bank.path.as_deref())?);
            info!("Using local question bank ({} questions)", bank.len());
            let provider = match seed {
                Some(seed) => BankQuestionProvider::with_seed(bank, seed),
                None => BankQuestionProvider::new(bank),
            };
            Ok(Arc::new(provider))
        }
        FileProviderKind::Remote => {
            let gateway = Arc::new(GeminiLlmGateway::new(GeminiConfig::from(&config.provider))?);
            info!("Using {} for question generation", config.provider.model);
            let mut provider = LlmQuestionProvider::new(gateway, config.provider.model.clone())
                .with_behavior(behavior.clone());
            if let Some(seed) = seed {
                provider = provider.with_seed(seed);
            }
            Ok(Arc::new(provider))
        }
    }
}

/// Generate one question set and print it
async fn run_print(
    provider: Arc<dyn QuestionProvider>,
    behavior: BehaviorConfig,
    settings: QuizSettings,
    config: &FileConfig,
    quiet: bool,
) -> Result<()> {
    let progress: Arc<dyn ProgressNotifier> = if quiet {
        Arc::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Arc::new(ProgressReporter::new())
    } else {
        Arc::new(SimpleProgress)
    };

    let mut orchestrator = QuizOrchestrator::new(provider, behavior).with_progress(progress);
    orchestrator.start_quiz(settings).await?;

    let Some(settings) = orchestrator.settings() else {
        bail!("No quiz settings after generation");
    };
    println!(
        "{}",
        ConsoleFormatter::format(orchestrator.questions(), settings, config.output.format)
    );

    Ok(())
}
