//! CLI entrypoint for airline-support
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::sync::Arc;
use support_application::{
    ChatClient, Clock, ConversationLogger, CustomerSupportAssistant, EmbeddingModel, LlmGateway,
    NoConversationLogger, SystemClock, VectorStore,
};
use support_domain::ConversationId;
use support_domain::config::has_errors;
use support_infrastructure::{
    BookingDetailsFunction, ConfigLoader, DemoBookingDirectory, FileConfig, FileLoggingConfig,
    FunctionRegistry, InMemoryChatMemory, JsonlConversationLogger, KnowledgeLoader,
    OpenAiEmbeddingModel, OpenAiGateway, OpenAiSettings,
};
use support_presentation::{
    ChatRepl, Cli, ConsoleFormatter, ReplConfig, WaitingIndicator, fresh_conversation_id,
    print_reply,
};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    if cli.show_config {
        return show_config(&cli, &config);
    }

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(&cli, &config.logging)?;

    info!("Starting airline-support");

    let issues = config.validate();
    for issue in &issues {
        if issue.is_error() {
            eprintln!("{}", ConsoleFormatter::config_issue(issue));
        } else {
            warn!("{}", issue.message);
        }
    }
    if has_errors(&issues) {
        bail!("Invalid configuration. Run with --show-config to inspect the merged settings.");
    }

    let settings = OpenAiSettings::from_config(&config.model)
        .with_context(|| format!("No API key: set ${}", config.model.api_key_env))?;

    // === Dependency Injection ===
    let gateway: Arc<dyn LlmGateway> = Arc::new(OpenAiGateway::new(settings.clone()));
    let embedding: Arc<dyn EmbeddingModel> = Arc::new(OpenAiEmbeddingModel::new(settings));

    let store: Arc<dyn VectorStore> = Arc::new(
        KnowledgeLoader::open_store(&config.knowledge, embedding)
            .await
            .context("Failed to build the knowledge store")?,
    );

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let directory = Arc::new(DemoBookingDirectory::seeded(clock.today()));
    let functions =
        Arc::new(FunctionRegistry::new().register(BookingDetailsFunction::new(directory)));

    let builder = ChatClient::builder(gateway.clone(), functions)
        .clock(clock)
        .params(config.chat.to_chat_params())
        .conversation_logger(conversation_logger(&config.logging));

    let assistant = Arc::new(CustomerSupportAssistant::new(
        builder,
        store,
        Arc::new(InMemoryChatMemory::new()),
    )?);

    let conversation_id = match &cli.conversation {
        Some(id) => ConversationId::new(id.as_str())?,
        None => fresh_conversation_id()?,
    };

    let show_progress = !cli.quiet && config.repl.show_progress;

    // Single-shot mode
    if let Some(message) = &cli.message {
        let indicator = if show_progress {
            WaitingIndicator::start("Thinking...")
        } else {
            WaitingIndicator::hidden()
        };
        let stream = assistant.chat(&conversation_id, message);
        print_reply(stream, &mut std::io::stdout(), indicator, "").await?;
        return Ok(());
    }

    let repl_config = ReplConfig::default()
        .with_progress(show_progress)
        .with_history_file(config.repl.history_file.clone());

    ChatRepl::new(assistant, conversation_id, gateway.model_name())
        .with_config(repl_config)
        .run()
        .await?;

    Ok(())
}

/// Install the stderr subscriber plus an optional daily-rotated file layer.
fn init_logging(cli: &Cli, logging: &FileLoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = if cli.verbose == 0 && !cli.quiet {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()))
    } else {
        EnvFilter::new(cli.log_level())
    };

    let (file_layer, guard) = match &logging.directory {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir))?;
            let appender = tracing_appender::rolling::daily(dir, "airline-support.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    Ok(guard)
}

fn conversation_logger(logging: &FileLoggingConfig) -> Arc<dyn ConversationLogger> {
    let Some(path) = &logging.conversation_log else {
        return Arc::new(NoConversationLogger);
    };
    match JsonlConversationLogger::open(path) {
        Ok(logger) => {
            info!(path = %logger.path().display(), "Writing conversation log");
            Arc::new(logger)
        }
        Err(e) => {
            warn!("Could not open conversation log {}: {}", path, e);
            Arc::new(NoConversationLogger)
        }
    }
}

fn show_config(cli: &Cli, config: &FileConfig) -> Result<()> {
    if cli.no_config {
        println!("Configuration files disabled (--no-config); showing defaults.");
    } else {
        for line in ConfigLoader::describe_sources(cli.config.as_ref()) {
            println!("{}", line);
        }
    }

    let mut shown = config.clone();
    if shown.model.api_key.is_some() {
        shown.model.api_key = Some("********".to_string());
    }
    println!();
    println!(
        "{}",
        toml::to_string_pretty(&shown).context("Failed to render configuration")?
    );

    for issue in config.validate() {
        println!("{}", ConsoleFormatter::config_issue(&issue));
    }
    Ok(())
}
