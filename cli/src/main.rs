//! CLI entrypoint for llm-qa
//!
//! This is the main binary that wires together all layers using
//! dependency injection. Configuration and the API key are resolved
//! here, once, and handed to the selected surface.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use qa_application::AskQuestionUseCase;
use qa_infrastructure::{ConfigLoader, build_gateway, resolve_credential};
use qa_presentation::{
    AppState, ChatRepl, Cli, Command, SessionEnd, bind_address, output, serve,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v when set
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate().context("Invalid configuration")?;

    output::set_color_enabled(config.output.color);

    let provider = match cli.provider {
        Some(provider) => provider,
        None => config.provider.parse_default()?,
    };
    let settings = config.provider.settings_for(provider);
    let credential = resolve_credential(&settings, config.provider.configured_api_key(provider));

    info!(%provider, model = %settings.model, "Starting llm-qa");

    // === Dependency Injection ===
    let gateway = build_gateway(&settings)?;
    let use_case = AskQuestionUseCase::new(gateway);

    match cli.command.unwrap_or(Command::Chat) {
        Command::Chat => {
            let repl = ChatRepl::new(use_case)
                .with_preprocessing(config.output.show_preprocessing && !cli.quiet)
                .with_progress(!cli.quiet);

            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut stdout = std::io::stdout();

            let end = repl.run(credential, &mut input, &mut stdout).await?;
            if end == SessionEnd::MissingCredential {
                warn!(env = %settings.api_key_env, "Session ended: no API key");
            }
        }
        Command::Serve { host, port } => {
            let (host, port) = bind_address(host, port, &config.server.host, config.server.port);

            if credential.is_none() {
                warn!(
                    env = %settings.api_key_env,
                    "No API key configured; /ask will answer 500 until one is set"
                );
            }

            serve(&host, port, AppState::new(use_case, credential))
                .await
                .with_context(|| format!("Web server on {}:{} failed", host, port))?;
        }
    }

    Ok(())
}
