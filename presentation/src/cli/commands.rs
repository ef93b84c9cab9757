//! CLI command definitions

use clap::{Parser, Subcommand};
use qa_domain::{DomainError, ProviderKind};
use std::path::PathBuf;

/// CLI arguments for llm-qa
#[derive(Parser, Debug)]
#[command(name = "llm-qa")]
#[command(author, version, about = "Ask a hosted LLM questions from the terminal or a web form")]
#[command(long_about = r#"
llm-qa forwards your questions to a hosted LLM (Groq or Cohere) and prints the answer.

With no subcommand it starts an interactive session. Type 'quit', 'exit' or 'q'
to leave. `llm-qa serve` starts a web form on http://0.0.0.0:5000 with a JSON
endpoint at POST /ask.

The API key is read from GROQ_API_KEY or COHERE_API_KEY. In interactive mode
you are asked for it if the variable is not set.

Configuration files are loaded from (in priority order):
1. LLM_QA_* environment variables (e.g. LLM_QA_PROVIDER__DEFAULT=cohere)
2. --config <path>     Explicit config file
3. ./llm-qa.toml       Project-level config
4. ~/.config/llm-qa/config.toml   Global config

Example:
  llm-qa
  llm-qa --provider cohere
  PORT=8080 llm-qa serve
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Provider to query (overrides provider.default)
    #[arg(short, long, global = true, value_name = "PROVIDER", value_parser = parse_provider)]
    pub provider: Option<ProviderKind>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the progress spinner and preprocessing diagnostics
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive question loop (default)
    Chat,
    /// Serve the web form and the POST /ask JSON endpoint
    Serve {
        /// Interface to bind (default from config: 0.0.0.0)
        #[arg(long, value_name = "HOST")]
        host: Option<String>,

        /// Port to listen on (default from config: 5000)
        #[arg(long, env = "PORT", value_name = "PORT")]
        port: Option<u16>,
    },
}

/// Resolve where `serve` binds: flags (the port also reads `PORT`), then config.
pub fn bind_address(
    host: Option<String>,
    port: Option<u16>,
    configured_host: &str,
    configured_port: u16,
) -> (String, u16) {
    (
        host.unwrap_or_else(|| configured_host.to_string()),
        port.unwrap_or(configured_port),
    )
}

fn parse_provider(s: &str) -> Result<ProviderKind, DomainError> {
    s.parse()
}
