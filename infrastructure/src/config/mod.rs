//! Configuration file loading for llm-qa
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `LLM_QA_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./llm-qa.toml` or `./.llm-qa.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/llm-qa/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileCohereConfig, FileConfig, FileGroqConfig, FileOutputConfig,
    FileProvidersConfig, FileServerConfig,
};
pub use loader::ConfigLoader;
