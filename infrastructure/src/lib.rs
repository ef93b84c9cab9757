//! Infrastructure layer for llm-qa
//!
//! This crate contains the provider adapters that implement the
//! [`LlmGateway`](qa_application::LlmGateway) port, configuration file
//! loading and credential resolution.

pub mod config;
pub mod credentials;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileCohereConfig, FileConfig, FileGroqConfig,
    FileOutputConfig, FileProvidersConfig, FileServerConfig,
};
pub use credentials::{resolve_credential, resolve_credential_with};
pub use providers::{CohereGateway, GroqGateway, build_gateway};
