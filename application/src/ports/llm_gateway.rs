//! LLM Gateway port
//!
//! Defines the interface for communicating with a hosted LLM provider.

use async_trait::async_trait;
use qa_domain::{Credential, ProviderKind};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Client error: {0}")]
    ClientError(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("{provider} returned {status}: {body}")]
    HttpStatus {
        provider: ProviderKind,
        status: u16,
        body: String,
    },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,
}

/// Gateway for LLM communication
///
/// One call, one outbound request. Implementations (adapters) live in the
/// infrastructure layer and do not retry.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Provider this gateway talks to
    fn provider(&self) -> ProviderKind;

    /// Model identifier sent with each request
    fn model(&self) -> &str;

    /// Submit a prompt and return the completion text
    async fn complete(&self, prompt: &str, credential: &Credential)
    -> Result<String, GatewayError>;
}
