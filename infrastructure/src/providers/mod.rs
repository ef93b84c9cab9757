//! Hosted LLM provider adapters
//!
//! Each adapter implements [`LlmGateway`] over plain HTTPS with `reqwest`.
//! Which one is used is decided by configuration at startup.

mod cohere;
mod groq;

pub use cohere::CohereGateway;
pub use groq::GroqGateway;

use qa_application::{GatewayError, LlmGateway};
use qa_domain::{ProviderKind, ProviderSettings};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Build the gateway for the configured provider.
pub fn build_gateway(settings: &ProviderSettings) -> Result<Arc<dyn LlmGateway>, GatewayError> {
    let gateway: Arc<dyn LlmGateway> = match settings.kind {
        ProviderKind::Groq => Arc::new(GroqGateway::new(settings.clone())?),
        ProviderKind::Cohere => Arc::new(CohereGateway::new(settings.clone())?),
    };

    info!(
        provider = %settings.kind,
        model = %settings.model,
        "LLM gateway initialized"
    );

    Ok(gateway)
}

fn http_client(settings: &ProviderSettings) -> Result<Client, GatewayError> {
    let mut builder = Client::builder();
    if let Some(secs) = settings.request_timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder
        .build()
        .map_err(|e| GatewayError::ClientError(format!("failed to build HTTP client: {}", e)))
}

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

fn convert_request_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_decode() {
        GatewayError::InvalidResponse(e.to_string())
    } else {
        GatewayError::ConnectionError(e.to_string())
    }
}

/// Turn a non-2xx response into [`GatewayError::HttpStatus`], keeping the body for context.
async fn check_status(
    provider: ProviderKind,
    response: reqwest::Response,
) -> Result<reqwest::Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<body unavailable>".to_string());
    Err(GatewayError::HttpStatus {
        provider,
        status: status.as_u16(),
        body,
    })
}
