//! Cohere chat adapter
//!
//! The answer is the flat top-level `text` field of the response.

use super::{check_status, convert_request_error, endpoint, http_client};
use async_trait::async_trait;
use qa_application::{GatewayError, LlmGateway};
use qa_domain::{Credential, ProviderKind, ProviderSettings};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub struct CohereGateway {
    client: Client,
    settings: ProviderSettings,
}

impl CohereGateway {
    pub fn new(settings: ProviderSettings) -> Result<Self, GatewayError> {
        let client = http_client(&settings)?;
        Ok(Self { client, settings })
    }

    fn chat_url(&self) -> String {
        endpoint(&self.settings.base_url, "/v1/chat")
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    message: &'a str,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    text: String,
}

#[async_trait]
impl LlmGateway for CohereGateway {
    fn provider(&self) -> ProviderKind {
        ProviderKind::Cohere
    }

    fn model(&self) -> &str {
        &self.settings.model
    }

    async fn complete(
        &self,
        prompt: &str,
        credential: &Credential,
    ) -> Result<String, GatewayError> {
        let body = ChatRequest {
            model: &self.settings.model,
            message: prompt,
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
        };

        let url = self.chat_url();
        debug!(url = %url, model = %self.settings.model, "Calling Cohere chat");

        let response = self
            .client
            .post(&url)
            .bearer_auth(credential.expose())
            .json(&body)
            .send()
            .await
            .map_err(convert_request_error)?;

        let response = check_status(ProviderKind::Cohere, response).await?;

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        Ok(parsed.text)
    }
}
