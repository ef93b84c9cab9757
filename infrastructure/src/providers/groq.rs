//! Groq chat completions adapter
//!
//! OpenAI-compatible API. The answer lives at `choices[0].message.content`.

use super::{check_status, convert_request_error, endpoint, http_client};
use async_trait::async_trait;
use qa_application::{GatewayError, LlmGateway};
use qa_domain::{Credential, ProviderKind, ProviderSettings};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub struct GroqGateway {
    client: Client,
    settings: ProviderSettings,
}

impl GroqGateway {
    pub fn new(settings: ProviderSettings) -> Result<Self, GatewayError> {
        let client = http_client(&settings)?;
        Ok(Self { client, settings })
    }

    fn completions_url(&self) -> String {
        endpoint(&self.settings.base_url, "/chat/completions")
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

#[async_trait]
impl LlmGateway for GroqGateway {
    fn provider(&self) -> ProviderKind {
        ProviderKind::Groq
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
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
        };

        let url = self.completions_url();
        debug!(url = %url, model = %self.settings.model, "Calling Groq chat completions");

        let response = self
            .client
            .post(&url)
            .bearer_auth(credential.expose())
            .json(&body)
            .send()
            .await
            .map_err(convert_request_error)?;

        let response = check_status(ProviderKind::Groq, response).await?;

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        let choice = parsed.choices.into_iter().next().ok_or_else(|| {
            GatewayError::InvalidResponse("response contained no choices".to_string())
        })?;

        choice.message.content.ok_or_else(|| {
            GatewayError::InvalidResponse("message had no content".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings(base_url: &str) -> ProviderSettings {
        ProviderSettings {
            base_url: base_url.to_string(),
            ..ProviderSettings::groq()
        }
    }

    fn key() -> Credential {
        Credential::try_new("gsk_test").unwrap()
    }

    #[tokio::test]
    async fn test_complete_extracts_nested_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer gsk_test"))
            .and(body_partial_json(json!({
                "model": "llama-3.1-70b-versatile",
                "max_tokens": 1024,
                "messages": [{"role": "user", "content": "prompt text"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "chatcmpl-1",
                "choices": [
                    {"index": 0, "message": {"role": "assistant", "content": "2 + 2 = 4"}}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = GroqGateway::new(settings(&server.uri())).unwrap();
        let text = gateway.complete("prompt text", &key()).await.unwrap();

        assert_eq!(text, "2 + 2 = 4");
    }

    #[tokio::test]
    async fn test_non_success_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
            .mount(&server)
            .await;

        let gateway = GroqGateway::new(settings(&server.uri())).unwrap();
        let err = gateway.complete("prompt", &key()).await.unwrap_err();

        match err {
            GatewayError::HttpStatus { status, body, .. } => {
                assert_eq!(status, 401);
                assert_eq!(body, "invalid api key");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_choices_is_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&server)
            .await;

        let gateway = GroqGateway::new(settings(&server.uri())).unwrap();
        let err = gateway.complete("prompt", &key()).await.unwrap_err();

        assert!(matches!(err, GatewayError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_null_content_is_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [
                    {"index": 0, "message": {"role": "assistant", "content": null}}
                ]
            })))
            .mount(&server)
            .await;

        let gateway = GroqGateway::new(settings(&server.uri())).unwrap();
        let err = gateway.complete("prompt", &key()).await.unwrap_err();

        match err {
            GatewayError::InvalidResponse(msg) => assert_eq!(msg, "message had no content"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let gateway = GroqGateway::new(settings(&server.uri())).unwrap();
        let err = gateway.complete("prompt", &key()).await.unwrap_err();

        assert!(matches!(err, GatewayError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_connection_error() {
        let gateway = GroqGateway::new(settings("http://127.0.0.1:1")).unwrap();
        let err = gateway.complete("prompt", &key()).await.unwrap_err();

        assert!(matches!(err, GatewayError::ConnectionError(_)));
    }
}
