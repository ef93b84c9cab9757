//! Provider configuration types (provider-neutral, serde-free).
//!
//! These types define the shape of provider settings without depending
//! on any serialization format (TOML, JSON, etc.).

use crate::DomainError;
use std::str::FromStr;

/// Hosted model providers that can answer questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    /// Groq chat completions (OpenAI-compatible, nested `choices[0].message.content`)
    #[default]
    Groq,
    /// Cohere chat (flat `text` field)
    Cohere,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Groq => "groq",
            ProviderKind::Cohere => "cohere",
        }
    }

    /// Human-facing provider name for prompts and banners
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderKind::Groq => "Groq",
            ProviderKind::Cohere => "Cohere",
        }
    }

    pub fn all() -> &'static [ProviderKind] {
        &[ProviderKind::Groq, ProviderKind::Cohere]
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "groq" => Ok(ProviderKind::Groq),
            "cohere" => Ok(ProviderKind::Cohere),
            other => Err(DomainError::UnknownProvider(other.to_string())),
        }
    }
}

/// Settings for one provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderSettings {
    pub kind: ProviderKind,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Base URL of the provider API.
    pub base_url: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Max tokens per response.
    pub max_tokens: u32,
    /// Client-side request timeout. None leaves it to the HTTP client.
    pub request_timeout_secs: Option<u64>,
}

impl ProviderSettings {
    pub fn groq() -> Self {
        Self {
            kind: ProviderKind::Groq,
            api_key_env: "GROQ_API_KEY".to_string(),
            base_url: "https://api.groq.com/openai/v1".to_string(),
            model: "llama-3.1-70b-versatile".to_string(),
            temperature: 0.7,
            max_tokens: 1024,
            request_timeout_secs: None,
        }
    }

    pub fn cohere() -> Self {
        Self {
            kind: ProviderKind::Cohere,
            api_key_env: "COHERE_API_KEY".to_string(),
            base_url: "https://api.cohere.com".to_string(),
            model: "command-r".to_string(),
            temperature: 0.7,
            max_tokens: 1024,
            request_timeout_secs: None,
        }
    }

    /// Built-in defaults for the given provider
    pub fn defaults_for(kind: ProviderKind) -> Self {
        match kind {
            ProviderKind::Groq => Self::groq(),
            ProviderKind::Cohere => Self::cohere(),
        }
    }
}
