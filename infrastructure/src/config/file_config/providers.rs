//! Provider configuration from TOML (`[provider]` section)

use qa_domain::{DomainError, ProviderKind, ProviderSettings};
use serde::{Deserialize, Serialize};

/// Groq provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGroqConfig {
    /// Environment variable name for the API key (default: "GROQ_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    /// Base URL for the Groq OpenAI-compatible API.
    pub base_url: String,
    /// Model identifier.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Max tokens per response.
    pub max_tokens: u32,
    /// Request timeout in seconds (unset: no client-side timeout).
    pub request_timeout_secs: Option<u64>,
}

impl Default for FileGroqConfig {
    fn default() -> Self {
        let d = ProviderSettings::groq();
        Self {
            api_key_env: d.api_key_env,
            api_key: None,
            base_url: d.base_url,
            model: d.model,
            temperature: d.temperature,
            max_tokens: d.max_tokens,
            request_timeout_secs: d.request_timeout_secs,
        }
    }
}

/// Cohere provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCohereConfig {
    /// Environment variable name for the API key (default: "COHERE_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    /// Base URL for the Cohere API.
    pub base_url: String,
    /// Model identifier.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Max tokens per response.
    pub max_tokens: u32,
    /// Request timeout in seconds (unset: no client-side timeout).
    pub request_timeout_secs: Option<u64>,
}

impl Default for FileCohereConfig {
    fn default() -> Self {
        let d = ProviderSettings::cohere();
        Self {
            api_key_env: d.api_key_env,
            api_key: None,
            base_url: d.base_url,
            model: d.model,
            temperature: d.temperature,
            max_tokens: d.max_tokens,
            request_timeout_secs: d.request_timeout_secs,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// Provider used when `--provider` is not given: "groq" or "cohere".
    pub default: String,
    /// Groq settings.
    pub groq: FileGroqConfig,
    /// Cohere settings.
    pub cohere: FileCohereConfig,
}

impl Default for FileProvidersConfig {
    fn default() -> Self {
        Self {
            default: ProviderKind::default().to_string(),
            groq: FileGroqConfig::default(),
            cohere: FileCohereConfig::default(),
        }
    }
}

impl FileProvidersConfig {
    /// Parse the `default` provider name.
    pub fn parse_default(&self) -> Result<ProviderKind, DomainError> {
        self.default.parse()
    }

    /// Provider-neutral settings for the given provider.
    pub fn settings_for(&self, kind: ProviderKind) -> ProviderSettings {
        match kind {
            ProviderKind::Groq => ProviderSettings {
                kind,
                api_key_env: self.groq.api_key_env.clone(),
                base_url: self.groq.base_url.clone(),
                model: self.groq.model.clone(),
                temperature: self.groq.temperature,
                max_tokens: self.groq.max_tokens,
                request_timeout_secs: self.groq.request_timeout_secs,
            },
            ProviderKind::Cohere => ProviderSettings {
                kind,
                api_key_env: self.cohere.api_key_env.clone(),
                base_url: self.cohere.base_url.clone(),
                model: self.cohere.model.clone(),
                temperature: self.cohere.temperature,
                max_tokens: self.cohere.max_tokens,
                request_timeout_secs: self.cohere.request_timeout_secs,
            },
        }
    }

    /// API key written directly in the config file, if any.
    pub fn configured_api_key(&self, kind: ProviderKind) -> Option<&str> {
        match kind {
            ProviderKind::Groq => self.groq.api_key.as_deref(),
            ProviderKind::Cohere => self.cohere.api_key.as_deref(),
        }
    }
}
