//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

mod output;
mod providers;
mod server;

pub use output::FileOutputConfig;
pub use providers::{FileCohereConfig, FileGroqConfig, FileProvidersConfig};
pub use server::FileServerConfig;

use qa_domain::ProviderKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Error, Debug, PartialEq)]
pub enum ConfigValidationError {
    #[error("provider.default: unknown provider '{0}' (expected \"groq\" or \"cohere\")")]
    UnknownProvider(String),

    #[error("provider.{0}.model cannot be empty")]
    EmptyModelName(ProviderKind),

    #[error("provider.{0}.max_tokens must be greater than 0")]
    InvalidMaxTokens(ProviderKind),

    #[error("provider.{provider}.temperature must be between 0.0 and 2.0, got {value}")]
    InvalidTemperature { provider: ProviderKind, value: f32 },

    #[error("provider.{0}.request_timeout_secs cannot be 0")]
    InvalidTimeout(ProviderKind),

    #[error("server.port cannot be 0")]
    InvalidPort,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Provider selection and per-provider settings
    pub provider: FileProvidersConfig,
    /// Web server settings
    pub server: FileServerConfig,
    /// Terminal output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.provider
            .parse_default()
            .map_err(|_| ConfigValidationError::UnknownProvider(self.provider.default.clone()))?;

        for kind in ProviderKind::all() {
            let settings = self.provider.settings_for(*kind);

            if settings.model.trim().is_empty() {
                return Err(ConfigValidationError::EmptyModelName(*kind));
            }

            if settings.max_tokens == 0 {
                return Err(ConfigValidationError::InvalidMaxTokens(*kind));
            }

            if !(0.0..=2.0).contains(&settings.temperature) {
                return Err(ConfigValidationError::InvalidTemperature {
                    provider: *kind,
                    value: settings.temperature,
                });
            }

            if settings.request_timeout_secs == Some(0) {
                return Err(ConfigValidationError::InvalidTimeout(*kind));
            }
        }

        if self.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[provider]
default = "groq"

[provider.groq]
model = "llama-3.3-70b-versatile"
temperature = 0.2
max_tokens = 512
request_timeout_secs = 30

[provider.cohere]
api_key_env = "MY_COHERE_KEY"

[server]
host = "127.0.0.1"
port = 8080

[output]
show_preprocessing = false
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.provider.groq.model, "llama-3.3-70b-versatile");
        assert_eq!(config.provider.groq.max_tokens, 512);
        assert_eq!(config.provider.groq.request_timeout_secs, Some(30));
        assert_eq!(config.provider.cohere.api_key_env, "MY_COHERE_KEY");
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert!(!config.output.show_preprocessing);
        assert!(!config.output.color);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.provider.default, "groq");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(config.output.show_preprocessing);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_unknown_provider() {
        let config: FileConfig = toml::from_str("[provider]\ndefault = \"openai\"").unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::UnknownProvider("openai".to_string()))
        );
    }

    #[test]
    fn test_validate_empty_model_name() {
        let config: FileConfig = toml::from_str("[provider.cohere]\nmodel = \" \"").unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::EmptyModelName(ProviderKind::Cohere))
        );
    }

    #[test]
    fn test_validate_zero_max_tokens() {
        let config: FileConfig = toml::from_str("[provider.groq]\nmax_tokens = 0").unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidMaxTokens(ProviderKind::Groq))
        );
    }

    #[test]
    fn test_validate_temperature_out_of_range() {
        let config: FileConfig = toml::from_str("[provider.groq]\ntemperature = 3.5").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidTemperature { .. })
        ));
    }

    #[test]
    fn test_validate_zero_port() {
        let config: FileConfig = toml::from_str("[server]\nport = 0").unwrap();
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidPort));
    }
}
