//! AI configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::error::UnknownName;

/// Default OpenRouter base URL.
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Default model for text and JSON requests.
pub const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";

/// Default model for image generation and editing.
pub const DEFAULT_IMAGE_MODEL: &str = "google/gemini-2.5-flash-image";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}

/// Which collaborator implementation to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    /// OpenRouter (OpenAI-compatible chat completions).
    OpenRouter,
    /// Offline canned responses.
    Fake,
}

impl FromStr for Provider {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "openrouter" => Ok(Provider::OpenRouter),
            "fake" => Ok(Provider::Fake),
            _ => Err(UnknownName::new("provider", s)),
        }
    }
}

/// AI client configuration.
#[derive(Debug, Clone)]
pub struct AiConfig {
    pub provider: Provider,
    /// API key, required for the OpenRouter provider.
    pub api_key: Option<String>,
    /// Model for text and JSON requests.
    pub model: String,
    /// Model for requests that produce images.
    pub image_model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Per-request timeout. A timed-out call counts as "no result".
    pub timeout: Duration,
}

impl AiConfig {
    /// Load configuration from environment variables.
    ///
    /// - `CULINAI_AI_PROVIDER`: "openrouter" or "fake" (default: openrouter if
    ///   `OPENROUTER_API_KEY` is set, fake otherwise)
    /// - `OPENROUTER_API_KEY`: API key, required for openrouter
    /// - `CULINAI_AI_MODEL`: text model (default: "google/gemini-2.5-flash")
    /// - `CULINAI_AI_IMAGE_MODEL`: image model (default: "google/gemini-2.5-flash-image")
    /// - `CULINAI_AI_BASE_URL`: API base URL (default: "https://openrouter.ai/api/v1")
    /// - `CULINAI_AI_TIMEOUT_SECS`: request timeout (default: 60)
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("OPENROUTER_API_KEY").ok().filter(|k| !k.is_empty());

        let provider = match env::var("CULINAI_AI_PROVIDER") {
            Ok(value) => value.parse::<Provider>().map_err(|_| ConfigError::InvalidValue {
                name: "CULINAI_AI_PROVIDER".to_string(),
                value: value.clone(),
            })?,
            Err(_) if api_key.is_some() => Provider::OpenRouter,
            Err(_) => Provider::Fake,
        };

        if provider == Provider::OpenRouter && api_key.is_none() {
            return Err(ConfigError::MissingEnvVar("OPENROUTER_API_KEY".to_string()));
        }

        let model = env::var("CULINAI_AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let image_model =
            env::var("CULINAI_AI_IMAGE_MODEL").unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.to_string());

        let base_url =
            env::var("CULINAI_AI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout_secs = match env::var("CULINAI_AI_TIMEOUT_SECS") {
            Ok(value) => value.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                name: "CULINAI_AI_TIMEOUT_SECS".to_string(),
                value,
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            provider,
            api_key,
            model,
            image_model,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Configuration for the offline fake collaborator.
    pub fn fake() -> Self {
        Self {
            provider: Provider::Fake,
            api_key: None,
            model: "fake-model".to_string(),
            image_model: "fake-image-model".to_string(),
            base_url: String::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
