//! AI client implementation using OpenRouter (OpenAI-compatible API).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::config::{AiConfig, ConfigError};
use super::image_data::ImageData;
use super::types::{ChatMessage, ChatRequest, ChatResponse, OutputKind, Role, Usage};

/// Output modalities requested when the model should draw.
const IMAGE_MODALITIES: &[&str] = &["image", "text"];

#[derive(Error, Debug)]
pub enum AiError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Model returned no usable result")]
    Empty,

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Trait for AI clients.
///
/// Implementations are stateless: no retries, no caching. Callers decide what
/// a failure means for them.
#[async_trait]
pub trait AiClient: Send + Sync {
    /// Complete a chat request.
    ///
    /// The `prompt_name` identifies the operation in logs and lets test doubles
    /// route responses.
    async fn complete(
        &self,
        prompt_name: &str,
        request: ChatRequest,
    ) -> Result<ChatResponse, AiError>;

    /// Provider name for logging (e.g., "openrouter", "fake").
    fn provider_name(&self) -> &'static str;
}

/// AI client talking to OpenRouter's chat completions endpoint.
pub struct OpenRouterClient {
    client: reqwest::Client,
    config: AiConfig,
    api_key: String,
}

impl OpenRouterClient {
    /// Create a new client with the given configuration.
    pub fn new(config: AiConfig) -> Result<Self, AiError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| ConfigError::MissingEnvVar("OPENROUTER_API_KEY".to_string()))?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AiError::RequestFailed(e.to_string()))?;

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    fn model_for(&self, output: OutputKind) -> &str {
        match output {
            OutputKind::Image => &self.config.image_model,
            OutputKind::Text | OutputKind::Json => &self.config.model,
        }
    }

    /// Convert our ChatMessage to the wire format.
    fn to_wire_message(msg: &ChatMessage) -> WireMessage {
        let role = match msg.role {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        };

        let content = if msg.images.is_empty() {
            WireContent::Text(msg.content.clone())
        } else {
            let mut parts = vec![WirePart::Text {
                text: msg.content.clone(),
            }];
            parts.extend(msg.images.iter().map(|image| WirePart::ImageUrl {
                image_url: WireImageUrl { url: image.to_url() },
            }));
            WireContent::Parts(parts)
        };

        WireMessage { role, content }
    }
}

/// Chat completions request body.
#[derive(Debug, Serialize)]
struct WireRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<WireResponseFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    modalities: Option<&'static [&'static str]>,
}

#[derive(Debug, Serialize)]
struct WireMessage {
    role: &'static str,
    content: WireContent,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum WireContent {
    Text(String),
    Parts(Vec<WirePart>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum WirePart {
    Text { text: String },
    ImageUrl { image_url: WireImageUrl },
}

#[derive(Debug, Serialize, Deserialize)]
struct WireImageUrl {
    url: String,
}

#[derive(Debug, Serialize)]
struct WireResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

/// Chat completions response body.
#[derive(Debug, Deserialize)]
struct WireResponse {
    #[serde(default)]
    choices: Vec<WireChoice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct WireChoice {
    message: WireResponseMessage,
}

#[derive(Debug, Deserialize)]
struct WireResponseMessage {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    images: Vec<WireResponseImage>,
}

#[derive(Debug, Deserialize)]
struct WireResponseImage {
    image_url: WireImageUrl,
}

#[derive(Debug, Deserialize)]
struct WireApiError {
    message: String,
}

/// Error response body.
#[derive(Debug, Deserialize)]
struct WireErrorResponse {
    error: WireApiError,
}

#[async_trait]
impl AiClient for OpenRouterClient {
    async fn complete(
        &self,
        prompt_name: &str,
        request: ChatRequest,
    ) -> Result<ChatResponse, AiError> {
        let model = self.model_for(request.output);

        let body = WireRequest {
            model,
            messages: request.messages.iter().map(Self::to_wire_message).collect(),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            response_format: (request.output == OutputKind::Json).then_some(WireResponseFormat {
                format_type: "json_object",
            }),
            modalities: (request.output == OutputKind::Image).then_some(IMAGE_MODALITIES),
        };

        tracing::debug!(prompt_name = prompt_name, model = model, "Calling AI API");

        let response = self
            .client
            .post(format!(
                "{}/chat/completions",
                self.config.base_url.trim_end_matches('/')
            ))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AiError::RequestFailed(e.to_string()))?;

        let status = response.status().as_u16();

        let text = response
            .text()
            .await
            .map_err(|e| AiError::RequestFailed(e.to_string()))?;

        if status != 200 {
            // Try to parse error response
            if let Ok(error_response) = serde_json::from_str::<WireErrorResponse>(&text) {
                return Err(AiError::Api {
                    status,
                    message: error_response.error.message,
                });
            }
            return Err(AiError::Api {
                status,
                message: text,
            });
        }

        let wire: WireResponse =
            serde_json::from_str(&text).map_err(|e| AiError::ParseError(e.to_string()))?;

        let usage = wire.usage.unwrap_or_default();
        let message = wire
            .choices
            .into_iter()
            .next()
            .map(|c| c.message)
            .ok_or(AiError::Empty)?;

        // Images the model produced that we cannot interpret are skipped
        let images = message
            .images
            .into_iter()
            .filter_map(|img| ImageData::parse(&img.image_url.url).ok())
            .collect();

        Ok(ChatResponse {
            content: message.content.unwrap_or_default(),
            images,
            usage,
        })
    }

    fn provider_name(&self) -> &'static str {
        "openrouter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_message_serializes_as_string() {
        let wire = OpenRouterClient::to_wire_message(&ChatMessage::user("hello"));
        let json = serde_json::to_value(&wire).unwrap();
        assert_eq!(json["role"], "user");
        assert_eq!(json["content"], "hello");
    }

    #[test]
    fn test_image_message_serializes_as_parts() {
        let image = ImageData::parse("data:image/png;base64,QUJD").unwrap();
        let message = ChatMessage::user_with_images("what is this", vec![image]);
        let wire = OpenRouterClient::to_wire_message(&message);
        let json = serde_json::to_value(&wire).unwrap();

        assert_eq!(json["content"][0]["type"], "text");
        assert_eq!(json["content"][0]["text"], "what is this");
        assert_eq!(json["content"][1]["type"], "image_url");
        assert_eq!(
            json["content"][1]["image_url"]["url"],
            "data:image/png;base64,QUJD"
        );
    }

    #[test]
    fn test_response_with_inline_image_parses() {
        let body = r#"{
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": null,
                    "images": [{"type": "image_url", "image_url": {"url": "data:image/png;base64,QUJD"}}]
                }
            }]
        }"#;
        let wire: WireResponse = serde_json::from_str(body).unwrap();
        let message = wire.choices.into_iter().next().unwrap().message;
        assert!(message.content.is_none());
        assert_eq!(message.images[0].image_url.url, "data:image/png;base64,QUJD");
    }

    #[test]
    fn test_new_requires_api_key() {
        assert!(OpenRouterClient::new(AiConfig::fake()).is_err());
    }
}
