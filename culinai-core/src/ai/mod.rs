//! AI collaborator integration via OpenRouter.
//!
//! This module provides:
//! - `AiClient` trait for abstracting AI providers
//! - `OpenRouterClient` talking to an OpenAI-compatible endpoint
//! - `FakeAiClient` for tests and offline use
//! - One function per collaborator operation (images, suggestions,
//!   nutrition, video lookup, ingredient detection)
//!
//! Every operation function absorbs failures: it logs a warning and returns an
//! empty value, so callers never see an `AiError`.
//!
//! # Configuration
//!
//! - `OPENROUTER_API_KEY`: OpenRouter API key. Without it the offline fake
//!   provider answers with canned replies.
//! - `CULINAI_AI_PROVIDER` (optional): "openrouter" or "fake"
//! - `CULINAI_AI_MODEL` (optional): text model, e.g. "google/gemini-2.5-flash"
//! - `CULINAI_AI_IMAGE_MODEL` (optional): model used to draw and edit images
//! - `CULINAI_AI_BASE_URL` (optional): API base URL
//! - `CULINAI_AI_TIMEOUT_SECS` (optional): per-request timeout
//!
//! # Example
//!
//! ```ignore
//! use culinai_core::ai::{create_client_from_env, estimate_nutrition};
//!
//! let client = create_client_from_env()?;
//! let nutrition = estimate_nutrition(client.as_ref(), "Ratatouille", &ingredients).await;
//! ```

use std::sync::Arc;

mod client;
mod config;
mod detect_ingredients;
mod dish_image;
mod fake;
mod image_data;
mod nutrition;
mod parse;
pub mod prompts;
mod suggest;
mod types;
mod video;

pub use client::{AiClient, AiError, OpenRouterClient};
pub use config::{AiConfig, ConfigError, Provider};
pub use detect_ingredients::{detect_ingredients_from_image, split_ingredient_list};
pub use dish_image::{edit_dish_image, generate_dish_image};
pub use fake::FakeAiClient;
pub use image_data::{ImageData, ImageError, MAX_FILE_SIZE};
pub use nutrition::estimate_nutrition;
pub use parse::strip_code_fence;
pub use suggest::suggest_recipes_from_ingredients;
pub use types::{ChatMessage, ChatRequest, ChatResponse, OutputKind, Role, Usage};
pub use video::{extract_youtube_url, find_tutorial_video};

/// Build the client selected by the environment.
pub fn create_client_from_env() -> Result<Arc<dyn AiClient>, AiError> {
    create_client(AiConfig::from_env()?)
}

/// Build the client for an explicit configuration.
pub fn create_client(config: AiConfig) -> Result<Arc<dyn AiClient>, AiError> {
    match config.provider {
        Provider::OpenRouter => {
            tracing::info!(model = %config.model, image_model = %config.image_model, "Using OpenRouter AI provider");
            Ok(Arc::new(OpenRouterClient::new(config)?))
        }
        Provider::Fake => {
            tracing::info!("Using fake AI provider with canned replies");
            Ok(Arc::new(FakeAiClient::with_canned_replies()))
        }
    }
}
