//! Fake AI client for tests and offline use.
//!
//! Responses are registered per prompt name, so tests can script exactly which
//! collaborator calls succeed and which fail without network access.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, RwLock};

use super::client::{AiClient, AiError};
use super::image_data::ImageData;
use super::prompts::detect_ingredients::DETECT_INGREDIENTS_PROMPT_NAME;
use super::prompts::find_video::FIND_VIDEO_PROMPT_NAME;
use super::prompts::nutrition::NUTRITION_PROMPT_NAME;
use super::prompts::suggest_recipes::SUGGEST_RECIPES_PROMPT_NAME;
use super::types::{ChatRequest, ChatResponse};

const CANNED_SUGGESTIONS: &str = r#"{"recipes": [
    {
        "title": "Pantry Frittata",
        "description": "Eggs baked with whatever is on hand",
        "ingredients": ["eggs", "onion", "cheese"],
        "steps": ["Soften the onion", "Pour in beaten eggs", "Top with cheese and bake"],
        "prepTime": "25 min",
        "nutrition": {"calories": 380, "protein": 24, "carbs": 8, "fat": 27}
    },
    {
        "title": "Vegetable Fried Rice",
        "description": "A quick wok dish for leftover rice",
        "ingredients": ["rice", "eggs", "peas", "soy sauce"],
        "steps": ["Scramble the eggs", "Fry the rice and peas", "Season with soy sauce"],
        "prepTime": "15 min",
        "nutrition": {"calories": 450, "protein": 14, "carbs": 68, "fat": 12}
    }
]}"#;

const CANNED_NUTRITION: &str = r#"{"calories": 420, "protein": 18, "carbs": 52, "fat": 14, "advice": "Add a side salad for fibre."}"#;

const CANNED_VIDEO: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

const CANNED_DETECTION: &str = "eggs, milk, tomatoes, cheese";

#[derive(Debug, Clone)]
enum FakeReply {
    Text(String),
    Image(ImageData),
    Fail(String),
}

/// A fake AI client.
///
/// Prompt names without a registered reply fail, which is what an unreachable
/// provider looks like to callers.
#[derive(Debug, Default)]
pub struct FakeAiClient {
    replies: RwLock<HashMap<String, FakeReply>>,
    calls: Mutex<Vec<String>>,
}

impl FakeAiClient {
    /// Create a fake with no registered replies.
    pub fn new() -> Self {
        Self::default()
    }

    /// A fake that answers the text prompts with fixed replies.
    ///
    /// Used as the offline development provider. Image prompts stay
    /// unregistered, so recipes fall back to the stock sample photos and the
    /// shared placeholder instead of storing a fake drawing.
    pub fn with_canned_replies() -> Self {
        Self::new()
            .with_text(SUGGEST_RECIPES_PROMPT_NAME, CANNED_SUGGESTIONS)
            .with_text(NUTRITION_PROMPT_NAME, CANNED_NUTRITION)
            .with_text(FIND_VIDEO_PROMPT_NAME, CANNED_VIDEO)
            .with_text(DETECT_INGREDIENTS_PROMPT_NAME, CANNED_DETECTION)
    }

    /// Reply to `prompt_name` with the given text.
    pub fn with_text(self, prompt_name: &str, text: &str) -> Self {
        self.insert(prompt_name, FakeReply::Text(text.to_string()));
        self
    }

    /// Reply to `prompt_name` with a generated image.
    pub fn with_image(self, prompt_name: &str, image: ImageData) -> Self {
        self.insert(prompt_name, FakeReply::Image(image));
        self
    }

    /// Fail every call to `prompt_name`.
    pub fn with_failure(self, prompt_name: &str, message: &str) -> Self {
        self.insert(prompt_name, FakeReply::Fail(message.to_string()));
        self
    }

    /// Replace the reply for `prompt_name` on a shared instance.
    pub fn set_text(&self, prompt_name: &str, text: &str) {
        self.insert(prompt_name, FakeReply::Text(text.to_string()));
    }

    /// Replace the image reply for `prompt_name` on a shared instance.
    pub fn set_image(&self, prompt_name: &str, image: ImageData) {
        self.insert(prompt_name, FakeReply::Image(image));
    }

    /// Prompt names of all calls so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn insert(&self, prompt_name: &str, reply: FakeReply) {
        self.replies
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(prompt_name.to_string(), reply);
    }
}

#[async_trait]
impl AiClient for FakeAiClient {
    async fn complete(
        &self,
        prompt_name: &str,
        _request: ChatRequest,
    ) -> Result<ChatResponse, AiError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(prompt_name.to_string());

        let reply = self
            .replies
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(prompt_name)
            .cloned();

        match reply {
            Some(FakeReply::Text(text)) => Ok(ChatResponse::text(text)),
            Some(FakeReply::Image(image)) => Ok(ChatResponse::image(image)),
            Some(FakeReply::Fail(message)) => Err(AiError::RequestFailed(message)),
            None => Err(AiError::RequestFailed(format!(
                "FakeAiClient: no reply configured for prompt {}",
                prompt_name
            ))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fake_returns_registered_text() {
        let client = FakeAiClient::new().with_text("find_video", "https://youtu.be/abc");
        let response = client
            .complete("find_video", ChatRequest::default())
            .await
            .unwrap();
        assert_eq!(response.content, "https://youtu.be/abc");
    }

    #[tokio::test]
    async fn test_fake_unregistered_prompt_fails() {
        let client = FakeAiClient::new();
        let result = client.complete("anything", ChatRequest::default()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_canned_replies_cover_text_operations() {
        use crate::ai::{
            detect_ingredients_from_image, estimate_nutrition, find_tutorial_video,
            generate_dish_image, suggest_recipes_from_ingredients,
        };

        let client = FakeAiClient::with_canned_replies();
        let ingredients = vec!["eggs".to_string()];

        assert_eq!(
            suggest_recipes_from_ingredients(&client, &ingredients).await.len(),
            2
        );
        assert!(estimate_nutrition(&client, "Omelette", &ingredients)
            .await
            .is_some());
        assert_eq!(
            find_tutorial_video(&client, "Omelette").await.as_deref(),
            Some(CANNED_VIDEO)
        );
        let photo = ImageData::Remote("https://example.com/fridge.jpg".to_string());
        assert_eq!(
            detect_ingredients_from_image(&client, &photo).await,
            vec!["eggs", "milk", "tomatoes", "cheese"]
        );
        assert!(generate_dish_image(&client, "Omelette").await.is_none());
    }

    #[tokio::test]
    async fn test_fake_records_calls_in_order() {
        let client = FakeAiClient::new().with_failure("b", "down");
        let _ = client.complete("a", ChatRequest::default()).await;
        let _ = client.complete("b", ChatRequest::default()).await;
        assert_eq!(client.calls(), vec!["a".to_string(), "b".to_string()]);
    }
}
