//! Ingredient detection from a photo.

use crate::ai::prompts::detect_ingredients::{
    render_detect_ingredients_prompt, DETECT_INGREDIENTS_PROMPT_NAME,
};
use crate::ai::{AiClient, AiError, ChatMessage, ChatRequest, ImageData};

/// List the ingredients visible in a photo.
///
/// Returns an empty list on error. Duplicates are kept; merging into the
/// pantry deduplicates.
pub async fn detect_ingredients_from_image(
    ai_client: &dyn AiClient,
    photo: &ImageData,
) -> Vec<String> {
    match request_detection(ai_client, photo).await {
        Ok(ingredients) => ingredients,
        Err(e) => {
            tracing::warn!(error = %e, "Ingredient detection failed");
            vec![]
        }
    }
}

async fn request_detection(
    ai_client: &dyn AiClient,
    photo: &ImageData,
) -> Result<Vec<String>, AiError> {
    let request = ChatRequest {
        messages: vec![ChatMessage::user_with_images(
            render_detect_ingredients_prompt(),
            vec![photo.clone()],
        )],
        max_tokens: Some(512),
        ..Default::default()
    };

    let response = ai_client
        .complete(DETECT_INGREDIENTS_PROMPT_NAME, request)
        .await?;

    Ok(split_ingredient_list(&response.content))
}

/// Split a comma-separated answer into trimmed, non-empty names.
pub fn split_ingredient_list(text: &str) -> Vec<String> {
    text.split([',', '\n'])
        .map(|s| s.trim().trim_end_matches('.').trim())
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::FakeAiClient;

    #[test]
    fn test_split_ingredient_list() {
        assert_eq!(
            split_ingredient_list(" eggs, milk ,, butter.\n"),
            vec!["eggs", "milk", "butter"]
        );
        assert!(split_ingredient_list("  ").is_empty());
    }

    #[tokio::test]
    async fn test_detect_keeps_duplicates() {
        let client = FakeAiClient::new()
            .with_text(DETECT_INGREDIENTS_PROMPT_NAME, "eggs, Eggs, cheese");
        let photo = ImageData::parse("data:image/jpeg;base64,QUJD").unwrap();
        assert_eq!(
            detect_ingredients_from_image(&client, &photo).await,
            vec!["eggs", "Eggs", "cheese"]
        );
    }

    #[tokio::test]
    async fn test_detect_failure_is_empty() {
        let client = FakeAiClient::new();
        let photo = ImageData::parse("data:image/jpeg;base64,QUJD").unwrap();
        assert!(detect_ingredients_from_image(&client, &photo).await.is_empty());
    }
}
