//! Dish photo generation and editing.

use crate::ai::prompts::dish_image::{
    render_edit_image_prompt, render_generate_image_prompt, EDIT_IMAGE_PROMPT_NAME,
    GENERATE_IMAGE_PROMPT_NAME,
};
use crate::ai::{AiClient, AiError, ChatMessage, ChatRequest, ImageData, OutputKind};

/// Draw a photo of the named dish.
///
/// Returns `None` on any failure; callers fall back to a placeholder.
pub async fn generate_dish_image(ai_client: &dyn AiClient, title: &str) -> Option<ImageData> {
    let request = ChatRequest {
        messages: vec![ChatMessage::user(render_generate_image_prompt(title))],
        output: OutputKind::Image,
        ..Default::default()
    };

    match first_image(ai_client, GENERATE_IMAGE_PROMPT_NAME, request).await {
        Ok(image) => Some(image),
        Err(e) => {
            tracing::warn!(title = title, error = %e, "Dish image generation failed");
            None
        }
    }
}

/// Apply a free-text edit to an existing dish photo.
///
/// Returns `None` on any failure; callers keep the previous image.
pub async fn edit_dish_image(
    ai_client: &dyn AiClient,
    image: &ImageData,
    instruction: &str,
) -> Option<ImageData> {
    let request = ChatRequest {
        messages: vec![ChatMessage::user_with_images(
            render_edit_image_prompt(instruction),
            vec![image.clone()],
        )],
        output: OutputKind::Image,
        ..Default::default()
    };

    match first_image(ai_client, EDIT_IMAGE_PROMPT_NAME, request).await {
        Ok(image) => Some(image),
        Err(e) => {
            tracing::warn!(instruction = instruction, error = %e, "Dish image edit failed");
            None
        }
    }
}

async fn first_image(
    ai_client: &dyn AiClient,
    prompt_name: &str,
    request: ChatRequest,
) -> Result<ImageData, AiError> {
    let response = ai_client.complete(prompt_name, request).await?;
    response.images.into_iter().next().ok_or(AiError::Empty)
}
