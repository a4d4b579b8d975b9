//! Nutrition estimates for a dish.

use crate::ai::parse::parse_json;
use crate::ai::prompts::nutrition::{render_nutrition_prompt, NUTRITION_PROMPT_NAME};
use crate::ai::{AiClient, AiError, ChatMessage, ChatRequest, OutputKind};
use crate::types::Nutrition;

/// Estimate per-serving nutrition facts for a recipe.
///
/// Returns `None` on error or when the figures are not plausible.
pub async fn estimate_nutrition(
    ai_client: &dyn AiClient,
    title: &str,
    ingredients: &[String],
) -> Option<Nutrition> {
    match request_nutrition(ai_client, title, ingredients).await {
        Ok(nutrition) => Some(nutrition),
        Err(e) => {
            tracing::warn!(title = title, error = %e, "Nutrition estimate failed");
            None
        }
    }
}

async fn request_nutrition(
    ai_client: &dyn AiClient,
    title: &str,
    ingredients: &[String],
) -> Result<Nutrition, AiError> {
    let request = ChatRequest {
        messages: vec![ChatMessage::user(render_nutrition_prompt(title, ingredients))],
        output: OutputKind::Json,
        max_tokens: Some(512),
        temperature: Some(0.2),
    };

    let response = ai_client.complete(NUTRITION_PROMPT_NAME, request).await?;
    let mut nutrition: Nutrition = parse_json(&response.content, "nutrition")?;

    if !nutrition.is_plausible() {
        return Err(AiError::ParseError(format!(
            "Implausible nutrition figures: {:?}",
            nutrition
        )));
    }

    nutrition.advice = nutrition
        .advice
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty());

    Ok(nutrition)
}
