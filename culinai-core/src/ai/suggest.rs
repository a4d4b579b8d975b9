//! Recipe suggestions from available ingredients.

use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::ai::parse::parse_json;
use crate::ai::prompts::suggest_recipes::{
    render_suggest_recipes_prompt, MAX_SUGGESTIONS, SUGGEST_RECIPES_PROMPT_NAME,
};
use crate::ai::{AiClient, AiError, ChatMessage, ChatRequest, OutputKind};
use crate::types::SuggestedRecipe;

/// Response format from the AI. A bare array is accepted as well.
///
/// Entries stay untyped here so one bad entry cannot sink the others.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SuggestResponse {
    Wrapped { recipes: Vec<JsonValue> },
    Bare(Vec<JsonValue>),
}

/// Propose up to three recipes using the given ingredients.
///
/// Returns an empty list on error or unparseable output. Individual entries
/// that fail the shape check are dropped.
pub async fn suggest_recipes_from_ingredients(
    ai_client: &dyn AiClient,
    ingredients: &[String],
) -> Vec<SuggestedRecipe> {
    if ingredients.is_empty() {
        return vec![];
    }

    match request_suggestions(ai_client, ingredients).await {
        Ok(suggestions) => suggestions,
        Err(e) => {
            tracing::warn!(error = %e, "Recipe suggestion failed");
            vec![]
        }
    }
}

async fn request_suggestions(
    ai_client: &dyn AiClient,
    ingredients: &[String],
) -> Result<Vec<SuggestedRecipe>, AiError> {
    let request = ChatRequest {
        messages: vec![ChatMessage::user(render_suggest_recipes_prompt(ingredients))],
        output: OutputKind::Json,
        max_tokens: Some(4096),
        temperature: Some(0.8),
    };

    let response = ai_client
        .complete(SUGGEST_RECIPES_PROMPT_NAME, request)
        .await?;

    let recipes = match parse_json::<SuggestResponse>(&response.content, "suggestion")? {
        SuggestResponse::Wrapped { recipes } | SuggestResponse::Bare(recipes) => recipes,
    };

    let total = recipes.len();
    let valid: Vec<SuggestedRecipe> = recipes
        .into_iter()
        .filter_map(|entry| serde_json::from_value::<SuggestedRecipe>(entry).ok())
        .filter(SuggestedRecipe::is_well_formed)
        .take(MAX_SUGGESTIONS)
        .collect();

    if valid.len() < total.min(MAX_SUGGESTIONS) {
        tracing::debug!(
            returned = total,
            kept = valid.len(),
            "Dropped malformed suggestions"
        );
    }

    Ok(valid)
}
