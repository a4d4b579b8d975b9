//! Recipe suggestions from the pantry.

use crate::api::{error_response, repository_error, validation_error};
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use culinai_core::SuggestedRecipe;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(suggest_recipes))
        .route("/save", post(save_suggestion))
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SuggestRequest {
    /// Ingredients to cook with. When omitted, the pantry's active list is used.
    #[serde(default)]
    pub ingredients: Option<Vec<String>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SuggestResponse {
    /// At most three suggestions; empty when the collaborator had none.
    pub suggestions: Vec<SuggestedRecipe>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SaveSuggestionRequest {
    /// Position in the last batch of suggestions
    pub index: usize,
}

/// Ask the AI collaborator for recipes using the given ingredients
#[utoipa::path(
    post,
    path = "/api/suggestions",
    tag = "suggestions",
    request_body = SuggestRequest,
    responses(
        (status = 200, description = "Suggestions (possibly empty)", body = SuggestResponse),
        (status = 400, description = "No ingredients to cook with", body = crate::api::ErrorResponse)
    )
)]
pub async fn suggest_recipes(
    State(controller): State<AppState>,
    Json(request): Json<SuggestRequest>,
) -> impl IntoResponse {
    match controller.suggest(request.ingredients).await {
        Ok(suggestions) => Json(SuggestResponse { suggestions }).into_response(),
        Err(e) => validation_error(e),
    }
}

/// Save one of the last suggestions as a recipe
///
/// The saved recipe goes through the same enrichment as a manual one.
#[utoipa::path(
    post,
    path = "/api/suggestions/save",
    tag = "suggestions",
    request_body = SaveSuggestionRequest,
    responses(
        (status = 201, description = "Recipe created", body = culinai_core::SaveOutcome),
        (status = 404, description = "No suggestion at that index", body = crate::api::ErrorResponse),
        (status = 500, description = "Failed to persist", body = crate::api::ErrorResponse)
    )
)]
pub async fn save_suggestion(
    State(controller): State<AppState>,
    Json(request): Json<SaveSuggestionRequest>,
) -> impl IntoResponse {
    match controller.save_suggestion(request.index).await {
        Ok(Some(outcome)) => (StatusCode::CREATED, Json(outcome)).into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "No suggestion at that index"),
        Err(e) => repository_error(e),
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(suggest_recipes, save_suggestion),
    components(schemas(
        SuggestRequest,
        SuggestResponse,
        SaveSuggestionRequest,
        culinai_core::SuggestedRecipe
    ))
)]
pub struct ApiDoc;
