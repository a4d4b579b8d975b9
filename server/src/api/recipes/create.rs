use crate::api::repository_error;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use culinai_core::RecipeForm;

/// Save a new recipe from the manual form
///
/// Missing image, video and nutrition are filled in by the AI collaborator
/// before saving. A collaborator failure never blocks the save; the response
/// reports which fields stayed empty.
#[utoipa::path(
    post,
    path = "/api/recipes",
    tag = "recipes",
    request_body = RecipeForm,
    responses(
        (status = 201, description = "Recipe created", body = culinai_core::SaveOutcome),
        (status = 400, description = "Missing title, ingredients or instructions", body = crate::api::ErrorResponse),
        (status = 500, description = "Failed to persist", body = crate::api::ErrorResponse)
    )
)]
pub async fn create_recipe(
    State(controller): State<AppState>,
    Json(form): Json<RecipeForm>,
) -> impl IntoResponse {
    match controller.create_recipe(&form).await {
        Ok(outcome) => (StatusCode::CREATED, Json(outcome)).into_response(),
        Err(e) => repository_error(e),
    }
}
