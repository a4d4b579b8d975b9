use crate::api::{not_found, repository_error};
use crate::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use culinai_core::{RecipeForm, RecipeId};

/// Save edits to a recipe from the manual form
///
/// The form replaces the editable fields. A blank image or video asks the
/// collaborator for a new one, keeping the stored value if that fails.
#[utoipa::path(
    put,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe ID")
    ),
    request_body = RecipeForm,
    responses(
        (status = 200, description = "Recipe updated", body = culinai_core::SaveOutcome),
        (status = 400, description = "Missing title, ingredients or instructions", body = crate::api::ErrorResponse),
        (status = 404, description = "Recipe not found", body = crate::api::ErrorResponse),
        (status = 500, description = "Failed to persist", body = crate::api::ErrorResponse)
    )
)]
pub async fn update_recipe(
    State(controller): State<AppState>,
    Path(id): Path<String>,
    Json(form): Json<RecipeForm>,
) -> impl IntoResponse {
    match controller.update_recipe(&RecipeId::from(id), &form).await {
        Ok(Some(outcome)) => Json(outcome).into_response(),
        Ok(None) => not_found(),
        Err(e) => repository_error(e),
    }
}
