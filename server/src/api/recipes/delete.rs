use crate::api::{error_response, not_found, store_error};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use culinai_core::{DeleteOutcome, RecipeId};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct DeleteRecipeParams {
    /// Must be true; deletion is permanent
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRecipeResponse {
    /// Whether the detail view was showing the deleted recipe and got closed
    pub closed_detail: bool,
}

#[utoipa::path(
    delete,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe ID"),
        DeleteRecipeParams
    ),
    responses(
        (status = 200, description = "Recipe deleted", body = DeleteRecipeResponse),
        (status = 400, description = "Deletion not confirmed", body = crate::api::ErrorResponse),
        (status = 404, description = "Recipe not found", body = crate::api::ErrorResponse),
        (status = 500, description = "Failed to persist", body = crate::api::ErrorResponse)
    )
)]
pub async fn delete_recipe(
    State(controller): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<DeleteRecipeParams>,
) -> impl IntoResponse {
    match controller.delete(&RecipeId::from(id), params.confirm).await {
        Ok(DeleteOutcome::Deleted { closed_detail }) => {
            Json(DeleteRecipeResponse { closed_detail }).into_response()
        }
        Ok(DeleteOutcome::NotConfirmed) => error_response(
            StatusCode::BAD_REQUEST,
            "Deletion must be confirmed with ?confirm=true",
        ),
        Ok(DeleteOutcome::NotFound) => not_found(),
        Err(e) => store_error(e),
    }
}
