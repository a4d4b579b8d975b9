use crate::api::not_found;
use crate::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use culinai_core::RecipeId;

#[utoipa::path(
    get,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe details", body = culinai_core::Recipe),
        (status = 404, description = "Recipe not found", body = crate::api::ErrorResponse)
    )
)]
pub async fn get_recipe(
    State(controller): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match controller.get(&RecipeId::from(id)).await {
        Some(recipe) => Json(recipe).into_response(),
        None => not_found(),
    }
}
