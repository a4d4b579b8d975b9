//! Single-recipe actions: favorite, rating, image editing, sharing, and
//! opening the detail view.

use crate::api::{error_response, not_found, store_error};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use culinai_core::RecipeId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetRatingRequest {
    /// Stars from 0 to 5. Values outside the range are clamped; 0 clears.
    pub rating: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct EditImageRequest {
    /// What to change, e.g. "add a sprig of basil"
    pub instruction: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ShareResponse {
    pub text: String,
}

#[utoipa::path(
    post,
    path = "/api/recipes/{id}/favorite",
    tag = "recipes",
    params(("id" = String, Path, description = "Recipe ID")),
    responses(
        (status = 200, description = "Favorite flag flipped", body = culinai_core::Recipe),
        (status = 404, description = "Recipe not found", body = crate::api::ErrorResponse)
    )
)]
pub async fn toggle_favorite(
    State(controller): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match controller.toggle_favorite(&RecipeId::from(id)).await {
        Ok(Some(recipe)) => Json(recipe).into_response(),
        Ok(None) => not_found(),
        Err(e) => store_error(e),
    }
}

#[utoipa::path(
    put,
    path = "/api/recipes/{id}/rating",
    tag = "recipes",
    params(("id" = String, Path, description = "Recipe ID")),
    request_body = SetRatingRequest,
    responses(
        (status = 200, description = "Rating stored", body = culinai_core::Recipe),
        (status = 404, description = "Recipe not found", body = crate::api::ErrorResponse)
    )
)]
pub async fn set_rating(
    State(controller): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<SetRatingRequest>,
) -> impl IntoResponse {
    match controller
        .set_rating(&RecipeId::from(id), request.rating)
        .await
    {
        Ok(Some(recipe)) => Json(recipe).into_response(),
        Ok(None) => not_found(),
        Err(e) => store_error(e),
    }
}

/// Edit the recipe's photo with an instruction
///
/// On collaborator failure the previous image is kept and `edited` is false.
#[utoipa::path(
    post,
    path = "/api/recipes/{id}/image/edit",
    tag = "recipes",
    params(("id" = String, Path, description = "Recipe ID")),
    request_body = EditImageRequest,
    responses(
        (status = 200, description = "Edit attempted", body = culinai_core::controller::ImageEditOutcome),
        (status = 400, description = "Empty instruction", body = crate::api::ErrorResponse),
        (status = 404, description = "Recipe not found", body = crate::api::ErrorResponse)
    )
)]
pub async fn edit_image(
    State(controller): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<EditImageRequest>,
) -> impl IntoResponse {
    let instruction = request.instruction.trim();
    if instruction.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Instruction cannot be empty");
    }

    match controller
        .edit_image(&RecipeId::from(id), instruction)
        .await
    {
        Ok(Some(outcome)) => Json(outcome).into_response(),
        Ok(None) => not_found(),
        Err(e) => store_error(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/recipes/{id}/share",
    tag = "recipes",
    params(("id" = String, Path, description = "Recipe ID")),
    responses(
        (status = 200, description = "Plain-text recipe", body = ShareResponse),
        (status = 404, description = "Recipe not found", body = crate::api::ErrorResponse)
    )
)]
pub async fn share_recipe(
    State(controller): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match controller.share(&RecipeId::from(id)).await {
        Some(text) => Json(ShareResponse { text }).into_response(),
        None => not_found(),
    }
}

#[utoipa::path(
    post,
    path = "/api/recipes/{id}/open",
    tag = "detail",
    params(("id" = String, Path, description = "Recipe ID")),
    responses(
        (status = 200, description = "Detail view opened", body = culinai_core::Recipe),
        (status = 404, description = "Recipe not found", body = crate::api::ErrorResponse)
    )
)]
pub async fn open_recipe(
    State(controller): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match controller.open_detail(&RecipeId::from(id)).await {
        Some(recipe) => Json(recipe).into_response(),
        None => not_found(),
    }
}
