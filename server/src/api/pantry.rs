//! The fridge matcher's ingredient lists.

use crate::api::error_response;
use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use culinai_core::{PantryList, PantryMode, PantryState};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_pantry))
        .route("/ingredients", post(add_ingredient))
        .route("/ingredients/remove", post(remove_ingredient))
        .route("/move", post(move_ingredient))
        .route("/mode", put(set_mode))
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct IngredientRequest {
    pub list: PantryList,
    pub name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct MoveRequest {
    pub name: String,
    /// Destination list
    pub to: PantryList,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ModeRequest {
    pub mode: PantryMode,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PantryChangeResponse {
    /// False when nothing changed (duplicate, blank or unknown name)
    pub changed: bool,
    pub pantry: PantryState,
}

#[utoipa::path(
    get,
    path = "/api/pantry",
    tag = "pantry",
    responses((status = 200, description = "Pantry lists and last suggestions", body = PantryState))
)]
pub async fn get_pantry(State(controller): State<AppState>) -> impl IntoResponse {
    Json(controller.pantry().await)
}

/// Add an ingredient; names already in either list are refused
#[utoipa::path(
    post,
    path = "/api/pantry/ingredients",
    tag = "pantry",
    request_body = IngredientRequest,
    responses(
        (status = 200, description = "Pantry after the change", body = PantryChangeResponse),
        (status = 400, description = "Blank name", body = crate::api::ErrorResponse)
    )
)]
pub async fn add_ingredient(
    State(controller): State<AppState>,
    Json(request): Json<IngredientRequest>,
) -> impl IntoResponse {
    if request.name.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Ingredient name cannot be empty");
    }
    let (changed, pantry) = controller
        .update_pantry(|p| p.add(request.list, &request.name))
        .await;
    Json(PantryChangeResponse { changed, pantry }).into_response()
}

#[utoipa::path(
    post,
    path = "/api/pantry/ingredients/remove",
    tag = "pantry",
    request_body = IngredientRequest,
    responses((status = 200, description = "Pantry after the change", body = PantryChangeResponse))
)]
pub async fn remove_ingredient(
    State(controller): State<AppState>,
    Json(request): Json<IngredientRequest>,
) -> impl IntoResponse {
    let (changed, pantry) = controller
        .update_pantry(|p| p.remove(request.list, &request.name))
        .await;
    Json(PantryChangeResponse { changed, pantry })
}

#[utoipa::path(
    post,
    path = "/api/pantry/move",
    tag = "pantry",
    request_body = MoveRequest,
    responses((status = 200, description = "Pantry after the change", body = PantryChangeResponse))
)]
pub async fn move_ingredient(
    State(controller): State<AppState>,
    Json(request): Json<MoveRequest>,
) -> impl IntoResponse {
    let (changed, pantry) = controller
        .update_pantry(|p| p.move_to(&request.name, request.to))
        .await;
    Json(PantryChangeResponse { changed, pantry })
}

/// Choose which list suggestions are drawn from
#[utoipa::path(
    put,
    path = "/api/pantry/mode",
    tag = "pantry",
    request_body = ModeRequest,
    responses((status = 200, description = "Pantry after the change", body = PantryState))
)]
pub async fn set_mode(
    State(controller): State<AppState>,
    Json(request): Json<ModeRequest>,
) -> impl IntoResponse {
    let ((), pantry) = controller.update_pantry(|p| p.set_mode(request.mode)).await;
    Json(pantry)
}

#[derive(OpenApi)]
#[openapi(
    paths(get_pantry, add_ingredient, remove_ingredient, move_ingredient, set_mode),
    components(schemas(
        IngredientRequest,
        MoveRequest,
        ModeRequest,
        PantryChangeResponse,
        PantryState,
        PantryList,
        PantryMode
    ))
)]
pub struct ApiDoc;
