//! The recipe detail view.

use crate::api::error_response;
use crate::AppState;
use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router,
};
use utoipa::OpenApi;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_detail).delete(close_detail))
}

/// The recipe open in the detail view, as currently stored
#[utoipa::path(
    get,
    path = "/api/detail",
    tag = "detail",
    responses(
        (status = 200, description = "Open recipe", body = culinai_core::Recipe),
        (status = 404, description = "Nothing open", body = crate::api::ErrorResponse)
    )
)]
pub async fn get_detail(State(controller): State<AppState>) -> impl IntoResponse {
    match controller.detail().await {
        Some(recipe) => Json(recipe).into_response(),
        None => error_response(StatusCode::NOT_FOUND, "No recipe is open"),
    }
}

#[utoipa::path(
    delete,
    path = "/api/detail",
    tag = "detail",
    responses(
        (status = 204, description = "Detail view closed")
    )
)]
pub async fn close_detail(State(controller): State<AppState>) -> impl IntoResponse {
    controller.close_detail().await;
    StatusCode::NO_CONTENT
}

#[derive(OpenApi)]
#[openapi(paths(get_detail, close_detail))]
pub struct ApiDoc;
