//! Ingredient detection from a photo.

use crate::api::error_response;
use crate::AppState;
use axum::{
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use culinai_core::ai::{ImageData, MAX_FILE_SIZE};
use serde::Deserialize;
use utoipa::{OpenApi, ToSchema};

/// Request body cap for photo uploads: a maximum-size photo in base64, plus
/// room for the JSON wrapper and a data URL prefix.
pub const DETECT_BODY_LIMIT: usize = MAX_FILE_SIZE.div_ceil(3) * 4 + 64 * 1024;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/detect", post(detect_ingredients))
        .layer(DefaultBodyLimit::max(DETECT_BODY_LIMIT))
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DetectRequest {
    /// Photo as a data URL (`data:image/jpeg;base64,...`) or bare base64
    pub image: String,
}

/// Decode and validate an uploaded photo.
fn decode_photo(image: &str) -> Result<ImageData, String> {
    let image = image.trim();
    let payload = match image.strip_prefix("data:") {
        Some(rest) => rest
            .split_once(',')
            .map(|(_, data)| data)
            .ok_or_else(|| "Malformed data URL".to_string())?,
        None => image,
    };

    let bytes = BASE64
        .decode(payload)
        .map_err(|e| format!("Invalid base64: {}", e))?;

    ImageData::from_bytes(&bytes).map_err(|e| e.to_string())
}

/// Detect ingredients in a fridge photo and add them to the pantry
///
/// Detected names are merged into the fridge list without duplicates and the
/// pantry switches to pot mode. Detection failure returns an empty list.
#[utoipa::path(
    post,
    path = "/api/ingredients/detect",
    tag = "pantry",
    request_body = DetectRequest,
    responses(
        (status = 200, description = "Detection result and updated pantry", body = culinai_core::controller::DetectionOutcome),
        (status = 400, description = "Not a supported image", body = crate::api::ErrorResponse)
    )
)]
pub async fn detect_ingredients(
    State(controller): State<AppState>,
    Json(request): Json<DetectRequest>,
) -> impl IntoResponse {
    let photo = match decode_photo(&request.image) {
        Ok(photo) => photo,
        Err(message) => return error_response(StatusCode::BAD_REQUEST, message),
    };

    Json(controller.detect_ingredients(&photo).await).into_response()
}

#[derive(OpenApi)]
#[openapi(
    paths(detect_ingredients),
    components(schemas(DetectRequest, culinai_core::controller::DetectionOutcome))
)]
pub struct ApiDoc;
