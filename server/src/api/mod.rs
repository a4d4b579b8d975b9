pub mod detail;
pub mod ingredients;
pub mod pantry;
pub mod recipes;
pub mod suggestions;


use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use culinai_core::{Recipe, RepositoryError, StoreError, ValidationError};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::AppState;

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
        .into_response()
}

pub fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Recipe not found")
}

pub fn validation_error(e: ValidationError) -> Response {
    error_response(StatusCode::BAD_REQUEST, e.to_string())
}

/// Persistence failures are logged; the in-memory change stays applied.
pub fn store_error(e: StoreError) -> Response {
    tracing::error!(error = %e, "Failed to persist recipes");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to save recipes")
}

pub fn repository_error(e: RepositoryError) -> Response {
    match e {
        RepositoryError::Invalid(e) => validation_error(e),
        RepositoryError::Persist(e) => store_error(e),
    }
}

/// All API routes, mounted under /api
pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/api/recipes", recipes::router())
        .nest("/api/detail", detail::router())
        .nest("/api/suggestions", suggestions::router())
        .nest("/api/ingredients", ingredients::router())
        .nest("/api/pantry", pantry::router())
}

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "CulinAI", description = "Recipe manager with an AI sous-chef"),
        components(schemas(ErrorResponse, Recipe))
    )]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    let modules: Vec<utoipa::openapi::OpenApi> = vec![
        recipes::ApiDoc::openapi(),
        detail::ApiDoc::openapi(),
        suggestions::ApiDoc::openapi(),
        ingredients::ApiDoc::openapi(),
        pantry::ApiDoc::openapi(),
    ];

    for module_spec in modules {
        spec.paths.paths.extend(module_spec.paths.paths);

        if let Some(module_components) = module_spec.components {
            if let Some(spec_components) = spec.components.as_mut() {
                spec_components.schemas.extend(module_components.schemas);
            }
        }
    }

    spec
}
