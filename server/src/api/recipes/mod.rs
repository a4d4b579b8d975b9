pub mod actions;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use crate::AppState;
use axum::routing::{get, post, put};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/recipes endpoints (mounted at /api/recipes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_recipes).post(create::create_recipe))
        .route(
            "/{id}",
            get(get::get_recipe)
                .put(update::update_recipe)
                .delete(delete::delete_recipe),
        )
        .route("/{id}/favorite", post(actions::toggle_favorite))
        .route("/{id}/rating", put(actions::set_rating))
        .route("/{id}/image/edit", post(actions::edit_image))
        .route("/{id}/share", get(actions::share_recipe))
        .route("/{id}/open", post(actions::open_recipe))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_recipes,
        create::create_recipe,
        get::get_recipe,
        update::update_recipe,
        delete::delete_recipe,
        actions::toggle_favorite,
        actions::set_rating,
        actions::edit_image,
        actions::share_recipe,
        actions::open_recipe,
    ),
    components(schemas(
        list::ListRecipesResponse,
        culinai_core::SortMode,
        culinai_core::Category,
        culinai_core::Nutrition,
        culinai_core::RecipeForm,
        culinai_core::SaveOutcome,
        culinai_core::EnrichmentReport,
        culinai_core::FieldStatus,
        culinai_core::controller::ImageEditOutcome,
        delete::DeleteRecipeResponse,
        actions::SetRatingRequest,
        actions::EditImageRequest,
        actions::ShareResponse,
    ))
)]
pub struct ApiDoc;
