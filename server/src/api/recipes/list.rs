use crate::api::error_response;
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use culinai_core::{CategoryFilter, ListQuery, Recipe, SortMode};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListRecipesParams {
    /// "all" (default), "favorites", or a category such as "dessert"
    pub category: Option<String>,
    /// Case-insensitive text matched against titles and ingredients
    pub q: Option<String>,
    /// "recent" (default, newest first) or "alpha" (by title)
    pub sort: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListRecipesResponse {
    pub recipes: Vec<Recipe>,
}

impl ListRecipesParams {
    fn into_query(self) -> Result<ListQuery, String> {
        let filter = match self.category.as_deref() {
            None => CategoryFilter::All,
            Some(value) => value
                .parse::<CategoryFilter>()
                .map_err(|e| e.to_string())?,
        };

        let sort = match self.sort.as_deref() {
            None => SortMode::Recent,
            Some(value) => {
                value.parse::<SortMode>().map_err(|e| e.to_string())?
            }
        };

        Ok(ListQuery {
            filter,
            search: self.q.unwrap_or_default(),
            sort,
        })
    }
}

#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = "recipes",
    params(ListRecipesParams),
    responses(
        (status = 200, description = "Matching recipes in display order", body = ListRecipesResponse),
        (status = 400, description = "Invalid category or sort", body = crate::api::ErrorResponse)
    )
)]
pub async fn list_recipes(
    State(controller): State<AppState>,
    Query(params): Query<ListRecipesParams>,
) -> impl IntoResponse {
    let query = match params.into_query() {
        Ok(q) => q,
        Err(message) => return error_response(StatusCode::BAD_REQUEST, message),
    };

    let recipes = controller.list(&query).await;
    Json(ListRecipesResponse { recipes }).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use culinai_core::Category;

    fn params(category: Option<&str>, q: Option<&str>, sort: Option<&str>) -> ListRecipesParams {
        ListRecipesParams {
            category: category.map(String::from),
            q: q.map(String::from),
            sort: sort.map(String::from),
        }
    }

    #[test]
    fn test_defaults() {
        let query = params(None, None, None).into_query().unwrap();
        assert_eq!(query, ListQuery::default());
    }

    #[test]
    fn test_category_and_sort() {
        let query = params(Some("dessert"), Some("apple"), Some("alpha"))
            .into_query()
            .unwrap();
        assert_eq!(query.filter, CategoryFilter::Only(Category::Dessert));
        assert_eq!(query.search, "apple");
        assert_eq!(query.sort, SortMode::Alpha);

        let query = params(Some("favorites"), None, None).into_query().unwrap();
        assert_eq!(query.filter, CategoryFilter::Favorites);
    }

    #[test]
    fn test_rejects_unknown_values() {
        assert!(params(Some("brunch"), None, None).into_query().is_err());
        assert!(params(None, None, Some("oldest")).into_query().is_err());
    }
}
