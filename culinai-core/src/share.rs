//! Plain-text export of a recipe.

use crate::types::Recipe;

/// Format `recipe` as shareable text ending with a link to the app.
pub fn share_text(recipe: &Recipe, app_url: &str) -> String {
    let ingredients = recipe
        .ingredients
        .iter()
        .map(|i| format!("- {}", i))
        .collect::<Vec<_>>()
        .join("\n");

    let steps = recipe
        .instructions
        .iter()
        .enumerate()
        .map(|(n, step)| format!("{}. {}", n + 1, step))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "CULINAI RECIPE: {title}\nPREP TIME: {prep}\n\nINGREDIENTS:\n{ingredients}\n\nINSTRUCTIONS:\n{steps}\n\nApp link: {app_url}\nShared from CulinAI",
        title = recipe.title.to_uppercase(),
        prep = recipe.prep_time.as_deref().unwrap_or("Not specified"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, RecipeId};

    fn carbonara() -> Recipe {
        Recipe {
            id: RecipeId::from("2"),
            title: "Pasta à la Carbonara".to_string(),
            category: Category::MainCourse,
            ingredients: vec!["Pasta".to_string(), "Eggs".to_string()],
            instructions: vec!["Boil the pasta".to_string(), "Mix".to_string()],
            image: None,
            video_url: None,
            prep_time: Some("20 min".to_string()),
            rating: None,
            is_favorite: false,
            created_at: 0,
            nutrition: None,
        }
    }

    #[test]
    fn test_share_text_layout() {
        let text = share_text(&carbonara(), "http://localhost:3000");
        assert_eq!(
            text,
            "CULINAI RECIPE: PASTA À LA CARBONARA\n\
             PREP TIME: 20 min\n\
             \n\
             INGREDIENTS:\n\
             - Pasta\n\
             - Eggs\n\
             \n\
             INSTRUCTIONS:\n\
             1. Boil the pasta\n\
             2. Mix\n\
             \n\
             App link: http://localhost:3000\n\
             Shared from CulinAI"
        );
    }

    #[test]
    fn test_share_text_without_prep_time() {
        let mut recipe = carbonara();
        recipe.prep_time = None;
        assert!(share_text(&recipe, "x").contains("PREP TIME: Not specified\n"));
    }
}
