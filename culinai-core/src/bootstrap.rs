//! Sample recipes for a first run.

use crate::ai::{generate_dish_image, AiClient};
use crate::types::{Category, Nutrition, Recipe, RecipeId};

const TART_FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1535927842701-10a5184c948d?auto=format&fit=crop&q=80&w=800";

const CARBONARA_FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1612874742237-6526221588e3?auto=format&fit=crop&q=80&w=800";

/// How much older the second sample is than the first, in milliseconds.
const CARBONARA_AGE_MS: i64 = 100_000;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Build the two sample recipes, drawing one image for each.
///
/// `now_ms` becomes the newest sample's creation time. An image that cannot be
/// generated falls back to a fixed stock photo.
pub async fn sample_recipes(ai_client: &dyn AiClient, now_ms: i64) -> Vec<Recipe> {
    let tart_title = "Tarte aux Pommes Rustique";
    let carbonara_title = "Pasta à la Carbonara";

    let tart_image = generate_dish_image(ai_client, tart_title)
        .await
        .map(|image| image.to_url())
        .unwrap_or_else(|| TART_FALLBACK_IMAGE.to_string());
    let carbonara_image = generate_dish_image(ai_client, carbonara_title)
        .await
        .map(|image| image.to_url())
        .unwrap_or_else(|| CARBONARA_FALLBACK_IMAGE.to_string());

    vec![
        Recipe {
            id: RecipeId::generate(),
            title: tart_title.to_string(),
            category: Category::Dessert,
            ingredients: strings(&["Apples", "Puff pastry", "Brown sugar", "Cinnamon"]),
            instructions: strings(&[
                "Preheat the oven",
                "Roll out the pastry",
                "Slice the apples",
                "Bake for 30 min",
            ]),
            image: Some(tart_image),
            video_url: Some("https://www.youtube.com/watch?v=12345678901".to_string()),
            prep_time: Some("45 min".to_string()),
            rating: Some(5),
            is_favorite: true,
            created_at: now_ms,
            nutrition: Some(Nutrition {
                calories: 320.0,
                protein: 4.0,
                carbs: 45.0,
                fat: 14.0,
                advice: Some(
                    "A classic dessert, rich in carbohydrates. Enjoy in moderation.".to_string(),
                ),
            }),
        },
        Recipe {
            id: RecipeId::generate(),
            title: carbonara_title.to_string(),
            category: Category::MainCourse,
            ingredients: strings(&["Pasta", "Eggs", "Pecorino", "Guanciale"]),
            instructions: strings(&[
                "Cook the pasta",
                "Fry the guanciale",
                "Whisk in the eggs",
                "Serve hot",
            ]),
            image: Some(carbonara_image),
            video_url: None,
            prep_time: Some("20 min".to_string()),
            rating: Some(4),
            is_favorite: false,
            created_at: now_ms - CARBONARA_AGE_MS,
            nutrition: Some(Nutrition {
                calories: 650.0,
                protein: 25.0,
                carbs: 70.0,
                fat: 30.0,
                advice: Some(
                    "An energy-dense, protein-rich dish. Balance it with a green salad."
                        .to_string(),
                ),
            }),
        },
    ]
}
