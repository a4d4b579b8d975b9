//! AI prompt templates.

pub mod detect_ingredients;
pub mod dish_image;
pub mod find_video;
pub mod nutrition;
pub mod suggest_recipes;

pub use detect_ingredients::render_detect_ingredients_prompt;
pub use dish_image::{render_edit_image_prompt, render_generate_image_prompt};
pub use find_video::render_find_video_prompt;
pub use nutrition::render_nutrition_prompt;
pub use suggest_recipes::render_suggest_recipes_prompt;
