//! The manual recipe form.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::repository::clamp_rating;
use crate::types::{Category, Recipe, RecipeDraft};

/// Raw form fields as typed by the user.
///
/// Ingredients are comma-separated and instructions are one per line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RecipeForm {
    pub title: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub prep_time: String,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub instructions: String,
    /// Image URL; blank asks for a generated image.
    #[serde(default)]
    pub image: String,
    /// Video URL; blank asks for a tutorial lookup.
    #[serde(default)]
    pub video_url: String,
    /// Stars, 0 for none. Out-of-range values are clamped.
    #[serde(default)]
    pub rating: i64,
}

impl RecipeForm {
    /// Form pre-filled with an existing recipe, as shown when editing.
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            title: recipe.title.clone(),
            category: recipe.category,
            prep_time: recipe.prep_time.clone().unwrap_or_default(),
            ingredients: recipe.ingredients.join(", "),
            instructions: recipe.instructions.join("\n"),
            image: recipe.image.clone().unwrap_or_default(),
            video_url: recipe.video_url.clone().unwrap_or_default(),
            rating: i64::from(recipe.stars()),
        }
    }

    /// Parse and validate. Nothing is sent anywhere when this fails.
    pub fn parse(&self) -> Result<RecipeDraft, ValidationError> {
        let draft = RecipeDraft {
            title: self.title.trim().to_string(),
            category: self.category,
            ingredients: split_ingredients(&self.ingredients),
            instructions: split_instructions(&self.instructions),
            image: optional(&self.image),
            video_url: optional(&self.video_url),
            prep_time: optional(&self.prep_time),
            rating: clamp_rating(self.rating),
            is_favorite: false,
            nutrition: None,
        };
        draft.validate()?;
        Ok(draft)
    }
}

pub fn split_ingredients(text: &str) -> Vec<String> {
    split_trimmed(text, ',')
}

pub fn split_instructions(text: &str) -> Vec<String> {
    split_trimmed(text, '\n')
}

fn split_trimmed(text: &str, separator: char) -> Vec<String> {
    text.split(separator)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn optional(text: &str) -> Option<String> {
    Some(text.trim().to_string()).filter(|s| !s.is_empty())
}
