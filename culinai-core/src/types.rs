use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::UnknownName;

/// Image shown for recipes that have none of their own.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1495521821757-a1efb6729352?auto=format&fit=crop&q=80&w=800";

/// Highest rating a recipe can carry.
pub const MAX_RATING: u8 = 5;

/// Opaque recipe identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RecipeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecipeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Recipe category.
///
/// The French aliases are the labels written by the first version of the app,
/// still accepted when reading old collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[serde(alias = "Entrée")]
    Starter,
    #[default]
    #[serde(alias = "Plat Principal")]
    MainCourse,
    #[serde(alias = "Dessert")]
    Dessert,
    #[serde(alias = "Snack")]
    Snack,
    #[serde(alias = "Boisson")]
    Drink,
}

impl Category {
    /// All categories in display order.
    pub const ALL: &'static [Category] = &[
        Category::Starter,
        Category::MainCourse,
        Category::Dessert,
        Category::Snack,
        Category::Drink,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Starter => "starter",
            Category::MainCourse => "main_course",
            Category::Dessert => "dessert",
            Category::Snack => "snack",
            Category::Drink => "drink",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Starter => "Starter",
            Category::MainCourse => "Main Course",
            Category::Dessert => "Dessert",
            Category::Snack => "Snack",
            Category::Drink => "Drink",
        }
    }
}

impl FromStr for Category {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "starter" => Ok(Category::Starter),
            "main_course" => Ok(Category::MainCourse),
            "dessert" => Ok(Category::Dessert),
            "snack" => Ok(Category::Snack),
            "drink" => Ok(Category::Drink),
            _ => Err(UnknownName::new("category", s)),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Estimated nutrition facts for one serving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advice: Option<String>,
}

impl Nutrition {
    /// All figures are finite and non-negative.
    pub fn is_plausible(&self) -> bool {
        [self.calories, self.protein, self.carbs, self.fat]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

/// A stored recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub category: Category,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(default)]
    pub is_favorite: bool,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
}

impl Recipe {
    /// Image to render: the recipe's own, or the shared placeholder.
    pub fn display_image(&self) -> &str {
        self.image.as_deref().unwrap_or(PLACEHOLDER_IMAGE_URL)
    }

    /// Rating as shown to users, where 0 means unrated.
    pub fn stars(&self) -> u8 {
        self.rating.unwrap_or(0)
    }
}

/// Fields supplied when creating a recipe. Identity and timestamp are assigned
/// by the repository.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub title: String,
    #[serde(default)]
    pub category: Category,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub prep_time: Option<String>,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub nutrition: Option<Nutrition>,
}

impl RecipeDraft {
    /// Check the invariants every saved recipe must satisfy.
    pub fn validate(&self) -> Result<(), crate::error::ValidationError> {
        crate::error::ValidationError::check(&self.title, &self.ingredients, &self.instructions)
    }

    /// Patch that overwrites an existing recipe's editable fields with this draft.
    ///
    /// An absent prep time or rating clears the stored one. Absent image,
    /// video and nutrition leave the stored values alone.
    pub fn into_patch(self) -> RecipePatch {
        RecipePatch {
            title: Some(self.title),
            category: Some(self.category),
            ingredients: Some(self.ingredients),
            instructions: Some(self.instructions),
            image: self.image,
            video_url: self.video_url,
            prep_time: Some(self.prep_time.unwrap_or_default()),
            rating: Some(self.rating.unwrap_or(0)),
            nutrition: self.nutrition,
        }
    }
}

/// Partial update of a recipe. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RecipePatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub ingredients: Option<Vec<String>>,
    #[serde(default)]
    pub instructions: Option<Vec<String>>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub prep_time: Option<String>,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub nutrition: Option<Nutrition>,
}

/// A recipe proposed by the AI collaborator. Never stored as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SuggestedRecipe {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    #[serde(default)]
    pub prep_time: String,
    #[serde(default)]
    pub nutrition: Option<Nutrition>,
}

impl SuggestedRecipe {
    /// Shape check applied to collaborator output before it is exposed.
    pub fn is_well_formed(&self) -> bool {
        !self.title.trim().is_empty()
            && self.ingredients.iter().any(|i| !i.trim().is_empty())
            && self.steps.iter().any(|s| !s.trim().is_empty())
            && self.nutrition.as_ref().map_or(true, Nutrition::is_plausible)
    }

    /// Draft used when the user keeps this suggestion.
    ///
    /// The suggestion carries no image, so saving it triggers image generation.
    pub fn into_draft(self) -> RecipeDraft {
        let prep_time = Some(self.prep_time).filter(|p| !p.trim().is_empty());
        RecipeDraft {
            title: self.title,
            category: Category::MainCourse,
            ingredients: self.ingredients,
            instructions: self.steps,
            image: None,
            video_url: None,
            prep_time,
            rating: None,
            is_favorite: false,
            nutrition: self.nutrition,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip_names() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(*category));
        }
        let err = "brunch".parse::<Category>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown category: brunch");
    }

    #[test]
    fn test_category_accepts_legacy_labels() {
        let category: Category = serde_json::from_str("\"Plat Principal\"").unwrap();
        assert_eq!(category, Category::MainCourse);
        let category: Category = serde_json::from_str("\"Boisson\"").unwrap();
        assert_eq!(category, Category::Drink);
        let category: Category = serde_json::from_str("\"Entrée\"").unwrap();
        assert_eq!(category, Category::Starter);
    }

    #[test]
    fn test_recipe_uses_camel_case_fields() {
        let json = r#"{
            "id": "1",
            "title": "Tarte",
            "category": "dessert",
            "ingredients": ["Pommes"],
            "instructions": ["Cuire"],
            "prepTime": "45 min",
            "isFavorite": true,
            "createdAt": 1700000000000
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.prep_time.as_deref(), Some("45 min"));
        assert!(recipe.is_favorite);
        assert_eq!(recipe.created_at, 1_700_000_000_000);
        assert_eq!(recipe.display_image(), PLACEHOLDER_IMAGE_URL);
        assert_eq!(recipe.stars(), 0);
    }

    #[test]
    fn test_suggestion_into_draft_defaults() {
        let suggestion = SuggestedRecipe {
            title: "Shakshuka".to_string(),
            description: "Eggs in tomato sauce".to_string(),
            ingredients: vec!["eggs".to_string(), "tomatoes".to_string()],
            steps: vec!["Simmer".to_string()],
            prep_time: "".to_string(),
            nutrition: None,
        };
        let draft = suggestion.into_draft();
        assert_eq!(draft.category, Category::MainCourse);
        assert!(!draft.is_favorite);
        assert!(draft.image.is_none());
        assert!(draft.prep_time.is_none());
        assert_eq!(draft.instructions, vec!["Simmer".to_string()]);
    }

    #[test]
    fn test_suggestion_shape_check() {
        let mut suggestion = SuggestedRecipe {
            title: "Soup".to_string(),
            description: String::new(),
            ingredients: vec!["leek".to_string()],
            steps: vec!["Boil".to_string()],
            prep_time: "20 min".to_string(),
            nutrition: Some(Nutrition {
                calories: 120.0,
                protein: 3.0,
                carbs: 20.0,
                fat: 2.0,
                advice: None,
            }),
        };
        assert!(suggestion.is_well_formed());

        suggestion.nutrition.as_mut().unwrap().fat = -1.0;
        assert!(!suggestion.is_well_formed());

        suggestion.nutrition = None;
        suggestion.steps = vec!["  ".to_string()];
        assert!(!suggestion.is_well_formed());
    }
}
