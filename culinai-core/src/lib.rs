pub mod ai;
pub mod bootstrap;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod repository;
pub mod share;
pub mod store;
pub mod types;

pub use catalog::{CategoryFilter, ListQuery, SortMode};
pub use config::AppConfig;
pub use controller::{
    Controller, DeleteOutcome, EnrichmentReport, FieldStatus, PantryList, PantryMode, PantryState,
    RecipeForm, SaveOutcome,
};
pub use error::{RepositoryError, StoreError, UnknownName, ValidationError};
pub use repository::RecipeRepository;
pub use share::share_text;
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use types::{
    Category, Nutrition, Recipe, RecipeDraft, RecipeId, RecipePatch, SuggestedRecipe,
    MAX_RATING, PLACEHOLDER_IMAGE_URL,
};
