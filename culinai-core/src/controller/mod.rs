//! User actions over the recipe collection.
//!
//! The [`Controller`] sequences collaborator calls and repository mutations.
//! It never holds the collection lock while waiting on the collaborator:
//! enrichment runs first and the result is committed afterwards.

mod enrich;
mod form;
mod pantry;
mod view;

pub use enrich::{enrich_missing_fields, EnrichmentReport, FieldStatus};
pub use form::{split_ingredients, split_instructions, RecipeForm};
pub use pantry::{PantryList, PantryMode, PantryState};
pub use view::DetailView;

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;

use crate::ai::{
    detect_ingredients_from_image, edit_dish_image, suggest_recipes_from_ingredients, AiClient,
    ImageData,
};
use crate::catalog::ListQuery;
use crate::config::AppConfig;
use crate::error::{RepositoryError, StoreError, ValidationError};
use crate::repository::RecipeRepository;
use crate::share::share_text;
use crate::store::FileStore;
use crate::types::{Recipe, RecipeDraft, RecipeId, SuggestedRecipe};

/// A saved recipe and how its optional fields were obtained.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SaveOutcome {
    pub recipe: Recipe,
    pub enrichment: EnrichmentReport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Nothing was deleted because the request was not confirmed.
    NotConfirmed,
    NotFound,
    Deleted { closed_detail: bool },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ImageEditOutcome {
    pub recipe: Recipe,
    /// False when the collaborator failed and the old image was kept.
    pub edited: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DetectionOutcome {
    /// Names as returned by the collaborator.
    pub detected: Vec<String>,
    /// How many of them were new to the pantry.
    pub added: usize,
    pub pantry: PantryState,
}

struct Library {
    repository: RecipeRepository,
    detail: DetailView,
}

pub struct Controller {
    library: Mutex<Library>,
    pantry: Mutex<PantryState>,
    ai_client: Arc<dyn AiClient>,
    app_url: String,
}

impl Controller {
    pub fn new(repository: RecipeRepository, ai_client: Arc<dyn AiClient>, app_url: String) -> Self {
        Self {
            library: Mutex::new(Library {
                repository,
                detail: DetailView::default(),
            }),
            pantry: Mutex::new(PantryState::default()),
            ai_client,
            app_url,
        }
    }

    /// Load the collection from the configured data directory.
    pub async fn open(config: &AppConfig, ai_client: Arc<dyn AiClient>) -> Result<Self, StoreError> {
        let store = Arc::new(FileStore::new(config.data_dir.clone()));
        let repository = RecipeRepository::load(store, ai_client.as_ref()).await?;
        Ok(Self::new(repository, ai_client, config.app_url.clone()))
    }

    pub fn ai_client(&self) -> &dyn AiClient {
        self.ai_client.as_ref()
    }

    // Browsing

    pub async fn list(&self, query: &ListQuery) -> Vec<Recipe> {
        let library = self.library.lock().await;
        query.apply(&library.repository.snapshot())
    }

    pub async fn get(&self, id: &RecipeId) -> Option<Recipe> {
        self.library.lock().await.repository.get(id)
    }

    pub async fn share(&self, id: &RecipeId) -> Option<String> {
        self.get(id)
            .await
            .map(|recipe| share_text(&recipe, &self.app_url))
    }

    // Saving

    /// Save a new recipe from the manual form.
    pub async fn create_recipe(&self, form: &RecipeForm) -> Result<SaveOutcome, RepositoryError> {
        let draft = form.parse()?;
        self.save_new(draft).await
    }

    /// Save edits to an existing recipe from the manual form.
    ///
    /// A blank image or video asks for a new one; if that fails the stored
    /// value is kept. Nutrition is only estimated again when the ingredients
    /// changed, and is cleared when that estimate fails. Returns `Ok(None)`
    /// when the recipe does not exist.
    pub async fn update_recipe(
        &self,
        id: &RecipeId,
        form: &RecipeForm,
    ) -> Result<Option<SaveOutcome>, RepositoryError> {
        let mut draft = form.parse()?;
        let Some(existing) = self.get(id).await else {
            return Ok(None);
        };
        if draft.ingredients == existing.ingredients {
            draft.nutrition = existing.nutrition;
        }

        let enrichment = enrich_missing_fields(self.ai_client.as_ref(), &mut draft).await;

        let mut library = self.library.lock().await;
        let updated = library.repository.update(id, draft.into_patch())?;
        Ok(updated.map(|recipe| SaveOutcome { recipe, enrichment }))
    }

    async fn save_new(&self, mut draft: RecipeDraft) -> Result<SaveOutcome, RepositoryError> {
        draft.validate()?;
        let enrichment = enrich_missing_fields(self.ai_client.as_ref(), &mut draft).await;

        let recipe = self.library.lock().await.repository.create(draft)?;
        Ok(SaveOutcome { recipe, enrichment })
    }

    // Single-recipe actions

    /// Delete a recipe. Unconfirmed requests change nothing.
    pub async fn delete(&self, id: &RecipeId, confirmed: bool) -> Result<DeleteOutcome, StoreError> {
        if !confirmed {
            return Ok(DeleteOutcome::NotConfirmed);
        }

        let mut library = self.library.lock().await;
        if !library.repository.remove(id)? {
            return Ok(DeleteOutcome::NotFound);
        }
        let closed_detail = library.detail.close_if_showing(id);
        Ok(DeleteOutcome::Deleted { closed_detail })
    }

    pub async fn toggle_favorite(&self, id: &RecipeId) -> Result<Option<Recipe>, StoreError> {
        self.library.lock().await.repository.toggle_favorite(id)
    }

    pub async fn set_rating(&self, id: &RecipeId, value: i64) -> Result<Option<Recipe>, StoreError> {
        self.library.lock().await.repository.set_rating(id, value)
    }

    /// Apply an AI edit to the recipe's current image (or the placeholder).
    pub async fn edit_image(
        &self,
        id: &RecipeId,
        instruction: &str,
    ) -> Result<Option<ImageEditOutcome>, StoreError> {
        let Some(recipe) = self.get(id).await else {
            return Ok(None);
        };

        let source = match ImageData::parse(recipe.display_image()) {
            Ok(source) => source,
            Err(e) => {
                tracing::warn!(id = %id, error = %e, "Stored image cannot be edited");
                return Ok(Some(ImageEditOutcome {
                    recipe,
                    edited: false,
                }));
            }
        };

        let Some(edited) = edit_dish_image(self.ai_client.as_ref(), &source, instruction).await
        else {
            return Ok(Some(ImageEditOutcome {
                recipe,
                edited: false,
            }));
        };

        let mut library = self.library.lock().await;
        let updated = library.repository.set_image(id, edited.to_url())?;
        Ok(updated.map(|recipe| ImageEditOutcome {
            recipe,
            edited: true,
        }))
    }

    // Detail view

    /// Open the detail view on `id`. Unknown ids leave the view unchanged.
    pub async fn open_detail(&self, id: &RecipeId) -> Option<Recipe> {
        let mut library = self.library.lock().await;
        let recipe = library.repository.get(id)?;
        library.detail.open(id.clone());
        Some(recipe)
    }

    /// The recipe open in the detail view, as currently stored.
    pub async fn detail(&self) -> Option<Recipe> {
        let mut library = self.library.lock().await;
        let Library { repository, detail } = &mut *library;
        detail.resolve(|id| repository.get(id))
    }

    pub async fn close_detail(&self) {
        self.library.lock().await.detail.close();
    }

    // Pantry and suggestions

    pub async fn pantry(&self) -> PantryState {
        self.pantry.lock().await.clone()
    }

    /// Apply `change` to the pantry and return its result with the new state.
    pub async fn update_pantry<R>(
        &self,
        change: impl FnOnce(&mut PantryState) -> R,
    ) -> (R, PantryState) {
        let mut pantry = self.pantry.lock().await;
        let result = change(&mut pantry);
        (result, pantry.clone())
    }

    /// Ask for suggestions from `ingredients`, or from the pantry's active
    /// list when none are given. The result replaces the pantry's previous
    /// suggestions.
    pub async fn suggest(
        &self,
        ingredients: Option<Vec<String>>,
    ) -> Result<Vec<SuggestedRecipe>, ValidationError> {
        let ingredients = match ingredients {
            Some(list) => {
                let cleaned: Vec<String> = list
                    .into_iter()
                    .map(|i| i.trim().to_string())
                    .filter(|i| !i.is_empty())
                    .collect();
                if cleaned.is_empty() {
                    return Err(ValidationError::NoPantryIngredients);
                }
                cleaned
            }
            None => self.pantry.lock().await.ingredients_for_suggestions()?,
        };

        let suggestions =
            suggest_recipes_from_ingredients(self.ai_client.as_ref(), &ingredients).await;
        tracing::info!(ingredients = ingredients.len(), suggestions = suggestions.len(), "Suggested recipes");

        self.pantry.lock().await.suggestions = suggestions.clone();
        Ok(suggestions)
    }

    /// Save the suggestion at `index` from the last batch as a new recipe.
    pub async fn save_suggestion(&self, index: usize) -> Result<Option<SaveOutcome>, RepositoryError> {
        let suggestion = self.pantry.lock().await.suggestions.get(index).cloned();
        match suggestion {
            Some(suggestion) => self.save_new(suggestion.into_draft()).await.map(Some),
            None => Ok(None),
        }
    }

    /// Detect ingredients in a photo and merge them into the fridge.
    pub async fn detect_ingredients(&self, photo: &ImageData) -> DetectionOutcome {
        let detected = detect_ingredients_from_image(self.ai_client.as_ref(), photo).await;

        let mut pantry = self.pantry.lock().await;
        let added = pantry.merge_detected(&detected);
        DetectionOutcome {
            detected,
            added,
            pantry: pantry.clone(),
        }
    }
}
