//! The live recipe collection.
//!
//! [`RecipeRepository`] owns the in-memory list and writes the whole list back
//! to its [`KeyValueStore`] after every mutation. Readers get owned copies.

use std::sync::Arc;

use crate::ai::AiClient;
use crate::bootstrap::sample_recipes;
use crate::error::{RepositoryError, StoreError};
use crate::store::{
    decode_collection, encode_collection, KeyValueStore, RECIPES_BACKUP_KEY, RECIPES_KEY,
};
use crate::types::{Recipe, RecipeDraft, RecipeId, RecipePatch, MAX_RATING};

/// Clamp a requested rating into range. Zero (or less) clears the rating.
pub fn clamp_rating(value: i64) -> Option<u8> {
    match value.clamp(0, i64::from(MAX_RATING)) {
        0 => None,
        // In range after the clamp
        v => Some(v as u8),
    }
}

pub struct RecipeRepository {
    store: Arc<dyn KeyValueStore>,
    recipes: Vec<Recipe>,
}

impl RecipeRepository {
    /// Repository with no recipes, backed by `store`. Nothing is written.
    pub fn empty(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            recipes: Vec::new(),
        }
    }

    /// Load the collection from `store`.
    ///
    /// - Nothing stored: the sample recipes are created (one image generation
    ///   call each) and persisted right away.
    /// - Stored payload rejected: it is copied under [`RECIPES_BACKUP_KEY`]
    ///   and the repository starts empty.
    ///
    /// Only a failure to read or write the store itself is returned.
    pub async fn load(
        store: Arc<dyn KeyValueStore>,
        ai_client: &dyn AiClient,
    ) -> Result<Self, StoreError> {
        let mut repository = Self::empty(store);

        match repository.store.get(RECIPES_KEY)? {
            None => {
                tracing::info!("No stored recipes, creating samples");
                repository.recipes =
                    sample_recipes(ai_client, chrono::Utc::now().timestamp_millis()).await;
                repository.persist()?;
            }
            Some(raw) => match decode_collection(&raw) {
                Ok(recipes) => {
                    tracing::debug!(count = recipes.len(), "Loaded recipes");
                    repository.recipes = recipes;
                }
                Err(e) => {
                    tracing::warn!(error = %e, backup_key = RECIPES_BACKUP_KEY, "Stored recipes rejected, starting empty");
                    if let Err(e) = repository.store.set(RECIPES_BACKUP_KEY, &raw) {
                        tracing::error!(error = %e, "Failed to back up rejected recipes");
                    }
                }
            },
        }

        Ok(repository)
    }

    /// Overwrite durable storage with the current collection.
    pub fn persist(&self) -> Result<(), StoreError> {
        let raw = encode_collection(&self.recipes)?;
        self.store.set(RECIPES_KEY, &raw)
    }

    /// Copy of every recipe in collection order (newest insert first).
    pub fn snapshot(&self) -> Vec<Recipe> {
        self.recipes.clone()
    }

    pub fn get(&self, id: &RecipeId) -> Option<Recipe> {
        self.recipes.iter().find(|r| &r.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Validate `draft`, assign id and timestamp, and prepend it.
    pub fn create(&mut self, draft: RecipeDraft) -> Result<Recipe, RepositoryError> {
        draft.validate()?;

        let recipe = Recipe {
            id: self.fresh_id(),
            title: draft.title.trim().to_string(),
            category: draft.category,
            ingredients: draft.ingredients,
            instructions: draft.instructions,
            image: non_blank(draft.image),
            video_url: non_blank(draft.video_url),
            prep_time: non_blank(draft.prep_time),
            rating: draft.rating.and_then(|r| clamp_rating(i64::from(r))),
            is_favorite: draft.is_favorite,
            created_at: chrono::Utc::now().timestamp_millis(),
            nutrition: draft.nutrition,
        };

        self.recipes.insert(0, recipe.clone());
        self.persist()?;

        tracing::info!(id = %recipe.id, title = %recipe.title, "Created recipe");
        Ok(recipe)
    }

    /// Merge the present fields of `patch` into the recipe with `id`.
    ///
    /// Returns `Ok(None)` when no such recipe exists. A patch that would leave
    /// the recipe invalid is rejected and nothing changes.
    pub fn update(
        &mut self,
        id: &RecipeId,
        patch: RecipePatch,
    ) -> Result<Option<Recipe>, RepositoryError> {
        let Some(index) = self.index_of(id) else {
            return Ok(None);
        };

        let mut updated = self.recipes[index].clone();
        if let Some(title) = patch.title {
            updated.title = title.trim().to_string();
        }
        if let Some(category) = patch.category {
            updated.category = category;
        }
        if let Some(ingredients) = patch.ingredients {
            if ingredients != updated.ingredients {
                // Stored figures describe the old ingredient list
                updated.nutrition = None;
            }
            updated.ingredients = ingredients;
        }
        if let Some(instructions) = patch.instructions {
            updated.instructions = instructions;
        }
        if patch.image.is_some() {
            updated.image = non_blank(patch.image);
        }
        if patch.video_url.is_some() {
            updated.video_url = non_blank(patch.video_url);
        }
        if patch.prep_time.is_some() {
            updated.prep_time = non_blank(patch.prep_time);
        }
        if let Some(rating) = patch.rating {
            updated.rating = clamp_rating(i64::from(rating));
        }
        if let Some(nutrition) = patch.nutrition {
            updated.nutrition = Some(nutrition);
        }

        crate::error::ValidationError::check(
            &updated.title,
            &updated.ingredients,
            &updated.instructions,
        )?;

        self.recipes[index] = updated.clone();
        self.persist()?;

        tracing::info!(id = %id, "Updated recipe");
        Ok(Some(updated))
    }

    /// Delete the recipe with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: &RecipeId) -> Result<bool, StoreError> {
        let Some(index) = self.index_of(id) else {
            return Ok(false);
        };
        self.recipes.remove(index);
        self.persist()?;

        tracing::info!(id = %id, "Deleted recipe");
        Ok(true)
    }

    pub fn toggle_favorite(&mut self, id: &RecipeId) -> Result<Option<Recipe>, StoreError> {
        self.mutate(id, |recipe| recipe.is_favorite = !recipe.is_favorite)
    }

    /// Set the rating, clamped into `[0, MAX_RATING]`. Zero clears it.
    pub fn set_rating(&mut self, id: &RecipeId, value: i64) -> Result<Option<Recipe>, StoreError> {
        let rating = clamp_rating(value);
        self.mutate(id, |recipe| recipe.rating = rating)
    }

    /// Replace the image field only.
    pub fn set_image(&mut self, id: &RecipeId, image: String) -> Result<Option<Recipe>, StoreError> {
        let image = non_blank(Some(image));
        self.mutate(id, |recipe| recipe.image = image)
    }

    fn mutate(
        &mut self,
        id: &RecipeId,
        apply: impl FnOnce(&mut Recipe),
    ) -> Result<Option<Recipe>, StoreError> {
        let Some(index) = self.index_of(id) else {
            return Ok(None);
        };
        apply(&mut self.recipes[index]);
        let updated = self.recipes[index].clone();
        self.persist()?;
        Ok(Some(updated))
    }

    fn index_of(&self, id: &RecipeId) -> Option<usize> {
        self.recipes.iter().position(|r| &r.id == id)
    }

    fn fresh_id(&self) -> RecipeId {
        loop {
            let id = RecipeId::generate();
            if self.index_of(&id).is_none() {
                return id;
            }
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
