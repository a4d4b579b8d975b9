//! The fridge matcher: ingredients on hand, and the ones picked for the pot.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::types::SuggestedRecipe;

/// One of the two pantry lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum PantryList {
    Fridge,
    Pot,
}

/// Which list suggestions are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum PantryMode {
    #[default]
    Fridge,
    Pot,
}

/// Pantry contents plus the last batch of suggestions.
///
/// An ingredient name appears at most once across both lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PantryState {
    pub fridge: Vec<String>,
    pub pot: Vec<String>,
    pub mode: PantryMode,
    pub suggestions: Vec<SuggestedRecipe>,
}

impl PantryState {
    fn list_mut(&mut self, list: PantryList) -> &mut Vec<String> {
        match list {
            PantryList::Fridge => &mut self.fridge,
            PantryList::Pot => &mut self.pot,
        }
    }

    fn contains(&self, name: &str) -> bool {
        self.fridge.iter().chain(&self.pot).any(|i| i == name)
    }

    /// Add a trimmed name to `list`. Blank names and names already in
    /// either list are refused.
    pub fn add(&mut self, list: PantryList, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.list_mut(list).push(name.to_string());
        true
    }

    pub fn remove(&mut self, list: PantryList, name: &str) -> bool {
        let items = self.list_mut(list);
        let before = items.len();
        items.retain(|i| i != name.trim());
        items.len() != before
    }

    /// Move `name` into `target` from the other list.
    pub fn move_to(&mut self, name: &str, target: PantryList) -> bool {
        let source = match target {
            PantryList::Fridge => PantryList::Pot,
            PantryList::Pot => PantryList::Fridge,
        };
        if !self.remove(source, name) {
            return false;
        }
        self.list_mut(target).push(name.trim().to_string());
        true
    }

    /// Merge detected ingredients into the fridge, dropping duplicates, and
    /// switch to pot mode. Nothing changes when `detected` is empty.
    ///
    /// Returns how many names were added.
    pub fn merge_detected(&mut self, detected: &[String]) -> usize {
        if detected.is_empty() {
            return 0;
        }
        let added = detected
            .iter()
            .filter(|name| self.add(PantryList::Fridge, name))
            .count();
        self.mode = PantryMode::Pot;
        added
    }

    pub fn set_mode(&mut self, mode: PantryMode) {
        self.mode = mode;
    }

    /// The list suggestions use in the current mode.
    pub fn active_ingredients(&self) -> &[String] {
        match self.mode {
            PantryMode::Fridge => &self.fridge,
            PantryMode::Pot => &self.pot,
        }
    }

    /// Active ingredients, or an error when there are none.
    pub fn ingredients_for_suggestions(&self) -> Result<Vec<String>, ValidationError> {
        let active = self.active_ingredients();
        if active.is_empty() {
            return Err(ValidationError::NoPantryIngredients);
        }
        Ok(active.to_vec())
    }
}
