//! The recipe detail view.

use crate::types::{Recipe, RecipeId};

/// Which recipe, if any, is open in the detail view.
///
/// Only the id is held, so reading the view always returns the current
/// repository record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailView {
    open: Option<RecipeId>,
}

impl DetailView {
    pub fn open(&mut self, id: RecipeId) {
        self.open = Some(id);
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn open_id(&self) -> Option<&RecipeId> {
        self.open.as_ref()
    }

    pub fn is_showing(&self, id: &RecipeId) -> bool {
        self.open.as_ref() == Some(id)
    }

    /// Close the view if it shows `id`. Returns whether it did.
    pub fn close_if_showing(&mut self, id: &RecipeId) -> bool {
        if self.is_showing(id) {
            self.open = None;
            true
        } else {
            false
        }
    }

    /// Look up the open recipe with `lookup`, closing the view if the recipe
    /// has gone away.
    pub fn resolve(&mut self, lookup: impl FnOnce(&RecipeId) -> Option<Recipe>) -> Option<Recipe> {
        let recipe = self.open.as_ref().and_then(lookup);
        if recipe.is_none() {
            self.open = None;
        }
        recipe
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_if_showing() {
        let mut view = DetailView::default();
        view.open(RecipeId::from("a"));

        assert!(!view.close_if_showing(&RecipeId::from("b")));
        assert!(view.is_showing(&RecipeId::from("a")));
        assert!(view.close_if_showing(&RecipeId::from("a")));
        assert_eq!(view.open_id(), None);
    }

    #[test]
    fn test_resolve_closes_when_missing() {
        let mut view = DetailView::default();
        view.open(RecipeId::from("gone"));
        assert_eq!(view.resolve(|_| None), None);
        assert_eq!(view.open_id(), None);
    }
}
