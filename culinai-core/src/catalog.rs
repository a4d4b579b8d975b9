//! Filtering, searching and sorting of recipe lists.
//!
//! All of this is view state. Nothing here is persisted.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownName;
use crate::types::{Category, Recipe};

/// Which recipes a view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Favorites,
    Only(Category),
}

/// Parses "all", "favorites" or a category name.
impl FromStr for CategoryFilter {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "all" => Ok(CategoryFilter::All),
            "favorites" => Ok(CategoryFilter::Favorites),
            other => other
                .parse()
                .map(CategoryFilter::Only)
                .map_err(|_| UnknownName::new("category filter", other)),
        }
    }
}

impl CategoryFilter {
    pub fn matches(&self, recipe: &Recipe) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Favorites => recipe.is_favorite,
            CategoryFilter::Only(category) => recipe.category == *category,
        }
    }
}

/// Sort order for recipe lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Newest first.
    #[default]
    Recent,
    /// By title, ignoring case and accents.
    Alpha,
}

impl FromStr for SortMode {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recent" => Ok(SortMode::Recent),
            "alpha" => Ok(SortMode::Alpha),
            _ => Err(UnknownName::new("sort", s)),
        }
    }
}

/// A complete list view: category, search text and sort.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub filter: CategoryFilter,
    pub search: String,
    pub sort: SortMode,
}

impl ListQuery {
    /// Filter and sort `recipes`, returning the visible ones in display order.
    pub fn apply(&self, recipes: &[Recipe]) -> Vec<Recipe> {
        let needle = self.search.to_lowercase();

        let mut visible: Vec<Recipe> = recipes
            .iter()
            .filter(|r| self.filter.matches(r) && matches_search(r, &needle))
            .cloned()
            .collect();

        sort_recipes(&mut visible, self.sort);
        visible
    }
}

/// Case-insensitive substring match on title or any ingredient.
/// `needle` must already be lowercased; empty matches everything.
fn matches_search(recipe: &Recipe, needle: &str) -> bool {
    needle.is_empty()
        || recipe.title.to_lowercase().contains(needle)
        || recipe
            .ingredients
            .iter()
            .any(|i| i.to_lowercase().contains(needle))
}

/// Sort in place. Both orders are stable.
pub fn sort_recipes(recipes: &mut [Recipe], mode: SortMode) {
    match mode {
        SortMode::Recent => recipes.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortMode::Alpha => recipes.sort_by_cached_key(|r| collation_key(&r.title)),
    }
}

/// Compare two titles the way the alphabetical view does.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(&collation_key(b))
}

/// Lowercased title with Latin diacritics folded to their base letter.
pub fn collation_key(title: &str) -> String {
    let mut key = String::with_capacity(title.len());
    for c in title.trim().chars().flat_map(char::to_lowercase) {
        match fold_diacritic(c) {
            Some(folded) => key.push_str(folded),
            None => key.push(c),
        }
    }
    key
}

fn fold_diacritic(c: char) -> Option<&'static str> {
    let folded = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => "a",
        'æ' => "ae",
        'ç' | 'ć' | 'č' => "c",
        'ď' | 'đ' => "d",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => "e",
        'ğ' => "g",
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' | 'ı' => "i",
        'ł' | 'ľ' => "l",
        'ñ' | 'ń' | 'ň' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => "o",
        'œ' => "oe",
        'ř' => "r",
        'ß' => "ss",
        'ś' | 'š' | 'ş' => "s",
        'ť' | 'ţ' => "t",
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => "u",
        'ý' | 'ÿ' => "y",
        'ź' | 'ż' | 'ž' => "z",
        _ => return None,
    };
    Some(folded)
}
