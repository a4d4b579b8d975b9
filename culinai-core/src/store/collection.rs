//! Versioned serialization of the recipe collection.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::{StoreError, ValidationError};
use crate::types::{Recipe, MAX_RATING};

/// Current collection format version.
///
/// Version 0 is the unversioned bare JSON array written by the first release.
pub const SCHEMA_VERSION: u32 = 1;

/// On-disk envelope around the recipe list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredCollection {
    pub schema_version: u32,
    pub recipes: Vec<Recipe>,
}

/// Serialize the full collection at the current schema version.
pub fn encode_collection(recipes: &[Recipe]) -> Result<String, StoreError> {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Envelope<'a> {
        schema_version: u32,
        recipes: &'a [Recipe],
    }

    Ok(serde_json::to_string(&Envelope {
        schema_version: SCHEMA_VERSION,
        recipes,
    })?)
}

/// Parse a stored collection.
///
/// The collection is accepted whole or rejected whole: one bad record fails
/// the entire decode.
pub fn decode_collection(raw: &str) -> Result<Vec<Recipe>, StoreError> {
    let value: JsonValue = serde_json::from_str(raw)?;

    let mut recipes: Vec<Recipe> = match value {
        JsonValue::Array(_) => serde_json::from_value(value)?,
        JsonValue::Object(_) => {
            let stored: StoredCollection = serde_json::from_value(value)?;
            if stored.schema_version > SCHEMA_VERSION {
                return Err(StoreError::UnsupportedVersion(stored.schema_version));
            }
            stored.recipes
        }
        other => {
            return Err(StoreError::InvalidCollection(format!(
                "expected an array or object, found {}",
                json_kind(&other)
            )))
        }
    };

    let mut seen = HashSet::new();
    for recipe in &mut recipes {
        normalize_legacy_fields(recipe);

        ValidationError::check(&recipe.title, &recipe.ingredients, &recipe.instructions)
            .map_err(|e| StoreError::InvalidCollection(format!("recipe {}: {}", recipe.id, e)))?;

        if recipe.rating.is_some_and(|r| r > MAX_RATING) {
            return Err(StoreError::InvalidCollection(format!(
                "recipe {}: rating out of range",
                recipe.id
            )));
        }

        if !seen.insert(recipe.id.clone()) {
            return Err(StoreError::InvalidCollection(format!(
                "duplicate recipe id {}",
                recipe.id
            )));
        }
    }

    Ok(recipes)
}

/// The first release stored empty strings and zero ratings for unset fields.
fn normalize_legacy_fields(recipe: &mut Recipe) {
    for field in [
        &mut recipe.image,
        &mut recipe.video_url,
        &mut recipe.prep_time,
    ] {
        if field.as_deref().is_some_and(|v| v.trim().is_empty()) {
            *field = None;
        }
    }
    if recipe.rating == Some(0) {
        recipe.rating = None;
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
