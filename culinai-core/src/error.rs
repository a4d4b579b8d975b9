use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid stored JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Unsupported collection schema version: {0}")]
    UnsupportedVersion(u32),

    #[error("Invalid stored collection: {0}")]
    InvalidCollection(String),
}

/// A name that matches none of an enum's variants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind}: {value}")]
pub struct UnknownName {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownName {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// A recipe is missing something every saved recipe must have.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("A recipe needs at least one ingredient")]
    NoIngredients,

    #[error("A recipe needs at least one instruction")]
    NoInstructions,

    #[error("Add at least one ingredient first")]
    NoPantryIngredients,
}

impl ValidationError {
    pub(crate) fn check(
        title: &str,
        ingredients: &[String],
        instructions: &[String],
    ) -> Result<(), ValidationError> {
        if title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if ingredients.is_empty() {
            return Err(ValidationError::NoIngredients);
        }
        if instructions.is_empty() {
            return Err(ValidationError::NoInstructions);
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("Failed to persist recipes: {0}")]
    Persist(#[from] StoreError),
}
