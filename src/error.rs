use thiserror::Error;

use crate::models::RecipeId;

#[derive(Debug, Error)]
pub enum EcoError {
    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    #[error("Meal plan index {index} out of range (plan has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Duplicate recipe id in catalog: {0}")]
    DuplicateRecipeId(RecipeId),

    #[error("Invalid recipe: {0}")]
    InvalidRecipe(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, EcoError>;
