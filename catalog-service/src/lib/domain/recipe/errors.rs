use thiserror::Error;

/// Error for recipe catalog operations.
#[derive(Debug, Clone, Error)]
pub enum RecipeError {
    #[error("Recipe not found: {0}")]
    NotFound(i64),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
