use thiserror::Error;

/// Error for ingredient catalog operations.
#[derive(Debug, Clone, Error)]
pub enum IngredientError {
    #[error("Ingredient not found: {0}")]
    NotFound(i64),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
