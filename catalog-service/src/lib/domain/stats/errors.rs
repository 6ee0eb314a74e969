use thiserror::Error;

/// Error for stats operations.
#[derive(Debug, Clone, Error)]
pub enum StatsError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}
