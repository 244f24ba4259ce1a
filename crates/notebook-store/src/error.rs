//! Error types for the storage layer.

use std::time::Duration;

use thiserror::Error;
use uuid::Uuid;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error: connection loss, constraint violation, failed
    /// transaction begin/commit.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// No live notebook with this id (missing or soft-deleted).
    #[error("notebook not found: {0}")]
    NotebookNotFound(Uuid),

    /// The operation did not finish within its deadline.
    #[error("operation exceeded deadline of {0:?}")]
    DeadlineExceeded(Duration),

    /// Migration error.
    #[error("migration error: {0}")]
    MigrationError(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl StoreError {
    /// Whether this error means "no such live notebook".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotebookNotFound(_))
    }
}
