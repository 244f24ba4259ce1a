//! Service error taxonomy.
//!
//! Every failure is one of three kinds: the notebook does not exist (or is
//! soft-deleted), the input was rejected, or the storage layer failed. The
//! request-handling layer maps `NotFound` to a not-found response and the
//! rest to its own failure responses.

use notebook_core::{NotebookId, ValidationError};
use notebook_store::StoreError;

/// Error returned by every service operation.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// No live notebook with this id.
    #[error("notebook not found: {0}")]
    NotFound(NotebookId),

    /// Malformed input.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Any other persistence failure, unchanged.
    #[error("storage error: {0}")]
    Storage(#[source] StoreError),
}

impl ServiceError {
    /// Get the error code string for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Whether this is the "no such live notebook" sentinel.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotebookNotFound(id) => Self::NotFound(NotebookId::from_uuid(id)),
            other => Self::Storage(other),
        }
    }
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;
