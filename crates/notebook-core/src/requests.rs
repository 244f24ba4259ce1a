//! Request and response shapes exchanged with the request-handling layer.
//!
//! Field names serialize in snake_case (`parent_id`, `created_at`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Notebook, NotebookId};

/// Default upper bound on notebook name length, in characters.
pub const DEFAULT_MAX_NAME_LENGTH: usize = 255;

/// Input rejected before it reaches storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name is empty or whitespace only.
    #[error("notebook name cannot be empty")]
    EmptyName,

    /// Name exceeds the configured maximum.
    #[error("notebook name is {len} characters, maximum is {max}")]
    NameTooLong { len: usize, max: usize },
}

/// Check a notebook name against the naming rules.
pub fn validate_name(name: &str, max_len: usize) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    let len = name.chars().count();
    if len > max_len {
        return Err(ValidationError::NameTooLong { len, max: max_len });
    }
    Ok(())
}

// ============================================================================
// Create
// ============================================================================

/// Request body for creating a notebook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateNotebookRequest {
    /// Name for the new notebook.
    pub name: String,
    /// Optional parent. Not checked for existence on create.
    #[serde(default)]
    pub parent_id: Option<NotebookId>,
}

impl CreateNotebookRequest {
    pub fn new(name: impl Into<String>, parent_id: Option<NotebookId>) -> Self {
        Self {
            name: name.into(),
            parent_id,
        }
    }

    pub fn validate(&self, max_name_len: usize) -> Result<(), ValidationError> {
        validate_name(&self.name, max_name_len)
    }
}

/// Response for a created notebook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateNotebookResponse {
    pub id: NotebookId,
}

// ============================================================================
// Show
// ============================================================================

/// Public view of a live notebook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowNotebookResponse {
    pub id: NotebookId,
    pub name: String,
    pub parent_id: Option<NotebookId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Notebook> for ShowNotebookResponse {
    fn from(notebook: Notebook) -> Self {
        Self {
            id: notebook.id,
            name: notebook.name,
            parent_id: notebook.parent_id,
            created_at: notebook.created_at,
            updated_at: notebook.updated_at,
        }
    }
}

// ============================================================================
// Update
// ============================================================================

/// Request for renaming a notebook.
///
/// The id usually comes from the request path rather than the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateNotebookRequest {
    #[serde(default)]
    pub id: NotebookId,
    pub name: String,
}

impl UpdateNotebookRequest {
    pub fn new(id: NotebookId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn validate(&self, max_name_len: usize) -> Result<(), ValidationError> {
        validate_name(&self.name, max_name_len)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateNotebookResponse {
    pub id: NotebookId,
}

// ============================================================================
// Move
// ============================================================================

/// Request for reparenting a notebook. `parent_id: None` moves it to the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveNotebookRequest {
    #[serde(default)]
    pub id: NotebookId,
    #[serde(default)]
    pub parent_id: Option<NotebookId>,
}

impl MoveNotebookRequest {
    pub fn new(id: NotebookId, parent_id: Option<NotebookId>) -> Self {
        Self { id, parent_id }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveNotebookResponse {
    pub id: NotebookId,
}
