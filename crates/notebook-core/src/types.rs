//! Core data types for the notebook hierarchy.
//!
//! A notebook is a named container that may nest under another notebook.
//! The parent link is a plain optional id; the tree shape is not enforced
//! beyond write-time existence checks performed by the service layer.
//!
//! All types derive `Debug`, `Clone`, `Serialize`, and `Deserialize` for
//! inspection, copying, and JSON serialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ============================================================================
// ID Types
// ============================================================================

/// Unique identifier for a notebook.
///
/// Wraps a UUID v4, providing type safety to distinguish notebook IDs from
/// other UUID-based identifiers in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotebookId(pub Uuid);

impl NotebookId {
    /// Creates a new random NotebookId using UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a NotebookId from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for NotebookId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotebookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NotebookId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl From<Uuid> for NotebookId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

// ============================================================================
// Core Domain Types
// ============================================================================

/// A named, optionally nested container.
///
/// `parent_id` of `None` means the notebook sits at the root. A soft-deleted
/// notebook keeps its row (and id) but is invisible to every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notebook {
    /// Unique identifier, assigned at creation and never changed.
    pub id: NotebookId,

    /// Human-readable name. Never empty once validated.
    pub name: String,

    /// Parent notebook, if any.
    pub parent_id: Option<NotebookId>,

    /// Creation time, set once.
    pub created_at: DateTime<Utc>,

    /// Time of the last `update`. Absent until the first one.
    pub updated_at: Option<DateTime<Utc>>,

    /// Time of the soft delete.
    pub deleted_at: Option<DateTime<Utc>>,

    /// Soft-delete flag.
    pub is_deleted: bool,
}

impl Notebook {
    /// Creates a fresh, live notebook stamped with the current time.
    #[must_use]
    pub fn new(name: impl Into<String>, parent_id: Option<NotebookId>) -> Self {
        Self {
            id: NotebookId::new(),
            name: name.into(),
            parent_id,
            created_at: Utc::now(),
            updated_at: None,
            deleted_at: None,
            is_deleted: false,
        }
    }

    /// Whether this notebook sits at the root of the tree.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Renames the notebook and stamps `updated_at`.
    pub fn rename(&mut self, name: impl Into<String>, at: DateTime<Utc>) {
        self.name = name.into();
        self.updated_at = Some(at);
    }
}
