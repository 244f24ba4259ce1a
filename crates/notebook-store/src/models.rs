//! Database models for the storage layer.
//!
//! These types map directly to database rows and are used for
//! sqlx queries. They are separate from the domain types in
//! notebook-core to keep column types out of the public model.

use chrono::{DateTime, Utc};
use notebook_core::{Notebook, NotebookId};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row for the `notebook` table.
#[derive(Debug, Clone, FromRow)]
pub struct NotebookRow {
    pub id: Uuid,
    pub name: String,
    pub parent_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub is_deleted: bool,
}

impl From<NotebookRow> for Notebook {
    fn from(row: NotebookRow) -> Self {
        Self {
            id: NotebookId::from_uuid(row.id),
            name: row.name,
            parent_id: row.parent_id.map(NotebookId::from_uuid),
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
            is_deleted: row.is_deleted,
        }
    }
}
