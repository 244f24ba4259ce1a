//! notebook-store: Storage layer for the notebook hierarchy
//!
//! This crate provides:
//! - PostgreSQL storage for notebook rows
//! - Soft-delete aware reads (deleted rows are never returned)
//! - Migration management
//! - Type-safe database operations via sqlx
//!
//! # Architecture
//!
//! A single `notebook` table holds every notebook. `parent_id` links a
//! notebook to its parent; soft-deleted rows stay in the table.
//! [`NotebookStore`] runs against either the pool or an open transaction
//! (see [`NotebookStore::using_tx`]), so callers can compose several
//! statements atomically.
//!
//! # Usage
//!
//! ```rust,ignore
//! use notebook_store::{connect, NotebookStore, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let pool = connect(&config).await?;
//!
//! let mut store = NotebookStore::new(&pool);
//! store.create(&notebook).await?;
//! let notebook = store.get_by_id(notebook.id).await?;
//! ```

pub mod error;
pub mod models;
pub mod schema;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use models::NotebookRow;
pub use store::{connect, NotebookStore, QueryExecutor, StoreConfig};

// Re-export notebook-core for downstream crates
pub use notebook_core;
