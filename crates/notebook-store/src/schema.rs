//! Schema definitions and migration utilities.
//!
//! This module provides the embedded SQL schema and utilities
//! for applying it.

use sqlx::PgPool;

use crate::error::{StoreError, StoreResult};

/// Embedded migration SQL for the notebook table (001_notebook.sql).
pub const NOTEBOOK_MIGRATION: &str = include_str!("../../../migrations/001_notebook.sql");

/// Run all pending migrations against the database.
///
/// This function is idempotent - it can be run multiple times safely.
/// Every statement uses `IF NOT EXISTS`.
///
/// # Errors
///
/// Returns an error if any migration fails to execute.
pub async fn run_migrations(pool: &PgPool) -> StoreResult<()> {
    tracing::info!("Running database migrations...");

    tracing::debug!("Running notebook migration (001_notebook.sql)...");
    sqlx::raw_sql(NOTEBOOK_MIGRATION)
        .execute(pool)
        .await
        .map_err(|e| StoreError::MigrationError(format!("Notebook migration failed: {}", e)))?;

    tracing::info!("Migrations completed successfully");
    Ok(())
}
