//! notebook-core: shared types for the notebook hierarchy.
//!
//! This crate provides:
//! - `NotebookId` and the `Notebook` entity
//! - Request/response shapes for the service operations
//! - Name validation (`ValidationError`)
//!
//! It has no I/O. Storage lives in `notebook-store` and the business rules
//! in `notebook-service`.

pub mod requests;
pub mod types;

pub use requests::*;
pub use types::{Notebook, NotebookId};
