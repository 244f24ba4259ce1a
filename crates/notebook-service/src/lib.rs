//! notebook-service: business rules for the notebook hierarchy
//!
//! This crate provides:
//! - [`NotebookService`]: create, show, update, delete (with orphan
//!   repair), move, and child listing
//! - The error taxonomy handed to the request-handling layer
//! - Service configuration from the environment
//!
//! # Usage
//!
//! ```rust,ignore
//! use notebook_service::{NotebookService, ServiceConfig};
//! use notebook_service::notebook_core::CreateNotebookRequest;
//! use notebook_service::notebook_store::{connect, StoreConfig};
//!
//! let pool = connect(&StoreConfig::from_env()?).await?;
//! let service = NotebookService::with_config(pool, ServiceConfig::from_env()?);
//!
//! let work = service.create(CreateNotebookRequest::new("Work", None)).await?;
//! service.delete(work.id).await?;
//! ```

pub mod config;
pub mod error;
pub mod service;

pub use config::{ConfigError, ServiceConfig};
pub use error::{ServiceError, ServiceResult};
pub use service::NotebookService;

// Re-export dependent crates
pub use notebook_core;
pub use notebook_store;
