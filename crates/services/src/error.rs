//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;
use topics_core::model::{TopicError, TopicId};

/// Errors emitted by `TopicService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TopicServiceError {
    #[error("topic not found: {0}")]
    NotFound(TopicId),
    #[error(transparent)]
    Topic(#[from] TopicError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("invalid topic file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors emitted while loading a tutorial catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TutorialCatalogError {
    #[error("failed to read tutorial catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid tutorial catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Topics(#[from] TopicServiceError),
    #[error(transparent)]
    Catalog(#[from] TutorialCatalogError),
}
