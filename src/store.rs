use async_trait::async_trait;
use thiserror::Error;

use crate::models::Color;

/// Errors surfaced by a [`ColorStore`]
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database could not be reached (I/O failure, server selection timeout, ...)
    #[error("database unreachable: {0}")]
    Connection(String),
    /// Any other driver or serialization failure
    #[error("database operation failed: {0}")]
    Internal(String),
}

impl StoreError {
    pub fn is_connection(&self) -> bool {
        matches!(self, StoreError::Connection(_))
    }
}

/// Document access for the colors collection
///
/// Implementations hold a long-lived connection (or pool) and are shared across
/// request handlers, so they must be cheap to call concurrently.
#[async_trait]
pub trait ColorStore: Send + Sync {
    /// Find the document stored under `key`
    async fn find_one(&self, key: &str) -> Result<Option<Color>, StoreError>;

    /// Return every stored document, in no particular order
    async fn find_all(&self) -> Result<Vec<Color>, StoreError>;

    /// Insert or replace the document for `key`, returning the stored record
    async fn upsert(&self, key: &str, value: &str) -> Result<Color, StoreError>;

    /// Delete the document for `key`; returns whether a document was removed
    async fn delete_one(&self, key: &str) -> Result<bool, StoreError>;

    /// Verify the database is reachable
    async fn ping(&self) -> Result<(), StoreError>;

    /// Create any indexes the collection relies on
    ///
    /// Called after each successful ping; implementations only do the work once.
    async fn ensure_indexes(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
