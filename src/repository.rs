use std::sync::Arc;

use thiserror::Error;

use crate::models::Color;
use crate::state::Readiness;
use crate::store::{ColorStore, StoreError};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("key must not be empty")]
    EmptyKey,
    #[error("color not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Domain operations on colors
///
/// Connection failures reported by the store flip the shared [`Readiness`] to
/// not-ready before the error is returned to the caller.
#[derive(Clone)]
pub struct ColorRepository {
    store: Arc<dyn ColorStore>,
    readiness: Readiness,
}

impl ColorRepository {
    pub fn new(store: Arc<dyn ColorStore>, readiness: Readiness) -> Self {
        Self { store, readiness }
    }

    pub async fn get_by_key(&self, key: &str) -> Result<Color, RepositoryError> {
        let key = validate_key(key)?;
        self.observe(self.store.find_one(key).await)?
            .ok_or_else(|| RepositoryError::NotFound(key.to_string()))
    }

    /// All colors, sorted by key
    pub async fn get_all(&self) -> Result<Vec<Color>, RepositoryError> {
        let mut colors = self.observe(self.store.find_all().await)?;
        colors.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(colors)
    }

    pub async fn upsert(&self, key: &str, value: &str) -> Result<Color, RepositoryError> {
        let key = validate_key(key)?;
        Ok(self.observe(self.store.upsert(key, value).await)?)
    }

    pub async fn delete(&self, key: &str) -> Result<(), RepositoryError> {
        let key = validate_key(key)?;
        if self.observe(self.store.delete_one(key).await)? {
            Ok(())
        } else {
            Err(RepositoryError::NotFound(key.to_string()))
        }
    }

    /// Ping the store and update readiness with the outcome
    ///
    /// Readiness follows the ping alone. Index creation is attempted afterwards and
    /// a failure there is only logged.
    pub async fn check_connection(&self) -> Result<(), StoreError> {
        match self.store.ping().await {
            Ok(()) => {
                self.readiness.mark_ready();
                if let Err(e) = self.store.ensure_indexes().await {
                    tracing::warn!("Could not create index on colors collection: {}", e);
                }
                Ok(())
            }
            Err(e) => {
                self.readiness.mark_unavailable();
                Err(e)
            }
        }
    }

    fn observe<T>(&self, result: Result<T, StoreError>) -> Result<T, StoreError> {
        if let Err(e) = &result {
            if e.is_connection() {
                self.readiness.mark_unavailable();
            }
        }
        result
    }
}

fn validate_key(key: &str) -> Result<&str, RepositoryError> {
    if key.trim().is_empty() {
        Err(RepositoryError::EmptyKey)
    } else {
        Ok(key)
    }
}
