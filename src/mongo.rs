use anyhow::{Context, Result};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::error::{Error as MongoError, ErrorKind};
use mongodb::options::{ClientOptions, Credential, IndexOptions, ReturnDocument};
use mongodb::{Client, Collection, IndexModel};
use secrecy::ExposeSecret;
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::config::DatabaseConfig;
use crate::models::Color;
use crate::store::{ColorStore, StoreError};

const APP_NAME: &str = "color-api";
const AUTH_SOURCE: &str = "admin";

/// Shareable MongoDB client for use across async handlers
///
/// Cloning is cheap: the driver's connection pool and the collection handle are
/// shared, so every clone talks to the same pool.
#[derive(Clone)]
pub struct MongoClient {
    client: Client,
    colors: Collection<Color>,
    indexes: Arc<OnceCell<()>>,
}

impl MongoClient {
    /// Create a new MongoDB client from configuration
    ///
    /// The connection string is parsed eagerly, so a malformed `DB_URL` fails here.
    /// The driver connects lazily: an unreachable server is only reported by the
    /// first operation (or [`ColorStore::ping`]), never by this constructor.
    pub async fn from_config(config: &DatabaseConfig) -> Result<Self> {
        let mut options = ClientOptions::parse(config.connection_string())
            .await
            .context("Failed to parse MongoDB connection string")?;

        if let Some((user, password)) = config.credentials() {
            options.credential = Some(
                Credential::builder()
                    .username(user.to_string())
                    .password(password.expose_secret().clone())
                    .source(AUTH_SOURCE.to_string())
                    .build(),
            );
        }

        options.app_name = Some(APP_NAME.to_string());
        options.server_selection_timeout = Some(config.timeout);
        options.connect_timeout = Some(config.timeout);

        // A database named in the connection string wins over DB_NAME
        let database = options
            .default_database
            .clone()
            .unwrap_or_else(|| config.name.clone());

        let client = Client::with_options(options).context("Failed to create MongoDB client")?;
        let colors = client
            .database(&database)
            .collection::<Color>(&config.collection);

        tracing::info!(
            "MongoDB client created for collection {}.{}",
            database,
            config.collection
        );

        Ok(Self {
            client,
            colors,
            indexes: Arc::new(OnceCell::new()),
        })
    }

    /// Close the connection pool
    pub async fn shutdown(self) {
        tracing::info!("Shutting down MongoDB client");
        self.client.shutdown().await;
    }
}

#[async_trait]
impl ColorStore for MongoClient {
    async fn find_one(&self, key: &str) -> Result<Option<Color>, StoreError> {
        let color = self.colors.find_one(doc! { "key": key }).await?;
        tracing::debug!("find_one key={} found={}", key, color.is_some());
        Ok(color)
    }

    async fn find_all(&self) -> Result<Vec<Color>, StoreError> {
        let cursor = self.colors.find(doc! {}).await?;
        let colors: Vec<Color> = cursor.try_collect().await?;
        tracing::debug!("find_all returned {} documents", colors.len());
        Ok(colors)
    }

    async fn upsert(&self, key: &str, value: &str) -> Result<Color, StoreError> {
        let stored = self
            .colors
            .find_one_and_replace(doc! { "key": key }, Color::new(key, value))
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await?;

        tracing::debug!("Upserted document with key: {}", key);
        stored.ok_or_else(|| {
            StoreError::Internal(format!("upsert of '{}' returned no document", key))
        })
    }

    async fn delete_one(&self, key: &str) -> Result<bool, StoreError> {
        let result = self.colors.delete_one(doc! { "key": key }).await?;
        tracing::debug!("delete_one key={} deleted={}", key, result.deleted_count);
        Ok(result.deleted_count > 0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.client
            .database(AUTH_SOURCE)
            .run_command(doc! { "ping": 1 })
            .await?;
        tracing::debug!("Ping succeeded");
        Ok(())
    }

    /// Ensure the unique index on `key` exists
    ///
    /// Succeeds at most once per process; a failed attempt is retried on the next
    /// call. Creating an index that already exists is a no-op on the server.
    async fn ensure_indexes(&self) -> Result<(), StoreError> {
        self.indexes
            .get_or_try_init(|| async {
                let index = IndexModel::builder()
                    .keys(doc! { "key": 1 })
                    .options(IndexOptions::builder().unique(true).build())
                    .build();

                self.colors.create_index(index).await?;
                tracing::info!("Unique index on 'key' is in place");
                Ok::<(), StoreError>(())
            })
            .await?;
        Ok(())
    }
}

impl From<MongoError> for StoreError {
    fn from(err: MongoError) -> Self {
        match err.kind.as_ref() {
            ErrorKind::Io(_)
            | ErrorKind::ServerSelection { .. }
            | ErrorKind::ConnectionPoolCleared { .. } => StoreError::Connection(err.to_string()),
            _ => StoreError::Internal(err.to_string()),
        }
    }
}
