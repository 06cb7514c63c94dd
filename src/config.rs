use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use secrecy::{ExposeSecret, SecretString};

const DEFAULT_DB_PORT: u16 = 27017;
const DEFAULT_DB_NAME: &str = "colordb";
const DEFAULT_COLLECTION: &str = "colors";
const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// How to reach MongoDB
#[derive(Debug, Clone)]
pub enum DatabaseConnection {
    /// A complete connection string taken from `DB_URL`, credentials included
    Url(SecretString),
    /// Connection assembled from the individual `DB_*` variables
    Parts {
        user: String,
        password: SecretString,
        host: String,
        port: u16,
    },
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub connection: DatabaseConnection,
    pub name: String,
    pub collection: String,
    pub timeout: Duration,
}

impl DatabaseConfig {
    /// Connection string handed to the driver
    ///
    /// For assembled connections the credentials are not part of the string; they
    /// are attached to the client options instead, see [`DatabaseConfig::credentials`].
    pub fn connection_string(&self) -> String {
        match &self.connection {
            DatabaseConnection::Url(url) => url.expose_secret().clone(),
            DatabaseConnection::Parts { host, port, .. } => {
                format!("mongodb://{}:{}/{}", host, port, self.name)
            }
        }
    }

    pub fn credentials(&self) -> Option<(&str, &SecretString)> {
        match &self.connection {
            DatabaseConnection::Url(_) => None,
            DatabaseConnection::Parts { user, password, .. } => Some((user.as_str(), password)),
        }
    }

    /// Target description that is safe to log
    pub fn redacted_target(&self) -> String {
        match &self.connection {
            DatabaseConnection::Url(_) => "DB_URL (redacted)".to_string(),
            DatabaseConnection::Parts { user, host, port, .. } => {
                format!("mongodb://{}:***@{}:{}/{}", user, host, port, self.name)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let (connection, name) = match env::var("DB_URL") {
            Ok(url) if !url.is_empty() => {
                // Only used when the URL path names no database
                let name = env::var("DB_NAME").unwrap_or_else(|_| DEFAULT_DB_NAME.to_string());
                (DatabaseConnection::Url(SecretString::new(url)), name)
            }
            _ => {
                let user = env::var("DB_USER")
                    .context("DB_USER environment variable is required when DB_URL is not set")?;

                let password = env::var("DB_PASSWORD").context(
                    "DB_PASSWORD environment variable is required when DB_URL is not set",
                )?;

                let host = env::var("DB_HOST")
                    .context("DB_HOST environment variable is required when DB_URL is not set")?;

                let port = match env::var("DB_PORT") {
                    Ok(port) => port
                        .parse::<u16>()
                        .context("DB_PORT must be a valid port number (0-65535)")?,
                    Err(_) => DEFAULT_DB_PORT,
                };

                let name = env::var("DB_NAME")
                    .context("DB_NAME environment variable is required when DB_URL is not set")?;

                let connection = DatabaseConnection::Parts {
                    user,
                    password: SecretString::new(password),
                    host,
                    port,
                };
                (connection, name)
            }
        };

        let collection =
            env::var("DB_COLLECTION").unwrap_or_else(|_| DEFAULT_COLLECTION.to_string());

        let timeout_secs = match env::var("DB_TIMEOUT_SECS") {
            Ok(secs) => secs
                .parse::<u64>()
                .context("DB_TIMEOUT_SECS must be a whole number of seconds")?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "80".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            database: DatabaseConfig {
                connection,
                name,
                collection,
                timeout: Duration::from_secs(timeout_secs),
            },
            service_port,
            service_host,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  MongoDB target: {}", self.database.redacted_target());
        tracing::info!(
            "  MongoDB collection: {}.{}",
            self.database.name,
            self.database.collection
        );
        tracing::info!("  MongoDB timeout: {:?}", self.database.timeout);
        tracing::info!(
            "  Service listening on: {}:{}",
            self.service_host,
            self.service_port
        );
    }
}
