mod api_doc;
mod config;
mod error;
mod handlers;
mod models;
mod mongo;
mod repository;
mod routes;
mod state;
mod store;

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use mongo::MongoClient;
use repository::ColorRepository;
use state::{AppState, Readiness};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("color-api starting");

    let config = Config::from_env()?;
    config.log_startup();

    let mongo_client = MongoClient::from_config(&config.database).await?;
    let readiness = Readiness::new();
    let repository = ColorRepository::new(Arc::new(mongo_client.clone()), readiness.clone());

    // An unreachable database is not fatal; /ready keeps the pod out of rotation
    if let Err(e) = repository.check_connection().await {
        tracing::warn!("MongoDB not reachable at startup: {}", e);
    }

    let app = routes::app(AppState {
        repository,
        readiness,
    });

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    mongo_client.shutdown().await;
    tracing::info!("color-api stopped");
    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl-C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
