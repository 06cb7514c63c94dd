use crate::error::UnavailableResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /up handler - Process is running
#[utoipa::path(
    get,
    path = routes::UP,
    responses(
        (status = 200, description = "Process is up", body = String)
    ),
    tag = "health"
)]
pub async fn up_handler() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

/// GET /health handler - Liveness probe
///
/// Answers as long as the runtime can schedule the handler. Does not touch the
/// database, so a database outage never gets the pod restarted.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is alive", body = String)
    ),
    tag = "health"
)]
pub async fn health_handler() -> (StatusCode, &'static str) {
    tracing::debug!("Liveness check passed");
    (StatusCode::OK, "ok")
}

/// GET /ready handler - Readiness probe
///
/// Pings the database on every call and records the result in the shared
/// readiness state. Returns 200 OK if the database is reachable, 503 Service
/// Unavailable otherwise.
#[utoipa::path(
    get,
    path = routes::READY,
    responses(
        (status = 200, description = "Service is ready", body = String),
        (status = 503, description = "Database unreachable", body = UnavailableResponse)
    ),
    tag = "health"
)]
pub async fn ready_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, &'static str), (StatusCode, Json<UnavailableResponse>)> {
    match state.repository.check_connection().await {
        Ok(()) => {
            tracing::debug!("Readiness check passed");
            Ok((StatusCode::OK, "ok"))
        }
        Err(e) => {
            tracing::warn!("Readiness check failed: {}", e);
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(UnavailableResponse {
                    status: "unavailable".to_string(),
                    state: state.readiness.get().as_str().to_string(),
                    error: format!("Cannot connect to database: {}", e),
                }),
            ))
        }
    }
}
