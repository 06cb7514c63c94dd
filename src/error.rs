use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::repository::RepositoryError;
use crate::store::StoreError;

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for a failed readiness probe
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnavailableResponse {
    pub status: String,
    pub state: String,
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Maps repository and request errors to HTTP status codes and formats them as
/// `{"error": "..."}` JSON bodies.
#[derive(Debug)]
pub enum ApiError {
    /// Required query parameter absent or empty
    MissingQueryParam(&'static str),
    /// Query parameter present but not acceptable
    InvalidQueryParam(String),
    /// Request body missing, malformed, or failing validation
    InvalidBody(String),
    /// Request body over the extractor's size limit
    PayloadTooLarge(String),
    /// Path key empty after trimming
    EmptyKey,
    /// Color not found in the database
    ColorNotFound(String),
    /// No route matches the request path
    RouteNotFound(String),
    /// Database error; connection failures and internal failures alike
    DatabaseError(StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::MissingQueryParam(name) => (
                StatusCode::BAD_REQUEST,
                format!("Missing required query parameter: {}", name),
            ),
            ApiError::InvalidQueryParam(msg) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid query parameter: {}", msg),
            ),
            ApiError::InvalidBody(msg) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid request body: {}", msg),
            ),
            ApiError::PayloadTooLarge(msg) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                format!("Request body too large: {}", msg),
            ),
            ApiError::EmptyKey => (
                StatusCode::BAD_REQUEST,
                "Color key must not be empty".to_string(),
            ),
            ApiError::ColorNotFound(key) => (
                StatusCode::NOT_FOUND,
                format!("Color not found: {}", key),
            ),
            ApiError::RouteNotFound(path) => (
                StatusCode::NOT_FOUND,
                format!("No route for {}", path),
            ),
            ApiError::DatabaseError(err) => {
                tracing::error!("Database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Database error: {}", err),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::EmptyKey => ApiError::EmptyKey,
            RepositoryError::NotFound(key) => ApiError::ColorNotFound(key),
            RepositoryError::Store(err) => ApiError::DatabaseError(err),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection.status() {
            StatusCode::PAYLOAD_TOO_LARGE => ApiError::PayloadTooLarge(rejection.body_text()),
            _ => ApiError::InvalidBody(rejection.body_text()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidQueryParam(rejection.body_text())
    }
}
