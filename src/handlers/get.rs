use crate::error::{ApiError, ErrorResponse};
use crate::models::Color;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// GET /api/color/{key} handler - Retrieve a single color
#[utoipa::path(
    get,
    path = routes::COLOR_ITEM,
    params(
        ("key" = String, Path, description = "Key of the color")
    ),
    responses(
        (status = 200, description = "Color found", body = Color),
        (status = 404, description = "Color not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "colors"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<(StatusCode, Json<Color>), ApiError> {
    match state.repository.get_by_key(&key).await {
        Ok(color) => {
            tracing::info!("Successfully retrieved color with key: {}", key);
            Ok((StatusCode::OK, Json(color)))
        }
        Err(e) => {
            tracing::info!("Could not retrieve color with key {}: {}", key, e);
            Err(e.into())
        }
    }
}
