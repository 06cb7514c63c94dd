use crate::error::{ApiError, ErrorResponse};
use crate::models::{Color, ColorBody};
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

/// POST /api/color/{key} handler - Create or replace a color
#[utoipa::path(
    post,
    path = routes::COLOR_ITEM,
    params(
        ("key" = String, Path, description = "Key of the color")
    ),
    request_body = ColorBody,
    responses(
        (status = 201, description = "Color created or updated", body = Color),
        (status = 400, description = "Missing, malformed, or empty body", body = ErrorResponse),
        (status = 413, description = "Body exceeds the size limit", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "colors"
)]
pub async fn upsert_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    body: Result<Json<ColorBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Color>), ApiError> {
    let Json(body) = body?;

    if body.value.trim().is_empty() {
        return Err(ApiError::InvalidBody("value must not be empty".to_string()));
    }

    let color = state.repository.upsert(&key, &body.value).await?;

    tracing::info!("Successfully stored color with key: {}", key);
    Ok((StatusCode::CREATED, Json(color)))
}
