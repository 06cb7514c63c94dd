use crate::error::{ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode};

/// DELETE /api/color/{key} handler - Remove a color
#[utoipa::path(
    delete,
    path = routes::COLOR_ITEM,
    params(
        ("key" = String, Path, description = "Key of the color")
    ),
    responses(
        (status = 204, description = "Color deleted"),
        (status = 404, description = "Color not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "colors"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.repository.delete(&key).await?;

    tracing::info!("Successfully deleted color with key: {}", key);
    Ok(StatusCode::NO_CONTENT)
}
