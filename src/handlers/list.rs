use crate::error::{ApiError, ErrorResponse};
use crate::models::Color;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /api/color handler - List all colors
///
/// Returns every stored color as a JSON array, sorted by key.
#[utoipa::path(
    get,
    path = routes::COLOR_LIST,
    responses(
        (status = 200, description = "All colors", body = Vec<Color>),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "colors"
)]
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<Color>>), ApiError> {
    let colors = state.repository.get_all().await?;

    tracing::info!("Listed {} colors", colors.len());
    Ok((StatusCode::OK, Json(colors)))
}
