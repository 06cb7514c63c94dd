use crate::error::{ApiError, ErrorResponse};
use crate::models::{Color, LookupFormat, LookupQuery};
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// GET /api handler - Look up a single color by query parameter
///
/// Returns the bare value as plain text, or the `{key, value}` JSON object when
/// `format=json` is given.
#[utoipa::path(
    get,
    path = routes::LOOKUP,
    params(LookupQuery),
    responses(
        (status = 200, description = "Color value as plain text, or JSON with format=json", body = Color),
        (status = 400, description = "Missing colorKey or unknown format", body = ErrorResponse),
        (status = 404, description = "Color not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "colors"
)]
pub async fn lookup_handler(
    State(state): State<AppState>,
    query: Result<Query<LookupQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query?;

    let key = query
        .color_key
        .filter(|k| !k.is_empty())
        .ok_or(ApiError::MissingQueryParam("colorKey"))?;

    let format = LookupFormat::parse(query.format.as_deref()).ok_or_else(|| {
        ApiError::InvalidQueryParam(format!(
            "format must be one of: text, json, got '{}'",
            query.format.as_deref().unwrap_or_default()
        ))
    })?;

    let color = state.repository.get_by_key(&key).await?;
    tracing::info!("Looked up color with key: {}", key);

    Ok(match format {
        LookupFormat::Text => (StatusCode::OK, color.value).into_response(),
        LookupFormat::Json => (StatusCode::OK, Json(color)).into_response(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{body_bytes, empty, setup_test_app};
    use crate::store::ColorStore;
    use axum::http::header;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_lookup_plain_text() {
        let (app, store, _) = setup_test_app();
        store.upsert("primary", "blue").await.unwrap();

        let response = app
            .oneshot(empty("GET", "/api?colorKey=primary"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/plain"));
        assert_eq!(&body_bytes(response).await[..], b"blue");
    }

    #[tokio::test]
    async fn test_lookup_empty_format_is_plain_text() {
        let (app, store, _) = setup_test_app();
        store.upsert("primary", "blue").await.unwrap();

        let response = app
            .oneshot(empty("GET", "/api?colorKey=primary&format="))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(&body_bytes(response).await[..], b"blue");
    }

    #[tokio::test]
    async fn test_lookup_json_format() {
        let (app, store, _) = setup_test_app();
        store.upsert("primary", "blue").await.unwrap();

        let response = app
            .oneshot(empty("GET", "/api?colorKey=primary&format=json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let color: Color = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(color, Color::new("primary", "blue"));
    }

    #[tokio::test]
    async fn test_lookup_missing_color_key() {
        let (app, _, _) = setup_test_app();

        for uri in ["/api", "/api?colorKey=", "/api?format=json"] {
            let response = app.clone().oneshot(empty("GET", uri)).await.unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri: {}", uri);
            let error: ErrorResponse =
                serde_json::from_slice(&body_bytes(response).await).unwrap();
            assert!(error.error.contains("colorKey"));
        }
    }

    #[tokio::test]
    async fn test_lookup_not_found() {
        let (app, _, _) = setup_test_app();

        let response = app
            .oneshot(empty("GET", "/api?colorKey=missing"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let error: ErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!(error.error.contains("missing"));
    }

    #[tokio::test]
    async fn test_lookup_unknown_format() {
        let (app, store, _) = setup_test_app();
        store.upsert("primary", "blue").await.unwrap();

        let response = app
            .oneshot(empty("GET", "/api?colorKey=primary&format=xml"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
