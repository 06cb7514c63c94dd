use utoipa::OpenApi;

use crate::error::{ErrorResponse, UnavailableResponse};
use crate::handlers;
use crate::models::{Color, ColorBody};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "color-api",
        version = "1.0.0",
        description = "A small color key-value API backed by MongoDB"
    ),
    paths(
        handlers::health::up_handler,
        handlers::health::health_handler,
        handlers::health::ready_handler,
        handlers::lookup::lookup_handler,
        handlers::list::list_handler,
        handlers::get::get_handler,
        handlers::upsert::upsert_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            Color,
            ColorBody,
            ErrorResponse,
            UnavailableResponse
        )
    ),
    tags(
        (name = "health", description = "Liveness and readiness probes"),
        (name = "colors", description = "Color operations")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{body_bytes, empty, setup_test_app};
    use axum::http::StatusCode;
    use tower::ServiceExt;

    #[test]
    fn test_openapi_lists_all_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in ["/up", "/health", "/ready", "/api", "/api/color", "/api/color/{key}"] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing path {}",
                expected
            );
        }
    }

    #[tokio::test]
    async fn test_openapi_json_is_served() {
        let (app, _, _) = setup_test_app();

        let response = app
            .oneshot(empty("GET", "/api-docs/openapi.json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let doc: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(doc["info"]["title"], "color-api");
    }
}
