use axum::{http::Uri, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::error::ApiError;
use crate::handlers;
use crate::state::AppState;

// Route path constants - single source of truth for all API paths
pub const UP: &str = "/up";
pub const HEALTH: &str = "/health";
pub const READY: &str = "/ready";
pub const LOOKUP: &str = "/api";
pub const COLOR_LIST: &str = "/api/color";
pub const COLOR_ITEM: &str = "/api/color/{key}";
pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

/// Build the full application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route(UP, get(handlers::up_handler))
        .route(HEALTH, get(handlers::health_handler))
        .route(READY, get(handlers::ready_handler))
        .route(LOOKUP, get(handlers::lookup_handler))
        .route(COLOR_LIST, get(handlers::list_handler))
        .route(
            COLOR_ITEM,
            get(handlers::get_handler)
                .post(handlers::upsert_handler)
                .delete(handlers::delete_handler),
        )
        .merge(SwaggerUi::new(SWAGGER_UI).url(OPENAPI_JSON, ApiDoc::openapi()))
        .fallback(not_found)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::RouteNotFound(uri.path().to_string())
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorResponse;
    use crate::handlers::test_support::{body_bytes, empty, post_json, setup_test_app};
    use axum::http::StatusCode;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_color_lifecycle() {
        let (app, _, _) = setup_test_app();

        let response = app
            .clone()
            .oneshot(post_json("/api/color/primary", r#"{"value":"blue"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created: serde_json::Value =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(created, serde_json::json!({"key": "primary", "value": "blue"}));

        let response = app
            .clone()
            .oneshot(empty("GET", "/api/color/primary"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let fetched: serde_json::Value =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(fetched, created);

        let response = app
            .clone()
            .oneshot(empty("GET", "/api?colorKey=primary"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(&body_bytes(response).await[..], b"blue");

        let response = app
            .clone()
            .oneshot(empty("DELETE", "/api/color/primary"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(empty("GET", "/api/color/primary"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let (app, _, _) = setup_test_app();

        let response = app
            .oneshot(empty("GET", "/api/colour/primary/extra"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let error: ErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.error, "No route for /api/colour/primary/extra");
    }
}
