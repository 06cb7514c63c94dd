pub mod delete;
pub mod get;
pub mod health;
pub mod list;
pub mod lookup;
pub mod upsert;

pub use delete::delete_handler;
pub use get::get_handler;
pub use health::{health_handler, ready_handler, up_handler};
pub use list::list_handler;
pub use lookup::lookup_handler;
pub use upsert::upsert_handler;

#[cfg(test)]
pub(crate) mod test_support {
    use axum::{body::Body, http::Request, response::Response, Router};
    use std::sync::Arc;

    use crate::repository::ColorRepository;
    use crate::routes;
    use crate::state::{AppState, Readiness};
    use crate::store::memory::MemoryStore;

    /// Full router over an empty in-memory store
    pub fn setup_test_app() -> (Router, MemoryStore, Readiness) {
        let store = MemoryStore::new();
        let readiness = Readiness::new();
        let state = AppState {
            repository: ColorRepository::new(Arc::new(store.clone()), readiness.clone()),
            readiness: readiness.clone(),
        };
        (routes::app(state), store, readiness)
    }

    pub fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    pub fn empty(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    pub async fn body_bytes(response: Response) -> axum::body::Bytes {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
    }
}
