//! API Routes
//!
//! Configures the Axum router with all cache server endpoints.

use axum::{
    routing::{delete, get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    delete_handler, describe_handler, get_handler, health_handler, put_handler, stats_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `PUT /put` - Store a key-value pair
/// - `GET /get/:key` - Retrieve a value by key
/// - `DELETE /del/:key` - Delete a key
/// - `GET /stats` - Get cache statistics
/// - `GET /describe` - Plain-text capacity summary
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/put", put(put_handler))
        .route("/get/:key", get(get_handler))
        .route("/del/:key", delete(delete_handler))
        .route("/stats", get(stats_handler))
        .route("/describe", get(describe_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::SharedCache;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        create_router(AppState::new(SharedCache::new(100).unwrap()))
    }

    async fn status_of(app: Router, request: Request<Body>) -> StatusCode {
        app.oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        assert_eq!(status_of(create_test_app(), request).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_describe_endpoint() {
        let request = Request::builder()
            .uri("/describe")
            .body(Body::empty())
            .unwrap();
        assert_eq!(status_of(create_test_app(), request).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_put_endpoint() {
        let request = Request::builder()
            .method("PUT")
            .uri("/put")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"key":"test","value":"hello"}"#))
            .unwrap();
        assert_eq!(status_of(create_test_app(), request).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let request = Request::builder()
            .uri("/get/nonexistent")
            .body(Body::empty())
            .unwrap();
        assert_eq!(
            status_of(create_test_app(), request).await,
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let request = Request::builder().uri("/set").body(Body::empty()).unwrap();
        assert_eq!(
            status_of(create_test_app(), request).await,
            StatusCode::NOT_FOUND
        );
    }
}
