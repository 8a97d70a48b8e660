use std::sync::Arc;

use axum::{routing::get, Router};

use landing_cell::{landing_routes, LandingHandlers};

pub fn create_router(handlers: Arc<LandingHandlers>) -> Router {
    Router::new()
        .route("/health", get(|| async { "CareBridge landing is running!" }))
        .merge(landing_routes(handlers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use shared_utils::test_utils::{read_text, TestConfig};

    #[tokio::test]
    async fn health_and_landing_are_served() {
        let handlers = Arc::new(LandingHandlers::new(TestConfig::default().to_arc()));
        let app = create_router(handlers);

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(read_text(response).await.contains("CareBridge"));
    }
}
