use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use shared_config::AppConfig;

use crate::handlers::{self, LandingHandlers};

pub fn create_landing_router(config: Arc<AppConfig>) -> Router {
    landing_routes(Arc::new(LandingHandlers::new(config)))
}

pub fn landing_routes(handlers: Arc<LandingHandlers>) -> Router {
    let content_routes = Router::new()
        .route("/", get(handlers::render_landing_page))
        .route("/landing/content", get(handlers::get_content))
        .route("/landing/profiles", get(handlers::list_profiles))
        .route("/landing/profiles/{profile_id}", get(handlers::get_profile));

    let session_routes = Router::new()
        .route("/landing/sessions", post(handlers::mount_session))
        .route(
            "/landing/sessions/{session_id}",
            get(handlers::get_session).delete(handlers::unmount_session),
        )
        .route("/landing/sessions/{session_id}/page", get(handlers::render_session_page))
        .route(
            "/landing/sessions/{session_id}/profiles/{profile_id}/select",
            post(handlers::select_profile),
        )
        .route("/landing/sessions/{session_id}/modal/close", post(handlers::close_modal))
        .route(
            "/landing/sessions/{session_id}/modal/view-more",
            post(handlers::view_more_doctors),
        )
        .route("/landing/sessions/{session_id}/modal/book", post(handlers::book_consultation))
        .route("/landing/sessions/{session_id}/demo/play", post(handlers::play_demo))
        .route(
            "/landing/sessions/{session_id}/navigate/{target}",
            post(handlers::navigate),
        );

    Router::new()
        .merge(content_routes)
        .merge(session_routes)
        .with_state(handlers)
}
