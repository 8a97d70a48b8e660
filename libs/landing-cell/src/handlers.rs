// =====================================================================================
// LANDING CELL HANDLERS
// =====================================================================================

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use serde_json::{json, Value};
use tracing::instrument;
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::{AppError, NavigationRequest, NavigationTarget};

use crate::catalog;
use crate::error::LandingError;
use crate::models::{CloseReason, LandingContent, NavigationPaths, PageSnapshot, Profile, ProfileId};
use crate::services::{ModalState, SessionRegistry};
use crate::views::{render_page, PageView};

pub struct LandingHandlers {
    registry: Arc<SessionRegistry>,
    paths: NavigationPaths,
    config: Arc<AppConfig>,
}

impl LandingHandlers {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self {
            registry: Arc::new(SessionRegistry::new(&config)),
            paths: NavigationPaths::from_config(&config),
            config,
        }
    }

    pub fn registry(&self) -> Arc<SessionRegistry> {
        self.registry.clone()
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

// =====================================================================================
// PAGE MARKUP
// =====================================================================================

pub async fn render_landing_page(State(handlers): State<Arc<LandingHandlers>>) -> Html<String> {
    Html(render_page(&PageView::initial(&handlers.paths)).into_string())
}

pub async fn render_session_page(
    State(handlers): State<Arc<LandingHandlers>>,
    Path(session_id): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    let snapshot = handlers.registry.snapshot(session_id).await?;
    let view = PageView::from_snapshot(&snapshot, &handlers.paths);
    Ok(Html(render_page(&view).into_string()))
}

// =====================================================================================
// STATIC CONTENT
// =====================================================================================

pub async fn list_profiles() -> Json<Value> {
    let profiles = catalog::profiles();
    Json(json!({
        "profiles": profiles,
        "total": profiles.len()
    }))
}

pub async fn get_profile(Path(profile_id): Path<u32>) -> Result<Json<&'static Profile>, AppError> {
    let id = ProfileId(profile_id);
    let profile = catalog::find_profile(id).ok_or(LandingError::ProfileNotFound(id))?;
    Ok(Json(profile))
}

pub async fn get_content() -> Json<LandingContent> {
    Json(catalog::content())
}

// =====================================================================================
// PAGE SESSIONS
// =====================================================================================

#[instrument(skip(handlers))]
pub async fn mount_session(
    State(handlers): State<Arc<LandingHandlers>>,
) -> Result<impl IntoResponse, AppError> {
    let snapshot = handlers.registry.mount().await?;
    Ok((StatusCode::CREATED, Json(snapshot)))
}

pub async fn get_session(
    State(handlers): State<Arc<LandingHandlers>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<PageSnapshot>, AppError> {
    let snapshot = handlers.registry.snapshot(session_id).await?;
    Ok(Json(snapshot))
}

#[instrument(skip(handlers))]
pub async fn unmount_session(
    State(handlers): State<Arc<LandingHandlers>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<PageSnapshot>, AppError> {
    let snapshot = handlers.registry.unmount(session_id).await?;
    Ok(Json(snapshot))
}

#[instrument(skip(handlers))]
pub async fn select_profile(
    State(handlers): State<Arc<LandingHandlers>>,
    Path((session_id, profile_id)): Path<(Uuid, u32)>,
) -> Result<Json<Value>, AppError> {
    let profile = handlers
        .registry
        .select_profile(session_id, ProfileId(profile_id))
        .await?;

    Ok(Json(json!({
        "modal": ModalState::Open(profile.id),
        "profile": profile
    })))
}

pub async fn close_modal(
    State(handlers): State<Arc<LandingHandlers>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    close_with(&handlers, session_id, CloseReason::CloseIcon).await
}

pub async fn view_more_doctors(
    State(handlers): State<Arc<LandingHandlers>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    close_with(&handlers, session_id, CloseReason::ViewMoreDoctors).await
}

async fn close_with(
    handlers: &LandingHandlers,
    session_id: Uuid,
    reason: CloseReason,
) -> Result<Json<Value>, AppError> {
    let previous = handlers.registry.close_modal(session_id, reason).await?;

    Ok(Json(json!({
        "modal": ModalState::Closed,
        "previous": previous,
        "reason": reason
    })))
}

#[instrument(skip(handlers))]
pub async fn book_consultation(
    State(handlers): State<Arc<LandingHandlers>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<NavigationRequest>, AppError> {
    let request = handlers.registry.book_consultation(session_id).await?;
    Ok(Json(request))
}

pub async fn navigate(
    State(handlers): State<Arc<LandingHandlers>>,
    Path((session_id, target)): Path<(Uuid, String)>,
) -> Result<Json<NavigationRequest>, AppError> {
    let target: NavigationTarget = target
        .parse()
        .map_err(|_| LandingError::UnknownNavigationTarget(target.clone()))?;
    let request = handlers.registry.navigate(session_id, target).await?;
    Ok(Json(request))
}

pub async fn play_demo(
    State(handlers): State<Arc<LandingHandlers>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let was_playing = handlers.registry.play_demo(session_id).await?;
    Ok(Json(json!({
        "video_playing": true,
        "already_playing": was_playing
    })))
}
