use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::{NavigationRequest, NavigationTarget};

use crate::error::LandingError;
use crate::models::{CloseReason, NavigationPaths, PageSnapshot, Profile, ProfileId};
use crate::services::modal::ModalState;
use crate::services::page::LandingPage;
use crate::services::timer::ScopedInterval;

/// All mounted landing pages, keyed by session id.
///
/// Removing a page from the registry drops it, which cancels its rotation.
pub struct SessionRegistry {
    sessions: RwLock<HashMap<Uuid, LandingPage>>,
    paths: NavigationPaths,
    rotation_period: Duration,
    idle_timeout: Duration,
    max_sessions: usize,
}

impl SessionRegistry {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            paths: NavigationPaths::from_config(config),
            rotation_period: config.rotation_period(),
            idle_timeout: config.session_idle_timeout(),
            max_sessions: config.max_sessions,
        }
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    #[instrument(skip(self))]
    pub async fn mount(&self) -> Result<PageSnapshot, LandingError> {
        if self.len().await >= self.max_sessions {
            warn!("Session registry full ({}), sweeping idle sessions", self.max_sessions);
            self.sweep_idle().await;
        }

        let mut sessions = self.sessions.write().await;
        if sessions.len() >= self.max_sessions {
            return Err(LandingError::CapacityExceeded(self.max_sessions));
        }

        let id = Uuid::new_v4();
        let page = LandingPage::mount(id, self.rotation_period, self.paths.clone());
        let snapshot = page.snapshot().await;
        sessions.insert(id, page);

        Ok(snapshot)
    }

    #[instrument(skip(self))]
    pub async fn unmount(&self, id: Uuid) -> Result<PageSnapshot, LandingError> {
        let page = self.sessions.write().await.remove(&id);
        match page {
            Some(mut page) => Ok(page.unmount().await),
            None => Err(LandingError::SessionNotFound(id)),
        }
    }

    /// Reading a session counts as activity for the idle sweep.
    pub async fn snapshot(&self, id: Uuid) -> Result<PageSnapshot, LandingError> {
        let sessions = self.sessions.read().await;
        let page = sessions.get(&id).ok_or(LandingError::SessionNotFound(id))?;
        Ok(page.view().await)
    }

    pub async fn select_profile(
        &self,
        id: Uuid,
        profile_id: ProfileId,
    ) -> Result<&'static Profile, LandingError> {
        let sessions = self.sessions.read().await;
        let page = sessions.get(&id).ok_or(LandingError::SessionNotFound(id))?;
        page.select_profile(profile_id).await
    }

    pub async fn close_modal(&self, id: Uuid, reason: CloseReason) -> Result<ModalState, LandingError> {
        let sessions = self.sessions.read().await;
        let page = sessions.get(&id).ok_or(LandingError::SessionNotFound(id))?;
        page.close_modal(reason).await
    }

    pub async fn book_consultation(&self, id: Uuid) -> Result<NavigationRequest, LandingError> {
        let sessions = self.sessions.read().await;
        let page = sessions.get(&id).ok_or(LandingError::SessionNotFound(id))?;
        page.book_consultation().await
    }

    pub async fn navigate(
        &self,
        id: Uuid,
        target: NavigationTarget,
    ) -> Result<NavigationRequest, LandingError> {
        let sessions = self.sessions.read().await;
        let page = sessions.get(&id).ok_or(LandingError::SessionNotFound(id))?;
        page.navigate(target).await
    }

    pub async fn play_demo(&self, id: Uuid) -> Result<bool, LandingError> {
        let sessions = self.sessions.read().await;
        let page = sessions.get(&id).ok_or(LandingError::SessionNotFound(id))?;
        page.play_demo().await
    }

    /// Drops every page idle for at least the configured timeout.
    /// Returns how many were removed.
    ///
    /// Candidates are collected under the read lock. The write lock is only
    /// held to re-check and remove them, and pages are unmounted after it is
    /// released.
    #[instrument(skip(self))]
    pub async fn sweep_idle(&self) -> usize {
        let candidates = {
            let sessions = self.sessions.read().await;
            let mut candidates = Vec::new();
            for (id, page) in sessions.iter() {
                if page.idle_for().await >= self.idle_timeout {
                    candidates.push(*id);
                }
            }
            candidates
        };

        if candidates.is_empty() {
            return 0;
        }

        let (expired, remaining) = {
            let mut sessions = self.sessions.write().await;
            let mut expired = Vec::with_capacity(candidates.len());
            for id in candidates {
                let still_idle = match sessions.get(&id) {
                    Some(page) => page.idle_for().await >= self.idle_timeout,
                    None => false,
                };
                if still_idle {
                    if let Some(page) = sessions.remove(&id) {
                        expired.push(page);
                    }
                }
            }
            (expired, sessions.len())
        };

        let swept = expired.len();
        for mut page in expired {
            page.unmount().await;
        }

        if swept > 0 {
            info!("Swept {} idle landing sessions, {} remain", swept, remaining);
        }
        swept
    }

    /// Runs `sweep_idle` every `every` until the returned guard is dropped.
    pub fn spawn_sweeper(self: &Arc<Self>, every: Duration) -> ScopedInterval {
        let registry = Arc::downgrade(self);
        ScopedInterval::start("session-sweeper", every, move || {
            let registry = registry.clone();
            async move {
                if let Some(registry) = registry.upgrade() {
                    registry.sweep_idle().await;
                }
            }
        })
    }
}

#[cfg(test)]
impl SessionRegistry {
    pub(crate) async fn state_handle(&self, id: Uuid) -> Option<crate::services::page::StateHandle> {
        self.sessions.read().await.get(&id).map(LandingPage::state_handle)
    }
}
