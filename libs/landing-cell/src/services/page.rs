use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use shared_models::{NavigationRequest, NavigationTarget};

use crate::catalog;
use crate::error::LandingError;
use crate::models::{CloseReason, NavigationPaths, PageSnapshot, Profile, ProfileId, ProfileSummary};
use crate::services::modal::ModalState;
use crate::services::rotator::ShowcaseRotator;
use crate::services::timer::ScopedInterval;

#[derive(Debug)]
struct PageState {
    rotator: ShowcaseRotator,
    modal: ModalState,
    video_playing: bool,
    mounted: bool,
    ticks: u64,
    last_activity: Instant,
    last_activity_at: DateTime<Utc>,
}

impl PageState {
    fn touch(&mut self) {
        self.last_activity = Instant::now();
        self.last_activity_at = Utc::now();
    }
}

/// One mounted landing page: the showcase rotation, the profile modal and
/// the demo video flag.
///
/// Mounting starts the rotation timer. Unmounting (or dropping the page)
/// cancels it; a page that is no longer mounted never changes again.
#[derive(Debug)]
pub struct LandingPage {
    id: Uuid,
    created_at: DateTime<Utc>,
    paths: NavigationPaths,
    state: Arc<RwLock<PageState>>,
    timer: Option<ScopedInterval>,
}

impl LandingPage {
    /// Must be called from within a tokio runtime.
    pub fn mount(id: Uuid, rotation_period: Duration, paths: NavigationPaths) -> Self {
        let now = Utc::now();
        let state = Arc::new(RwLock::new(PageState {
            rotator: ShowcaseRotator::for_catalog(),
            modal: ModalState::Closed,
            video_playing: false,
            mounted: true,
            ticks: 0,
            last_activity: Instant::now(),
            last_activity_at: now,
        }));

        let tick_state = state.clone();
        let timer = ScopedInterval::start("showcase-rotation", rotation_period, move || {
            let state = tick_state.clone();
            async move {
                let mut state = state.write().await;
                if state.mounted {
                    let index = state.rotator.advance();
                    state.ticks += 1;
                    debug!("Showcase advanced to index {} for session {}", index, id);
                }
            }
        });

        info!("Mounted landing session {}", id);

        Self {
            id,
            created_at: now,
            paths,
            state,
            timer: Some(timer),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn is_mounted(&self) -> bool {
        self.timer.is_some()
    }

    /// Stops the rotation for good and returns the final state.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub async fn unmount(&mut self) -> PageSnapshot {
        {
            let mut state = self.state.write().await;
            state.mounted = false;
        }
        if let Some(mut timer) = self.timer.take() {
            timer.cancel();
            info!("Unmounted landing session {}", self.id);
        }
        self.snapshot().await
    }

    pub async fn snapshot(&self) -> PageSnapshot {
        let state = self.state.read().await;
        let featured = state.rotator.featured();

        PageSnapshot {
            session_id: self.id,
            showcase_index: state.rotator.index(),
            featured_profile: ProfileSummary::from(featured),
            modal: state.modal,
            selected_profile: state.modal.selected_profile(),
            video_playing: state.video_playing,
            mounted: state.mounted,
            ticks: state.ticks,
            created_at: self.created_at,
            last_activity_at: state.last_activity_at,
        }
    }

    /// A snapshot taken on behalf of the visitor. Counts as activity, so a
    /// page that is only being watched is not swept as idle.
    pub async fn view(&self) -> PageSnapshot {
        {
            let mut state = self.state.write().await;
            if state.mounted {
                state.touch();
            }
        }
        self.snapshot().await
    }

    pub async fn idle_for(&self) -> Duration {
        self.state.read().await.last_activity.elapsed()
    }

    #[instrument(skip(self), fields(session_id = %self.id))]
    pub async fn select_profile(&self, profile_id: ProfileId) -> Result<&'static Profile, LandingError> {
        let profile = catalog::find_profile(profile_id)
            .ok_or(LandingError::ProfileNotFound(profile_id))?;

        let mut state = self.mounted_state().await?;
        let previous = state.modal.open(profile_id);
        state.touch();

        debug!("Modal {:?} -> open({})", previous, profile_id);
        Ok(profile)
    }

    #[instrument(skip(self), fields(session_id = %self.id))]
    pub async fn close_modal(&self, reason: CloseReason) -> Result<ModalState, LandingError> {
        let mut state = self.mounted_state().await?;
        let previous = state.modal.close();
        state.touch();

        debug!("Modal {:?} -> closed via {:?}", previous, reason);
        Ok(previous)
    }

    /// Asks the host to go to registration. The modal is left as it is;
    /// leaving the page is what ends it.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub async fn book_consultation(&self) -> Result<NavigationRequest, LandingError> {
        let mut state = self.mounted_state().await?;
        state.touch();

        if let Some(id) = state.modal.selected_id() {
            debug!("Booking requested for profile {}", id);
        }
        Ok(self.paths.request(NavigationTarget::Register))
    }

    pub async fn navigate(&self, target: NavigationTarget) -> Result<NavigationRequest, LandingError> {
        let mut state = self.mounted_state().await?;
        state.touch();
        Ok(self.paths.request(target))
    }

    /// Starts the demo video. There is no way to stop it again.
    pub async fn play_demo(&self) -> Result<bool, LandingError> {
        let mut state = self.mounted_state().await?;
        let was_playing = std::mem::replace(&mut state.video_playing, true);
        state.touch();
        Ok(was_playing)
    }

    async fn mounted_state(&self) -> Result<tokio::sync::RwLockWriteGuard<'_, PageState>, LandingError> {
        let state = self.state.write().await;
        if !state.mounted {
            return Err(LandingError::SessionUnmounted(self.id));
        }
        Ok(state)
    }
}

/// Shared handle on a page's state that outlives the page itself.
#[cfg(test)]
pub(crate) struct StateHandle(Arc<RwLock<PageState>>);

#[cfg(test)]
impl StateHandle {
    pub(crate) async fn ticks(&self) -> u64 {
        self.0.read().await.ticks
    }

    pub(crate) async fn mounted(&self) -> bool {
        self.0.read().await.mounted
    }
}

#[cfg(test)]
impl LandingPage {
    pub(crate) fn state_handle(&self) -> StateHandle {
        StateHandle(self.state.clone())
    }
}
