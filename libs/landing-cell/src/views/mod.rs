//! Server-side markup for the landing page.
//!
//! Every function here is a pure mapping from fixed content plus a
//! [`PageView`] to [`Markup`]. Interactive elements carry `data-action`
//! hooks naming the session endpoint they correspond to.

pub mod layout;
pub mod modal;
pub mod sections;
pub mod showcase;

use maud::{html, Markup};
use uuid::Uuid;

use crate::models::{NavigationPaths, PageSnapshot};
use crate::services::modal::ModalState;

pub use showcase::{language_badges, LanguageBadges, MAX_LANGUAGE_BADGES};

/// The state a page is rendered from.
#[derive(Debug, Clone)]
pub struct PageView<'a> {
    pub session_id: Option<Uuid>,
    pub showcase_index: usize,
    pub modal: ModalState,
    pub video_playing: bool,
    pub paths: &'a NavigationPaths,
}

impl<'a> PageView<'a> {
    /// A page before any session is mounted.
    pub fn initial(paths: &'a NavigationPaths) -> Self {
        Self {
            session_id: None,
            showcase_index: 0,
            modal: ModalState::Closed,
            video_playing: false,
            paths,
        }
    }

    pub fn from_snapshot(snapshot: &PageSnapshot, paths: &'a NavigationPaths) -> Self {
        Self {
            session_id: Some(snapshot.session_id),
            showcase_index: snapshot.showcase_index,
            modal: snapshot.modal,
            video_playing: snapshot.video_playing,
            paths,
        }
    }
}

pub fn render_page(view: &PageView<'_>) -> Markup {
    let body = html! {
        (layout::header(view.paths))
        main {
            (sections::hero(view))
            (sections::services())
            (showcase::showcase(view.showcase_index))
            (showcase::doctor_grid())
            (sections::specializations())
            (sections::process_steps())
            (sections::pricing(view.paths))
            (sections::testimonials())
        }
        (layout::footer(view.paths))
        (modal::profile_modal(view.modal, view.paths))
    };

    layout::document(view.session_id, view.modal.is_open(), body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProfileId;

    #[test]
    fn initial_page_has_all_sections_and_no_modal() {
        let paths = NavigationPaths::default();
        let html = render_page(&PageView::initial(&paths)).into_string();

        for id in [
            "hero",
            "services",
            "showcase",
            "doctors",
            "specializations",
            "process",
            "pricing",
            "testimonials",
        ] {
            assert!(html.contains(&format!("id=\"{}\"", id)), "missing section {}", id);
        }
        assert!(!html.contains("id=\"profile-modal\""));
        assert!(html.contains("href=\"/login\""));
        assert!(html.contains("href=\"/register\""));
    }

    #[test]
    fn open_modal_is_rendered_once() {
        let paths = NavigationPaths::default();
        let view = PageView {
            modal: ModalState::Open(ProfileId(2)),
            ..PageView::initial(&paths)
        };
        let html = render_page(&view).into_string();

        assert_eq!(html.matches("id=\"profile-modal\"").count(), 1);
        assert!(html.contains("modal-open"));
    }

    #[test]
    fn session_id_is_exposed_to_the_client() {
        let paths = NavigationPaths::default();
        let id = Uuid::new_v4();
        let view = PageView {
            session_id: Some(id),
            ..PageView::initial(&paths)
        };
        let html = render_page(&view).into_string();

        assert!(html.contains(&format!("data-session-id=\"{}\"", id)));
    }
}
