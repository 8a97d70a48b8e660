use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::models::{Profile, ProfileId};

/// The profile detail overlay. At most one profile is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "profile_id", rename_all = "snake_case")]
pub enum ModalState {
    #[default]
    Closed,
    Open(ProfileId),
}

impl ModalState {
    /// Replaces whatever is open. Returns the previous state.
    pub fn open(&mut self, id: ProfileId) -> ModalState {
        std::mem::replace(self, ModalState::Open(id))
    }

    /// No-op when already closed. Returns the previous state.
    pub fn close(&mut self) -> ModalState {
        std::mem::take(self)
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }

    pub fn selected_id(&self) -> Option<ProfileId> {
        match self {
            ModalState::Open(id) => Some(*id),
            ModalState::Closed => None,
        }
    }

    pub fn selected_profile(&self) -> Option<&'static Profile> {
        self.selected_id().and_then(catalog::find_profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn opening_second_profile_replaces_first() {
        let mut modal = ModalState::Closed;
        modal.open(ProfileId(1));
        let previous = modal.open(ProfileId(4));

        assert_eq!(previous, ModalState::Open(ProfileId(1)));
        assert_eq!(modal, ModalState::Open(ProfileId(4)));
        assert_eq!(modal.selected_id(), Some(ProfileId(4)));
    }

    #[test]
    fn close_clears_selection_and_is_idempotent() {
        let mut modal = ModalState::Open(ProfileId(2));
        assert_matches!(modal.close(), ModalState::Open(ProfileId(2)));
        assert_eq!(modal, ModalState::Closed);

        assert_matches!(modal.close(), ModalState::Closed);
        assert!(!modal.is_open());
        assert!(modal.selected_profile().is_none());
    }

    #[test]
    fn selected_profile_resolves_from_catalog() {
        let modal = ModalState::Open(ProfileId(2));
        let profile = modal.selected_profile().expect("profile 2 exists");
        assert_eq!(profile.name, "Dr. Petra Schmidt");
    }

    #[test]
    fn serializes_with_state_tag() {
        let open = serde_json::to_value(ModalState::Open(ProfileId(3))).unwrap();
        assert_eq!(open["state"], "open");
        assert_eq!(open["profile_id"], 3);

        let closed = serde_json::to_value(ModalState::Closed).unwrap();
        assert_eq!(closed["state"], "closed");
    }
}
