use maud::{html, Markup};

use crate::models::{NavigationPaths, Profile};
use crate::services::modal::ModalState;
use crate::views::showcase::rating;

/// Nothing is rendered while the modal is closed.
pub fn profile_modal(modal: ModalState, paths: &NavigationPaths) -> Markup {
    match modal.selected_profile() {
        Some(profile) => open_modal(profile, paths),
        None => html! {},
    }
}

fn open_modal(profile: &Profile, paths: &NavigationPaths) -> Markup {
    html! {
        div.modal-backdrop {
            div id="profile-modal" class="modal" role="dialog" aria-modal="true" data-profile-id=(profile.id) {
                button.modal-close type="button" aria-label="Close" data-action="close-modal" { "×" }
                div.modal-header {
                    img src=(profile.image) alt=(profile.name);
                    div {
                        h2 { (profile.name) }
                        p.specialty { (profile.specialty) }
                        (rating(profile))
                    }
                }
                dl.modal-details {
                    dt { "Experience" } dd { (profile.experience) }
                    dt { "Location" } dd { (profile.location) }
                    dt { "Languages" } dd { (profile.languages.join(", ")) }
                    dt { "Consultation fee" } dd { (profile.fee) }
                }
                p.about { (profile.about) }
                h3 { "Certifications" }
                ul.certifications {
                    @for certification in profile.certifications {
                        li { (certification) }
                    }
                }
                div.modal-actions {
                    a.button.primary href=(paths.register) data-action="book-consultation" {
                        "Book Consultation"
                    }
                    button.button.ghost type="button" data-action="view-more-doctors" {
                        "View More Doctors"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProfileId;

    #[test]
    fn closed_modal_renders_nothing() {
        let rendered = profile_modal(ModalState::Closed, &NavigationPaths::default()).into_string();
        assert!(rendered.is_empty());
    }

    #[test]
    fn open_modal_shows_full_details() {
        let rendered =
            profile_modal(ModalState::Open(ProfileId(2)), &NavigationPaths::default()).into_string();

        assert!(rendered.contains("Dr. Petra Schmidt"));
        assert!(rendered.contains("German, English, Spanish"));
        assert!(rendered.contains("AO Trauma Faculty"));
        assert!(rendered.contains("data-action=\"close-modal\""));
        assert!(rendered.contains("data-action=\"view-more-doctors\""));
        assert!(rendered.contains("href=\"/register\""));
    }
}
