use maud::{html, Markup};

use crate::catalog;
use crate::models::Profile;

pub const MAX_LANGUAGE_BADGES: usize = 2;

/// Languages split into the badges shown and the count folded into "+N more".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageBadges {
    pub shown: &'static [&'static str],
    pub more: usize,
}

pub fn language_badges(languages: &'static [&'static str]) -> LanguageBadges {
    let shown = &languages[..languages.len().min(MAX_LANGUAGE_BADGES)];
    LanguageBadges {
        shown,
        more: languages.len() - shown.len(),
    }
}

pub fn language_list(languages: &'static [&'static str]) -> Markup {
    let badges = language_badges(languages);
    html! {
        div.languages {
            @for language in badges.shown {
                span.badge.language { (language) }
            }
            @if badges.more > 0 {
                span.badge.more { "+" (badges.more) " more" }
            }
        }
    }
}

pub fn rating(profile: &Profile) -> Markup {
    html! {
        span.rating title=(format!("{} out of 5", profile.rating)) {
            span.stars { @for _ in 0..profile.rating.stars() { "★" } }
            " " (profile.rating)
        }
    }
}

fn profile_card(profile: &Profile, featured: bool) -> Markup {
    html! {
        article.profile-card.featured[featured] data-profile-id=(profile.id) {
            img src=(profile.image) alt=(profile.name) loading="lazy";
            div.profile-body {
                h3 { (profile.name) }
                p.specialty { (profile.specialty) }
                p.meta { (profile.experience) " · " (profile.location) }
                (rating(profile))
                (language_list(profile.languages))
                p.fee { (profile.fee) }
                button.button.secondary type="button" data-action="select-profile" data-profile-id=(profile.id) {
                    "View Profile"
                }
            }
        }
    }
}

/// The rotating "featured specialist" strip.
pub fn showcase(index: usize) -> Markup {
    let featured = catalog::profile_at(index);
    html! {
        section id="showcase" class="showcase" data-index=(index) {
            h2 { "Featured specialists" }
            (profile_card(featured, true))
            ol.showcase-dots {
                @for (position, profile) in catalog::profiles().iter().enumerate() {
                    li.dot.active[position == index] data-profile-id=(profile.id) {
                        span.visually-hidden { (profile.name) }
                    }
                }
            }
        }
    }
}

pub fn doctor_grid() -> Markup {
    html! {
        section id="doctors" class="doctor-grid" {
            h2 { "Meet our doctors" }
            div.grid {
                @for profile in catalog::profiles() {
                    (profile_card(profile, false))
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
    fn three_languages_show_two_badges_and_one_more() {
        let rendered = language_list(&["German", "English", "Spanish"]).into_string();

        assert_eq!(rendered.matches("class=\"badge language\"").count(), 2);
        assert!(rendered.contains("German"));
        assert!(rendered.contains("English"));
        assert!(!rendered.contains("Spanish"));
        assert_eq!(rendered.matches("class=\"badge more\"").count(), 1);
        assert!(rendered.contains("+1 more"));
    }

    #[test]
    fn two_languages_have_no_more_badge() {
        let rendered = language_list(&["Polish", "English"]).into_string();

        assert_eq!(rendered.matches("class=\"badge language\"").count(), 2);
        assert!(!rendered.contains("more"));
    }

    #[test]
    fn badge_split_counts_remainder() {
        let badges = language_badges(&["Turkish", "English", "German", "Arabic"]);
        assert_eq!(badges.shown, &["Turkish", "English"]);
        assert_eq!(badges.more, 2);

        let single = language_badges(&["English"]);
        assert_eq!(single.shown.len(), 1);
        assert_eq!(single.more, 0);
    }

    #[test]
    fn showcase_features_profile_at_index() {
        let rendered = showcase(3).into_string();
        let featured = catalog::profile_at(3);

        assert_eq!(featured.id, ProfileId(4));
        assert!(rendered.contains(featured.name));
        assert!(rendered.contains("data-index=\"3\""));
        assert_eq!(rendered.matches("class=\"dot active\"").count(), 1);
    }

    #[test]
    fn grid_lists_every_profile() {
        let rendered = doctor_grid().into_string();
        for profile in catalog::profiles() {
            assert!(rendered.contains(profile.name));
        }
        assert!(!rendered.contains("profile-card featured"));
    }
}
