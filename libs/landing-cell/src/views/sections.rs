use maud::{html, Markup};

use crate::catalog::{PRICING_TIERS, PROCESS_STEPS, SERVICES, SPECIALIZATIONS, TESTIMONIALS};
use crate::models::NavigationPaths;
use crate::views::PageView;

pub const DEMO_VIDEO_SRC: &str = "/media/carebridge-demo.mp4";

pub fn hero(view: &PageView<'_>) -> Markup {
    html! {
        section id="hero" class="hero" {
            div.hero-copy {
                h1 { "World-class specialists, one video call away" }
                p.lead {
                    "Consult Europe's leading doctors from home, get a second opinion, "
                    "and let us organise your treatment abroad."
                }
                div.hero-actions {
                    a.button.primary href=(view.paths.register) data-action="navigate" data-target="register" {
                        "Book a Consultation"
                    }
                    a.button.ghost href="#doctors" { "Browse Doctors" }
                }
                ul.hero-stats {
                    li { strong { "300+" } " verified specialists" }
                    li { strong { "40" } " countries served" }
                    li { strong { "4.9" } " average rating" }
                }
            }
            (demo_video(view.video_playing))
        }
    }
}

pub fn demo_video(playing: bool) -> Markup {
    html! {
        div.demo.playing[playing] {
            @if playing {
                video src=(DEMO_VIDEO_SRC) autoplay controls playsinline {}
            } @else {
                button.play-demo type="button" data-action="play-demo" {
                    span.play-icon { "▶" }
                    " Watch how it works"
                }
            }
        }
    }
}

pub fn services() -> Markup {
    html! {
        section id="services" class="services" {
            h2 { "What we do" }
            div.cards {
                @for service in &SERVICES {
                    article.card {
                        h3 { (service.title) }
                        p { (service.description) }
                        ul {
                            @for highlight in service.highlights {
                                li { (highlight) }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn specializations() -> Markup {
    html! {
        section id="specializations" class="specializations" {
            h2 { "Specializations" }
            div.cards {
                @for specialization in &SPECIALIZATIONS {
                    article.card {
                        h3 { (specialization.name) }
                        p { (specialization.description) }
                        span.count { (specialization.doctor_count_label) }
                    }
                }
            }
        }
    }
}

pub fn process_steps() -> Markup {
    html! {
        section id="process" class="process" {
            h2 { "How it works" }
            ol.steps {
                @for step in &PROCESS_STEPS {
                    li data-step=(step.step) {
                        span.step-number { (step.step) }
                        h3 { (step.title) }
                        p { (step.description) }
                    }
                }
            }
        }
    }
}

pub fn pricing(paths: &NavigationPaths) -> Markup {
    html! {
        section id="pricing" class="pricing" {
            h2 { "Simple, transparent pricing" }
            div.tiers {
                @for tier in &PRICING_TIERS {
                    article.tier.highlighted[tier.highlighted] {
                        @if tier.highlighted {
                            span.tier-badge { "Most popular" }
                        }
                        h3 { (tier.name) }
                        p.price {
                            span.amount { (tier.price_label) }
                            " "
                            span.period { (tier.period_label) }
                        }
                        ul {
                            @for feature in tier.features {
                                li { (feature) }
                            }
                        }
                        a.button.primary href=(paths.register) { "Choose " (tier.name) }
                    }
                }
            }
        }
    }
}

pub fn testimonials() -> Markup {
    html! {
        section id="testimonials" class="testimonials" {
            h2 { "Patient stories" }
            div.quotes {
                @for testimonial in &TESTIMONIALS {
                    figure.testimonial {
                        blockquote { (testimonial.quote) }
                        figcaption {
                            strong { (testimonial.author) }
                            " · " (testimonial.origin) " · " (testimonial.treatment)
                            span.rating { " " (testimonial.rating) }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_shows_play_button_until_started() {
        let idle = demo_video(false).into_string();
        assert!(idle.contains("data-action=\"play-demo\""));
        assert!(!idle.contains("<video"));

        let playing = demo_video(true).into_string();
        assert!(playing.contains("<video"));
        assert!(playing.contains(DEMO_VIDEO_SRC));
        assert!(!playing.contains("data-action=\"play-demo\""));
    }

    #[test]
    fn pricing_marks_one_tier_popular() {
        let rendered = pricing(&NavigationPaths::default()).into_string();
        assert_eq!(rendered.matches("Most popular").count(), 1);
        for tier in &PRICING_TIERS {
            assert!(rendered.contains(tier.price_label));
        }
    }

    #[test]
    fn process_steps_render_in_order() {
        let rendered = process_steps().into_string();
        let positions: Vec<usize> = PROCESS_STEPS
            .iter()
            .map(|step| rendered.find(step.title).expect("step title rendered"))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn specialization_text_is_escaped() {
        let rendered = specializations().into_string();
        assert!(rendered.contains("Fertility &amp; IVF"));
    }
}
