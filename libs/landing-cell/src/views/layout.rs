use maud::{html, Markup, DOCTYPE};
use uuid::Uuid;

use crate::models::NavigationPaths;

pub const SITE_NAME: &str = "CareBridge";

pub fn document(session_id: Option<Uuid>, modal_open: bool, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (SITE_NAME) " | Specialist care across Europe" }
                meta name="description" content="Video consultations, second opinions and treatment coordination with vetted European specialists.";
                link rel="stylesheet" href="/assets/landing.css";
            }
            body.landing.modal-open[modal_open] data-session-id=[session_id.map(|id| id.to_string())] {
                (content)
            }
        }
    }
}

pub fn header(paths: &NavigationPaths) -> Markup {
    html! {
        header.site-header {
            a.brand href="#hero" { (SITE_NAME) }
            nav {
                a href="#services" { "Services" }
                a href="#doctors" { "Doctors" }
                a href="#pricing" { "Pricing" }
                a href="#testimonials" { "Stories" }
            }
            div.header-actions {
                a.button.ghost href=(paths.login) data-action="navigate" data-target="login" { "Sign In" }
                a.button.primary href=(paths.register) data-action="navigate" data-target="register" { "Get Started" }
            }
        }
    }
}

pub fn footer(paths: &NavigationPaths) -> Markup {
    html! {
        footer.site-footer {
            div.footer-brand {
                strong { (SITE_NAME) }
                p { "Connecting international patients with Europe's leading specialists." }
            }
            div.footer-links {
                a href=(paths.register) { "Create account" }
                a href=(paths.login) { "Sign in" }
                a href="#pricing" { "Pricing" }
            }
            p.footer-note {
                "Payments are processed securely by Stripe and PayPal. Medical data is handled in line with GDPR."
            }
        }
    }
}
