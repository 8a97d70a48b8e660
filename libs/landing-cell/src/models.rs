use std::fmt;

use chrono::{DateTime, Utc};
use maud::Render;
use serde::{Deserialize, Serialize, Serializer};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::{NavigationRequest, NavigationTarget};

use crate::services::modal::ModalState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(pub u32);

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Render for ProfileId {
    fn render_to(&self, buffer: &mut String) {
        self.0.render_to(buffer);
    }
}

/// Star rating between 0.0 and 5.0 with one decimal, stored in tenths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    pub const MAX_TENTHS: u8 = 50;

    pub const fn from_tenths(tenths: u8) -> Self {
        assert!(tenths <= Self::MAX_TENTHS, "rating must be between 0.0 and 5.0");
        Rating(tenths)
    }

    pub fn tenths(&self) -> u8 {
        self.0
    }

    pub fn value(&self) -> f64 {
        f64::from(self.0) / 10.0
    }

    /// Whole stars to draw, rounding half up.
    pub fn stars(&self) -> u8 {
        (self.0 + 5) / 10
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

impl Render for Rating {
    fn render_to(&self, buffer: &mut String) {
        buffer.push_str(&self.to_string());
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub id: ProfileId,
    pub name: &'static str,
    pub specialty: &'static str,
    pub experience: &'static str,
    pub rating: Rating,
    /// Display order matters: the first two are shown as badges.
    pub languages: &'static [&'static str],
    pub location: &'static str,
    pub image: &'static str,
    pub certifications: &'static [&'static str],
    pub fee: &'static str,
    pub about: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct Specialization {
    pub name: &'static str,
    pub description: &'static str,
    pub doctor_count_label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProcessStep {
    pub step: u8,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PricingTier {
    pub name: &'static str,
    pub price_label: &'static str,
    pub period_label: &'static str,
    pub features: &'static [&'static str],
    pub highlighted: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Testimonial {
    pub author: &'static str,
    pub origin: &'static str,
    pub treatment: &'static str,
    pub quote: &'static str,
    pub rating: Rating,
}

/// Every static section of the page in one payload.
#[derive(Debug, Clone, Serialize)]
pub struct LandingContent {
    pub profiles: &'static [Profile],
    pub services: &'static [Service],
    pub specializations: &'static [Specialization],
    pub process_steps: &'static [ProcessStep],
    pub pricing_tiers: &'static [PricingTier],
    pub testimonials: &'static [Testimonial],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSummary {
    pub id: ProfileId,
    pub name: &'static str,
    pub specialty: &'static str,
}

impl From<&Profile> for ProfileSummary {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id,
            name: profile.name,
            specialty: profile.specialty,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PageSnapshot {
    pub session_id: Uuid,
    pub showcase_index: usize,
    pub featured_profile: ProfileSummary,
    pub modal: ModalState,
    pub selected_profile: Option<&'static Profile>,
    pub video_playing: bool,
    pub mounted: bool,
    pub ticks: u64,
    pub created_at: DateTime<Utc>,
    pub last_activity_at: DateTime<Utc>,
}

/// Where the login and register links lead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationPaths {
    pub login: String,
    pub register: String,
}

impl NavigationPaths {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            login: config.login_path.clone(),
            register: config.register_path.clone(),
        }
    }

    pub fn path_for(&self, target: NavigationTarget) -> &str {
        match target {
            NavigationTarget::Login => &self.login,
            NavigationTarget::Register => &self.register,
        }
    }

    pub fn request(&self, target: NavigationTarget) -> NavigationRequest {
        NavigationRequest {
            target,
            path: self.path_for(target).to_string(),
        }
    }
}

impl Default for NavigationPaths {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseReason {
    CloseIcon,
    ViewMoreDoctors,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_formats_with_one_decimal() {
        assert_eq!(Rating::from_tenths(49).to_string(), "4.9");
        assert_eq!(Rating::from_tenths(50).to_string(), "5.0");
        assert_eq!(Rating::from_tenths(0).to_string(), "0.0");
    }

    #[test]
    fn rating_serializes_as_number() {
        let json = serde_json::to_value(Rating::from_tenths(48)).unwrap();
        assert_eq!(json.as_f64(), Some(4.8));
    }

    #[test]
    fn rating_rounds_stars_half_up() {
        assert_eq!(Rating::from_tenths(45).stars(), 5);
        assert_eq!(Rating::from_tenths(44).stars(), 4);
    }

    #[test]
    #[should_panic(expected = "rating must be between 0.0 and 5.0")]
    fn rating_above_five_is_rejected() {
        let _ = Rating::from_tenths(51);
    }

    #[test]
    fn navigation_paths_resolve_targets() {
        let paths = NavigationPaths {
            login: "/auth/login".to_string(),
            register: "/auth/register".to_string(),
        };
        assert_eq!(paths.path_for(NavigationTarget::Login), "/auth/login");
        assert_eq!(
            paths.request(NavigationTarget::Register).path,
            "/auth/register"
        );
    }
}
