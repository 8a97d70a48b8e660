// =====================================================================================
// LANDING CELL - PUBLIC LANDING PAGE
// =====================================================================================
//
// Server-rendered marketing page for unauthenticated visitors:
// - Fixed catalog of specialist profiles and page content
// - Per-visitor page sessions with a timed showcase rotation
// - Profile modal with single-selection semantics
// - Navigation requests towards the login and register flows
//
// =====================================================================================

pub mod catalog;
pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;
pub mod views;

pub use error::LandingError;
pub use handlers::LandingHandlers;
pub use models::*;
pub use router::{create_landing_router, landing_routes};
pub use services::{LandingPage, ModalState, ScopedInterval, SessionRegistry, ShowcaseRotator};
