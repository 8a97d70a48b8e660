pub mod modal;
pub mod page;
pub mod registry;
pub mod rotator;
pub mod timer;

pub use modal::ModalState;
pub use page::LandingPage;
pub use registry::SessionRegistry;
pub use rotator::ShowcaseRotator;
pub use timer::ScopedInterval;
