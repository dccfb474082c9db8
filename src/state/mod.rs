//! UI state machine (pure).
//!
//! All state transitions are pure functions of their inputs and the `Instant`
//! they are given, testable without a terminal.

/// Root state and key routing.
pub mod app_state;
/// Depth and paginated carousel engine.
pub mod carousel;
/// Contact form fields, validation and submission status.
pub mod contact_form;
/// About tabs, tech categories and the experience accordion.
pub mod tabs;
/// Rotating typed headline.
pub mod typewriter;

// Re-export for convenience
pub use app_state::{AppState, Effect, EngineSettings, FormInput, Section};
pub use carousel::{Carousel, CarouselConfig, CarouselItem, CarouselKind};
pub use contact_form::{validate, ContactForm, FormStatus, Notice};
pub use tabs::{AboutTab, Accordion, ExperienceList, TabSet, TechCategory};
pub use typewriter::Typewriter;
