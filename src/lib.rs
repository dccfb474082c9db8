//! folio
//!
//! Terminal portfolio viewer: a hero with a typewriter, an about section with
//! tabs and an experience accordion, a paginated project carousel, a depth
//! certification carousel and a contact form delivered through EmailJS.
//!
//! Pure core (`model`, `adapter`, `state`) with an impure shell (`store`,
//! `email`, `view`). Time enters the core only as the `Instant` passed to
//! each transition.

/// Stored records to display cards.
pub mod adapter;
/// Configuration loading and key bindings.
pub mod config;
/// Contact message delivery.
pub mod email;
/// File-based tracing setup.
pub mod logging;
/// Domain types and errors.
pub mod model;
/// Pure UI state machine.
pub mod state;
/// Portfolio persistence.
pub mod store;
/// Terminal rendering and the event loop.
pub mod view;
