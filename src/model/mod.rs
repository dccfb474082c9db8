//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

/// Contact form fields and payload.
pub mod contact;
/// Error taxonomy.
pub mod error;
/// Validated record identifiers and slugs.
pub mod identifiers;
/// Keyboard intents.
pub mod key_action;
/// Static profile content.
pub mod profile;
/// Stored project and certification rows.
pub mod record;

// Re-export for convenience
pub use contact::{ContactField, ContactPayload};
pub use error::{AppError, SendError, StoreError};
pub use identifiers::{InvalidRecordId, InvalidSlug, RecordId, Slug};
pub use key_action::KeyAction;
pub use profile::{ContactInfo, Experience, Profile, ProfileError, Startup, TechStack};
pub use record::{SeedDocument, StoredCertification, StoredProject};
