//! View-model adapter (pure).
//!
//! Total, side-effect free functions turning stored records into card data.

/// Certification cards and issue date formatting.
pub mod certification;
/// Brand colours for technologies and certificate providers.
pub mod color;
/// Project cards and their tech badges.
pub mod project;

pub use certification::{
    adapt_certification, adapt_certifications, format_issue_date, CertificationCard,
    FallbackBadge,
};
pub use color::{badge_color, tech_color, Rgb};
pub use project::{adapt_project, adapt_projects, ProjectCard, TechBadge};
