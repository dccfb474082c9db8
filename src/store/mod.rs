//! Read access to the portfolio's projects and certifications.

/// SQLite-backed store and JSON seed import.
pub mod sqlite;

pub use sqlite::{import_json, ImportSummary, SqliteStore};

use crate::model::{RecordId, Slug, StoredCertification, StoredProject, StoreError};

/// How many certifications `recent_certifications` returns by default.
pub const DEFAULT_RECENT_CERTIFICATIONS: usize = 3;

/// Ordered collections of projects and certifications.
///
/// Implementations never reorder results after the query: projects come back
/// featured first then newest first, certifications newest issue date first.
pub trait PortfolioStore {
    /// All projects, featured first, then by creation time descending.
    fn list_projects(&self) -> Result<Vec<StoredProject>, StoreError>;

    /// Featured projects only, newest first.
    fn featured_projects(&self) -> Result<Vec<StoredProject>, StoreError>;

    /// Project with the given slug, if any.
    fn project_by_slug(&self, slug: &Slug) -> Result<Option<StoredProject>, StoreError>;

    /// All certifications by issue date descending.
    fn list_certifications(&self) -> Result<Vec<StoredCertification>, StoreError>;

    /// The `count` most recently issued certifications.
    fn recent_certifications(&self, count: usize) -> Result<Vec<StoredCertification>, StoreError>;

    /// Certification with the given id, if any.
    fn certification_by_id(&self, id: &RecordId) -> Result<Option<StoredCertification>, StoreError>;
}
