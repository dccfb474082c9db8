//! Stored records as they come out of the portfolio database.
//!
//! These are the raw shapes; display-ready card data lives in [`crate::adapter`].

use super::identifiers::{RecordId, Slug};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A project row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredProject {
    /// Primary key.
    pub id: RecordId,
    /// Project name.
    pub title: String,
    /// URL slug, unique per project.
    pub slug: Slug,
    /// Short description.
    pub description: String,
    /// Free-text technology tags, in author order.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Image URLs; the first one is the card image.
    #[serde(default)]
    pub images: Vec<String>,
    /// Source repository.
    #[serde(default)]
    pub github_url: Option<String>,
    /// Live deployment.
    #[serde(default)]
    pub live_url: Option<String>,
    /// Marked as a highlight.
    #[serde(default)]
    pub featured: bool,
    /// Insertion time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

/// A certification row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredCertification {
    /// Primary key.
    pub id: RecordId,
    /// Certificate name.
    pub title: String,
    /// Issuing organisation.
    pub provider: String,
    /// Issue date as stored (`YYYY-MM-DD`).
    pub issue_date: String,
    /// Verification link.
    #[serde(default)]
    pub credential_url: Option<String>,
    /// Badge image.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Insertion time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

/// Seed document accepted by `folio import`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedDocument {
    /// Projects to upsert.
    #[serde(default)]
    pub projects: Vec<StoredProject>,
    /// Certifications to upsert.
    #[serde(default)]
    pub certifications: Vec<StoredCertification>,
}
