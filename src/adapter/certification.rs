//! Stored certification → certification card.

use super::color::{badge_color, Rgb};
use crate::model::{RecordId, StoredCertification};
use chrono::NaiveDate;

/// Display data for one certification on the depth stage.
#[derive(Debug, Clone, PartialEq)]
pub struct CertificationCard {
    /// Store identifier, also the carousel key.
    pub id: RecordId,
    /// Certificate name.
    pub title: String,
    /// Issuing organisation.
    pub provider: String,
    /// Raw issue date as stored.
    pub issue_date: String,
    /// Verification link.
    pub credential_url: Option<String>,
    /// Badge image, when the provider publishes one.
    pub image_url: Option<String>,
    /// Colour of the fallback badge.
    pub badge_color: Rgb,
}

/// Initial-letter badge drawn when a certificate image is unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackBadge {
    /// Uppercased first letter of the provider, or `?`.
    pub initial: char,
    /// Provider colour.
    pub color: Rgb,
}

impl CertificationCard {
    /// Badge to draw in place of the image.
    pub fn fallback_badge(&self) -> FallbackBadge {
        FallbackBadge {
            initial: self
                .provider
                .chars()
                .next()
                .map(|c| c.to_ascii_uppercase())
                .unwrap_or('?'),
            color: self.badge_color,
        }
    }

    /// Issue date as "Month YYYY".
    pub fn formatted_date(&self) -> String {
        format_issue_date(&self.issue_date)
    }
}

/// Render a `YYYY-MM-DD` (optionally with a time suffix) date as "Month YYYY".
///
/// Unparseable input is returned unchanged.
pub fn format_issue_date(raw: &str) -> String {
    let date_part = raw.get(..10).unwrap_or(raw);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%B %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Card for a stored certification.
pub fn adapt_certification(record: &StoredCertification) -> CertificationCard {
    CertificationCard {
        id: record.id.clone(),
        title: record.title.clone(),
        provider: record.provider.clone(),
        issue_date: record.issue_date.clone(),
        credential_url: record.credential_url.clone(),
        image_url: record.image_url.clone(),
        badge_color: badge_color(&record.provider),
    }
}

/// Cards for every record, in order.
pub fn adapt_certifications(records: &[StoredCertification]) -> Vec<CertificationCard> {
    records.iter().map(adapt_certification).collect()
}
