//! Record identifier newtypes with smart constructors.
//!
//! Identifiers validate non-empty strings at construction time.
//! Raw constructors are never exported - use smart constructors only.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Stable identifier of a stored project or certification.
///
/// The store guarantees uniqueness; this type only guarantees non-emptiness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordId(String);

impl RecordId {
    /// Smart constructor: validates a non-blank identifier.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidRecordId> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(InvalidRecordId::Empty);
        }
        Ok(Self(raw))
    }

    /// Borrow the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for RecordId {
    type Error = InvalidRecordId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

/// URL slug of a project (e.g. "recipe-sharing-platform").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Smart constructor: lowercase ASCII letters, digits and `-` only.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidSlug> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidSlug::Empty);
        }
        if let Some(bad) = raw
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
        {
            return Err(InvalidSlug::InvalidChar(bad));
        }
        Ok(Self(raw))
    }

    /// Borrow the slug text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Slug {
    type Error = InvalidSlug;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

/// Why a record id was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidRecordId {
    /// Blank or whitespace only.
    #[error("Record ID cannot be empty")]
    Empty,
}

/// Why a slug was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSlug {
    /// Empty string.
    #[error("Slug cannot be empty")]
    Empty,
    /// Contains a character outside `[a-z0-9-]`.
    #[error("Slug contains invalid character {0:?}")]
    InvalidChar(char),
}
