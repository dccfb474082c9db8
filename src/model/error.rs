//! Error types for folio.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via
//! `?` and `From` conversions up to [`AppError`].
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error
//!   - [`StoreError`] - Database open/query/decode/import failures
//!   - [`crate::config::ConfigError`] - Config file read/parse failures
//!   - [`crate::model::profile::ProfileError`] - Profile file read/parse failures
//!   - [`crate::logging::LoggingError`] - Tracing initialization failures
//!   - `std::io::Error` - Terminal/TUI failures
//! - [`SendError`] - Email dispatch failures (never fatal)
//!
//! # Recovery Strategy
//!
//! Store errors at startup are fatal and propagate to `main`; there is no
//! silent fallback to an empty portfolio. Email send errors are logged and the
//! contact form keeps its content. Contact validation errors are not errors in
//! this sense at all: they are field-scoped data in the form state.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all fatal failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// The portfolio store could not be opened or read.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration file could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Profile file could not be loaded.
    #[error("Profile error: {0}")]
    Profile(#[from] crate::model::profile::ProfileError),

    /// Tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors raised by the portfolio store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database file could not be opened or its schema created.
    #[error("Failed to open database at {path}: {source}")]
    Open {
        /// Database file.
        path: PathBuf,
        /// Underlying SQLite error.
        #[source]
        source: rusqlite::Error,
    },

    /// A query failed.
    #[error("Query failed: {0}")]
    Query(#[from] rusqlite::Error),

    /// A stored row could not be turned into a record.
    ///
    /// Carries the row id and column so a corrupt row can be located.
    #[error("Invalid value in {table}.{column} for row {id}: {reason}")]
    Decode {
        /// Table the row came from.
        table: &'static str,
        /// Offending column.
        column: &'static str,
        /// Row id.
        id: String,
        /// What was wrong with the value.
        reason: String,
    },

    /// A seed document could not be read or parsed.
    #[error("Failed to import {path}: {reason}")]
    Import {
        /// Seed document path.
        path: PathBuf,
        /// Read or parse failure.
        reason: String,
    },
}

/// Errors returned by an email dispatcher.
#[derive(Debug, Error)]
pub enum SendError {
    /// Service id, template id or public key is missing.
    #[error("Email dispatch is not configured (missing {0})")]
    NotConfigured(&'static str),

    /// Transport-level failure (DNS, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Email service rejected the message ({status}): {body}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body, as returned.
        body: String,
    },

    /// The dispatch worker went away before answering.
    #[error("Email worker disconnected")]
    WorkerGone,
}
