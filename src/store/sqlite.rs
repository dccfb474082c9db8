//! SQLite-backed portfolio store.
//!
//! `tags` and `images` are stored as JSON arrays in TEXT columns; timestamps
//! as RFC 3339 UTC text so that lexical order matches time order.

use super::PortfolioStore;
use crate::model::{
    RecordId, SeedDocument, Slug, StoreError, StoredCertification, StoredProject,
};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use tracing::{debug, info};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS projects (
    id           TEXT PRIMARY KEY,
    title        TEXT NOT NULL,
    slug         TEXT NOT NULL UNIQUE,
    description  TEXT NOT NULL DEFAULT '',
    tags         TEXT NOT NULL DEFAULT '[]',
    images       TEXT NOT NULL DEFAULT '[]',
    github_url   TEXT,
    live_url     TEXT,
    featured     INTEGER NOT NULL DEFAULT 0,
    created_at   TEXT NOT NULL,
    updated_at   TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_projects_order ON projects (featured DESC, created_at DESC);

CREATE TABLE IF NOT EXISTS certifications (
    id             TEXT PRIMARY KEY,
    title          TEXT NOT NULL,
    provider       TEXT NOT NULL,
    issue_date     TEXT NOT NULL,
    credential_url TEXT,
    image_url      TEXT,
    created_at     TEXT NOT NULL,
    updated_at     TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_certifications_issue ON certifications (issue_date DESC);
";

const PROJECT_COLS: &str =
    "id, title, slug, description, tags, images, github_url, live_url, featured, created_at, updated_at";
const CERTIFICATION_COLS: &str =
    "id, title, provider, issue_date, credential_url, image_url, created_at, updated_at";

/// Columns of a `projects` row before validation.
struct ProjectRow {
    id: String,
    title: String,
    slug: String,
    description: String,
    tags: String,
    images: String,
    github_url: Option<String>,
    live_url: Option<String>,
    featured: bool,
    created_at: String,
    updated_at: String,
}

/// Parse a project row with column order [`PROJECT_COLS`].
fn parse_project_row(row: &rusqlite::Row) -> rusqlite::Result<ProjectRow> {
    Ok(ProjectRow {
        id: row.get(0)?,
        title: row.get(1)?,
        slug: row.get(2)?,
        description: row.get(3)?,
        tags: row.get(4)?,
        images: row.get(5)?,
        github_url: row.get(6)?,
        live_url: row.get(7)?,
        featured: row.get(8)?,
        created_at: row.get(9)?,
        updated_at: row.get(10)?,
    })
}

struct CertificationRow {
    id: String,
    title: String,
    provider: String,
    issue_date: String,
    credential_url: Option<String>,
    image_url: Option<String>,
    created_at: String,
    updated_at: String,
}

/// Parse a certification row with column order [`CERTIFICATION_COLS`].
fn parse_certification_row(row: &rusqlite::Row) -> rusqlite::Result<CertificationRow> {
    Ok(CertificationRow {
        id: row.get(0)?,
        title: row.get(1)?,
        provider: row.get(2)?,
        issue_date: row.get(3)?,
        credential_url: row.get(4)?,
        image_url: row.get(5)?,
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
    })
}

fn decode_error(table: &'static str, column: &'static str, id: &str, reason: impl ToString) -> StoreError {
    StoreError::Decode {
        table,
        column,
        id: id.to_string(),
        reason: reason.to_string(),
    }
}

fn decode_timestamp(
    table: &'static str,
    column: &'static str,
    id: &str,
    raw: &str,
) -> Result<DateTime<Utc>, StoreError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| decode_error(table, column, id, e))
}

fn decode_list(
    column: &'static str,
    id: &str,
    raw: &str,
) -> Result<Vec<String>, StoreError> {
    serde_json::from_str(raw).map_err(|e| decode_error("projects", column, id, e))
}

fn encode_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

impl ProjectRow {
    fn decode(self) -> Result<StoredProject, StoreError> {
        let id = RecordId::new(self.id.clone())
            .map_err(|e| decode_error("projects", "id", &self.id, e))?;
        let slug =
            Slug::new(self.slug).map_err(|e| decode_error("projects", "slug", &self.id, e))?;
        Ok(StoredProject {
            tags: decode_list("tags", &self.id, &self.tags)?,
            images: decode_list("images", &self.id, &self.images)?,
            created_at: decode_timestamp("projects", "created_at", &self.id, &self.created_at)?,
            updated_at: decode_timestamp("projects", "updated_at", &self.id, &self.updated_at)?,
            id,
            title: self.title,
            slug,
            description: self.description,
            github_url: self.github_url,
            live_url: self.live_url,
            featured: self.featured,
        })
    }
}

impl CertificationRow {
    fn decode(self) -> Result<StoredCertification, StoreError> {
        let table = "certifications";
        Ok(StoredCertification {
            id: RecordId::new(self.id.clone()).map_err(|e| decode_error(table, "id", &self.id, e))?,
            created_at: decode_timestamp(table, "created_at", &self.id, &self.created_at)?,
            updated_at: decode_timestamp(table, "updated_at", &self.id, &self.updated_at)?,
            title: self.title,
            provider: self.provider,
            issue_date: self.issue_date,
            credential_url: self.credential_url,
            image_url: self.image_url,
        })
    }
}

/// Counts written by an import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Projects written.
    pub projects: usize,
    /// Certifications written.
    pub certifications: usize,
}

/// Portfolio store over a single SQLite connection.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (creating if needed) the database at `path` and ensure the schema exists.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let open_err = |source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        };
        let conn = Connection::open(path).map_err(open_err)?;
        conn.execute_batch(SCHEMA).map_err(open_err)?;
        debug!(path = %path.display(), "opened portfolio database");
        Ok(Self { conn })
    }

    /// Fresh in-memory database with the schema applied.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Insert or replace every record of `doc` in one transaction.
    pub fn import(&mut self, doc: &SeedDocument) -> Result<ImportSummary, StoreError> {
        let tx = self.conn.transaction()?;
        for project in &doc.projects {
            upsert_project(&tx, project)?;
        }
        for certification in &doc.certifications {
            upsert_certification(&tx, certification)?;
        }
        tx.commit()?;
        let summary = ImportSummary {
            projects: doc.projects.len(),
            certifications: doc.certifications.len(),
        };
        info!(
            projects = summary.projects,
            certifications = summary.certifications,
            "imported seed document"
        );
        Ok(summary)
    }

    /// Insert or replace a single project.
    pub fn upsert_project(&self, project: &StoredProject) -> Result<(), StoreError> {
        upsert_project(&self.conn, project)
    }

    /// Insert or replace a single certification.
    pub fn upsert_certification(&self, certification: &StoredCertification) -> Result<(), StoreError> {
        upsert_certification(&self.conn, certification)
    }

    fn query_projects(
        &self,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> Result<Vec<StoredProject>, StoreError> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params, parse_project_row)?;
        rows.map(|row| row?.decode()).collect()
    }

    fn query_certifications(
        &self,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> Result<Vec<StoredCertification>, StoreError> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params, parse_certification_row)?;
        rows.map(|row| row?.decode()).collect()
    }
}

fn upsert_project(conn: &Connection, project: &StoredProject) -> Result<(), StoreError> {
    let tags = serde_json::to_string(&project.tags)
        .map_err(|e| decode_error("projects", "tags", project.id.as_str(), e))?;
    let images = serde_json::to_string(&project.images)
        .map_err(|e| decode_error("projects", "images", project.id.as_str(), e))?;
    conn.execute(
        &format!(
            "INSERT OR REPLACE INTO projects ({PROJECT_COLS}) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)"
        ),
        params![
            project.id.as_str(),
            project.title,
            project.slug.as_str(),
            project.description,
            tags,
            images,
            project.github_url,
            project.live_url,
            project.featured,
            encode_timestamp(&project.created_at),
            encode_timestamp(&project.updated_at),
        ],
    )?;
    Ok(())
}

fn upsert_certification(
    conn: &Connection,
    certification: &StoredCertification,
) -> Result<(), StoreError> {
    conn.execute(
        &format!(
            "INSERT OR REPLACE INTO certifications ({CERTIFICATION_COLS}) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"
        ),
        params![
            certification.id.as_str(),
            certification.title,
            certification.provider,
            certification.issue_date,
            certification.credential_url,
            certification.image_url,
            encode_timestamp(&certification.created_at),
            encode_timestamp(&certification.updated_at),
        ],
    )?;
    Ok(())
}

impl PortfolioStore for SqliteStore {
    fn list_projects(&self) -> Result<Vec<StoredProject>, StoreError> {
        self.query_projects(
            &format!("SELECT {PROJECT_COLS} FROM projects ORDER BY featured DESC, created_at DESC"),
            [],
        )
    }

    fn featured_projects(&self) -> Result<Vec<StoredProject>, StoreError> {
        self.query_projects(
            &format!(
                "SELECT {PROJECT_COLS} FROM projects WHERE featured = 1 ORDER BY created_at DESC"
            ),
            [],
        )
    }

    fn project_by_slug(&self, slug: &Slug) -> Result<Option<StoredProject>, StoreError> {
        let sql = format!("SELECT {PROJECT_COLS} FROM projects WHERE slug = ?1");
        let row = self
            .conn
            .query_row(&sql, [slug.as_str()], parse_project_row)
            .optional()?;
        row.map(ProjectRow::decode).transpose()
    }

    fn list_certifications(&self) -> Result<Vec<StoredCertification>, StoreError> {
        self.query_certifications(
            &format!("SELECT {CERTIFICATION_COLS} FROM certifications ORDER BY issue_date DESC"),
            [],
        )
    }

    fn recent_certifications(&self, count: usize) -> Result<Vec<StoredCertification>, StoreError> {
        let limit = i64::try_from(count).unwrap_or(i64::MAX);
        self.query_certifications(
            &format!(
                "SELECT {CERTIFICATION_COLS} FROM certifications ORDER BY issue_date DESC LIMIT ?1"
            ),
            [limit],
        )
    }

    fn certification_by_id(&self, id: &RecordId) -> Result<Option<StoredCertification>, StoreError> {
        let sql = format!("SELECT {CERTIFICATION_COLS} FROM certifications WHERE id = ?1");
        let row = self
            .conn
            .query_row(&sql, [id.as_str()], parse_certification_row)
            .optional()?;
        row.map(CertificationRow::decode).transpose()
    }
}

/// Read a JSON seed document from `path` and import it into `store`.
pub fn import_json(store: &mut SqliteStore, path: &Path) -> Result<ImportSummary, StoreError> {
    let import_err = |reason: String| StoreError::Import {
        path: path.to_path_buf(),
        reason,
    };
    let contents = std::fs::read_to_string(path).map_err(|e| import_err(e.to_string()))?;
    let doc: SeedDocument =
        serde_json::from_str(&contents).map_err(|e| import_err(e.to_string()))?;
    store.import(&doc)
}

#[cfg(test)]
#[path = "sqlite_tests.rs"]
mod tests;
