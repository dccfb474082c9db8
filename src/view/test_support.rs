//! Fixtures shared by the view tests.

use crate::adapter::{CertificationCard, ProjectCard, Rgb};
use crate::email::EmailDispatcher;
use crate::model::{ContactPayload, Profile, RecordId, SendError};
use crate::state::{AppState, EngineSettings};
use ratatui::buffer::Buffer;
use std::sync::Mutex;
use std::time::Instant;

pub fn project(i: usize) -> ProjectCard {
    ProjectCard {
        id: RecordId::new(format!("p{i}")).unwrap(),
        title: format!("Project {i}"),
        description: format!("Description {i}"),
        image: String::new(),
        url: Some(format!("https://project{i}.example.com")),
        repo: None,
        featured: i == 0,
        techs: Vec::new(),
    }
}

pub fn certification(i: usize) -> CertificationCard {
    CertificationCard {
        id: RecordId::new(format!("c{i}")).unwrap(),
        title: format!("Cert {i}"),
        provider: "AWS".into(),
        issue_date: "2024-01-15".into(),
        credential_url: Some("https://example.com/verify".into()),
        image_url: None,
        badge_color: Rgb::from_hex(0xFF9900),
    }
}

pub fn state(projects: usize, certs: usize, t0: Instant) -> AppState {
    AppState::new(
        Profile::default(),
        (0..projects).map(project).collect(),
        (0..certs).map(certification).collect(),
        EngineSettings::default(),
        t0,
    )
}

/// Convert a ratatui buffer to a string, one line per row.
///
/// Trailing whitespace and empty rows are dropped.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Dispatcher that accepts every message and remembers it.
#[derive(Default)]
pub struct Recording {
    pub sent: Mutex<Vec<ContactPayload>>,
}

impl EmailDispatcher for Recording {
    fn send(&self, payload: &ContactPayload) -> Result<(), SendError> {
        self.sent.lock().unwrap().push(payload.clone());
        Ok(())
    }
}
