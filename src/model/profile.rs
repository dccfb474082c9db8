//! Static profile content: hero roles, about text, experience and contact info.
//!
//! Loaded from a TOML profile file; [`Profile::default`] carries built-in
//! placeholder content so the viewer works without one.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Failures loading the profile file.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// The file exists but could not be read.
    #[error("Failed to read profile at {path}: {source}")]
    Read {
        /// Profile file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid profile.
    #[error("Invalid profile TOML in {path}: {reason}")]
    Parse {
        /// Profile file.
        path: std::path::PathBuf,
        /// Parser message.
        reason: String,
    },
}

/// Everything the static sections display.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    /// Owner's display name.
    pub name: String,
    /// Hero heading.
    pub headline: String,
    /// Roles cycled by the hero typewriter.
    pub roles: Vec<String>,
    /// About tab paragraphs.
    pub about: Vec<String>,
    /// Downloadable resume link.
    #[serde(default)]
    pub resume_url: Option<String>,
    /// Startup tab content.
    pub startup: Startup,
    /// Work history, newest first.
    #[serde(default)]
    pub experiences: Vec<Experience>,
    /// Tech stack panel content.
    pub tech_stack: TechStack,
    /// Contact details listed beside the form.
    #[serde(default)]
    pub contact: Vec<ContactInfo>,
}

/// The startup write-up.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Startup {
    /// Startup name.
    pub name: String,
    /// One-line pitch.
    pub tagline: String,
    /// Body paragraphs.
    pub paragraphs: Vec<String>,
    /// Technologies in use.
    #[serde(default)]
    pub stack: Vec<String>,
    /// Completion percentage, 0-100.
    #[serde(default)]
    pub progress: u8,
    /// What the project has taught so far.
    #[serde(default)]
    pub learnings: Vec<String>,
}

/// One job in the experience accordion.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Experience {
    /// Accordion key.
    pub id: String,
    /// Job title.
    pub role: String,
    /// Employer.
    pub company: String,
    /// Human-readable date range.
    pub period: String,
    /// Summary line.
    pub description: String,
    /// Bullet list shown when expanded.
    #[serde(default)]
    pub responsibilities: Vec<String>,
    /// Skills shown as tags when expanded.
    #[serde(default)]
    pub transferable_skills: Vec<String>,
}

/// Tech stack entries by category.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TechStack {
    /// Programming languages.
    #[serde(default)]
    pub languages: Vec<String>,
    /// Frameworks and libraries.
    #[serde(default)]
    pub frameworks: Vec<String>,
    /// Databases.
    #[serde(default)]
    pub databases: Vec<String>,
    /// Tooling and platforms.
    #[serde(default)]
    pub tools: Vec<String>,
}

/// A labelled contact detail.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactInfo {
    /// Caption, e.g. "Email".
    pub label: String,
    /// Displayed value.
    pub value: String,
    /// Target opened when the value is activated.
    #[serde(default)]
    pub link: Option<String>,
}

impl Profile {
    /// Load a profile file. A missing file yields the built-in profile.
    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|source| ProfileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents).map_err(|reason| ProfileError::Parse {
            path: path.to_path_buf(),
            reason,
        })
    }

    /// Parse a profile from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|e| e.to_string())
    }

    /// Experience with the given accordion key.
    pub fn experience(&self, id: &str) -> Option<&Experience> {
        self.experiences.iter().find(|e| e.id == id)
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            headline: "Crafting Digital Experiences".to_string(),
            roles: strings(&[
                "Junior Web Developer",
                "React Developer",
                "JavaScript Engineer",
            ]),
            about: strings(&[
                "Hello! I build modern applications that solve real-world problems.",
                "I keep learning through personal projects, courses and community work.",
            ]),
            resume_url: None,
            startup: Startup {
                name: "Side Project".to_string(),
                tagline: "A community-driven platform".to_string(),
                paragraphs: strings(&["Currently under development."]),
                stack: strings(&["Next.js", "PostgreSQL"]),
                progress: 40,
                learnings: strings(&["Product planning and roadmap development"]),
            },
            experiences: vec![Experience {
                id: "intern".to_string(),
                role: "Frontend Engineering Intern".to_string(),
                company: "Example Co".to_string(),
                period: "Jan 2024 - Apr 2024".to_string(),
                description: "Developed responsive interfaces.".to_string(),
                responsibilities: strings(&["Wrote maintainable, testable code"]),
                transferable_skills: strings(&["Team collaboration"]),
            }],
            tech_stack: TechStack {
                languages: strings(&["JavaScript", "TypeScript", "Python"]),
                frameworks: strings(&["React", "Next.js", "Node.js"]),
                databases: strings(&["PostgreSQL", "MongoDB"]),
                tools: strings(&["Git", "Docker"]),
            },
            contact: vec![ContactInfo {
                label: "Email".to_string(),
                value: "hello@example.com".to_string(),
                link: Some("mailto:hello@example.com".to_string()),
            }],
        }
    }
}
