//! Stored project → project card.

use super::color::{tech_color, Rgb};
use crate::model::{RecordId, StoredProject};

/// Display-ready project card.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard {
    /// Store identifier, also the carousel key.
    pub id: RecordId,
    /// Project name.
    pub title: String,
    /// Short description.
    pub description: String,
    /// First stored image, or empty when the record has none.
    pub image: String,
    /// Live deployment.
    pub url: Option<String>,
    /// Source repository.
    pub repo: Option<String>,
    /// Marked as a highlight.
    pub featured: bool,
    /// Technology tags with their colours.
    pub techs: Vec<TechBadge>,
}

/// A coloured technology tag.
#[derive(Debug, Clone, PartialEq)]
pub struct TechBadge {
    /// Tag text as stored.
    pub name: String,
    /// Resolved colour.
    pub color: Rgb,
}

impl ProjectCard {
    /// Generated placeholder shown when the card image is missing or fails to load.
    pub fn placeholder_image(&self) -> String {
        format!(
            "https://placehold.co/600x400/e2e8f0/a1a1aa?text={}",
            urlencoding::encode(&self.title)
        )
    }

    /// Image to display: the stored image, or the placeholder when empty.
    pub fn display_image(&self) -> String {
        if self.image.is_empty() {
            self.placeholder_image()
        } else {
            self.image.clone()
        }
    }

    /// Text for the card's browser-style address bar.
    pub fn display_domain(&self) -> String {
        match &self.url {
            None => format!("localhost:3000/projects/{}", self.id),
            Some(raw) => match url::Url::parse(raw) {
                Ok(parsed) => parsed
                    .host_str()
                    .map(str::to_string)
                    .unwrap_or_else(|| raw.clone()),
                Err(_) => raw.clone(),
            },
        }
    }
}

/// Card for a stored project.
pub fn adapt_project(record: &StoredProject) -> ProjectCard {
    ProjectCard {
        id: record.id.clone(),
        title: record.title.clone(),
        description: record.description.clone(),
        image: record.images.first().cloned().unwrap_or_default(),
        url: record.live_url.clone(),
        repo: record.github_url.clone(),
        featured: record.featured,
        techs: record
            .tags
            .iter()
            .map(|tag| TechBadge {
                name: tag.clone(),
                color: tech_color(tag),
            })
            .collect(),
    }
}

/// Cards for every record, in order.
pub fn adapt_projects(records: &[StoredProject]) -> Vec<ProjectCard> {
    records.iter().map(adapt_project).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::color::{DEFAULT_TECH_COLOR, TECH_COLORS};
    use crate::model::Slug;
    use chrono::{TimeZone, Utc};

    fn record(images: Vec<&str>, tags: Vec<&str>) -> StoredProject {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        StoredProject {
            id: RecordId::new("p-1").unwrap(),
            title: "Recipe Hub".to_string(),
            slug: Slug::new("recipe-hub").unwrap(),
            description: "Share recipes".to_string(),
            tags: tags.into_iter().map(String::from).collect(),
            images: images.into_iter().map(String::from).collect(),
            github_url: Some("https://github.com/me/recipe-hub".to_string()),
            live_url: Some("https://recipes.example.com/home".to_string()),
            featured: true,
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn missing_images_yield_empty_image() {
        let card = adapt_project(&record(vec![], vec![]));
        assert_eq!(card.image, "");
    }

    #[test]
    fn first_image_becomes_card_image() {
        let card = adapt_project(&record(vec!["a.png", "b.png"], vec![]));
        assert_eq!(card.image, "a.png");
    }

    #[test]
    fn tags_resolve_through_color_table() {
        let card = adapt_project(&record(vec![], vec!["Next.js App", "Rust"]));
        let next_color = TECH_COLORS.iter().find(|(k, _)| *k == "next.js").unwrap().1;
        assert_eq!(
            card.techs,
            vec![
                TechBadge { name: "Next.js App".to_string(), color: next_color },
                TechBadge { name: "Rust".to_string(), color: DEFAULT_TECH_COLOR },
            ]
        );
    }

    #[test]
    fn pass_through_fields() {
        let card = adapt_project(&record(vec![], vec![]));
        assert!(card.featured);
        assert_eq!(card.repo.as_deref(), Some("https://github.com/me/recipe-hub"));
        assert_eq!(card.url.as_deref(), Some("https://recipes.example.com/home"));
    }

    #[test]
    fn display_domain_uses_host_of_live_url() {
        let card = adapt_project(&record(vec![], vec![]));
        assert_eq!(card.display_domain(), "recipes.example.com");
    }

    #[test]
    fn display_domain_falls_back_for_missing_or_bad_urls() {
        let mut card = adapt_project(&record(vec![], vec![]));
        card.url = None;
        assert_eq!(card.display_domain(), "localhost:3000/projects/p-1");
        card.url = Some("not a url".to_string());
        assert_eq!(card.display_domain(), "not a url");
    }

    #[test]
    fn placeholder_encodes_title() {
        let card = adapt_project(&record(vec![], vec![]));
        insta::assert_snapshot!(
            card.placeholder_image(),
            @"https://placehold.co/600x400/e2e8f0/a1a1aa?text=Recipe%20Hub"
        );
        assert_eq!(card.display_image(), card.placeholder_image());
    }

    #[test]
    fn adaptation_is_deterministic() {
        let r = record(vec!["x.png"], vec!["React"]);
        assert_eq!(adapt_project(&r), adapt_project(&r));
    }
}
