//! Single-select tab sets and the experience accordion of the About section.

use std::fmt;

/// A closed set of tabs with cyclic keyboard navigation.
pub trait TabSet: Copy + Eq + 'static {
    /// Every tab in display order.
    const ALL: &'static [Self];

    /// Tab caption.
    fn label(self) -> &'static str;

    /// Position in [`TabSet::ALL`].
    fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// Following tab, wrapping.
    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Preceding tab, wrapping.
    fn previous(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

/// Tabs of the About section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AboutTab {
    /// Bio paragraphs and contact details.
    #[default]
    About,
    /// The startup write-up.
    Startup,
    /// Work history accordion.
    Experience,
}

impl TabSet for AboutTab {
    const ALL: &'static [Self] = &[AboutTab::About, AboutTab::Startup, AboutTab::Experience];

    fn label(self) -> &'static str {
        match self {
            AboutTab::About => "About Me",
            AboutTab::Startup => "My Startup",
            AboutTab::Experience => "Experience",
        }
    }
}

impl fmt::Display for AboutTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Categories of the tech stack panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TechCategory {
    /// Programming languages.
    #[default]
    Languages,
    /// Frameworks and libraries.
    Frameworks,
    /// Databases.
    Databases,
    /// Tooling and platforms.
    Tools,
}

impl TabSet for TechCategory {
    const ALL: &'static [Self] = &[
        TechCategory::Languages,
        TechCategory::Frameworks,
        TechCategory::Databases,
        TechCategory::Tools,
    ];

    fn label(self) -> &'static str {
        match self {
            TechCategory::Languages => "Languages",
            TechCategory::Frameworks => "Frameworks",
            TechCategory::Databases => "Databases",
            TechCategory::Tools => "Tools",
        }
    }
}

/// At most one expanded entry, identified by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accordion {
    expanded: Option<String>,
}

impl Accordion {
    /// Accordion with nothing expanded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand `key`, or collapse it if it is already the expanded entry.
    pub fn toggle(&mut self, key: &str) {
        if self.expanded.as_deref() == Some(key) {
            self.expanded = None;
        } else {
            self.expanded = Some(key.to_string());
        }
    }

    /// Key of the expanded entry.
    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    /// True if `key` is the expanded entry.
    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.as_deref() == Some(key)
    }

    /// Collapse whatever is expanded.
    pub fn collapse(&mut self) {
        self.expanded = None;
    }
}

/// Accordion plus a keyboard cursor over its entry keys.
#[derive(Debug, Clone, Default)]
pub struct ExperienceList {
    keys: Vec<String>,
    cursor: usize,
    accordion: Accordion,
}

impl ExperienceList {
    /// List over `keys` with the cursor on the first and nothing expanded.
    pub fn new(keys: Vec<String>) -> Self {
        Self {
            keys,
            cursor: 0,
            accordion: Accordion::new(),
        }
    }

    /// Entry keys in display order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Index of the entry under the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Expansion state.
    pub fn accordion(&self) -> &Accordion {
        &self.accordion
    }

    /// Move the cursor down, stopping at the last entry.
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.keys.len() {
            self.cursor += 1;
        }
    }

    /// Move the cursor up, stopping at the first entry.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Toggle the entry under the cursor.
    pub fn toggle_current(&mut self) {
        if let Some(key) = self.keys.get(self.cursor) {
            self.accordion.toggle(key);
        }
    }

    /// Move the cursor to `index` and toggle that entry.
    pub fn toggle_at(&mut self, index: usize) {
        if index < self.keys.len() {
            self.cursor = index;
            self.toggle_current();
        }
    }
}
