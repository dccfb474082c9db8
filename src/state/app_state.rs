//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state. It owns the
//! carousels, tab selections, the contact form and the typewriter, and is
//! driven by key actions and `tick(now)` from the event loop.

use crate::adapter::{CertificationCard, ProjectCard};
use crate::model::{ContactPayload, KeyAction, Profile, SendError};
use crate::state::carousel::{responsive_page_size, Carousel, CarouselConfig};
use crate::state::contact_form::ContactForm;
use crate::state::tabs::{AboutTab, ExperienceList, TabSet, TechCategory};
use crate::state::typewriter::Typewriter;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};
use tracing::debug;

// ===== Section =====

/// Top-level screen of the portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    /// Landing screen with the typed headline.
    #[default]
    Home,
    /// Bio, startup and experience tabs.
    About,
    /// Paginated project carousel.
    Projects,
    /// Depth certification carousel.
    Certifications,
    /// Contact form.
    Contact,
}

impl Section {
    /// Every section in navigation order.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Certifications,
        Section::Contact,
    ];

    /// Display name, also accepted by `FromStr`.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Certifications => "Certifications",
            Section::Contact => "Contact",
        }
    }

    /// Zero-based position in [`Section::ALL`].
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Following section, wrapping.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Preceding section, wrapping.
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Section by 1-based position, as bound to the number keys.
    pub fn from_position(position: usize) -> Option<Self> {
        position.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "unknown section '{s}' (expected one of: home, about, projects, certifications, contact)"
                )
            })
    }
}

// ===== Settings =====

/// Engine tunables resolved from configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    /// Certification autoplay interval; `None` disables it.
    pub autoplay_interval: Option<Duration>,
    /// Length of each project slide phase.
    pub slide_phase: Duration,
    /// Drag distance needed for a swipe.
    pub swipe_threshold_px: f32,
    /// Pixel width assumed for one terminal column when picking a page size.
    pub cell_width_px: f32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            autoplay_interval: Some(crate::state::carousel::DEFAULT_AUTOPLAY),
            slide_phase: crate::state::carousel::DEFAULT_SLIDE_PHASE,
            swipe_threshold_px: crate::state::carousel::DEFAULT_SWIPE_THRESHOLD,
            cell_width_px: 8.0,
        }
    }
}

impl EngineSettings {
    /// Configuration for the certification carousel.
    pub fn depth_config(&self) -> CarouselConfig {
        CarouselConfig::depth()
            .with_autoplay(self.autoplay_interval)
            .with_swipe_threshold(self.swipe_threshold_px)
    }

    /// Configuration for the project carousel, three cards per page until resized.
    pub fn paginated_config(&self) -> CarouselConfig {
        CarouselConfig::paginated(3)
            .with_slide_phase(self.slide_phase)
            .with_swipe_threshold(self.swipe_threshold_px)
    }

    /// Page size for a stage `columns` cells wide.
    pub fn page_size_for_columns(&self, columns: u16) -> usize {
        responsive_page_size(f32::from(columns) * self.cell_width_px)
    }
}

/// Side effect requested by a state transition, performed by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Leave the application.
    Quit,
    /// Dispatch a validated contact message.
    SendContact(ContactPayload),
}

/// Raw editing input routed to the contact form while it captures keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormInput {
    /// Typed character.
    Char(char),
    /// Delete the last character of the focused field.
    Backspace,
    /// Focus the following field.
    NextField,
    /// Focus the preceding field.
    PrevField,
    /// Validate and, if clean, send.
    Submit,
    /// Stop capturing keys.
    Exit,
}

// ===== AppState =====

/// Application state. Pure data, no side effects.
#[derive(Debug, Clone)]
pub struct AppState {
    profile: Profile,
    settings: EngineSettings,

    /// Which section is on screen.
    pub section: Section,

    /// Paginated project carousel.
    pub projects: Carousel<ProjectCard>,
    /// Depth certification carousel.
    pub certifications: Carousel<CertificationCard>,

    /// Selected About tab.
    pub about_tab: AboutTab,
    /// Experience accordion with its cursor.
    pub experiences: ExperienceList,
    /// Selected tech stack category.
    pub tech_category: TechCategory,

    /// Contact form state.
    pub contact: ContactForm,
    /// Home headline animation.
    pub typewriter: Typewriter,

    /// Whether the help overlay is currently visible.
    pub help_visible: bool,

    /// Whether colours are rendered.
    pub color_enabled: bool,

    /// Set when the pointer, not the user, paused certification autoplay.
    hover_paused: bool,
}

impl AppState {
    /// Build the initial state on the Home section.
    ///
    /// Both carousels are mounted at `now`, so certification autoplay is armed
    /// from that instant.
    pub fn new(
        profile: Profile,
        projects: Vec<ProjectCard>,
        certifications: Vec<CertificationCard>,
        settings: EngineSettings,
        now: Instant,
    ) -> Self {
        let experiences =
            ExperienceList::new(profile.experiences.iter().map(|e| e.id.clone()).collect());
        let typewriter = Typewriter::new(profile.roles.clone(), now);
        Self {
            projects: Carousel::new(projects, settings.paginated_config(), now),
            certifications: Carousel::new(certifications, settings.depth_config(), now),
            profile,
            settings,
            section: Section::Home,
            about_tab: AboutTab::default(),
            experiences,
            tech_category: TechCategory::default(),
            contact: ContactForm::new(),
            typewriter,
            help_visible: false,
            color_enabled: true,
            hover_paused: false,
        }
    }

    /// Static profile content.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Engine tunables this state was built with.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Whether keystrokes currently go to the contact form instead of key bindings.
    pub fn is_capturing_input(&self) -> bool {
        self.section == Section::Contact && self.contact.is_editing()
    }

    /// Switch to `section`, ending any form editing.
    pub fn select_section(&mut self, section: Section) {
        if self.section != section {
            debug!(from = %self.section, to = %section, "section changed");
            self.contact.stop_editing();
            self.section = section;
        }
    }

    /// Apply a bound key action.
    pub fn handle_key_action(&mut self, action: KeyAction, now: Instant) -> Option<Effect> {
        match action {
            KeyAction::Quit => return Some(Effect::Quit),
            KeyAction::Help => self.help_visible = !self.help_visible,
            KeyAction::NextSection => self.select_section(self.section.next()),
            KeyAction::PrevSection => self.select_section(self.section.previous()),
            KeyAction::SelectSection(position) => {
                if let Some(section) = Section::from_position(position) {
                    self.select_section(section);
                }
            }
            KeyAction::CarouselNext
            | KeyAction::CarouselPrev
            | KeyAction::CarouselFirst
            | KeyAction::CarouselLast
            | KeyAction::ToggleAutoplay => self.handle_carousel_action(action, now),
            KeyAction::NextTab => {
                if self.section == Section::About {
                    self.about_tab = self.about_tab.next();
                }
            }
            KeyAction::PrevTab => {
                if self.section == Section::About {
                    self.about_tab = self.about_tab.previous();
                }
            }
            KeyAction::CursorDown => {
                if self.on_experience_tab() {
                    self.experiences.cursor_down();
                }
            }
            KeyAction::CursorUp => {
                if self.on_experience_tab() {
                    self.experiences.cursor_up();
                }
            }
            KeyAction::ToggleExpand => {
                if self.on_experience_tab() {
                    self.experiences.toggle_current();
                }
            }
            KeyAction::EditForm => {
                if self.section == Section::Contact {
                    self.contact.begin_editing();
                }
            }
            KeyAction::SubmitForm => {
                if self.section == Section::Contact {
                    return self.contact.submit().map(Effect::SendContact);
                }
            }
        }
        None
    }

    /// Apply editing input to the contact form.
    pub fn handle_form_input(&mut self, input: FormInput) -> Option<Effect> {
        match input {
            FormInput::Char(c) => self.contact.insert_char(c),
            FormInput::Backspace => self.contact.backspace(),
            FormInput::NextField => self.contact.focus_next(),
            FormInput::PrevField => self.contact.focus_previous(),
            FormInput::Exit => self.contact.stop_editing(),
            FormInput::Submit => return self.contact.submit().map(Effect::SendContact),
        }
        None
    }

    /// Feed the outcome of a dispatched contact message back to the form.
    pub fn apply_send_result(&mut self, result: Result<(), SendError>, now: Instant) {
        self.contact.on_send_result(result, now);
    }

    /// Recompute the project page size for a stage `columns` cells wide.
    pub fn resize_stage(&mut self, columns: u16) {
        let page_size = self.settings.page_size_for_columns(columns);
        self.projects.set_page_size(page_size);
    }

    /// Pause certification autoplay while the pointer is over its stage.
    ///
    /// Leaving the stage only resumes a pause the pointer caused; a pause
    /// requested with the toggle key stays in place.
    pub fn hover_certifications(&mut self, hovering: bool, now: Instant) {
        if hovering {
            if !self.certifications.is_paused() {
                self.certifications.pause();
                self.hover_paused = true;
            }
        } else if self.hover_paused {
            self.hover_paused = false;
            self.certifications.resume(now);
        }
    }

    /// Drive every time-dependent component up to `now`.
    pub fn tick(&mut self, now: Instant) {
        self.projects.tick(now);
        self.certifications.tick(now);
        self.typewriter.tick(now);
        self.contact.tick(now);
    }

    fn on_experience_tab(&self) -> bool {
        self.section == Section::About && self.about_tab == AboutTab::Experience
    }

    fn handle_carousel_action(&mut self, action: KeyAction, now: Instant) {
        match self.section {
            Section::Projects => apply_carousel_action(&mut self.projects, action, now),
            Section::Certifications => {
                if action == KeyAction::ToggleAutoplay {
                    // An explicit toggle takes ownership of the pause.
                    self.hover_paused = false;
                }
                apply_carousel_action(&mut self.certifications, action, now)
            }
            Section::About if self.about_tab == AboutTab::About => match action {
                KeyAction::CarouselNext => self.tech_category = self.tech_category.next(),
                KeyAction::CarouselPrev => self.tech_category = self.tech_category.previous(),
                _ => {}
            },
            _ => {}
        }
    }
}

fn apply_carousel_action<T: crate::state::carousel::CarouselItem>(
    carousel: &mut Carousel<T>,
    action: KeyAction,
    now: Instant,
) {
    match action {
        KeyAction::CarouselNext => {
            carousel.next(now);
        }
        KeyAction::CarouselPrev => {
            carousel.previous(now);
        }
        KeyAction::CarouselFirst => {
            carousel.first(now);
        }
        KeyAction::CarouselLast => {
            carousel.last(now);
        }
        KeyAction::ToggleAutoplay => carousel.toggle_pause(now),
        _ => {}
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
