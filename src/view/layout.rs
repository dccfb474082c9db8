//! Frame layout: navigation bar, section body, status bar and overlays.
//!
//! Rendering is pure with respect to `AppState`; the only output besides the
//! frame is the [`HitMap`] used to route mouse clicks on the next event.

use super::constants::{NAV_BAR_HEIGHT, STATUS_BAR_HEIGHT};
use super::styles::Palette;
use super::{about, certifications, contact, help, home, projects};
use crate::state::{AppState, Section};
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Tabs},
    Frame,
};
use std::time::Instant;

/// Clickable element of the last rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// A card of the depth carousel, by item index.
    Card(usize),
    /// An indicator dot, by card (depth) or page (paginated) index.
    Dot(usize),
    /// The "previous" arrow.
    Previous,
    /// The "next" arrow.
    Next,
}

/// Mouse targets of the last rendered frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    /// Carousel stage of the visible section, if it has one.
    pub stage: Option<Rect>,
    targets: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    /// Register a target. Later targets are drawn on top and win overlaps.
    pub fn push(&mut self, area: Rect, target: HitTarget) {
        if !area.is_empty() {
            self.targets.push((area, target));
        }
    }

    /// Topmost target under a cell.
    pub fn target_at(&self, column: u16, row: u16) -> Option<HitTarget> {
        let position = Position::new(column, row);
        self.targets
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| *target)
    }

    /// True if the cell lies on the carousel stage.
    pub fn is_on_stage(&self, column: u16, row: u16) -> bool {
        self.stage
            .is_some_and(|stage| stage.contains(Position::new(column, row)))
    }
}

/// Render the whole frame.
pub fn render(frame: &mut Frame, state: &AppState, now: Instant) -> HitMap {
    let palette = Palette::new(state.color_enabled);
    let [nav_area, content_area, status_area] = Layout::vertical([
        Constraint::Length(NAV_BAR_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .areas(frame.area());

    render_nav(frame, nav_area, state, palette);

    let mut hits = HitMap::default();
    match state.section {
        Section::Home => home::render(frame, content_area, state, palette),
        Section::About => about::render(frame, content_area, state, palette),
        Section::Projects => projects::render(frame, content_area, state, now, palette, &mut hits),
        Section::Certifications => {
            certifications::render(frame, content_area, state, palette, &mut hits)
        }
        Section::Contact => contact::render(frame, content_area, state, palette),
    }

    render_status(frame, status_area, state, palette);

    if state.help_visible {
        help::render_help_overlay(frame, palette);
    }

    hits
}

fn render_nav(frame: &mut Frame, area: Rect, state: &AppState, palette: Palette) {
    let titles: Vec<Line> = Section::ALL
        .iter()
        .enumerate()
        .map(|(i, section)| Line::from(format!("{} {}", i + 1, section.label())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::bordered()
                .title(Span::styled(format!(" {} ", state.profile().name), palette.title())),
        )
        .select(state.section.index())
        .highlight_style(palette.selected())
        .divider("│");

    frame.render_widget(tabs, area);
}

/// Key hints for the visible section.
fn status_hints(state: &AppState) -> &'static str {
    match state.section {
        Section::Home => "Tab/1-5 sections  ? help  q quit",
        Section::About => "[ ] tabs  h/l stack  j/k move  Enter expand",
        Section::Projects => "h/l page  g/G first/last  drag to swipe",
        Section::Certifications => "h/l card  p pause  click a card to focus",
        Section::Contact if state.is_capturing_input() => {
            "Tab next field  Ctrl+s send  Esc done"
        }
        Section::Contact => "i edit  Ctrl+s send",
    }
}

fn render_status(frame: &mut Frame, area: Rect, state: &AppState, palette: Palette) {
    let line = Line::from(vec![
        Span::styled(format!(" {} ", state.section.label()), palette.selected()),
        Span::raw(" "),
        Span::styled(status_hints(state), palette.muted()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
