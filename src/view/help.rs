//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::helpers::{centered_rect, empty_line};
use super::styles::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Wrap},
    Frame,
};

/// Shortcut groups: heading, then `(keys, description)` rows.
const SHORTCUTS: &[(&str, &[(&str, &str)])] = &[
    (
        "Sections",
        &[
            ("Tab / Shift+Tab", "Next / previous section"),
            ("1-5", "Home, About, Projects, Certifications, Contact"),
        ],
    ),
    (
        "Carousels",
        &[
            ("l / →", "Next card or page"),
            ("h / ←", "Previous card or page"),
            ("g / Home", "First"),
            ("G / End", "Last"),
            ("p", "Pause or resume autoplay"),
            ("drag", "Swipe left or right"),
            ("click", "Focus a card or jump to a page"),
        ],
    ),
    (
        "About",
        &[
            ("] / [", "Next / previous tab"),
            ("h / l", "Cycle tech stack category"),
            ("j / k", "Move through experience"),
            ("Enter / Space", "Expand or collapse entry"),
        ],
    ),
    (
        "Contact",
        &[
            ("i", "Start typing"),
            ("Tab / Shift+Tab", "Next / previous field"),
            ("Ctrl+s", "Send message"),
            ("Esc", "Stop typing"),
        ],
    ),
    (
        "Application",
        &[("?", "Toggle this help"), ("q / Ctrl+c", "Quit")],
    ),
];

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, palette: Palette) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    // Clear the background for the overlay
    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(palette))
        .block(
            Block::bordered()
                .title(" Keyboard Shortcuts ")
                .border_style(palette.accent()),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1.min(popup_area.height),
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or ? to close ",
        palette.muted().add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Build the help content lines grouped by category.
fn build_help_content(palette: Palette) -> Vec<Line<'static>> {
    let category_style = palette.title();
    let key_style = palette.key();
    let desc_style = Style::default();

    let mut lines = Vec::new();
    for (heading, rows) in SHORTCUTS {
        lines.push(Line::from(Span::styled(*heading, category_style)));
        for (keys, description) in *rows {
            lines.push(Line::from(vec![
                Span::styled(format!("  {keys:<16}"), key_style),
                Span::styled(*description, desc_style),
            ]));
        }
        lines.push(empty_line());
    }
    lines
}
