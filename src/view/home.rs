//! Hero screen with the typewriter role line.

use super::helpers::{empty_line, key_value_line};
use super::styles::Palette;
use crate::state::AppState;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

/// Draw the home section into `area`.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, palette: Palette) {
    let profile = state.profile();

    let mut lines = vec![
        Line::styled(format!("Hi, I'm {}", profile.name), palette.title()),
        Line::from(profile.headline.clone()),
        empty_line(),
        Line::from(vec![
            Span::raw("I'm a "),
            Span::styled(state.typewriter.text().to_string(), palette.accent()),
            Span::styled("▌", palette.muted()),
        ]),
    ];

    if let Some(resume) = &profile.resume_url {
        lines.push(empty_line());
        lines.push(key_value_line("Resume", resume, palette.key()));
    }

    lines.push(empty_line());
    lines.push(Line::styled(
        "Press 3 to browse projects or 5 to get in touch",
        palette.muted(),
    ));

    // Centre vertically inside the border.
    let inner_height = area.height.saturating_sub(2) as usize;
    let padding = inner_height.saturating_sub(lines.len()) / 2;
    let mut padded = vec![empty_line(); padding];
    padded.extend(lines);

    let hero = Paragraph::new(padded)
        .block(Block::bordered())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(hero, area);
}
