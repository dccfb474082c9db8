//! Paginated project carousel.

use super::about::badge_line;
use super::constants::{ARROW_WIDTH, DOTS_HEIGHT};
use super::helpers::{dot_rects, empty_line, truncate};
use super::layout::{HitMap, HitTarget};
use super::styles::Palette;
use crate::adapter::ProjectCard;
use crate::state::AppState;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

/// Draw the projects section into `area`, registering click targets in `hits`.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    now: Instant,
    palette: Palette,
    hits: &mut HitMap,
) {
    let carousel = &state.projects;
    let block = Block::bordered().title(Span::styled(
        format!(" Projects ({}) ", carousel.len()),
        palette.title(),
    ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if carousel.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::styled(
                "No projects yet. Seed some with `folio import <file.json>`.",
                palette.muted(),
            ))
            .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let [body, dots_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(DOTS_HEIGHT)]).areas(inner);
    let [left, stage, right] = Layout::horizontal([
        Constraint::Length(ARROW_WIDTH),
        Constraint::Min(0),
        Constraint::Length(ARROW_WIDTH),
    ])
    .areas(body);
    hits.stage = Some(stage);

    render_arrow(frame, left, "◀", carousel.has_previous(), palette);
    render_arrow(frame, right, "▶", carousel.has_next(), palette);
    if carousel.has_previous() {
        hits.push(left, HitTarget::Previous);
    }
    if carousel.has_next() {
        hits.push(right, HitTarget::Next);
    }

    let visual = carousel.slide_visual(now);
    let dx = (visual.offset * f32::from(stage.width)).round() as i32;
    let page = carousel.page();
    let slots = page.items.len() + page.placeholders;
    if slots > 0 {
        let columns = Layout::horizontal(vec![Constraint::Ratio(1, slots as u32); slots])
            .spacing(1)
            .split(stage);
        // Placeholders keep their column but draw nothing.
        for (card, column) in page.items.iter().zip(columns.iter()) {
            let shifted = shift_within(*column, dx, stage);
            if !shifted.is_empty() {
                render_card(frame, shifted, card, visual.opacity, palette);
            }
        }
    }

    let dots = dot_rects(carousel.total_pages(), dots_area);
    for (page_index, rect) in dots.into_iter().enumerate() {
        let (symbol, style) = if page_index == carousel.active_index() {
            ("●", palette.accent())
        } else {
            ("○", palette.muted())
        };
        frame.render_widget(Paragraph::new(Span::styled(symbol, style)), rect);
        hits.push(rect, HitTarget::Dot(page_index));
    }
}

/// Move `rect` horizontally by `dx` columns, clipped to `bounds`.
pub fn shift_within(rect: Rect, dx: i32, bounds: Rect) -> Rect {
    let left = (i32::from(rect.x) + dx).max(i32::from(bounds.x));
    let right = (i32::from(rect.right()) + dx).min(i32::from(bounds.right()));
    if right <= left {
        return Rect::new(rect.x, rect.y, 0, rect.height);
    }
    Rect::new(left as u16, rect.y, (right - left) as u16, rect.height)
}

fn render_arrow(frame: &mut Frame, area: Rect, symbol: &str, enabled: bool, palette: Palette) {
    let style = if enabled {
        palette.accent()
    } else {
        palette.muted()
    };
    let middle = Rect::new(area.x, area.y + area.height / 2, area.width, 1.min(area.height));
    frame.render_widget(
        Paragraph::new(Span::styled(symbol.to_string(), style)).alignment(Alignment::Center),
        middle,
    );
}

fn card_lines(card: &ProjectCard, width: usize, palette: Palette) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled(
            format!("⌂ {}", truncate(&card.display_domain(), width.saturating_sub(2))),
            palette.muted(),
        ),
        empty_line(),
        Line::from(card.description.clone()),
        empty_line(),
    ];
    if !card.techs.is_empty() {
        let names: Vec<String> = card.techs.iter().map(|t| t.name.clone()).collect();
        lines.push(badge_line(&names, palette));
        lines.push(empty_line());
    }
    if let Some(url) = &card.url {
        lines.push(Line::styled(format!("↗ {}", truncate(url, width.saturating_sub(2))), palette.accent()));
    }
    if let Some(repo) = &card.repo {
        lines.push(Line::styled(format!("⎇ {}", truncate(repo, width.saturating_sub(2))), palette.accent()));
    }
    lines.push(Line::styled(
        format!("▣ {}", truncate(&card.display_image(), width.saturating_sub(2))),
        palette.muted(),
    ));
    lines
}

fn render_card(frame: &mut Frame, area: Rect, card: &ProjectCard, opacity: f32, palette: Palette) {
    let (title, border) = if card.featured {
        (format!(" ★ {} ", card.title), palette.key())
    } else {
        (format!(" {} ", card.title), palette.accent())
    };
    let block = Block::bordered()
        .title(title)
        .border_style(palette.faded(opacity, border));
    let width = area.width.saturating_sub(2) as usize;

    frame.render_widget(
        Paragraph::new(card_lines(card, width, palette))
            .block(block)
            .style(palette.faded(opacity, Style::default()))
            .wrap(Wrap { trim: true }),
        area,
    );
}
