//! Depth carousel of certifications.
//!
//! Up to five cards are visible: the active card in the centre, two on each
//! side at decreasing scale. Cards are drawn in ascending z order so nearer
//! cards overlap farther ones.

use super::constants::DOTS_HEIGHT;
use super::helpers::{dot_rects, empty_line, truncate};
use super::layout::{HitMap, HitTarget};
use super::styles::Palette;
use crate::adapter::CertificationCard;
use crate::state::carousel::{DepthSlot, DepthStyle};
use crate::state::AppState;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Wrap},
    Frame,
};

/// Draw the certifications section into `area`.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, palette: Palette, hits: &mut HitMap) {
    let carousel = &state.certifications;
    let mut block = Block::bordered().title(Span::styled(
        format!(" Certifications ({}) ", carousel.len()),
        palette.title(),
    ));
    if state.settings().autoplay_interval.is_some() && carousel.is_navigable() {
        let indicator = if carousel.is_paused() {
            Span::styled(" ⏸ paused ", palette.muted())
        } else {
            Span::styled(" ▶ auto ", palette.accent())
        };
        block = block.title(Line::from(indicator).right_aligned());
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if carousel.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::styled(
                "No certifications yet. Seed some with `folio import <file.json>`.",
                palette.muted(),
            ))
            .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let [stage, dots_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(DOTS_HEIGHT)]).areas(inner);
    hits.stage = Some(stage);

    let mut placed: Vec<(usize, DepthStyle)> = carousel
        .depth_styles()
        .into_iter()
        .enumerate()
        .filter(|(_, style)| style.slot != DepthSlot::Hidden)
        .collect();
    placed.sort_by_key(|(_, style)| style.z_index);

    for (index, style) in placed {
        let rect = card_rect(stage, &style);
        if rect.is_empty() {
            continue;
        }
        frame.render_widget(Clear, rect);
        render_card(frame, rect, &carousel.items()[index], &style, palette);
        hits.push(rect, HitTarget::Card(index));
    }

    let dots = dot_rects(carousel.len(), dots_area);
    for (index, rect) in dots.into_iter().enumerate() {
        let (symbol, style) = if index == carousel.active_index() {
            ("●", palette.accent())
        } else {
            ("○", palette.muted())
        };
        frame.render_widget(Paragraph::new(Span::styled(symbol, style)), rect);
        hits.push(rect, HitTarget::Dot(index));
    }
}

/// Screen rect of a card placed with `style` on `stage`.
///
/// The unit card is a quarter of the stage wide and the full stage tall;
/// `scale` shrinks it and `shift_percent` moves its centre by a fraction of
/// the unit width.
pub fn card_rect(stage: Rect, style: &DepthStyle) -> Rect {
    let unit = f32::from(stage.width) / 4.0;
    let width = (unit * style.scale).round().max(1.0);
    let height = (f32::from(stage.height) * style.scale).round().max(1.0);
    let centre_x =
        f32::from(stage.x) + f32::from(stage.width) / 2.0 + unit * f32::from(style.shift_percent) / 100.0;
    let centre_y = f32::from(stage.y) + f32::from(stage.height) / 2.0;

    let left = (centre_x - width / 2.0).round().max(f32::from(stage.x));
    let top = (centre_y - height / 2.0).round().max(f32::from(stage.y));
    let right = (left + width).min(f32::from(stage.right()));
    let bottom = (top + height).min(f32::from(stage.bottom()));

    Rect::new(
        left as u16,
        top as u16,
        (right - left).max(0.0) as u16,
        (bottom - top).max(0.0) as u16,
    )
}

fn card_lines(card: &CertificationCard, width: usize, palette: Palette) -> Vec<Line<'static>> {
    let badge = card.fallback_badge();
    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {} ", badge.initial),
            palette.badge(badge.color),
        )),
        empty_line(),
        Line::styled(card.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Line::styled(card.provider.clone(), palette.muted()),
        Line::from(card.formatted_date()),
    ];
    if card.credential_url.is_some() {
        lines.push(empty_line());
        lines.push(Line::styled("↗ View credential", palette.accent()));
    }
    if let Some(image) = &card.image_url {
        lines.push(Line::styled(
            format!("▣ {}", truncate(image, width.saturating_sub(2))),
            palette.muted(),
        ));
    }
    lines
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    card: &CertificationCard,
    style: &DepthStyle,
    palette: Palette,
) {
    let border = if style.slot == DepthSlot::Center {
        palette.focused_border()
    } else {
        palette.faded(style.opacity, palette.muted())
    };
    let width = area.width.saturating_sub(2) as usize;
    frame.render_widget(
        Paragraph::new(card_lines(card, width, palette))
            .block(Block::bordered().border_style(border))
            .style(palette.faded(style.opacity, Style::default()))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}
