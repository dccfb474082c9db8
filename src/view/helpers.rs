//! Small text helpers shared by the section renderers.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Blank spacer line.
pub fn empty_line() -> Line<'static> {
    Line::from("")
}

/// `label: value` with the label styled.
pub fn key_value_line(label: &str, value: &str, label_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), label_style),
        Span::raw(value.to_string()),
    ])
}

/// Cut `text` to at most `max_width` display columns, ending with `…` when cut.
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Rect of `percent_x`×`percent_y` centred in `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

/// Row of single-cell dots centred in `area`, one per entry, two columns apart.
///
/// Returns each dot's rect so clicks can be mapped back to an index.
pub fn dot_rects(count: usize, area: Rect) -> Vec<Rect> {
    if count == 0 || area.height == 0 || area.width == 0 {
        return Vec::new();
    }
    // Dots sit two cells apart, so at most ceil(width / 2) fit.
    let fit = area.width.div_ceil(2);
    let count = u16::try_from(count).unwrap_or(u16::MAX).min(fit);
    let span = count.saturating_mul(2).saturating_sub(1);
    let start = area.x.saturating_add(area.width.saturating_sub(span) / 2);
    (0..count)
        .map(|i| Rect::new(start.saturating_add(i.saturating_mul(2)), area.y, 1, 1))
        .filter(|r| r.x < area.right())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("github.com", 20), "github.com");
    }

    #[test]
    fn truncate_marks_cut_text() {
        assert_eq!(truncate("recipes.example.com", 8), "recipes…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn truncate_counts_wide_chars() {
        // each CJK char is two columns
        assert_eq!(truncate("日本語テキスト", 5), "日本…");
    }

    #[test]
    fn dots_are_centred_and_spaced() {
        let rects = dot_rects(3, Rect::new(0, 10, 11, 1));
        let xs: Vec<u16> = rects.iter().map(|r| r.x).collect();
        assert_eq!(xs, vec![3, 5, 7]);
        assert!(rects.iter().all(|r| r.y == 10));
    }

    #[test]
    fn dots_empty_for_no_entries() {
        assert!(dot_rects(0, Rect::new(0, 0, 10, 1)).is_empty());
    }

    #[test]
    fn dots_clipped_to_width_for_huge_counts() {
        let area = Rect::new(0, 0, 10, 1);
        let dots = dot_rects(100_000, area);
        assert_eq!(dots.len(), 5);
        assert!(dots.iter().all(|r| r.x < area.right()));
        assert_eq!(dots.first().map(|r| r.x), Some(0));
        assert_eq!(dots.last().map(|r| r.x), Some(8));
    }

    #[test]
    fn dots_near_coordinate_limit_do_not_overflow() {
        let area = Rect::new(u16::MAX - 4, 0, 4, 1);
        let dots = dot_rects(usize::MAX, area);
        assert_eq!(dots.len(), 2);
        assert!(dots.iter().all(|r| r.x >= area.x));
    }
}
