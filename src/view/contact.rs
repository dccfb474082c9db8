//! Contact section: profile contact details and the message form.

use super::constants::{FIELD_HEIGHT, MESSAGE_FIELD_MIN_HEIGHT};
use super::helpers::{empty_line, key_value_line};
use super::styles::Palette;
use crate::model::ContactField;
use crate::state::{AppState, ContactForm, FormStatus, Notice};
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Draw the contact section into `area`.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, palette: Palette) {
    let [info_area, form_area] =
        Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)]).areas(area);

    render_info(frame, info_area, state, palette);
    render_form(frame, form_area, &state.contact, palette);
}

fn render_info(frame: &mut Frame, area: Rect, state: &AppState, palette: Palette) {
    let mut lines = vec![
        Line::from("Have a project in mind or want to chat? Send a message."),
        empty_line(),
    ];
    for info in &state.profile().contact {
        lines.push(key_value_line(&info.label, &info.value, palette.key()));
        if let Some(link) = &info.link {
            lines.push(Line::styled(format!("  {link}"), palette.muted()));
        }
    }
    frame.render_widget(
        Paragraph::new(lines)
            .block(Block::bordered().title(Span::styled(" Get in Touch ", palette.title())))
            .wrap(Wrap { trim: true }),
        area,
    );
}

/// One line under the form describing what the form is doing.
pub fn status_line(form: &ContactForm, palette: Palette) -> Line<'static> {
    if form.status() == FormStatus::Sending {
        return Line::styled("Sending…", palette.accent());
    }
    match form.notice() {
        Some(Notice::Sent { .. }) => Line::styled(
            "Message sent! I'll get back to you soon.",
            palette.success(),
        ),
        Some(Notice::Failed(reason)) => Line::styled(reason.clone(), palette.error()),
        None if form.is_editing() => Line::styled(
            "Tab next field  Enter newline in message  Ctrl+s send  Esc done",
            palette.muted(),
        ),
        None => Line::styled("Press i to start typing", palette.muted()),
    }
}

fn render_form(frame: &mut Frame, area: Rect, form: &ContactForm, palette: Palette) {
    let block = Block::bordered().title(Span::styled(" Send a Message ", palette.title()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [name, email, subject, message, status] = Layout::vertical([
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Min(MESSAGE_FIELD_MIN_HEIGHT),
        Constraint::Length(1),
    ])
    .areas(inner);

    for (field, field_area) in ContactField::ALL.into_iter().zip([name, email, subject, message]) {
        render_field(frame, field_area, form, field, palette);
    }
    frame.render_widget(Paragraph::new(status_line(form, palette)), status);
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    form: &ContactForm,
    field: ContactField,
    palette: Palette,
) {
    let focused = form.is_editing() && form.focus() == field;
    let error = form.error(field);

    let border = if focused {
        palette.focused_border()
    } else if error.is_some() {
        palette.error()
    } else {
        Style::default()
    };
    let mut block = Block::bordered()
        .title(format!(" {} ", field.label()))
        .border_style(border);
    if let Some(message) = error {
        block = block.title_bottom(Line::styled(format!(" {message} "), palette.error()));
    }

    let inner = block.inner(area);
    let value = form.payload().field(field);
    frame.render_widget(
        Paragraph::new(value.to_string())
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );

    if focused {
        frame.set_cursor_position(cursor_position(value, inner));
    }
}

/// Terminal cursor after the last character of `value` in `inner`.
fn cursor_position(value: &str, inner: Rect) -> Position {
    let last_line = value.rsplit('\n').next().unwrap_or("");
    let row = value.matches('\n').count() as u16;
    let column = last_line.width() as u16;
    let max_x = inner.right().saturating_sub(1).max(inner.x);
    let max_y = inner.bottom().saturating_sub(1).max(inner.y);
    Position::new((inner.x + column).min(max_x), (inner.y + row).min(max_y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SendError;
    use std::time::Instant;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn cursor_follows_last_line() {
        let inner = Rect::new(10, 5, 30, 4);
        assert_eq!(cursor_position("", inner), Position::new(10, 5));
        assert_eq!(cursor_position("Ada", inner), Position::new(13, 5));
        assert_eq!(cursor_position("Hi\nthere", inner), Position::new(15, 6));
    }

    #[test]
    fn cursor_is_clamped_to_field() {
        let inner = Rect::new(0, 0, 5, 1);
        assert_eq!(cursor_position("a long value", inner), Position::new(4, 0));
        assert_eq!(cursor_position("a\nb\nc", inner), Position::new(1, 0));
    }

    #[test]
    fn status_line_reports_sending_and_outcomes() {
        let palette = Palette::new(false);
        let mut form = ContactForm::new();
        assert_eq!(text(&status_line(&form, palette)), "Press i to start typing");

        form.set_field(ContactField::Name, "Ada");
        form.set_field(ContactField::Email, "ada@example.com");
        form.set_field(ContactField::Subject, "Hello");
        form.set_field(ContactField::Message, "Nice work");
        assert!(form.submit().is_some());
        assert_eq!(text(&status_line(&form, palette)), "Sending…");

        form.on_send_result(Err(SendError::NotConfigured("service_id")), Instant::now());
        assert!(text(&status_line(&form, palette)).starts_with("Could not send message:"));
    }
}
