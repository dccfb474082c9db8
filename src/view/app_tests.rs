//! Tests for TuiApp event routing.

use super::*;
use crate::model::ContactField;
use crate::view::test_support::{buffer_to_string, state, Recording};
use crossterm::event::MouseEvent;
use ratatui::backend::TestBackend;
use std::time::Duration;

fn create_test_app(app_state: AppState) -> (TuiApp<TestBackend>, Arc<Recording>) {
    let recording = Arc::new(Recording::default());
    let terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    let app = TuiApp::with_terminal(terminal, app_state, recording.clone());
    (app, recording)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn type_text(app: &mut TuiApp<TestBackend>, text: &str, now: Instant) {
    for c in text.chars() {
        assert!(!app.handle_key(key(KeyCode::Char(c)), now));
    }
}

#[test]
fn tui_error_from_io_error() {
    let io_err = io::Error::other("test error");
    let tui_err: TuiError = io_err.into();
    assert!(matches!(tui_err, TuiError::Io(_)));
}

#[test]
fn handle_key_q_and_ctrl_c_quit() {
    let t0 = Instant::now();
    let (mut app, _) = create_test_app(state(0, 0, t0));
    assert!(app.handle_key(key(KeyCode::Char('q')), t0));
    assert!(app.handle_key(ctrl('c'), t0));
    assert!(!app.handle_key(key(KeyCode::Char('z')), t0));
}

#[test]
fn stage_width_follows_terminal_on_start() {
    let t0 = Instant::now();
    let (app, _) = create_test_app(state(6, 0, t0));
    // 100 columns at 8px is 800px: two per page
    assert_eq!(app.app_state().projects.page_size(), 2);
}

#[test]
fn resize_recomputes_page_size() {
    let t0 = Instant::now();
    let (mut app, _) = create_test_app(state(6, 0, t0));
    app.handle_resize(200, 40);
    assert_eq!(app.app_state().projects.page_size(), 3);
    app.handle_resize(60, 40);
    assert_eq!(app.app_state().projects.page_size(), 1);
}

#[test]
fn help_overlay_blocks_navigation_until_closed() {
    let t0 = Instant::now();
    let (mut app, _) = create_test_app(state(0, 0, t0));
    app.handle_key(key(KeyCode::Char('?')), t0);
    assert!(app.app_state().help_visible);

    app.handle_key(key(KeyCode::Char('3')), t0);
    assert_eq!(app.app_state().section, Section::Home);

    app.handle_key(key(KeyCode::Esc), t0);
    assert!(!app.app_state().help_visible);
    app.handle_key(key(KeyCode::Char('3')), t0);
    assert_eq!(app.app_state().section, Section::Projects);
}

#[test]
fn editing_form_captures_bound_keys() {
    let t0 = Instant::now();
    let (mut app, _) = create_test_app(state(0, 0, t0));
    app.handle_key(key(KeyCode::Char('5')), t0);
    app.handle_key(key(KeyCode::Char('i')), t0);
    assert!(app.app_state().is_capturing_input());

    // 'q' and '1' are bound, but the form takes them as text
    type_text(&mut app, "q1", t0);
    assert_eq!(app.app_state().contact.payload().name, "q1");
    assert_eq!(app.app_state().section, Section::Contact);

    app.handle_key(key(KeyCode::Backspace), t0);
    assert_eq!(app.app_state().contact.payload().name, "q");

    app.handle_key(key(KeyCode::Esc), t0);
    assert!(!app.app_state().is_capturing_input());
    assert!(app.handle_key(key(KeyCode::Char('q')), t0));
}

#[test]
fn enter_moves_fields_but_breaks_lines_in_message() {
    let t0 = Instant::now();
    let (mut app, _) = create_test_app(state(0, 0, t0));
    app.handle_key(key(KeyCode::Char('5')), t0);
    app.handle_key(key(KeyCode::Char('i')), t0);

    app.handle_key(key(KeyCode::Enter), t0);
    assert_eq!(app.app_state().contact.focus(), ContactField::Email);
    app.handle_key(key(KeyCode::BackTab), t0);
    assert_eq!(app.app_state().contact.focus(), ContactField::Name);

    app.handle_key(key(KeyCode::Up), t0);
    assert_eq!(app.app_state().contact.focus(), ContactField::Message);
    type_text(&mut app, "a", t0);
    app.handle_key(key(KeyCode::Enter), t0);
    type_text(&mut app, "b", t0);
    assert_eq!(app.app_state().contact.payload().message, "a\nb");
}

#[test]
fn submitted_message_is_sent_in_background() {
    let t0 = Instant::now();
    let (mut app, recording) = create_test_app(state(0, 0, t0));
    app.handle_key(key(KeyCode::Char('5')), t0);
    app.handle_key(key(KeyCode::Char('i')), t0);
    type_text(&mut app, "Ada", t0);
    app.handle_key(key(KeyCode::Tab), t0);
    type_text(&mut app, "ada@example.com", t0);
    app.handle_key(key(KeyCode::Tab), t0);
    type_text(&mut app, "Hello", t0);
    app.handle_key(key(KeyCode::Tab), t0);
    type_text(&mut app, "Nice portfolio", t0);

    assert!(!app.handle_key(ctrl('s'), t0));
    assert_eq!(app.app_state().contact.status(), crate::state::FormStatus::Sending);

    let deadline = Instant::now() + Duration::from_secs(5);
    while app.app_state().contact.notice().is_none() {
        assert!(Instant::now() < deadline, "send never completed");
        std::thread::sleep(Duration::from_millis(5));
        app.tick(Instant::now());
    }

    assert!(matches!(
        app.app_state().contact.notice(),
        Some(crate::state::Notice::Sent { .. })
    ));
    assert_eq!(app.app_state().contact.payload().name, "", "form cleared");
    let sent = recording.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].email, "ada@example.com");
    assert_eq!(sent[0].message, "Nice portfolio");
}

#[test]
fn invalid_submit_sends_nothing() {
    let t0 = Instant::now();
    let (mut app, recording) = create_test_app(state(0, 0, t0));
    app.handle_key(key(KeyCode::Char('5')), t0);
    app.handle_key(ctrl('s'), t0);
    app.tick(t0);

    assert_eq!(
        app.app_state().contact.error(ContactField::Email),
        Some("Email is required")
    );
    assert!(recording.sent.lock().unwrap().is_empty());
}

#[test]
fn clicking_a_side_card_focuses_it() {
    let t0 = Instant::now();
    let (mut app, _) = create_test_app(state(0, 5, t0));
    app.handle_key(key(KeyCode::Char('4')), t0);
    app.draw(t0).unwrap();

    let stage = app.hit_map.stage.expect("certification stage");
    let (column, row, index) = (stage.left()..stage.right())
        .find_map(|x| match app.hit_map.target_at(x, stage.y + stage.height / 2) {
            Some(HitTarget::Card(i)) if i != 2 => Some((x, stage.y + stage.height / 2, i)),
            _ => None,
        })
        .expect("a side card is visible");

    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), column, row), t0);
    app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), column, row), t0);
    assert_eq!(app.app_state().certifications.active_index(), index);
}

#[test]
fn dragging_across_the_stage_swipes_pages() {
    let t0 = Instant::now();
    let (mut app, _) = create_test_app(state(6, 0, t0));
    app.handle_key(key(KeyCode::Char('3')), t0);
    app.draw(t0).unwrap();

    let stage = app.hit_map.stage.expect("project stage");
    let row = stage.y + 2;
    let start = stage.x + stage.width / 2;
    // 10 columns at 8px is 80px, past the 50px threshold
    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), start, row), t0);
    app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), start - 10, row), t0);
    app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), start - 10, row), t0);

    assert!(app.app_state().projects.is_animating());
    app.tick(t0 + Duration::from_millis(500));
    assert_eq!(app.app_state().projects.active_index(), 1);
}

#[test]
fn short_drag_is_not_a_swipe() {
    let t0 = Instant::now();
    let (mut app, _) = create_test_app(state(6, 0, t0));
    app.handle_key(key(KeyCode::Char('3')), t0);
    app.draw(t0).unwrap();

    let stage = app.hit_map.stage.expect("project stage");
    let (start, row) = (stage.x + stage.width / 2, stage.y + 2);
    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), start, row), t0);
    app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), start - 5, row), t0);
    app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), start - 5, row), t0);

    assert!(!app.app_state().projects.is_animating());
    assert_eq!(app.app_state().projects.gesture().coordinates(), (None, None));
}

#[test]
fn hovering_the_stage_pauses_autoplay() {
    let t0 = Instant::now();
    let (mut app, _) = create_test_app(state(0, 5, t0));
    app.handle_key(key(KeyCode::Char('4')), t0);
    app.draw(t0).unwrap();
    let stage = app.hit_map.stage.expect("certification stage");

    app.handle_mouse(mouse(MouseEventKind::Moved, stage.x + 1, stage.y + 1), t0);
    assert!(app.app_state().certifications.is_paused());

    app.handle_mouse(mouse(MouseEventKind::Moved, 0, 0), t0);
    assert!(!app.app_state().certifications.is_paused());
}

#[test]
fn tick_drives_autoplay() {
    let t0 = Instant::now();
    let (mut app, _) = create_test_app(state(0, 5, t0));
    app.tick(t0 + Duration::from_millis(4000));
    assert_eq!(app.app_state().certifications.active_index(), 3);
}

#[test]
fn draw_renders_without_error() {
    let t0 = Instant::now();
    let (mut app, _) = create_test_app(state(3, 3, t0));
    for c in ['1', '2', '3', '4', '5'] {
        app.handle_key(key(KeyCode::Char(c)), t0);
        app.draw(t0).unwrap();
    }
    let text = buffer_to_string(app.terminal().backend().buffer());
    assert!(text.contains("Send a Message"));
}
