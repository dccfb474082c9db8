//! TUI rendering and terminal management (impure shell)

mod about;
mod certifications;
/// Layout sizes and timing.
pub mod constants;
mod contact;
mod help;
mod helpers;
mod home;
/// Frame layout and mouse hit testing.
pub mod layout;
mod projects;
mod styles;
#[cfg(test)]
mod test_support;

pub use help::render_help_overlay;
pub use layout::{HitMap, HitTarget};
pub use styles::{ColorConfig, Palette};

use crate::config::keybindings::KeyBindings;
use crate::email::{EmailDispatcher, SendWorker};
use crate::state::{AppState, Effect, FormInput, Section};
use constants::TICK_INTERVAL;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    worker: SendWorker,
    /// Click targets of the last rendered frame
    hit_map: HitMap,
    /// Whether the pointer was over the certification stage on the last move
    hovering_stage: bool,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture
    pub fn new(
        app_state: AppState,
        dispatcher: Arc<dyn EmailDispatcher>,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::with_terminal(terminal, app_state, dispatcher))
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Wrap an already prepared terminal.
    pub fn with_terminal(
        terminal: Terminal<B>,
        mut app_state: AppState,
        dispatcher: Arc<dyn EmailDispatcher>,
    ) -> Self {
        if let Ok(size) = terminal.size() {
            app_state.resize_stage(size.width);
        }
        Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            worker: SendWorker::new(dispatcher),
            hit_map: HitMap::default(),
            hovering_stage: false,
        }
    }

    /// Borrow the current application state.
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Borrow the underlying terminal.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Run the event loop until quit.
    ///
    /// Polls for input with a short timeout; every wake-up, input or not,
    /// ticks the state and redraws.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw(Instant::now())?;

        loop {
            if event::poll(TICK_INTERVAL)? {
                let now = Instant::now();
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key, now) {
                            info!("quit requested");
                            break;
                        }
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse, now),
                    Event::Resize(width, height) => self.handle_resize(width, height),
                    _ => {}
                }
            }

            let now = Instant::now();
            self.tick(now);
            self.draw(now)?;
        }

        Ok(())
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        // Ctrl+C always quits, even while typing into the form
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if key.code == KeyCode::Esc && self.app_state.help_visible {
            self.app_state.help_visible = false;
            return false;
        }

        if self.app_state.is_capturing_input() {
            let effect = self
                .form_input(key)
                .and_then(|input| self.app_state.handle_form_input(input));
            return self.apply_effect(effect);
        }

        if key.code == KeyCode::Esc && self.app_state.section == Section::Contact {
            self.app_state.contact.dismiss_notice();
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        // The help overlay swallows everything but its own toggle and quit
        if self.app_state.help_visible
            && !matches!(
                action,
                crate::model::KeyAction::Help | crate::model::KeyAction::Quit
            )
        {
            return false;
        }

        let effect = self.app_state.handle_key_action(action, now);
        self.apply_effect(effect)
    }

    /// Map a key to form editing input while the contact form captures keys.
    fn form_input(&self, key: KeyEvent) -> Option<FormInput> {
        let control = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('s') if control => Some(FormInput::Submit),
            KeyCode::Char(_) if control => None,
            KeyCode::Char(c) => Some(FormInput::Char(c)),
            KeyCode::Backspace => Some(FormInput::Backspace),
            KeyCode::Tab | KeyCode::Down => Some(FormInput::NextField),
            KeyCode::BackTab | KeyCode::Up => Some(FormInput::PrevField),
            KeyCode::Enter
                if self.app_state.contact.focus() == crate::model::ContactField::Message =>
            {
                Some(FormInput::Char('\n'))
            }
            KeyCode::Enter => Some(FormInput::NextField),
            KeyCode::Esc => Some(FormInput::Exit),
            _ => None,
        }
    }

    /// Perform a state-requested side effect. Returns true on quit.
    fn apply_effect(&mut self, effect: Option<Effect>) -> bool {
        match effect {
            Some(Effect::Quit) => true,
            Some(Effect::SendContact(payload)) => {
                self.worker.submit(payload);
                false
            }
            None => false,
        }
    }

    /// Handle a mouse event against the last rendered frame.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        let (column, row) = (mouse.column, mouse.row);
        let x = f32::from(column) * self.app_state.settings().cell_width_px;

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if self.hit_map.is_on_stage(column, row) => {
                match self.app_state.section {
                    Section::Projects => self.app_state.projects.gesture_start(x),
                    Section::Certifications => self.app_state.certifications.gesture_start(x),
                    _ => {}
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => match self.app_state.section {
                Section::Projects => self.app_state.projects.gesture_move(x),
                Section::Certifications => self.app_state.certifications.gesture_move(x),
                _ => {}
            },
            MouseEventKind::Up(MouseButton::Left) => {
                let swipe = match self.app_state.section {
                    Section::Projects => self.app_state.projects.gesture_end(now),
                    Section::Certifications => self.app_state.certifications.gesture_end(now),
                    _ => None,
                };
                // A release that was not a swipe is a click.
                match swipe {
                    Some(swipe) => debug!(?swipe, "swipe"),
                    None => {
                        if let Some(target) = self.hit_map.target_at(column, row) {
                            self.activate(target, now);
                        }
                    }
                }
            }
            MouseEventKind::Moved => {
                let hovering = self.app_state.section == Section::Certifications
                    && self.hit_map.is_on_stage(column, row);
                if hovering != self.hovering_stage {
                    self.hovering_stage = hovering;
                    self.app_state.hover_certifications(hovering, now);
                }
            }
            _ => {}
        }
    }

    fn activate(&mut self, target: HitTarget, now: Instant) {
        debug!(?target, section = %self.app_state.section, "click");
        match (self.app_state.section, target) {
            (Section::Certifications, HitTarget::Card(index) | HitTarget::Dot(index)) => {
                self.app_state.certifications.go_to(index, now);
            }
            (Section::Certifications, HitTarget::Previous) => {
                self.app_state.certifications.previous(now);
            }
            (Section::Certifications, HitTarget::Next) => {
                self.app_state.certifications.next(now);
            }
            (Section::Projects, HitTarget::Dot(page)) => {
                self.app_state.projects.go_to(page, now);
            }
            (Section::Projects, HitTarget::Previous) => {
                self.app_state.projects.previous(now);
            }
            (Section::Projects, HitTarget::Next) => {
                self.app_state.projects.next(now);
            }
            _ => {}
        }
    }

    /// Handle a terminal resize event
    fn handle_resize(&mut self, width: u16, height: u16) {
        debug!("Handling resize to {}x{}", width, height);
        self.app_state.resize_stage(width);
    }

    /// Drive timers and collect finished email sends.
    pub fn tick(&mut self, now: Instant) {
        while let Some(result) = self.worker.try_recv() {
            self.app_state.apply_send_result(result, now);
        }
        self.app_state.tick(now);
    }

    /// Render the current frame and remember its click targets.
    pub fn draw(&mut self, now: Instant) -> Result<(), TuiError> {
        let state = &self.app_state;
        let mut hit_map = HitMap::default();
        self.terminal.draw(|frame| {
            hit_map = layout::render(frame, state, now);
        })?;
        self.hit_map = hit_map;
        Ok(())
    }
}

/// Initialize and run the TUI application
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(app_state: AppState, dispatcher: Arc<dyn EmailDispatcher>) -> Result<(), TuiError> {
    let mut app = TuiApp::new(app_state, dispatcher)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
