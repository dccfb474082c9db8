//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Section navigation
    /// Move to the next section (Home → About → ... → Contact → Home). Default: Tab
    NextSection,
    /// Move to the previous section. Default: Shift+Tab
    PrevSection,
    /// Jump to a section by its 1-based position. Default: 1-5
    SelectSection(usize),

    // Carousel
    /// Advance the focused carousel. Default: l/→
    CarouselNext,
    /// Retreat the focused carousel. Default: h/←
    CarouselPrev,
    /// Jump to the first card/page. Default: g/Home
    CarouselFirst,
    /// Jump to the last card/page. Default: G/End
    CarouselLast,
    /// Pause or resume autoplay. Default: p
    ToggleAutoplay,

    // About section
    /// Switch to the next about tab. Default: ]
    NextTab,
    /// Switch to the previous about tab. Default: [
    PrevTab,
    /// Move the accordion cursor down. Default: j/↓
    CursorDown,
    /// Move the accordion cursor up. Default: k/↑
    CursorUp,
    /// Expand or collapse the entry under the cursor. Default: Enter/Space
    ToggleExpand,

    // Contact form
    /// Start editing the contact form. Default: i
    EditForm,
    /// Submit the contact form. Default: Ctrl+s
    SubmitForm,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
}
