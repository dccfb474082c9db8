//! Colour handling and shared styles.
//!
//! Every style the renderers use comes from a [`Palette`], so disabling colour
//! is a single switch.

use crate::adapter::Rgb;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Palette =====

/// Styles for one frame.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// Palette that emits colour only when `enabled`.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn fg(self, color: Color) -> Style {
        if self.enabled {
            Style::default().fg(color)
        } else {
            Style::default()
        }
    }

    /// Terminal colour for a 24-bit badge colour.
    pub fn rgb(self, rgb: Rgb) -> Color {
        if self.enabled {
            Color::Rgb(rgb.r, rgb.g, rgb.b)
        } else {
            Color::Reset
        }
    }

    /// Highlight colour for links and active items.
    pub fn accent(self) -> Style {
        self.fg(Color::Cyan)
    }

    /// Section and card titles.
    pub fn title(self) -> Style {
        self.fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    /// Key names in hints and the help overlay.
    pub fn key(self) -> Style {
        self.fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    /// Secondary text.
    pub fn muted(self) -> Style {
        self.fg(Color::DarkGray)
    }

    /// Validation and send errors.
    pub fn error(self) -> Style {
        self.fg(Color::Red)
    }

    /// Confirmation messages.
    pub fn success(self) -> Style {
        self.fg(Color::Green)
    }

    /// Selected tab or accordion row.
    pub fn selected(self) -> Style {
        self.accent().add_modifier(Modifier::REVERSED)
    }

    /// Border of the focused widget. Falls back to bold without colour so the
    /// focus stays visible.
    pub fn focused_border(self) -> Style {
        if self.enabled {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        }
    }

    /// Filled badge: coloured background with readable text on top.
    pub fn badge(self, rgb: Rgb) -> Style {
        if !self.enabled {
            return Style::default().add_modifier(Modifier::REVERSED);
        }
        let text = if rgb.is_dark() {
            Color::White
        } else {
            Color::Black
        };
        Style::default().bg(self.rgb(rgb)).fg(text)
    }

    /// Style for a card drawn at reduced opacity.
    pub fn faded(self, opacity: f32, base: Style) -> Style {
        if opacity < 1.0 {
            base.add_modifier(Modifier::DIM)
        } else {
            base
        }
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial(no_color)]
    fn color_config_respects_no_color_flag() {
        let config = ColorConfig::from_env_and_args(true);
        assert!(
            !config.colors_enabled(),
            "--no-color flag should disable colors"
        );
    }

    #[test]
    #[serial(no_color)]
    fn color_config_respects_no_color_env_var() {
        std::env::set_var("NO_COLOR", "1");
        let config = ColorConfig::from_env_and_args(false);
        assert!(
            !config.colors_enabled(),
            "NO_COLOR env var should disable colors"
        );
        std::env::remove_var("NO_COLOR");
    }

    #[test]
    #[serial(no_color)]
    fn color_config_enables_colors_by_default() {
        std::env::remove_var("NO_COLOR");
        let config = ColorConfig::from_env_and_args(false);
        assert!(config.colors_enabled());
    }

    #[test]
    fn disabled_palette_drops_colours() {
        let palette = Palette::new(false);
        assert_eq!(palette.accent(), Style::default());
        assert_eq!(palette.rgb(Rgb::from_hex(0xFF9900)), Color::Reset);
    }

    #[test]
    fn badge_text_contrasts_with_background() {
        let palette = Palette::new(true);
        let dark = palette.badge(Rgb::from_hex(0x1F2937));
        let light = palette.badge(Rgb::from_hex(0xF7DF1E));
        assert_eq!(dark.fg, Some(Color::White));
        assert_eq!(light.fg, Some(Color::Black));
        assert_eq!(light.bg, Some(Color::Rgb(0xF7, 0xDF, 0x1E)));
    }

    #[test]
    fn faded_dims_only_partial_opacity() {
        let palette = Palette::new(true);
        let base = palette.accent();
        assert_eq!(palette.faded(1.0, base), base);
        assert!(palette
            .faded(0.7, base)
            .add_modifier
            .contains(Modifier::DIM));
    }
}
