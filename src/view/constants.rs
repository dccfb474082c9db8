//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

use std::time::Duration;

/// Height of the section navigation bar in lines (border + content).
pub const NAV_BAR_HEIGHT: u16 = 3;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the about-tab bar in lines.
pub const TAB_BAR_HEIGHT: u16 = 3;

/// Line holding the page or card indicator dots under a stage.
pub const DOTS_HEIGHT: u16 = 1;

/// Columns reserved on each side of the project stage for the arrows.
pub const ARROW_WIDTH: u16 = 3;

/// Height of a single-line form field (border + content).
pub const FIELD_HEIGHT: u16 = 3;

/// Minimum height of the message field.
pub const MESSAGE_FIELD_MIN_HEIGHT: u16 = 5;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Event loop poll interval. Every wake-up runs one tick.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);
