//! Depth-carousel placement: relative position of each card and its visual weight.

/// Which side of the centre card a card sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Before the active card.
    Left,
    /// After the active card.
    Right,
}

/// Discrete stage slot derived from the normalized relative position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthSlot {
    /// The active card.
    Center,
    /// One position away.
    Near(Side),
    /// Two positions away.
    Far(Side),
    /// Outside the visible window.
    Hidden,
}

/// Visual parameters for one card on the depth stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthStyle {
    /// Normalized relative position (see [`relative_position`]).
    pub relative: i64,
    /// Slot the card occupies.
    pub slot: DepthSlot,
    /// Opacity in `0.0..=1.0`.
    pub opacity: f32,
    /// Size relative to the centre card.
    pub scale: f32,
    /// Stacking order; centre-most is highest.
    pub z_index: i64,
    /// Horizontal shift as a percentage of card width (negative = left).
    pub shift_percent: i16,
    /// Rotation around the vertical axis in degrees.
    pub rotate_deg: i8,
}

/// Signed distance of `item` from `active`, folded into the ±2 display window.
///
/// This is not a true shortest-path distance: `r < -2` gains `len`, `r > 2`
/// loses `len`, once. For `len = 7, active = 3`, item 0 has raw `-3`, which
/// becomes `4` and stays outside the window.
pub fn relative_position(item: usize, active: usize, len: usize) -> i64 {
    let len = len as i64;
    let mut relative = item as i64 - active as i64;
    if relative < -2 {
        relative += len;
    } else if relative > 2 {
        relative -= len;
    }
    relative
}

/// Map a normalized relative position to its stage slot and styling.
pub fn depth_style(relative: i64) -> DepthStyle {
    let z_index = 20 - relative.abs() * 5;
    let (slot, opacity, scale, shift_percent, rotate_deg) = match relative {
        0 => (DepthSlot::Center, 1.0, 1.0, 0, 0),
        1 => (DepthSlot::Near(Side::Right), 0.9, 0.85, 85, -5),
        -1 => (DepthSlot::Near(Side::Left), 0.9, 0.85, -85, 5),
        2 => (DepthSlot::Far(Side::Right), 0.7, 0.7, 160, -10),
        -2 => (DepthSlot::Far(Side::Left), 0.7, 0.7, -160, 10),
        _ => (DepthSlot::Hidden, 0.0, 0.5, 0, 0),
    };
    DepthStyle {
        relative,
        slot,
        opacity,
        scale,
        z_index,
        shift_percent,
        rotate_deg,
    }
}
