//! Rotation engine shared by the certification and project carousels.
//!
//! One [`Carousel`] type covers both variants:
//!
//! - **Depth**: one active card with up to two neighbours on each side at
//!   decreasing depth. Navigation wraps and takes effect immediately.
//!   Autoplay advances it on a fixed interval.
//! - **Paginated**: pages of `page_size` cards. Navigation clamps at both
//!   ends and runs a slide-out / reposition / slide-in transition during
//!   which further requests are dropped.
//!
//! All time-dependent operations take the current `Instant`; nothing in here
//! reads the clock.

/// Depth-stage placement of cards around the active one.
pub mod depth;
/// Horizontal swipe recognition.
pub mod gesture;
/// Autoplay interval scheduling.
pub mod timer;
/// Paginated slide-out / reposition / slide-in state machine.
pub mod transition;

pub use depth::{depth_style, relative_position, DepthSlot, DepthStyle, Side};
pub use gesture::{GestureTracker, Swipe};
pub use timer::AutoplayTimer;
pub use transition::{Direction, SlideVisual, Transition, TransitionPhase};

use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Payload carried by a carousel, identified by a stable key.
pub trait CarouselItem {
    /// Stable identifier used for logging and hit testing.
    fn key(&self) -> &str;
}

impl CarouselItem for crate::adapter::ProjectCard {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl CarouselItem for crate::adapter::CertificationCard {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

/// Which of the two carousel behaviours an instance follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselKind {
    /// Wrapping single-card stage with neighbours at depth.
    Depth,
    /// Clamped pages of cards with a three-phase slide.
    Paginated,
}

/// Construction parameters for a [`Carousel`].
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    /// Behaviour variant.
    pub kind: CarouselKind,
    /// Cards per page; ignored by the depth variant. Zero is treated as 1.
    pub page_size: usize,
    /// Requested start position, clamped into range on construction.
    pub start_index: usize,
    /// `None` disables autoplay.
    pub autoplay: Option<Duration>,
    /// Length of each paginated transition phase.
    pub slide_phase: Duration,
    /// Minimum horizontal drag, in pixels, that counts as a swipe.
    pub swipe_threshold: f32,
}

/// Interval between autoplay advances.
pub const DEFAULT_AUTOPLAY: Duration = Duration::from_millis(4000);
/// Duration of one slide phase.
pub const DEFAULT_SLIDE_PHASE: Duration = Duration::from_millis(500);
/// Drag distance required before a swipe navigates.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

impl CarouselConfig {
    /// Depth carousel starting on the third card (the middle of a five-card stage).
    pub fn depth() -> Self {
        Self {
            kind: CarouselKind::Depth,
            page_size: 1,
            start_index: 2,
            autoplay: Some(DEFAULT_AUTOPLAY),
            slide_phase: DEFAULT_SLIDE_PHASE,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }

    /// Paginated carousel on page 0 with autoplay disabled.
    pub fn paginated(page_size: usize) -> Self {
        Self {
            kind: CarouselKind::Paginated,
            page_size: page_size.max(1),
            start_index: 0,
            autoplay: None,
            slide_phase: DEFAULT_SLIDE_PHASE,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }

    /// Override the autoplay interval.
    pub fn with_autoplay(mut self, autoplay: Option<Duration>) -> Self {
        self.autoplay = autoplay;
        self
    }

    /// Override the slide phase length.
    pub fn with_slide_phase(mut self, phase: Duration) -> Self {
        self.slide_phase = phase;
        self
    }

    /// Override the swipe threshold.
    pub fn with_swipe_threshold(mut self, threshold: f32) -> Self {
        self.swipe_threshold = threshold;
        self
    }
}

/// Cards of the current page plus the number of empty slots that pad it.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a, T> {
    /// Cards on the page, at most `page_size`.
    pub items: &'a [T],
    /// Empty slots needed to fill the page.
    pub placeholders: usize,
}

/// Page size for a stage of the given pixel-equivalent width.
pub fn responsive_page_size(stage_width_px: f32) -> usize {
    if stage_width_px < 768.0 {
        1
    } else if stage_width_px < 1024.0 {
        2
    } else {
        3
    }
}

/// Navigation state for a sequence of cards.
///
/// See the module docs for how the two variants differ.
#[derive(Debug, Clone)]
pub struct Carousel<T> {
    items: Vec<T>,
    kind: CarouselKind,
    page_size: usize,
    active_index: usize,
    paused: bool,
    transition: Transition,
    gesture: GestureTracker,
    autoplay: Option<AutoplayTimer>,
}

impl<T: CarouselItem> Carousel<T> {
    /// Mount a carousel over `items`, arming autoplay if it applies.
    pub fn new(items: Vec<T>, config: CarouselConfig, now: Instant) -> Self {
        let mut carousel = Self {
            items,
            kind: config.kind,
            page_size: config.page_size.max(1),
            active_index: 0,
            paused: false,
            transition: Transition::new(config.slide_phase),
            gesture: GestureTracker::new(config.swipe_threshold),
            autoplay: config.autoplay.map(AutoplayTimer::new),
        };
        carousel.active_index = config.start_index.min(carousel.bound_count() - 1);
        carousel.sync_autoplay(now);
        carousel
    }

    /// All cards in display order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when there are no cards.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Behaviour variant.
    pub fn kind(&self) -> CarouselKind {
        self.kind
    }

    /// Active card (depth) or active page (paginated).
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Cards per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// True while autoplay is paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// True while a paginated transition is running.
    pub fn is_animating(&self) -> bool {
        self.transition.is_animating()
    }

    /// Current transition phase.
    pub fn transition_phase(&self) -> TransitionPhase {
        self.transition.phase()
    }

    /// Swipe tracking state.
    pub fn gesture(&self) -> &GestureTracker {
        &self.gesture
    }

    /// True when an autoplay advance is scheduled.
    pub fn is_autoplay_armed(&self) -> bool {
        self.autoplay.as_ref().is_some_and(AutoplayTimer::is_armed)
    }

    /// Number of pages for the paginated variant (0 when empty).
    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.page_size)
    }

    /// Number of positions `active_index` ranges over, at least 1.
    pub fn bound_count(&self) -> usize {
        let count = match self.kind {
            CarouselKind::Depth => self.items.len(),
            CarouselKind::Paginated => self.total_pages(),
        };
        count.max(1)
    }

    /// Whether navigation controls should be shown at all.
    pub fn is_navigable(&self) -> bool {
        match self.kind {
            CarouselKind::Depth => self.items.len() >= 2,
            CarouselKind::Paginated => self.total_pages() >= 2,
        }
    }

    /// Whether a "previous" control should be enabled.
    pub fn has_previous(&self) -> bool {
        match self.kind {
            CarouselKind::Depth => self.is_navigable(),
            CarouselKind::Paginated => self.active_index > 0,
        }
    }

    /// Whether a "next" control should be enabled.
    pub fn has_next(&self) -> bool {
        match self.kind {
            CarouselKind::Depth => self.is_navigable(),
            CarouselKind::Paginated => self.active_index + 1 < self.total_pages(),
        }
    }

    /// Active card, or the first card of the active page.
    pub fn active_item(&self) -> Option<&T> {
        match self.kind {
            CarouselKind::Depth => self.items.get(self.active_index),
            CarouselKind::Paginated => self.items.get(self.active_index * self.page_size),
        }
    }

    /// Key of [`Carousel::active_item`].
    pub fn active_key(&self) -> Option<&str> {
        self.active_item().map(CarouselItem::key)
    }

    /// Advance one position. Returns whether the request was accepted.
    pub fn next(&mut self, now: Instant) -> bool {
        if !self.accepts_navigation() {
            return false;
        }
        match self.kind {
            CarouselKind::Depth => {
                let target = (self.active_index + 1) % self.items.len();
                self.commit(target);
                true
            }
            CarouselKind::Paginated => {
                let target = (self.active_index + 1).min(self.total_pages() - 1);
                self.begin_page_transition(target, now)
            }
        }
    }

    /// Retreat one position. Returns whether the request was accepted.
    pub fn previous(&mut self, now: Instant) -> bool {
        if !self.accepts_navigation() {
            return false;
        }
        match self.kind {
            CarouselKind::Depth => {
                let len = self.items.len();
                let target = (self.active_index + len - 1) % len;
                self.commit(target);
                true
            }
            CarouselKind::Paginated => {
                let target = self.active_index.saturating_sub(1);
                self.begin_page_transition(target, now)
            }
        }
    }

    /// Jump to `index` (a card for depth, a page for paginated).
    ///
    /// Out-of-range indices are ignored by the depth variant and clamped to
    /// the last page by the paginated one.
    pub fn go_to(&mut self, index: usize, now: Instant) -> bool {
        if !self.accepts_navigation() {
            return false;
        }
        match self.kind {
            CarouselKind::Depth => {
                if index >= self.items.len() || index == self.active_index {
                    return false;
                }
                self.commit(index);
                true
            }
            CarouselKind::Paginated => {
                let target = index.min(self.total_pages() - 1);
                self.begin_page_transition(target, now)
            }
        }
    }

    /// Jump to the first position.
    pub fn first(&mut self, now: Instant) -> bool {
        self.go_to(0, now)
    }

    /// Jump to the last position.
    pub fn last(&mut self, now: Instant) -> bool {
        self.go_to(self.bound_count() - 1, now)
    }

    /// Stop autoplay. No-op when already paused.
    pub fn pause(&mut self) {
        if self.paused {
            return;
        }
        self.paused = true;
        if let Some(timer) = self.autoplay.as_mut() {
            timer.disarm();
        }
        debug!("carousel autoplay paused");
    }

    /// Restart autoplay from `now`. No-op unless paused.
    pub fn resume(&mut self, now: Instant) {
        if !self.paused {
            return;
        }
        self.paused = false;
        self.sync_autoplay(now);
        debug!(armed = self.is_autoplay_armed(), "carousel autoplay resumed");
    }

    /// Flip between paused and running.
    pub fn toggle_pause(&mut self, now: Instant) {
        if self.paused {
            self.resume(now);
        } else {
            self.pause();
        }
    }

    /// Pointer went down at horizontal position `x`.
    pub fn gesture_start(&mut self, x: f32) {
        self.gesture.start(x);
    }

    /// Pointer moved to `x` while held.
    pub fn gesture_move(&mut self, x: f32) {
        self.gesture.update(x);
    }

    /// Resolve the pending gesture, navigating if it was a swipe.
    pub fn gesture_end(&mut self, now: Instant) -> Option<Swipe> {
        let swipe = self.gesture.finish()?;
        trace!(?swipe, "carousel swipe");
        match swipe {
            Swipe::Next => self.next(now),
            Swipe::Previous => self.previous(now),
        };
        Some(swipe)
    }

    /// Drive transitions and autoplay up to `now`.
    pub fn tick(&mut self, now: Instant) {
        if let Some(target) = self.transition.advance(now) {
            self.commit(target);
        }
        let fired = match self.autoplay.as_mut() {
            Some(timer) => timer.poll(now),
            None => false,
        };
        if fired {
            self.next(now);
        }
    }

    /// Change the page size, keeping `active_index` inside the new page range.
    pub fn set_page_size(&mut self, page_size: usize) {
        let page_size = page_size.max(1);
        if self.kind != CarouselKind::Paginated || page_size == self.page_size {
            return;
        }
        self.page_size = page_size;
        self.active_index = self.active_index.min(self.bound_count() - 1);
        debug!(page_size, active = self.active_index, "carousel page size changed");
    }

    /// Normalized relative position of `item` (depth variant).
    pub fn relative_position(&self, item: usize) -> i64 {
        relative_position(item, self.active_index, self.items.len())
    }

    /// Visual parameters for every card, in item order (depth variant).
    pub fn depth_styles(&self) -> Vec<DepthStyle> {
        (0..self.items.len())
            .map(|i| depth_style(self.relative_position(i)))
            .collect()
    }

    /// The current page (paginated variant).
    pub fn page(&self) -> PageView<'_, T> {
        let start = (self.active_index * self.page_size).min(self.items.len());
        let end = (start + self.page_size).min(self.items.len());
        let items = &self.items[start..end];
        PageView {
            items,
            placeholders: self.page_size - items.len(),
        }
    }

    /// Slide offset and opacity of the page container.
    pub fn slide_visual(&self, now: Instant) -> SlideVisual {
        self.transition.visual(now)
    }

    fn accepts_navigation(&self) -> bool {
        !self.transition.is_animating() && self.is_navigable()
    }

    fn begin_page_transition(&mut self, target: usize, now: Instant) -> bool {
        if target == self.active_index {
            return false;
        }
        let direction = Direction::between(self.active_index, target);
        let started = self.transition.start(direction, target, now);
        if started {
            // A zero-length phase completes immediately.
            self.tick_transition(now);
        }
        started
    }

    fn tick_transition(&mut self, now: Instant) {
        if let Some(target) = self.transition.advance(now) {
            self.commit(target);
        }
    }

    fn commit(&mut self, target: usize) {
        let target = target.min(self.bound_count() - 1);
        self.active_index = target;
        debug!(active = target, key = ?self.active_key(), "carousel moved");
    }

    fn sync_autoplay(&mut self, now: Instant) {
        let eligible = !self.paused && self.items.len() >= 2;
        if let Some(timer) = self.autoplay.as_mut() {
            if eligible {
                timer.arm(now);
            } else {
                timer.disarm();
            }
        }
    }
}

#[cfg(test)]
#[path = "carousel_tests.rs"]
mod tests;
