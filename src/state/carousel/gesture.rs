//! Horizontal swipe recognition.

/// Outcome of a completed gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Moved toward decreasing x: show the next item.
    Next,
    /// Moved toward increasing x: show the previous item.
    Previous,
}

/// Start and latest pointer x of a drag in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureTracker {
    threshold: f32,
    start: Option<f32>,
    end: Option<f32>,
}

impl GestureTracker {
    /// Tracker that needs more than `threshold` pixels to register a swipe.
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start: None,
            end: None,
        }
    }

    /// Record where the drag began.
    pub fn start(&mut self, x: f32) {
        self.start = Some(x);
    }

    /// Record the latest pointer position.
    pub fn update(&mut self, x: f32) {
        self.end = Some(x);
    }

    /// True between [`GestureTracker::start`] and [`GestureTracker::finish`].
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Start and latest x, for inspection.
    pub fn coordinates(&self) -> (Option<f32>, Option<f32>) {
        (self.start, self.end)
    }

    /// Resolve the gesture and clear both coordinates.
    ///
    /// A swipe needs both coordinates and a distance strictly above the threshold.
    pub fn finish(&mut self) -> Option<Swipe> {
        let start = self.start.take();
        let end = self.end.take();
        let distance = start? - end?;
        if distance.abs() <= self.threshold {
            return None;
        }
        Some(if distance > 0.0 {
            Swipe::Next
        } else {
            Swipe::Previous
        })
    }
}
