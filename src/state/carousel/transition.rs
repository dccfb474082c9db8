//! Page transition state machine for the paginated carousel.
//!
//! `Idle → SlidingOut → Repositioned → SlidingIn → Idle`. The new page is
//! committed on entering `Repositioned`; that phase has no duration and is
//! left on the same step.

use std::time::{Duration, Instant};

/// Which way the pages move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward higher page indices.
    Forward,
    /// Toward lower page indices.
    Backward,
}

impl Direction {
    /// Infer direction from a jump: forward iff `target > current`.
    pub fn between(current: usize, target: usize) -> Self {
        if target > current {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    /// Horizontal sign of the slide-out (forward slides off to the left).
    fn exit_sign(self) -> f32 {
        match self {
            Direction::Forward => -1.0,
            Direction::Backward => 1.0,
        }
    }
}

/// Current step of a page transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    /// No transition running.
    Idle,
    /// Old page leaving the stage.
    SlidingOut {
        /// Direction of travel.
        direction: Direction,
        /// Page committed when this phase ends.
        target: usize,
        /// When the phase began.
        started: Instant,
    },
    /// New page committed and parked off-stage.
    Repositioned {
        /// Direction of travel.
        direction: Direction,
        /// When the slide-out ended.
        at: Instant,
    },
    /// New page entering the stage.
    SlidingIn {
        /// Direction of travel.
        direction: Direction,
        /// When the phase began.
        started: Instant,
    },
}

/// Where the page container should be drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideVisual {
    /// Offset as a fraction of the stage width, in `-1.0..=1.0`.
    pub offset: f32,
    /// Opacity in `0.0..=1.0`.
    pub opacity: f32,
}

impl SlideVisual {
    /// Fully visible and centred.
    pub const REST: SlideVisual = SlideVisual {
        offset: 0.0,
        opacity: 1.0,
    };
}

/// Phase tracker for one paginated carousel.
#[derive(Debug, Clone)]
pub struct Transition {
    phase: TransitionPhase,
    phase_duration: Duration,
}

impl Transition {
    /// Idle transition whose timed phases each last `phase_duration`.
    pub fn new(phase_duration: Duration) -> Self {
        Self {
            phase: TransitionPhase::Idle,
            phase_duration,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// True in any phase but `Idle`.
    pub fn is_animating(&self) -> bool {
        !matches!(self.phase, TransitionPhase::Idle)
    }

    /// Begin sliding out toward `direction`. Returns false if already animating.
    pub fn start(&mut self, direction: Direction, target: usize, now: Instant) -> bool {
        if self.is_animating() {
            return false;
        }
        self.phase = TransitionPhase::SlidingOut {
            direction,
            target,
            started: now,
        };
        true
    }

    /// Step through every phase boundary that `now` has passed.
    ///
    /// Returns the target index when the slide-out completes during this call.
    pub fn advance(&mut self, now: Instant) -> Option<usize> {
        let mut committed = None;
        loop {
            match self.phase {
                TransitionPhase::Idle => break,
                TransitionPhase::SlidingOut {
                    direction,
                    target,
                    started,
                } => {
                    let ends = started + self.phase_duration;
                    if now < ends {
                        break;
                    }
                    committed = Some(target);
                    self.phase = TransitionPhase::Repositioned { direction, at: ends };
                }
                TransitionPhase::Repositioned { direction, at } => {
                    self.phase = TransitionPhase::SlidingIn {
                        direction,
                        started: at,
                    };
                }
                TransitionPhase::SlidingIn { started, .. } => {
                    if now < started + self.phase_duration {
                        break;
                    }
                    self.phase = TransitionPhase::Idle;
                }
            }
        }
        committed
    }

    /// Offset and opacity of the page container at `now`.
    pub fn visual(&self, now: Instant) -> SlideVisual {
        match self.phase {
            TransitionPhase::Idle => SlideVisual::REST,
            TransitionPhase::SlidingOut {
                direction, started, ..
            } => {
                let p = self.progress(started, now);
                SlideVisual {
                    offset: direction.exit_sign() * p,
                    opacity: 1.0 - p,
                }
            }
            TransitionPhase::Repositioned { direction, .. } => SlideVisual {
                offset: -direction.exit_sign(),
                opacity: 0.0,
            },
            TransitionPhase::SlidingIn { direction, started } => {
                let p = self.progress(started, now);
                SlideVisual {
                    offset: -direction.exit_sign() * (1.0 - p),
                    opacity: p,
                }
            }
        }
    }

    fn progress(&self, started: Instant, now: Instant) -> f32 {
        if self.phase_duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(started).as_secs_f32();
        (elapsed / self.phase_duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHASE: Duration = Duration::from_millis(500);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn full_lifecycle_commits_once_at_phase_boundary() {
        let t0 = Instant::now();
        let mut tr = Transition::new(PHASE);
        assert!(tr.start(Direction::Forward, 2, t0));
        assert!(tr.is_animating());

        assert_eq!(tr.advance(t0 + ms(499)), None);
        assert!(matches!(tr.phase(), TransitionPhase::SlidingOut { .. }));

        assert_eq!(tr.advance(t0 + ms(500)), Some(2));
        assert!(matches!(tr.phase(), TransitionPhase::SlidingIn { .. }));

        assert_eq!(tr.advance(t0 + ms(999)), None);
        assert!(tr.is_animating());

        assert_eq!(tr.advance(t0 + ms(1000)), None);
        assert!(!tr.is_animating());
    }

    #[test]
    fn late_tick_runs_through_all_phases() {
        let t0 = Instant::now();
        let mut tr = Transition::new(PHASE);
        tr.start(Direction::Backward, 0, t0);
        assert_eq!(tr.advance(t0 + ms(5000)), Some(0));
        assert_eq!(tr.phase(), TransitionPhase::Idle);
    }

    #[test]
    fn start_is_rejected_while_animating() {
        let t0 = Instant::now();
        let mut tr = Transition::new(PHASE);
        assert!(tr.start(Direction::Forward, 1, t0));
        assert!(!tr.start(Direction::Backward, 0, t0 + ms(10)));
        assert_eq!(tr.advance(t0 + ms(500)), Some(1));
    }

    #[test]
    fn forward_slides_out_left_and_in_from_right() {
        let t0 = Instant::now();
        let mut tr = Transition::new(PHASE);
        tr.start(Direction::Forward, 1, t0);

        let mid_out = tr.visual(t0 + ms(250));
        assert!((mid_out.offset + 0.5).abs() < 1e-4);
        assert!((mid_out.opacity - 0.5).abs() < 1e-4);

        tr.advance(t0 + ms(500));
        let repositioned = tr.visual(t0 + ms(500));
        assert!((repositioned.offset - 1.0).abs() < 1e-4);
        assert_eq!(repositioned.opacity, 0.0);

        let mid_in = tr.visual(t0 + ms(750));
        assert!((mid_in.offset - 0.5).abs() < 1e-4);
    }

    #[test]
    fn backward_mirrors_forward() {
        let t0 = Instant::now();
        let mut tr = Transition::new(PHASE);
        tr.start(Direction::Backward, 0, t0);
        assert!(tr.visual(t0 + ms(250)).offset > 0.0);
        tr.advance(t0 + ms(500));
        assert!(tr.visual(t0 + ms(500)).offset < 0.0);
    }

    #[test]
    fn zero_duration_completes_on_first_advance() {
        let t0 = Instant::now();
        let mut tr = Transition::new(Duration::ZERO);
        tr.start(Direction::Forward, 3, t0);
        assert_eq!(tr.advance(t0), Some(3));
        assert!(!tr.is_animating());
    }

    #[test]
    fn direction_inference() {
        assert_eq!(Direction::between(1, 3), Direction::Forward);
        assert_eq!(Direction::between(3, 1), Direction::Backward);
    }
}
