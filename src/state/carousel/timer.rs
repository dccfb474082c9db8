//! Autoplay timer owned by a single carousel.
//!
//! The deadline advances in whole intervals from the previous deadline, so
//! nothing but `arm`/`disarm` changes its phase.

use std::time::{Duration, Instant};

/// Fixed-interval deadline that fires at most once per poll.
#[derive(Debug, Clone)]
pub struct AutoplayTimer {
    interval: Duration,
    next_due: Option<Instant>,
}

impl AutoplayTimer {
    /// Disarmed timer with the given interval. A zero interval never arms.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    /// Time between fires.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// True when a deadline is scheduled.
    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Next deadline, if armed.
    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    /// Arm the timer one interval from `now`. Already-armed timers keep their phase.
    pub fn arm(&mut self, now: Instant) {
        if self.next_due.is_none() && !self.interval.is_zero() {
            self.next_due = Some(now + self.interval);
        }
    }

    /// Drop the pending deadline.
    pub fn disarm(&mut self) {
        self.next_due = None;
    }

    /// Returns true once if a deadline has passed.
    ///
    /// Deadlines missed while the event loop was stalled collapse into one fire.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }
        let mut next = due + self.interval;
        while next <= now {
            next += self.interval;
        }
        self.next_due = Some(next);
        true
    }
}
