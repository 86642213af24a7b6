//! Cancellable debounce timer for search input.
//!
//! Each keystroke re-arms the deadline, so the filter runs once per
//! quiescence period rather than once per keystroke.

use std::time::{Duration, Instant};

/// A single re-armable deadline.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    /// Create a debouncer with the given quiescence delay.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Schedule (or reschedule) the deadline. Any previously armed deadline
    /// is replaced.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Returns true exactly once after the armed deadline has passed, and
    /// disarms the timer.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Whether a deadline is currently pending.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }
}
