// src/feedback.rs
use std::time::{Duration, Instant};

/// The transient "saved" confirmation shown after a successful save.
///
/// Showing it arms a deadline; the owner polls with [`SavedFeedback::poll`]
/// on every tick and the flag drops once the deadline passes. Cancelling
/// disarms it so nothing fires against state that has been reset.
#[derive(Debug, Clone)]
pub struct SavedFeedback {
    delay: Duration,
    clear_at: Option<Instant>,
}

impl SavedFeedback {
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            clear_at: None,
        }
    }

    /// Raises the flag. Any pending deadline is replaced.
    pub fn show(&mut self, now: Instant) {
        self.clear_at = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.clear_at = None;
    }

    pub fn is_visible(&self) -> bool {
        self.clear_at.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.clear_at
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Clears the flag if its deadline has passed. Returns true if it just cleared.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.clear_at {
            Some(clear_time) if now >= clear_time => {
                self.clear_at = None;
                true
            }
            _ => false,
        }
    }
}
