//! Cadence timer
//!
//! The scheduling primitive shared by every subsystem: a fixed interval and
//! the timestamp it last fired. Missing a window never drops work, it only
//! defers it to the next poll.

use crate::traits::clock::elapsed_ms;

/// Fixed-interval gate over a wrapping millisecond clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cadence {
    interval_ms: u32,
    last_ms: u32,
}

impl Cadence {
    /// Create a cadence that last fired at time zero
    pub const fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            last_ms: 0,
        }
    }

    /// Interval between firings
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Timestamp of the last firing (or restart)
    pub fn last_ms(&self) -> u32 {
        self.last_ms
    }

    /// Restart the interval from `now_ms` without firing
    pub fn start(&mut self, now_ms: u32) {
        self.last_ms = now_ms;
    }

    /// Time since the last firing
    pub fn elapsed(&self, now_ms: u32) -> u32 {
        elapsed_ms(now_ms, self.last_ms)
    }

    /// Check if the interval has elapsed
    pub fn is_due(&self, now_ms: u32) -> bool {
        self.elapsed(now_ms) >= self.interval_ms
    }

    /// Fire if due, restarting the interval at `now_ms`
    pub fn poll(&mut self, now_ms: u32) -> bool {
        self.poll_elapsed(now_ms).is_some()
    }

    /// Fire if due and return the time since the previous firing
    pub fn poll_elapsed(&mut self, now_ms: u32) -> Option<u32> {
        let elapsed = self.elapsed(now_ms);
        if elapsed >= self.interval_ms {
            self.last_ms = now_ms;
            Some(elapsed)
        } else {
            None
        }
    }
}
