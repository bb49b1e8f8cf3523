//! Jaw smoother
//!
//! Two-tier approach to the jaw target: a large gap (more than two steps)
//! is closed in one jump so fast speech never lags, a small gap is walked
//! one step per smoothing interval so small moves look natural.

use crate::config::JawConfig;
use crate::scheduler::Cadence;
use crate::traits::Actuator;

/// One smoothing step from `current` toward `target`
///
/// Moves at most `step` and never past `target`.
pub fn jaw_step(current: i16, target: i16, step: i16) -> i16 {
    let step = step.max(1) as i32;
    let diff = target as i32 - current as i32;
    (current as i32 + diff.clamp(-step, step)) as i16
}

/// Jaw smoother
#[derive(Debug, Clone)]
pub struct JawSmoother {
    config: JawConfig,
    cadence: Cadence,
}

impl JawSmoother {
    /// Create a jaw smoother
    pub fn new(config: &JawConfig) -> Self {
        Self {
            config: *config,
            cadence: Cadence::new(config.smooth_interval_ms),
        }
    }

    /// Restart the smoothing clock at `now_ms`
    pub fn start(&mut self, now_ms: u32) {
        self.cadence.start(now_ms);
    }

    /// Move the jaw toward `target`
    ///
    /// The target is clamped to the jaw range. Returns true if the actuator
    /// was commanded.
    pub fn update<A: Actuator>(&mut self, now_ms: u32, target: i16, jaw: &mut A) -> bool {
        let target = self.config.clamp(target);
        let current = jaw.position();
        if current == target {
            return false;
        }

        let gap = (target as i32 - current as i32).abs();
        if gap > 2 * self.config.step as i32 {
            jaw.set_position(target);
            self.cadence.start(now_ms);
            return true;
        }

        if !self.cadence.poll(now_ms) {
            return false;
        }

        jaw.set_position(jaw_step(current, target, self.config.step));
        true
    }
}
