//! Idle jitter
//!
//! While idle, nudges each axis baseline by a small random amount so the
//! head never looks frozen. The result is a random walk around the last
//! macro pose, held inside the axis bounds.

use crate::config::JitterConfig;
use crate::motion::Axis;
use crate::scheduler::{Cadence, MotionContext};
use crate::traits::RandomSource;

/// Idle jitter
#[derive(Debug, Clone)]
pub struct IdleJitter {
    cadence: Cadence,
    max_delta_tenths: i16,
}

impl IdleJitter {
    /// Create an idle jitter subsystem
    pub fn new(config: &JitterConfig) -> Self {
        Self {
            cadence: Cadence::new(config.interval_ms),
            max_delta_tenths: config.max_delta_tenths.max(0),
        }
    }

    /// Restart the jitter clock at `now_ms`
    ///
    /// Called after a macro pose so jitter does not fire on top of it.
    pub fn restart(&mut self, now_ms: u32) {
        self.cadence.start(now_ms);
    }

    /// Nudge every axis if idle and due
    ///
    /// Returns true if a nudge was applied.
    pub fn update<R: RandomSource>(
        &mut self,
        now_ms: u32,
        ctx: &mut MotionContext,
        rng: &mut R,
    ) -> bool {
        if !ctx.is_idle() || !self.cadence.poll(now_ms) {
            return false;
        }

        let limit = self.max_delta_tenths as i32;
        for axis in Axis::ALL {
            let delta = rng.range_inclusive(-limit, limit) as f32 / 10.0;
            let state = ctx.axis_mut(axis);
            state.set_baseline(state.baseline() + delta);
        }

        true
    }
}
