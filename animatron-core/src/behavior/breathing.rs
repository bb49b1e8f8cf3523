//! Breathing oscillator
//!
//! Applies a slow sinusoidal offset to the vertical axis. The offset is
//! recomputed from the clock on every update and replaces the previous
//! one, so it composes with whatever baseline the planner and jitter set
//! without drifting.

use core::f32::consts::TAU;

use crate::config::BreathingConfig;
use crate::motion::Axis;
use crate::scheduler::{Cadence, MotionContext};

/// Breathing offset at `now_ms` for a cycle of `period_ms`
///
/// Phase is `(now mod period) / period`; the offset is
/// `sin(2π × phase) × amplitude`. A zero period yields no offset.
pub fn breath_offset(now_ms: u32, period_ms: u32, amplitude_deg: f32) -> f32 {
    if period_ms == 0 {
        return 0.0;
    }
    let phase = (now_ms % period_ms) as f32 / period_ms as f32;
    libm::sinf(phase * TAU) * amplitude_deg
}

/// Breathing oscillator
#[derive(Debug, Clone)]
pub struct BreathingOscillator {
    cadence: Cadence,
    period_ms: u32,
    amplitude_deg: f32,
}

impl BreathingOscillator {
    /// Create a breathing oscillator
    pub fn new(config: &BreathingConfig) -> Self {
        Self {
            cadence: Cadence::new(config.update_interval_ms),
            period_ms: config.period_ms,
            amplitude_deg: config.amplitude_deg,
        }
    }

    /// Restart the update clock at `now_ms`
    pub fn start(&mut self, now_ms: u32) {
        self.cadence.start(now_ms);
    }

    /// Refresh the vertical offset if due
    ///
    /// Returns true if the offset was updated.
    pub fn update(&mut self, now_ms: u32, ctx: &mut MotionContext) -> bool {
        if !self.cadence.poll(now_ms) {
            return false;
        }

        let offset = breath_offset(now_ms, self.period_ms, self.amplitude_deg);
        ctx.axis_mut(Axis::Vertical).set_offset(offset);
        true
    }
}
