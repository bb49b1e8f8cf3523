//! Head axis identifiers and per-axis motion state
//!
//! The target an axis moves toward is composed of two parts: a `baseline`
//! chosen by the macro planner and nudged by idle jitter, and an `offset`
//! applied by the breathing oscillator. The target is derived on demand, so
//! the offset never accumulates into the baseline.

use crate::config::AxisLimits;

/// Head axis identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    /// Rotation (yaw)
    Rotation,
    /// Horizontal (tilt)
    Horizontal,
    /// Vertical (nod)
    Vertical,
}

impl Axis {
    /// All axes in scheduling order
    pub const ALL: [Axis; 3] = [Axis::Rotation, Axis::Horizontal, Axis::Vertical];

    /// Index into per-axis arrays
    pub const fn index(self) -> usize {
        match self {
            Axis::Rotation => 0,
            Axis::Horizontal => 1,
            Axis::Vertical => 2,
        }
    }

    /// Config file name of the axis
    pub const fn name(self) -> &'static str {
        match self {
            Axis::Rotation => "rotation",
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
        }
    }

    /// Look up an axis by its config file name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|axis| axis.name() == name)
    }
}

/// Motion state of one head axis
///
/// Write permissions:
/// - `baseline`: macro planner and idle jitter
/// - `offset`: breathing oscillator
/// - `current` and the written value: interpolator only (crate-private)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisState {
    limits: AxisLimits,
    baseline: f32,
    offset: f32,
    current: f32,
    written: Option<i16>,
}

impl AxisState {
    /// Create state resting at the neutral angle
    pub fn new(limits: AxisLimits) -> Self {
        let neutral = limits.clamp(limits.neutral as f32);
        Self {
            limits,
            baseline: neutral,
            offset: 0.0,
            current: neutral,
            written: None,
        }
    }

    /// Angle bounds for this axis
    pub fn limits(&self) -> AxisLimits {
        self.limits
    }

    /// Baseline target (before breathing)
    pub fn baseline(&self) -> f32 {
        self.baseline
    }

    /// Set the baseline target, clamped to bounds
    pub fn set_baseline(&mut self, angle: f32) {
        self.baseline = self.limits.clamp(angle);
    }

    /// Breathing offset currently applied
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Replace the breathing offset
    pub fn set_offset(&mut self, offset: f32) {
        self.offset = offset;
    }

    /// Effective target: baseline plus offset, clamped to bounds
    pub fn target(&self) -> f32 {
        self.limits.clamp(self.baseline + self.offset)
    }

    /// Current interpolated position
    pub fn current(&self) -> f32 {
        self.current
    }

    /// Last whole-degree command sent to the actuator
    pub fn written(&self) -> Option<i16> {
        self.written
    }

    pub(crate) fn set_current(&mut self, angle: f32) {
        self.current = self.limits.clamp(angle);
    }

    pub(crate) fn mark_written(&mut self, angle: i16) {
        self.written = Some(angle);
    }

    /// Return to rest at the neutral angle with no offset
    pub(crate) fn home(&mut self) {
        *self = Self::new(self.limits);
    }
}
