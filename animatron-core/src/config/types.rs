//! Configuration type definitions
//!
//! These types parameterize every behavior of the scheduler. The firmware
//! parses them from the embedded `animatron.toml` at boot; `Default`
//! carries the stock tuning.

use crate::motion::Axis;

/// Maximum phrase length in characters (longer phrases are truncated)
pub const MAX_PHRASE_LEN: usize = 64;

/// Behavior toggles, read once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FeatureFlags {
    /// Drive the jaw actuator from speech
    pub jaw: bool,
    /// Periodic random head repositioning
    pub head: bool,
    /// Small random nudges while idle
    pub idle_jitter: bool,
    /// Sinusoidal offset on the vertical axis
    pub breathing: bool,
    /// Pick and speak phrases from the catalog
    pub phrases: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            jaw: true,
            head: true,
            idle_jitter: true,
            breathing: true,
            phrases: true,
        }
    }
}

/// Angle bounds for one head axis, in whole degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisLimits {
    /// Lowest allowed angle
    pub min: i16,
    /// Highest allowed angle
    pub max: i16,
    /// Resting angle used at startup
    pub neutral: i16,
}

impl AxisLimits {
    /// Create limits with the neutral angle at the midpoint
    pub const fn new(min: i16, max: i16) -> Self {
        Self {
            min,
            max,
            neutral: (min as i32 + (max as i32 - min as i32) / 2) as i16,
        }
    }

    /// Bounds as `(low, high)`, whichever order `min` and `max` were given in
    pub fn bounds(&self) -> (i16, i16) {
        if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        }
    }

    /// Check if an angle is within bounds
    pub fn contains(&self, angle: f32) -> bool {
        let (lo, hi) = self.bounds();
        angle >= lo as f32 && angle <= hi as f32
    }

    /// Clamp an angle to valid bounds
    pub fn clamp(&self, angle: f32) -> f32 {
        let (lo, hi) = self.bounds();
        angle.clamp(lo as f32, hi as f32)
    }
}

/// Per-axis configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisConfig {
    /// Angle bounds
    pub limits: AxisLimits,
    /// Maximum interpolation speed in degrees per second
    pub speed_deg_s: f32,
}

/// Head motion configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HeadConfig {
    /// Rotation (yaw) axis
    pub rotation: AxisConfig,
    /// Horizontal (tilt) axis
    pub horizontal: AxisConfig,
    /// Vertical (nod) axis
    pub vertical: AxisConfig,
    /// Interval between random macro poses (ms)
    pub move_interval_ms: u32,
    /// Interval between interpolation steps (ms)
    pub interpolate_interval_ms: u32,
}

impl HeadConfig {
    /// Get the configuration for an axis
    pub fn axis(&self, axis: Axis) -> &AxisConfig {
        match axis {
            Axis::Rotation => &self.rotation,
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }

    /// Get the configuration for an axis mutably
    pub fn axis_mut(&mut self, axis: Axis) -> &mut AxisConfig {
        match axis {
            Axis::Rotation => &mut self.rotation,
            Axis::Horizontal => &mut self.horizontal,
            Axis::Vertical => &mut self.vertical,
        }
    }
}

impl Default for HeadConfig {
    fn default() -> Self {
        Self {
            rotation: AxisConfig {
                limits: AxisLimits::new(60, 120),
                speed_deg_s: 12.0,
            },
            horizontal: AxisConfig {
                limits: AxisLimits::new(70, 110),
                speed_deg_s: 10.0,
            },
            vertical: AxisConfig {
                limits: AxisLimits::new(75, 115),
                speed_deg_s: 8.0,
            },
            move_interval_ms: 4000,
            interpolate_interval_ms: 20,
        }
    }
}

/// Idle jitter configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JitterConfig {
    /// Interval between nudges (ms)
    pub interval_ms: u32,
    /// Largest nudge in tenths of a degree (drawn from ±this)
    pub max_delta_tenths: i16,
}

impl Default for JitterConfig {
    fn default() -> Self {
        Self {
            interval_ms: 600,
            max_delta_tenths: 15,
        }
    }
}

/// Breathing oscillation configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BreathingConfig {
    /// Interval between offset updates (ms)
    pub update_interval_ms: u32,
    /// Length of one breath cycle (ms)
    pub period_ms: u32,
    /// Peak offset in degrees
    pub amplitude_deg: f32,
}

impl Default for BreathingConfig {
    fn default() -> Self {
        Self {
            update_interval_ms: 20,
            period_ms: 3000,
            amplitude_deg: 2.0,
        }
    }
}

/// Jaw actuator configuration
///
/// The aperture scale is inverted: `open` is numerically below `closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JawConfig {
    /// Fully closed angle
    pub closed: i16,
    /// Fully open angle
    pub open: i16,
    /// Smoothing step in degrees
    pub step: i16,
    /// Interval between smoothing steps (ms)
    pub smooth_interval_ms: u32,
}

impl JawConfig {
    /// Clamp an aperture into `[open, closed]`
    ///
    /// A swapped range is clamped between the same two angles.
    pub fn clamp(&self, aperture: i16) -> i16 {
        let lo = self.open.min(self.closed);
        let hi = self.open.max(self.closed);
        aperture.clamp(lo, hi)
    }
}

impl Default for JawConfig {
    fn default() -> Self {
        Self {
            closed: 120,
            open: 80,
            step: 3,
            smooth_interval_ms: 10,
        }
    }
}

/// Speech timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpeechConfig {
    /// Time spent on each letter (ms)
    pub letter_ms: u32,
    /// Extra silence after a space or punctuation mark (ms)
    pub pause_ms: u32,
    /// Idle time between the end of one phrase and the next (ms)
    pub phrase_interval_ms: u32,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            letter_ms: 90,
            pause_ms: 180,
            phrase_interval_ms: 8000,
        }
    }
}

/// Complete scheduler configuration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnimatronConfig {
    /// Behavior toggles
    pub features: FeatureFlags,
    /// Head axes and macro motion
    pub head: HeadConfig,
    /// Idle jitter
    pub jitter: JitterConfig,
    /// Breathing
    pub breathing: BreathingConfig,
    /// Jaw actuator
    pub jaw: JawConfig,
    /// Speech timing
    pub speech: SpeechConfig,
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Axis has `min > max` or a neutral angle outside its bounds
    InvalidAxisLimits(Axis),
    /// Axis speed is negative or not a number
    InvalidAxisSpeed(Axis),
    /// Jaw open angle is not below the closed angle
    InvalidJawRange,
    /// Jaw smoothing step is not positive
    InvalidJawStep,
    /// Breathing period is zero
    InvalidBreathPeriod,
    /// Jitter delta is negative
    InvalidJitterDelta,
}

impl AnimatronConfig {
    /// Check the configuration for values the scheduler cannot honor
    pub fn validate(&self) -> Result<(), ConfigError> {
        for axis in Axis::ALL {
            let cfg = self.head.axis(axis);
            let limits = cfg.limits;
            if limits.min > limits.max
                || limits.neutral < limits.min
                || limits.neutral > limits.max
            {
                return Err(ConfigError::InvalidAxisLimits(axis));
            }
            if cfg.speed_deg_s.is_nan() || cfg.speed_deg_s < 0.0 {
                return Err(ConfigError::InvalidAxisSpeed(axis));
            }
        }

        if self.jaw.open >= self.jaw.closed {
            return Err(ConfigError::InvalidJawRange);
        }
        if self.jaw.step <= 0 {
            return Err(ConfigError::InvalidJawStep);
        }
        if self.breathing.period_ms == 0 {
            return Err(ConfigError::InvalidBreathPeriod);
        }
        if self.jitter.max_delta_tenths < 0 {
            return Err(ConfigError::InvalidJitterDelta);
        }

        Ok(())
    }
}
