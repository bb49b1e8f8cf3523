//! Actuator trait
//!
//! Abstracts over a single positional channel (hobby servo, smart servo,
//! simulated joint). One channel per head axis plus one for the jaw.

use crate::motion::Axis;

/// Trait for a positional actuator channel
///
/// Commands are whole degrees. Implementations clamp to whatever range
/// their hardware supports; the scheduler never relies on a command being
/// rejected.
pub trait Actuator {
    /// Command the actuator to an angle in degrees
    fn set_position(&mut self, angle: i16);

    /// Get the last commanded angle
    ///
    /// This is the value last written, not a measured position.
    fn position(&self) -> i16;
}

/// The four channels driven by the scheduler
#[derive(Debug)]
pub struct Actuators<A> {
    /// Rotation (yaw) axis
    pub rotation: A,
    /// Horizontal (tilt) axis
    pub horizontal: A,
    /// Vertical (nod) axis
    pub vertical: A,
    /// Jaw
    pub jaw: A,
}

impl<A: Actuator> Actuators<A> {
    /// Bundle four channels
    pub fn new(rotation: A, horizontal: A, vertical: A, jaw: A) -> Self {
        Self {
            rotation,
            horizontal,
            vertical,
            jaw,
        }
    }

    /// Get the channel for a head axis
    pub fn axis(&self, axis: Axis) -> &A {
        match axis {
            Axis::Rotation => &self.rotation,
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }

    /// Get the channel for a head axis mutably
    pub fn axis_mut(&mut self, axis: Axis) -> &mut A {
        match axis {
            Axis::Rotation => &mut self.rotation,
            Axis::Horizontal => &mut self.horizontal,
            Axis::Vertical => &mut self.vertical,
        }
    }
}
