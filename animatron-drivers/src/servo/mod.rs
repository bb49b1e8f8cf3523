//! Servo driver implementations
//!
//! Standard hobby servos: angle set by pulse width within a fixed frame
//! (typically 500-2500 µs every 20 ms).

pub mod pwm;

pub use pwm::{PwmServo, PwmServoConfig};
