//! Head motion
//!
//! Per-axis target/current state and the rate-limited interpolation that
//! turns it into actuator commands.

pub mod axis;
pub mod interpolator;

pub use axis::{Axis, AxisState};
pub use interpolator::{approach, AxisInterpolator};
