//! Hardware abstraction traits
//!
//! These traits define the interface between the motion logic
//! and hardware-specific implementations.

pub mod actuator;
pub mod clock;
pub mod random;

pub use actuator::{Actuator, Actuators};
pub use clock::Clock;
pub use random::RandomSource;
