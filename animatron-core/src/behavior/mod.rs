//! Head behaviors
//!
//! Subsystems that write axis targets: periodic random poses, idle jitter
//! around the current pose, and the breathing offset on the vertical axis.

pub mod breathing;
pub mod head;
pub mod jitter;

pub use breathing::{breath_offset, BreathingOscillator};
pub use head::HeadMacroPlanner;
pub use jitter::IdleJitter;
