//! Embassy async tasks

pub mod animator;

pub use animator::{animator_task, FirmwareAnimator, Servo};
