//! Cooperative motion scheduler
//!
//! Runs every subsystem once per tick in a fixed order. Each subsystem
//! gates itself on its own [`Cadence`], so most invocations return
//! immediately and nothing ever blocks the loop.

pub mod cadence;
pub mod context;
pub mod executor;

pub use cadence::Cadence;
pub use context::MotionContext;
pub use executor::{Animator, Event, Events, MAX_EVENTS_PER_TICK};
