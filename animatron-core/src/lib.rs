//! Board-agnostic core logic for the animatronic head firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (actuator, clock, randomness)
//! - Cooperative scheduler and cadence timers
//! - Head motion (macro planner, idle jitter, breathing, interpolation)
//! - Speech (letter tables, phrase catalog, jaw drive and smoothing)
//! - Configuration type definitions and parsing

#![no_std]
#![deny(unsafe_code)]

pub mod behavior;
pub mod config;
pub mod motion;
pub mod scheduler;
pub mod speech;
pub mod traits;

#[cfg(test)]
pub(crate) mod mock;
