//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in animatron-core:
//!
//! - Hobby servos on a PWM channel
//! - Random source over any `rand` generator

#![no_std]
#![deny(unsafe_code)]

pub mod random;
pub mod servo;
