//! Random source implementations

pub mod rng;

pub use rng::RngSource;
