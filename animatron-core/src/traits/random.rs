//! Randomness source trait

/// Uniform random draws used by the behavior subsystems
pub trait RandomSource {
    /// Uniform integer in the closed range `[lo, hi]`
    ///
    /// Callers guarantee `lo <= hi`.
    fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32;

    /// Uniform index in `0..len`
    ///
    /// Callers guarantee `len > 0`.
    fn index(&mut self, len: usize) -> usize;
}
