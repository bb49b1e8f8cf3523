//! Random source over a `rand` generator

use animatron_core::traits::RandomSource;
use rand::{Rng, RngCore};

/// Adapts any [`RngCore`] to [`RandomSource`]
pub struct RngSource<R> {
    rng: R,
}

impl<R: RngCore> RngSource<R> {
    /// Wrap a generator
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Release the generator
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore> RandomSource for RngSource<R> {
    fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }

    fn index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}
