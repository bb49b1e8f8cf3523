//! Test doubles for the hardware traits

use core::cell::Cell;

use crate::traits::{Actuator, Clock, RandomSource};

/// Actuator that records what it was told
#[derive(Debug, Clone, Default)]
pub struct MockServo {
    pub angle: i16,
    pub writes: u32,
}

impl MockServo {
    pub fn at(angle: i16) -> Self {
        Self { angle, writes: 0 }
    }
}

impl Actuator for MockServo {
    fn set_position(&mut self, angle: i16) {
        self.angle = angle;
        self.writes += 1;
    }

    fn position(&self) -> i16 {
        self.angle
    }
}

/// Clock advanced by hand
#[derive(Debug, Default)]
pub struct MockClock {
    now: Cell<u32>,
}

impl MockClock {
    pub fn set(&self, now_ms: u32) {
        self.now.set(now_ms);
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u32 {
        self.now.get()
    }
}

/// Random source returning fixed values, clamped into the requested range
#[derive(Debug, Clone)]
pub struct FixedRng {
    value: i32,
    index: usize,
}

impl FixedRng {
    pub fn new(value: i32, index: usize) -> Self {
        Self { value, index }
    }
}

impl RandomSource for FixedRng {
    fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        self.value.clamp(lo, hi)
    }

    fn index(&mut self, len: usize) -> usize {
        self.index.min(len - 1)
    }
}

/// Linear congruential generator for long randomized runs
#[derive(Debug, Clone)]
pub struct LcgRng(pub u32);

impl LcgRng {
    fn next(&mut self) -> u32 {
        self.0 = self.0.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        self.0 >> 8
    }
}

impl RandomSource for LcgRng {
    fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        let span = (hi as i64 - lo as i64 + 1) as u64;
        (lo as i64 + (self.next() as u64 % span) as i64) as i32
    }

    fn index(&mut self, len: usize) -> usize {
        self.next() as usize % len
    }
}
