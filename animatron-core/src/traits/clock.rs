//! Monotonic clock trait

/// Monotonic millisecond counter
///
/// The counter is allowed to wrap. Consumers compare timestamps with
/// wrapping subtraction only.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin
    fn now_ms(&self) -> u32;
}

/// Milliseconds elapsed from `since` to `now`, tolerant of counter wrap
#[inline]
pub fn elapsed_ms(now: u32, since: u32) -> u32 {
    now.wrapping_sub(since)
}
