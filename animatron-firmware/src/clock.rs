//! Millisecond clock over the embassy time driver

use animatron_core::traits::Clock;
use embassy_time::Instant;

/// Milliseconds since boot, wrapping at `u32::MAX`
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}
