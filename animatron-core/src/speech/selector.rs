//! Phrase scheduler
//!
//! Picks the next phrase once the head has been idle for the configured
//! interval. Never interrupts a phrase in progress.

use crate::config::SpeechConfig;
use crate::scheduler::{Cadence, MotionContext};
use crate::traits::RandomSource;

use super::phrases::PhraseCatalog;

/// Phrase scheduler
#[derive(Debug, Clone)]
pub struct PhraseScheduler {
    /// Time since the previous phrase ended (or since startup)
    idle: Cadence,
}

impl PhraseScheduler {
    /// Create a phrase scheduler
    pub fn new(config: &SpeechConfig) -> Self {
        Self {
            idle: Cadence::new(config.phrase_interval_ms),
        }
    }

    /// Mark the start of an idle period
    ///
    /// Call when a phrase finishes; the next phrase is due one interval
    /// later.
    pub fn mark_idle(&mut self, now_ms: u32) {
        self.idle.start(now_ms);
    }

    /// Milliseconds until the next phrase is due (zero if overdue)
    pub fn remaining_ms(&self, now_ms: u32) -> u32 {
        self.idle
            .interval_ms()
            .saturating_sub(self.idle.elapsed(now_ms))
    }

    /// Start a random phrase if idle and due
    ///
    /// Returns the catalog index of the phrase started.
    pub fn update<R: RandomSource>(
        &mut self,
        now_ms: u32,
        ctx: &mut MotionContext,
        catalog: &PhraseCatalog<'_>,
        rng: &mut R,
    ) -> Option<usize> {
        if !ctx.is_idle() || catalog.is_empty() || !self.idle.is_due(now_ms) {
            return None;
        }

        let index = rng.index(catalog.len()).min(catalog.len() - 1);
        let text = catalog.get(index)?;
        ctx.phrase_mut().load(text);

        // An empty catalog entry leaves us idle; wait a full interval again
        if ctx.is_idle() {
            self.idle.start(now_ms);
            return None;
        }

        Some(index)
    }
}
