//! Speech driver
//!
//! Steps through the active phrase one character per letter interval and
//! sets the jaw target for each. Spaces and punctuation close the jaw and
//! hold the phrase for an extra pause; the pause is a deadline checked on
//! later ticks, so the rest of the scheduler keeps running through it.

use crate::config::{JawConfig, SpeechConfig};
use crate::scheduler::{Cadence, MotionContext};
use crate::traits::clock::elapsed_ms;

use super::letters::{aperture_for, is_pause};

/// Notable transitions in phrase playback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpeechEvent {
    /// The phrase ran out of characters and was cleared
    Finished,
}

/// Speech driver
#[derive(Debug, Clone)]
pub struct SpeechDriver {
    jaw: JawConfig,
    pause_ms: u32,
    letters: Cadence,
    /// Start of the current punctuation pause
    paused_at: Option<u32>,
}

impl SpeechDriver {
    /// Create a speech driver
    pub fn new(speech: &SpeechConfig, jaw: &JawConfig) -> Self {
        Self {
            jaw: *jaw,
            pause_ms: speech.pause_ms,
            letters: Cadence::new(speech.letter_ms),
            paused_at: None,
        }
    }

    /// Restart letter timing at `now_ms`
    pub fn start(&mut self, now_ms: u32) {
        self.letters.start(now_ms);
        self.paused_at = None;
    }

    /// Check if a punctuation pause is holding the phrase
    pub fn is_paused(&self, now_ms: u32) -> bool {
        self.paused_at
            .is_some_and(|at| elapsed_ms(now_ms, at) < self.pause_ms)
    }

    /// Advance the phrase if a letter interval has elapsed
    ///
    /// While idle the jaw target is held closed every call. The phrase is
    /// cleared on the first letter interval after its last character, so
    /// the final letter holds the jaw for a full interval.
    pub fn update(&mut self, now_ms: u32, ctx: &mut MotionContext) -> Option<SpeechEvent> {
        if ctx.is_idle() {
            ctx.close_jaw();
            self.paused_at = None;
            return None;
        }

        if self.is_paused(now_ms) {
            return None;
        }
        self.paused_at = None;

        if !self.letters.poll(now_ms) {
            return None;
        }

        match ctx.phrase_mut().advance() {
            Some(c) if is_pause(c) => {
                ctx.close_jaw();
                self.paused_at = Some(now_ms);
                None
            }
            Some(c) => {
                ctx.set_jaw_target(aperture_for(c, &self.jaw));
                None
            }
            None => {
                ctx.phrase_mut().clear();
                ctx.close_jaw();
                Some(SpeechEvent::Finished)
            }
        }
    }
}
