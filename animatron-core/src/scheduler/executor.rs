//! Animator: the cooperative scheduler
//!
//! Owns every subsystem, the shared [`MotionContext`], the actuators and
//! the random source. Each call to [`Animator::tick`] runs the subsystems
//! once, in a fixed order, and returns the diagnostic events they raised.
//!
//! Tick order:
//! 1. Speech driver (phrase → jaw target)
//! 2. Jaw smoother (jaw target → jaw actuator)
//! 3. Head macro planner (random pose → baselines, restarts jitter)
//! 4. Idle jitter (baselines, idle only)
//! 5. Breathing oscillator (vertical offset)
//! 6. Axis interpolator (targets → head actuators)
//! 7. Phrase scheduler (idle → new phrase)

use heapless::Vec;

use crate::behavior::{BreathingOscillator, HeadMacroPlanner, IdleJitter};
use crate::config::{AnimatronConfig, FeatureFlags};
use crate::motion::{Axis, AxisInterpolator};
use crate::speech::{JawSmoother, PhraseCatalog, PhraseScheduler, SpeechDriver, SpeechEvent};
use crate::traits::{Actuator, Actuators, Clock, RandomSource};

use super::context::MotionContext;

/// Upper bound on events raised by one tick
pub const MAX_EVENTS_PER_TICK: usize = 2;

/// Diagnostic events raised by a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// A phrase was chosen from the catalog and started
    PhraseStarted {
        /// Catalog index of the phrase
        index: usize,
    },
    /// The active phrase ran to completion
    PhraseFinished,
}

/// Events raised by one tick, in the order they occurred
pub type Events = Vec<Event, MAX_EVENTS_PER_TICK>;

/// Cooperative motion scheduler
pub struct Animator<'c, A, R> {
    features: FeatureFlags,
    jaw_closed: i16,
    ctx: MotionContext,
    actuators: Actuators<A>,
    rng: R,
    catalog: PhraseCatalog<'c>,
    speech: SpeechDriver,
    jaw: JawSmoother,
    head: HeadMacroPlanner,
    jitter: IdleJitter,
    breathing: BreathingOscillator,
    interpolator: AxisInterpolator,
    phrases: PhraseScheduler,
}

impl<'c, A: Actuator, R: RandomSource> Animator<'c, A, R> {
    /// Create a scheduler
    ///
    /// Feature flags are taken from `config` once, here.
    pub fn new(
        config: &AnimatronConfig,
        actuators: Actuators<A>,
        rng: R,
        catalog: PhraseCatalog<'c>,
    ) -> Self {
        Self {
            features: config.features,
            jaw_closed: config.jaw.closed,
            ctx: MotionContext::new(&config.head, &config.jaw),
            actuators,
            rng,
            catalog,
            speech: SpeechDriver::new(&config.speech, &config.jaw),
            jaw: JawSmoother::new(&config.jaw),
            head: HeadMacroPlanner::new(&config.head),
            jitter: IdleJitter::new(&config.jitter),
            breathing: BreathingOscillator::new(&config.breathing),
            interpolator: AxisInterpolator::new(&config.head),
            phrases: PhraseScheduler::new(&config.speech),
        }
    }

    /// Home every actuator and start all cadences at `now_ms`
    ///
    /// Head axes go to neutral and the jaw closes. Call once before the
    /// first tick.
    pub fn begin(&mut self, now_ms: u32) {
        self.ctx.home();

        for axis in Axis::ALL {
            let neutral = self.ctx.axis(axis).limits().neutral;
            self.actuators.axis_mut(axis).set_position(neutral);
            self.ctx.axis_mut(axis).mark_written(neutral);
        }
        if self.features.jaw {
            self.actuators.jaw.set_position(self.jaw_closed);
        }

        self.speech.start(now_ms);
        self.jaw.start(now_ms);
        self.head.start(now_ms);
        self.jitter.restart(now_ms);
        self.breathing.start(now_ms);
        self.interpolator.start(now_ms);
        self.phrases.mark_idle(now_ms);
    }

    /// Run every enabled subsystem once
    pub fn tick(&mut self, now_ms: u32) -> Events {
        let mut events = Events::new();
        let features = self.features;

        if let Some(SpeechEvent::Finished) = self.speech.update(now_ms, &mut self.ctx) {
            self.phrases.mark_idle(now_ms);
            let _ = events.push(Event::PhraseFinished);
        }

        if features.jaw {
            let target = self.ctx.jaw_target();
            self.jaw.update(now_ms, target, &mut self.actuators.jaw);
        }

        if features.head && self.head.update(now_ms, &mut self.ctx, &mut self.rng) {
            self.jitter.restart(now_ms);
        }

        if features.idle_jitter {
            self.jitter.update(now_ms, &mut self.ctx, &mut self.rng);
        }

        if features.breathing {
            self.breathing.update(now_ms, &mut self.ctx);
        }

        self.interpolator.update(now_ms, &mut self.ctx, &mut self.actuators);

        if features.phrases {
            if let Some(index) = self
                .phrases
                .update(now_ms, &mut self.ctx, &self.catalog, &mut self.rng)
            {
                let _ = events.push(Event::PhraseStarted { index });
            }
        }

        events
    }

    /// Run one tick at the clock's current time
    pub fn poll<C: Clock>(&mut self, clock: &C) -> Events {
        self.tick(clock.now_ms())
    }

    /// Speak a caller-supplied phrase
    ///
    /// Only accepted while idle; a phrase in progress is never interrupted.
    /// Text beyond the phrase buffer is truncated. Returns true if accepted.
    pub fn speak(&mut self, text: &str) -> bool {
        if !self.ctx.is_idle() {
            return false;
        }
        self.ctx.phrase_mut().load(text);
        !self.ctx.is_idle()
    }

    /// Check if a phrase is being spoken
    pub fn is_speaking(&self) -> bool {
        !self.ctx.is_idle()
    }

    /// Text of the phrase being spoken (empty when idle)
    pub fn phrase_text(&self) -> &str {
        self.ctx.phrase().text()
    }

    /// Phrase catalog
    pub fn catalog(&self) -> &PhraseCatalog<'c> {
        &self.catalog
    }

    /// Active feature flags
    pub fn features(&self) -> FeatureFlags {
        self.features
    }

    /// Shared motion state
    pub fn context(&self) -> &MotionContext {
        &self.ctx
    }

    /// Actuator channels
    pub fn actuators(&self) -> &Actuators<A> {
        &self.actuators
    }
}
