//! Shared motion context
//!
//! The single piece of state every subsystem reads and writes during a
//! tick. Passed explicitly so each subsystem can be exercised on its own.
//!
//! | State            | Written by                               |
//! |------------------|------------------------------------------|
//! | axis baseline    | head macro planner, idle jitter          |
//! | axis offset      | breathing oscillator (vertical only)     |
//! | axis current     | axis interpolator                        |
//! | jaw target       | speech driver                            |
//! | phrase           | phrase scheduler (load), speech driver   |

use crate::config::{HeadConfig, JawConfig};
use crate::motion::{Axis, AxisState};
use crate::speech::PhraseState;

/// Shared state for one animatronic head
#[derive(Debug, Clone)]
pub struct MotionContext {
    axes: [AxisState; 3],
    jaw_target: i16,
    jaw_closed: i16,
    phrase: PhraseState,
}

impl MotionContext {
    /// Create a context at rest: head neutral, jaw closed, idle
    pub fn new(head: &HeadConfig, jaw: &JawConfig) -> Self {
        Self {
            axes: Axis::ALL.map(|axis| AxisState::new(head.axis(axis).limits)),
            jaw_target: jaw.closed,
            jaw_closed: jaw.closed,
            phrase: PhraseState::new(),
        }
    }

    /// State of one head axis
    pub fn axis(&self, axis: Axis) -> &AxisState {
        &self.axes[axis.index()]
    }

    /// State of one head axis, mutably
    pub fn axis_mut(&mut self, axis: Axis) -> &mut AxisState {
        &mut self.axes[axis.index()]
    }

    /// Jaw aperture the smoother is moving toward
    pub fn jaw_target(&self) -> i16 {
        self.jaw_target
    }

    /// Set the jaw aperture target
    pub fn set_jaw_target(&mut self, aperture: i16) {
        self.jaw_target = aperture;
    }

    /// Point the jaw target at fully closed
    pub fn close_jaw(&mut self) {
        self.jaw_target = self.jaw_closed;
    }

    /// Phrase being spoken (empty when idle)
    pub fn phrase(&self) -> &PhraseState {
        &self.phrase
    }

    /// Phrase being spoken, mutably
    pub fn phrase_mut(&mut self) -> &mut PhraseState {
        &mut self.phrase
    }

    /// Check if no phrase is being spoken
    pub fn is_idle(&self) -> bool {
        self.phrase.is_idle()
    }

    /// Return every axis to neutral, close the jaw and go idle
    pub fn home(&mut self) {
        for axis in self.axes.iter_mut() {
            axis.home();
        }
        self.jaw_target = self.jaw_closed;
        self.phrase.clear();
    }
}
