//! Speech
//!
//! Letter-by-letter phrase playback driving the jaw, the smoothing that
//! turns jaw targets into actuator steps, and the idle-time selection of the
//! next phrase.

pub mod driver;
pub mod jaw;
pub mod letters;
pub mod phrases;
pub mod selector;

pub use driver::{SpeechDriver, SpeechEvent};
pub use jaw::{jaw_step, JawSmoother};
pub use letters::{aperture_for, is_pause, letter_aperture, APERTURE_MAX};
pub use phrases::{PhraseCatalog, PhraseState, PhraseText, DEFAULT_PHRASES};
pub use selector::PhraseScheduler;
