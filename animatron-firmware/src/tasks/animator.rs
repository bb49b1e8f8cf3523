//! Animator task
//!
//! Runs the cooperative scheduler on a 1ms ticker. Every subsystem gates
//! itself on its own cadence, so most ticks do nothing and return at once.

use defmt::*;
use embassy_rp::pwm::PwmOutput;
use embassy_time::{Duration, Ticker};
use rand::rngs::SmallRng;

use animatron_core::scheduler::{Animator, Cadence, Event};
use animatron_core::traits::{Actuators, Clock};
use animatron_drivers::random::RngSource;
use animatron_drivers::servo::PwmServo;

use crate::clock::EmbassyClock;

/// Scheduler tick interval in milliseconds
pub const TICK_INTERVAL_MS: u64 = 1;

/// How often servo fault latches are checked
const FAULT_CHECK_MS: u32 = 1000;

/// Hobby servo on an RP2040 PWM output
pub type Servo = PwmServo<PwmOutput<'static>>;

/// Scheduler with the board's concrete actuators and RNG
pub type FirmwareAnimator = Animator<'static, Servo, RngSource<SmallRng>>;

/// Animator task
///
/// Homes the head, then ticks the scheduler forever.
#[embassy_executor::task]
pub async fn animator_task(mut animator: FirmwareAnimator) {
    info!("Animator task started");

    let clock = EmbassyClock;
    let start = clock.now_ms();
    animator.begin(start);
    info!("Head homed, {} phrases in catalog", animator.catalog().len());

    let mut fault_check = Cadence::new(FAULT_CHECK_MS);
    fault_check.start(start);
    let mut faulted = false;

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));

    loop {
        ticker.next().await;

        let now = clock.now_ms();
        for event in animator.tick(now) {
            match event {
                Event::PhraseStarted { index } => {
                    info!("Phrase {}: \"{}\"", index, animator.phrase_text());
                }
                Event::PhraseFinished => {
                    debug!("Phrase finished");
                }
            }
        }

        if fault_check.poll(now) {
            let any = has_fault(animator.actuators());
            if any && !faulted {
                warn!("Servo PWM write failed; holding last good position");
            }
            faulted = any;
        }
    }
}

fn has_fault(actuators: &Actuators<Servo>) -> bool {
    actuators.rotation.has_fault()
        || actuators.horizontal.has_fault()
        || actuators.vertical.has_fault()
        || actuators.jaw.has_fault()
}
