//! Animatron - Animatronic Head Firmware
//!
//! Main firmware binary for RP2040-based animatronic heads. Drives three
//! head servos and a jaw servo from a single cooperative scheduler:
//! speech-synchronized jaw motion, random head poses, idle jitter and
//! breathing.
//!
//! Pin assignments (50 Hz servo PWM):
//! - GPIO2 (PWM1 A): rotation
//! - GPIO3 (PWM1 B): horizontal
//! - GPIO4 (PWM2 A): vertical
//! - GPIO5 (PWM2 B): jaw

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::clocks::{clk_sys_freq, RoscRng};
use embassy_rp::pwm::{Config as PwmConfig, Pwm, PwmOutput};
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use {defmt_rtt as _, panic_probe as _};

use animatron_core::config::{parse_config, AnimatronConfig};
use animatron_core::scheduler::Animator;
use animatron_core::speech::PhraseCatalog;
use animatron_core::traits::Actuators;
use animatron_drivers::random::RngSource;
use animatron_drivers::servo::{PwmServo, PwmServoConfig};

mod clock;
mod tasks;

/// Embedded configuration (compiled into firmware)
/// Edit animatron.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../animatron.toml");

/// Servo frame rate
const SERVO_FREQ_HZ: u32 = 50;

/// PWM clock divider; keeps a 20ms frame within the 16-bit counter
const PWM_DIVIDER: u8 = 64;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Animatron firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_config();
    info!(
        "Features: jaw={} head={} jitter={} breathing={} phrases={}",
        config.features.jaw,
        config.features.head,
        config.features.idle_jitter,
        config.features.breathing,
        config.features.phrases
    );

    // Two PWM slices, both channels each, at the servo frame rate
    let pwm_config = servo_pwm_config();
    let (rotation, horizontal) =
        Pwm::new_output_ab(p.PWM_SLICE1, p.PIN_2, p.PIN_3, pwm_config.clone()).split();
    let (vertical, jaw) =
        Pwm::new_output_ab(p.PWM_SLICE2, p.PIN_4, p.PIN_5, pwm_config).split();

    let (Some(rotation), Some(horizontal), Some(vertical), Some(jaw)) =
        (rotation, horizontal, vertical, jaw)
    else {
        defmt::panic!("PWM outputs unavailable");
    };

    let actuators = Actuators::new(servo(rotation), servo(horizontal), servo(vertical), servo(jaw));
    info!("Servo PWM initialized");

    let seed = RoscRng.next_u64();
    let rng = RngSource::new(SmallRng::seed_from_u64(seed));
    debug!("RNG seeded from ring oscillator");

    let animator = Animator::new(&config, actuators, rng, PhraseCatalog::default());

    spawner.spawn(tasks::animator_task(animator)).unwrap();

    info!("All tasks spawned, firmware running");

    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

fn servo(output: PwmOutput<'static>) -> tasks::Servo {
    PwmServo::new(output, PwmServoConfig::default())
}

/// PWM configuration for a 50 Hz servo frame
fn servo_pwm_config() -> PwmConfig {
    let period = clk_sys_freq() / (SERVO_FREQ_HZ * PWM_DIVIDER as u32);

    let mut config = PwmConfig::default();
    config.divider = PWM_DIVIDER.into();
    config.top = (period - 1) as u16;
    config
}

/// Parse and validate the embedded configuration
///
/// Falls back to built-in defaults if animatron.toml is broken; this should
/// only happen during development since build.rs checks it first.
fn load_config() -> AnimatronConfig {
    let config = match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to parse embedded config: {:?}", e);
            error!("Using default configuration");
            return AnimatronConfig::default();
        }
    };

    match config.validate() {
        Ok(()) => {
            info!("Parsed embedded configuration successfully");
            config
        }
        Err(e) => {
            error!("Invalid embedded config: {:?}", e);
            error!("Using default configuration");
            AnimatronConfig::default()
        }
    }
}
