//! Hobby servo on a PWM channel
//!
//! Converts an angle to a pulse width, then to a duty cycle for the
//! channel's resolution:
//!
//! ```text
//! pulse_us = min_pulse_us + angle * (max_pulse_us - min_pulse_us) / max_angle
//! duty     = pulse_us * max_duty / period_us
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let mut servo = PwmServo::new(pwm_channel, PwmServoConfig::default());
//! servo.set_position(90);
//! assert_eq!(servo.position(), 90);
//! ```

use animatron_core::traits::Actuator;
use embedded_hal::pwm::SetDutyCycle;

/// Servo pulse timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PwmServoConfig {
    /// Pulse width at angle 0 (µs)
    pub min_pulse_us: u32,
    /// Pulse width at `max_angle` (µs)
    pub max_pulse_us: u32,
    /// PWM frame period (µs)
    pub period_us: u32,
    /// Angle at `max_pulse_us` (degrees)
    pub max_angle: i16,
}

impl Default for PwmServoConfig {
    fn default() -> Self {
        Self {
            min_pulse_us: 500,
            max_pulse_us: 2500,
            period_us: 20_000,
            max_angle: 180,
        }
    }
}

impl PwmServoConfig {
    /// Pulse width for an angle, clamped to `[0, max_angle]`
    pub fn pulse_us(&self, angle: i16) -> u32 {
        let max_angle = self.max_angle.max(1);
        let angle = angle.clamp(0, max_angle) as u32;
        let span = self.max_pulse_us.saturating_sub(self.min_pulse_us);
        self.min_pulse_us + angle * span / max_angle as u32
    }

    /// Duty cycle for a pulse width on a channel with `max_duty` resolution
    pub fn duty_for_pulse(&self, pulse_us: u32, max_duty: u16) -> u16 {
        if self.period_us == 0 {
            return 0;
        }
        let duty = pulse_us as u64 * max_duty as u64 / self.period_us as u64;
        duty.min(max_duty as u64) as u16
    }
}

/// Servo driver over any [`SetDutyCycle`] channel
///
/// Write failures are latched in [`PwmServo::has_fault`]; the actuator
/// contract is infallible, so the control loop never sees them.
pub struct PwmServo<P> {
    pwm: P,
    config: PwmServoConfig,
    /// Last commanded angle (after clamping)
    angle: i16,
    fault: bool,
}

impl<P: SetDutyCycle> PwmServo<P> {
    /// Create a new servo driver
    ///
    /// Nothing is written until the first [`Actuator::set_position`].
    pub fn new(pwm: P, config: PwmServoConfig) -> Self {
        Self {
            pwm,
            config,
            angle: 0,
            fault: false,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &PwmServoConfig {
        &self.config
    }

    /// Check if any PWM write has failed
    pub fn has_fault(&self) -> bool {
        self.fault
    }

    /// Clear the fault latch
    pub fn clear_fault(&mut self) {
        self.fault = false;
    }

    /// Write the pulse for `angle` to the channel
    pub fn try_set_position(&mut self, angle: i16) -> Result<(), P::Error> {
        let angle = angle.clamp(0, self.config.max_angle);
        let pulse = self.config.pulse_us(angle);
        let duty = self
            .config
            .duty_for_pulse(pulse, self.pwm.max_duty_cycle());
        self.pwm.set_duty_cycle(duty)?;
        self.angle = angle;
        Ok(())
    }

    /// Release the PWM channel
    pub fn release(self) -> P {
        self.pwm
    }
}

impl<P: SetDutyCycle> Actuator for PwmServo<P> {
    fn set_position(&mut self, angle: i16) {
        if self.try_set_position(angle).is_err() {
            self.fault = true;
        }
    }

    fn position(&self) -> i16 {
        self.angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::pwm::{ErrorKind, ErrorType};

    /// PWM channel with a 16-bit counter that records the last duty
    struct FakePwm {
        max: u16,
        duty: Option<u16>,
    }

    impl FakePwm {
        fn new(max: u16) -> Self {
            Self { max, duty: None }
        }
    }

    impl ErrorType for FakePwm {
        type Error = Infallible;
    }

    impl SetDutyCycle for FakePwm {
        fn max_duty_cycle(&self) -> u16 {
            self.max
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            self.duty = Some(duty);
            Ok(())
        }
    }

    /// PWM channel whose writes always fail
    struct BrokenPwm;

    impl ErrorType for BrokenPwm {
        type Error = ErrorKind;
    }

    impl SetDutyCycle for BrokenPwm {
        fn max_duty_cycle(&self) -> u16 {
            20_000
        }

        fn set_duty_cycle(&mut self, _duty: u16) -> Result<(), Self::Error> {
            Err(ErrorKind::Other)
        }
    }

    #[test]
    fn test_pulse_mapping() {
        let config = PwmServoConfig::default();
        assert_eq!(config.pulse_us(0), 500);
        assert_eq!(config.pulse_us(90), 1500);
        assert_eq!(config.pulse_us(180), 2500);
        // Clamped
        assert_eq!(config.pulse_us(-20), 500);
        assert_eq!(config.pulse_us(270), 2500);
    }

    #[test]
    fn test_duty_in_microseconds() {
        // One count per microsecond makes duty equal the pulse width
        let mut servo = PwmServo::new(FakePwm::new(20_000), PwmServoConfig::default());

        servo.set_position(90);
        assert_eq!(servo.release().duty, Some(1500));
    }

    #[test]
    fn test_duty_scaled_to_resolution() {
        let mut servo = PwmServo::new(FakePwm::new(u16::MAX), PwmServoConfig::default());

        servo.set_position(0);
        // 500 / 20000 of the full range
        assert_eq!(servo.position(), 0);
        assert_eq!(servo.release().duty, Some(1638));
    }

    #[test]
    fn test_position_reports_clamped_command() {
        let mut servo = PwmServo::new(FakePwm::new(20_000), PwmServoConfig::default());

        servo.set_position(200);
        assert_eq!(servo.position(), 180);
        assert!(!servo.has_fault());
        assert_eq!(servo.release().duty, Some(2500));
    }

    #[test]
    fn test_nothing_written_until_commanded() {
        let servo = PwmServo::new(FakePwm::new(20_000), PwmServoConfig::default());
        assert_eq!(servo.release().duty, None);
    }

    #[test]
    fn test_write_failure_latches_fault() {
        let mut servo = PwmServo::new(BrokenPwm, PwmServoConfig::default());

        assert_eq!(servo.try_set_position(45), Err(ErrorKind::Other));
        assert!(!servo.has_fault());

        servo.set_position(45);
        assert!(servo.has_fault());
        // The last good command is kept
        assert_eq!(servo.position(), 0);

        servo.clear_fault();
        assert!(!servo.has_fault());
    }
}
