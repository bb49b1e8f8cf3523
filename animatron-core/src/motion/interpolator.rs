//! Rate-limited axis interpolation
//!
//! Moves each axis's current position toward its target at a bounded
//! angular speed and turns the floating-point position into whole-degree
//! actuator commands. This is the only writer of head actuator commands.

use crate::config::HeadConfig;
use crate::motion::Axis;
use crate::scheduler::{Cadence, MotionContext};
use crate::traits::{Actuator, Actuators};

/// Move `current` toward `target` by at most `max_step`
///
/// Arrives exactly when the remaining distance is within `max_step`.
pub fn approach(current: f32, target: f32, max_step: f32) -> f32 {
    let diff = target - current;
    if diff.abs() <= max_step {
        target
    } else if diff > 0.0 {
        current + max_step
    } else {
        current - max_step
    }
}

/// Axis interpolator
#[derive(Debug, Clone)]
pub struct AxisInterpolator {
    cadence: Cadence,
    /// Speed per axis in degrees per second
    speeds: [f32; 3],
}

impl AxisInterpolator {
    /// Create an interpolator from head configuration
    pub fn new(config: &HeadConfig) -> Self {
        let mut speeds = [0.0; 3];
        for axis in Axis::ALL {
            speeds[axis.index()] = config.axis(axis).speed_deg_s.max(0.0);
        }
        Self {
            cadence: Cadence::new(config.interpolate_interval_ms),
            speeds,
        }
    }

    /// Restart the interpolation clock at `now_ms`
    pub fn start(&mut self, now_ms: u32) {
        self.cadence.start(now_ms);
    }

    /// Run one interpolation step if the cadence has elapsed
    ///
    /// The distance allowed this step is `speed × seconds since the
    /// previous step`. Returns true if the step ran.
    pub fn update<A: Actuator>(
        &mut self,
        now_ms: u32,
        ctx: &mut MotionContext,
        actuators: &mut Actuators<A>,
    ) -> bool {
        let Some(elapsed_ms) = self.cadence.poll_elapsed(now_ms) else {
            return false;
        };
        let seconds = elapsed_ms as f32 / 1000.0;

        for axis in Axis::ALL {
            let state = ctx.axis_mut(axis);
            let max_step = self.speeds[axis.index()] * seconds;
            let next = approach(state.current(), state.target(), max_step);
            state.set_current(next);

            let command = libm::roundf(state.current()) as i16;
            if state.written() != Some(command) {
                actuators.axis_mut(axis).set_position(command);
                state.mark_written(command);
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AnimatronConfig, AxisLimits};
    use crate::mock::MockServo;
    use proptest::prelude::*;

    fn setup() -> (AxisInterpolator, MotionContext, Actuators<MockServo>) {
        let config = AnimatronConfig::default();
        let interpolator = AxisInterpolator::new(&config.head);
        let ctx = MotionContext::new(&config.head, &config.jaw);
        let actuators = Actuators::new(
            MockServo::default(),
            MockServo::default(),
            MockServo::default(),
            MockServo::default(),
        );
        (interpolator, ctx, actuators)
    }

    #[test]
    fn test_approach_bounded_step() {
        // 8°/s for 1s from 90 toward 115 covers 8°, not 25°
        assert_eq!(approach(90.0, 115.0, 8.0), 98.0);
        assert_eq!(approach(115.0, 90.0, 8.0), 107.0);
    }

    #[test]
    fn test_approach_exact_arrival() {
        assert_eq!(approach(110.0, 115.0, 8.0), 115.0);
        assert_eq!(approach(115.0, 115.0, 8.0), 115.0);
    }

    #[test]
    fn test_vertical_scenario() {
        let (mut interp, mut ctx, mut actuators) = setup();
        interp.start(0);

        let vertical = ctx.axis_mut(Axis::Vertical);
        vertical.set_current(90.0);
        vertical.set_baseline(115.0);

        assert!(interp.update(1000, &mut ctx, &mut actuators));
        assert_eq!(ctx.axis(Axis::Vertical).current(), 98.0);
        assert_eq!(actuators.vertical.position(), 98);
    }

    #[test]
    fn test_gated_by_cadence() {
        let (mut interp, mut ctx, mut actuators) = setup();
        interp.start(0);
        ctx.axis_mut(Axis::Rotation).set_baseline(120.0);

        assert!(!interp.update(10, &mut ctx, &mut actuators));
        assert_eq!(actuators.rotation.writes, 0);

        assert!(interp.update(20, &mut ctx, &mut actuators));
    }

    #[test]
    fn test_no_redundant_writes() {
        let (mut interp, mut ctx, mut actuators) = setup();
        interp.start(0);

        // Everything at rest: the first step writes each axis once
        interp.update(20, &mut ctx, &mut actuators);
        assert_eq!(actuators.rotation.writes, 1);
        assert_eq!(actuators.vertical.writes, 1);

        // Nothing moved, nothing rewritten
        interp.update(40, &mut ctx, &mut actuators);
        interp.update(60, &mut ctx, &mut actuators);
        assert_eq!(actuators.rotation.writes, 1);
        assert_eq!(actuators.vertical.writes, 1);
    }

    #[test]
    fn test_sub_degree_motion_written_on_rounding_change() {
        let (mut interp, mut ctx, mut actuators) = setup();
        interp.start(0);
        interp.update(20, &mut ctx, &mut actuators);
        let writes = actuators.vertical.writes;

        // 8°/s × 20ms = 0.16° per step: rounding changes only every few steps
        ctx.axis_mut(Axis::Vertical).set_baseline(100.0);
        let mut now = 20;
        for _ in 0..3 {
            now += 20;
            interp.update(now, &mut ctx, &mut actuators);
        }
        assert_eq!(actuators.vertical.writes, writes);

        now += 20;
        interp.update(now, &mut ctx, &mut actuators);
        assert_eq!(actuators.vertical.writes, writes + 1);
        assert_eq!(actuators.vertical.position(), 96);
    }

    #[test]
    fn test_idempotent_at_target() {
        let (mut interp, mut ctx, mut actuators) = setup();
        interp.start(0);
        ctx.axis_mut(Axis::Horizontal).set_baseline(100.0);

        let mut now = 0;
        while ctx.axis(Axis::Horizontal).current() != 100.0 {
            now += 20;
            interp.update(now, &mut ctx, &mut actuators);
        }
        let writes = actuators.horizontal.writes;

        for _ in 0..10 {
            now += 20;
            interp.update(now, &mut ctx, &mut actuators);
            assert_eq!(ctx.axis(Axis::Horizontal).current(), 100.0);
        }
        assert_eq!(actuators.horizontal.writes, writes);
    }

    proptest! {
        #[test]
        fn prop_approach_never_overshoots(
            current in -180.0f32..180.0,
            target in -180.0f32..180.0,
            max_step in 0.0f32..50.0,
        ) {
            let next = approach(current, target, max_step);
            prop_assert!((next - target).abs() <= (current - target).abs());
            prop_assert!((next - current).abs() <= max_step + 1e-3);
        }

        #[test]
        fn prop_current_stays_in_bounds(
            baseline in 0.0f32..200.0,
            offset in -5.0f32..5.0,
            steps in 1usize..40,
        ) {
            let (mut interp, mut ctx, mut actuators) = setup();
            interp.start(0);
            let state = ctx.axis_mut(Axis::Vertical);
            state.set_baseline(baseline);
            state.set_offset(offset);

            let limits: AxisLimits = ctx.axis(Axis::Vertical).limits();
            for i in 1..=steps {
                interp.update(i as u32 * 20, &mut ctx, &mut actuators);
                let state = ctx.axis(Axis::Vertical);
                prop_assert!(limits.contains(state.current()));
                prop_assert!(limits.contains(state.target()));
            }
        }
    }
}
