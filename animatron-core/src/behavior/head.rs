//! Head macro planner
//!
//! Every few seconds, picks a fresh random pose for the whole head.

use crate::config::HeadConfig;
use crate::motion::Axis;
use crate::scheduler::{Cadence, MotionContext};
use crate::traits::RandomSource;

/// Head macro planner
#[derive(Debug, Clone)]
pub struct HeadMacroPlanner {
    cadence: Cadence,
}

impl HeadMacroPlanner {
    /// Create a macro planner
    pub fn new(config: &HeadConfig) -> Self {
        Self {
            cadence: Cadence::new(config.move_interval_ms),
        }
    }

    /// Restart the pose clock at `now_ms`
    pub fn start(&mut self, now_ms: u32) {
        self.cadence.start(now_ms);
    }

    /// Pick a new pose if due
    ///
    /// Each axis baseline is drawn independently and uniformly from its
    /// inclusive bounds. Returns true if a new pose was set; the caller
    /// restarts idle jitter so the two never fire in the same tick.
    pub fn update<R: RandomSource>(
        &mut self,
        now_ms: u32,
        ctx: &mut MotionContext,
        rng: &mut R,
    ) -> bool {
        if !self.cadence.poll(now_ms) {
            return false;
        }

        for axis in Axis::ALL {
            let (lo, hi) = ctx.axis(axis).limits().bounds();
            let angle = rng.range_inclusive(lo as i32, hi as i32);
            ctx.axis_mut(axis).set_baseline(angle as f32);
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnimatronConfig;
    use crate::mock::{FixedRng, LcgRng};

    fn setup() -> (HeadMacroPlanner, MotionContext, AnimatronConfig) {
        let config = AnimatronConfig::default();
        let mut planner = HeadMacroPlanner::new(&config.head);
        planner.start(0);
        let ctx = MotionContext::new(&config.head, &config.jaw);
        (planner, ctx, config)
    }

    #[test]
    fn test_waits_for_interval() {
        let (mut planner, mut ctx, config) = setup();
        let mut rng = FixedRng::new(1000, 0);

        assert!(!planner.update(config.head.move_interval_ms - 1, &mut ctx, &mut rng));
        assert!(planner.update(config.head.move_interval_ms, &mut ctx, &mut rng));
    }

    #[test]
    fn test_draws_inclusive_bounds() {
        let (mut planner, mut ctx, config) = setup();

        // Draws clamped to the top of each range land exactly on max
        let mut rng = FixedRng::new(1000, 0);
        planner.update(config.head.move_interval_ms, &mut ctx, &mut rng);
        for axis in Axis::ALL {
            let max = config.head.axis(axis).limits.max as f32;
            assert_eq!(ctx.axis(axis).baseline(), max);
        }

        let mut rng = FixedRng::new(-1000, 0);
        planner.update(2 * config.head.move_interval_ms, &mut ctx, &mut rng);
        for axis in Axis::ALL {
            let min = config.head.axis(axis).limits.min as f32;
            assert_eq!(ctx.axis(axis).baseline(), min);
        }
    }

    #[test]
    fn test_does_not_touch_current_or_offset() {
        let (mut planner, mut ctx, config) = setup();
        ctx.axis_mut(Axis::Vertical).set_offset(1.5);
        let current = ctx.axis(Axis::Vertical).current();

        let mut rng = FixedRng::new(100, 0);
        planner.update(config.head.move_interval_ms, &mut ctx, &mut rng);

        assert_eq!(ctx.axis(Axis::Vertical).current(), current);
        assert_eq!(ctx.axis(Axis::Vertical).offset(), 1.5);
        assert_eq!(ctx.axis(Axis::Vertical).target(), 101.5);
    }

    #[test]
    fn test_random_poses_within_bounds() {
        let (mut planner, mut ctx, config) = setup();
        let mut rng = LcgRng(7);

        for i in 1..200 {
            planner.update(i * config.head.move_interval_ms, &mut ctx, &mut rng);
            for axis in Axis::ALL {
                let limits = config.head.axis(axis).limits;
                assert!(limits.contains(ctx.axis(axis).baseline()));
            }
        }
    }
}
