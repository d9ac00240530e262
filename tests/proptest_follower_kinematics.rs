//! Property-based tests for the follower's kinematic limits.
//!
//! Validates §8's kinematic cap invariant: for any reachable single-waypoint
//! run with jitter disabled, the velocity implied by each tick's
//! displacement never exceeds `MAX_VELOCITY` by more than a small tolerance,
//! and the run terminates within a bounded number of ticks.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use theta_nav::{FollowerParams, FollowerState, Pose, TickOutcome, Waypoint};

const EPSILON: f32 = 1.0;
const MAX_TICKS: usize = 20_000;

proptest! {
    /// Property: per-tick displacement magnitude never exceeds MAX_VELOCITY
    /// by more than a tolerance, and the follower always reaches Done.
    #[test]
    fn displacement_never_exceeds_max_velocity(
        target_x in -50.0f32..50.0,
        target_y in -50.0f32..50.0,
        max_velocity in 5.0f32..80.0,
        max_acceleration in 2.0f32..40.0,
        cruise_velocity in 1.0f32..60.0,
    ) {
        let params = FollowerParams {
            loop_time: 0.02,
            loop_time_deviation: 0.0,
            max_velocity,
            max_acceleration,
            cruise_velocity,
            precision_radius: 2.0,
            slow_down_radius: 8.0,
            ..Default::default()
        };
        let mut follower = FollowerState::new(
            Pose::ZERO,
            vec![Waypoint::new(target_x, target_y, 0.0)],
            params,
            StdRng::seed_from_u64(11),
        );

        let mut ticks = 0;
        loop {
            let before = follower.pose();
            match follower.tick() {
                TickOutcome::Done => break,
                TickOutcome::Moved(after) => {
                    let displacement = before.distance_to(after);
                    let implied_velocity = displacement / params.loop_time;
                    prop_assert!(
                        implied_velocity <= max_velocity + EPSILON,
                        "implied velocity {} exceeded cap {}",
                        implied_velocity,
                        max_velocity
                    );
                }
            }
            ticks += 1;
            prop_assert!(ticks < MAX_TICKS, "follower never reached Done within {} ticks", MAX_TICKS);
        }
    }
}
