//! Orchestration facade: grid -> Theta* -> spline -> waypoint queue ->
//! follower (§4.6).

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::follower::{FollowerParams, FollowerState, TickOutcome};
use crate::{interpolate_xy, theta_star, OccupancyGrid, PlanError, Point, Pose, Waypoint};

/// Drive a point robot from `start` to `goal` over `grid`, producing the
/// full per-tick pose trail.
///
/// Returns `Ok(None)` if Theta* finds no path (§7's "no path is not a
/// failure" policy, passed through unchanged). Returns `Err` if the spline
/// resampler rejects the planner's polyline, or if `start`/`goal` is out of
/// bounds or blocked.
pub struct Planner {
    params: FollowerParams,
    heuristic_weight: f32,
    diagonals: bool,
}

impl Planner {
    #[must_use]
    pub fn new(params: FollowerParams) -> Self {
        Self {
            params,
            heuristic_weight: 1.0,
            diagonals: true,
        }
    }

    #[must_use]
    pub fn with_heuristic_weight(mut self, weight: f32) -> Self {
        self.heuristic_weight = weight;
        self
    }

    #[must_use]
    pub fn with_diagonals(mut self, diagonals: bool) -> Self {
        self.diagonals = diagonals;
        self
    }

    /// Run the full plan-and-drive pipeline, seeding the follower's jitter
    /// RNG from `seed` (§5 Determinism).
    pub fn drive_to_goal(
        &self,
        grid: &OccupancyGrid,
        start: Point,
        goal: Point,
        seed: u64,
    ) -> Result<Option<Vec<Pose>>, PlanError> {
        let Some(polyline) = theta_star(grid, start, goal, self.heuristic_weight, self.diagonals)?
        else {
            tracing::debug!(?start, ?goal, "planner: no path found");
            return Ok(None);
        };

        let waypoints = self.waypoints_from_polyline(&polyline)?;
        let rng = StdRng::seed_from_u64(seed);
        let initial_pose = waypoints
            .first()
            .copied()
            .map(|wp| wp.pose())
            .unwrap_or(Pose::ZERO);
        let mut follower = FollowerState::new(initial_pose, waypoints, self.params, rng);

        let mut trail = vec![follower.pose()];
        loop {
            match follower.tick() {
                TickOutcome::Moved(pose) => trail.push(pose),
                TickOutcome::Done => break,
            }
        }

        Ok(Some(trail))
    }

    /// Convert a planner polyline into the follower's waypoint queue,
    /// spline-smoothing it first unless `use_spline` is disabled (§4.6 steps
    /// 2-4).
    fn waypoints_from_polyline(&self, polyline: &[Point]) -> Result<Vec<Waypoint>, PlanError> {
        if !self.params.use_spline || polyline.len() < 2 {
            return Ok(polyline
                .iter()
                .map(|p| Waypoint::new(p.x() as f32, p.y() as f32, 0.0))
                .collect());
        }

        let xs: Vec<f32> = polyline.iter().map(|p| p.x() as f32).collect();
        let ys: Vec<f32> = polyline.iter().map(|p| p.y() as f32).collect();
        let count = (polyline.len() * self.params.spline_resolution).max(2);

        let (xs_out, ys_out) = interpolate_xy(&xs, &ys, count)?;

        Ok(xs_out
            .into_iter()
            .zip(ys_out)
            .map(|(x, y)| Waypoint::new(x, y, 0.0))
            .collect())
    }
}
