//! End-to-end wiring: an occupancy grid with a single gapped wall, planned
//! with Theta*, smoothed with the cubic spline, and driven with the
//! follower. Prints the resulting pose trail.
//!
//! Stands in for a plotting harness: this binary has no rendering of its
//! own, it just prints poses one per line for a caller to pipe elsewhere.

use theta_nav::{FollowerParams, OccupancyGrid, Planner, Point};

fn main() {
    tracing_subscriber::fmt::init();

    let width = 40;
    let height = 20;
    let mut cells = vec![false; (width * height) as usize];
    for y in 0..height {
        if y != height / 2 {
            cells[(y * width + width / 2) as usize] = true;
        }
    }
    let grid = OccupancyGrid::new(width, height, cells);

    let params = FollowerParams {
        loop_time: 0.02,
        loop_time_deviation: 0.002,
        max_velocity: 40.0,
        max_acceleration: 20.0,
        cruise_velocity: 15.0,
        precision_radius: 0.75,
        slow_down_radius: 4.0,
        use_spline: true,
        spline_resolution: 6,
        ..Default::default()
    };

    let planner = Planner::new(params);
    let start = Point::new(0, 0);
    let goal = Point::new((width - 1) as i32, (height - 1) as i32);

    match planner.drive_to_goal(&grid, start, goal, 42) {
        Ok(Some(trail)) => {
            tracing::info!(ticks = trail.len(), "planner: run complete");
            for pose in trail {
                println!("{:.3} {:.3} {:.3}", pose.x(), pose.y(), pose.theta());
            }
        }
        Ok(None) => tracing::warn!("planner: no path from {:?} to {:?}", start, goal),
        Err(err) => tracing::error!(%err, "planner: run failed"),
    }
}
