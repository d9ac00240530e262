//! theta_nav
//! =========
//!
//! Any-angle (Theta*) path planning over a 2D occupancy grid, paired with a
//! natural-cubic-spline smoother and a fixed-tick kinematic path-following
//! controller for a planar point robot.
//!
//! The planner (`theta_star`) finds a short, obstacle-avoiding polyline from
//! a start cell to a goal cell, using a rasterized line-of-sight oracle to
//! shortcut A*'s grid-aligned edges into any-angle ones. The spline resampler
//! (`interpolate_xy`) smooths that polyline into an evenly arclength-spaced
//! waypoint stream, which the follower (`FollowerState`) then drives along
//! under velocity and acceleration limits. `plan::Planner` composes all
//! three into a single entry point.

pub mod error;
pub mod follower;
pub mod geometry;
pub mod grid;
pub mod line;
pub mod los;
pub mod plan;
pub mod spline;
pub mod theta_star;

pub use self::{
    error::*, follower::FollowerParams, follower::FollowerState, follower::LengthMode,
    follower::TickOutcome, geometry::*, grid::*, line::*, los::*, plan::Planner, spline::*,
    theta_star::{theta_star, theta_star_default},
};
