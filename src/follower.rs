//! Fixed-tick kinematic path-following controller (§4.5).
//!
//! Consumes an ordered queue of waypoints and produces one pose per tick,
//! subject to a cruise speed, a velocity cap, an acceleration cap, and a
//! slow-down radius around the final waypoint. Arrival tolerates a missed
//! exact hit via a swept-circle vs. segment test, so a robot that jumps past
//! a waypoint in one tick still registers arrival.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::Rng;

use crate::{circle_intersects_segment, Pose, Waypoint};

/// Which norm the follower's kinematic limit checks (steps 4-5 of §4.5) are
/// measured against.
///
/// `IncludeTheta` is the default: the source measures velocity and
/// acceleration magnitude against the full `(x, y, theta)` norm, coupling
/// any heading drift into the translational limits. Since nothing in this
/// controller independently commands theta, it never moves and the coupling
/// is inert in practice — but the behavior is preserved verbatim rather than
/// quietly "fixed", since §8's pinned scenarios depend on it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthMode {
    IncludeTheta,
    PlanarOnly,
}

impl Default for LengthMode {
    #[inline]
    fn default() -> Self {
        LengthMode::IncludeTheta
    }
}

#[inline]
fn measure(pose: Pose, mode: LengthMode) -> f32 {
    match mode {
        LengthMode::IncludeTheta => pose.length(),
        LengthMode::PlanarOnly => pose.planar_length(),
    }
}

/// Immutable kinematic limits and tick timing for one follower run (§6).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowerParams {
    /// Nominal tick duration, in seconds.
    pub loop_time: f32,
    /// Uniform-jitter half-width added to the actual tick duration.
    pub loop_time_deviation: f32,
    /// Cap on per-tick displacement magnitude, in units/s.
    pub max_velocity: f32,
    /// Cap on acceleration magnitude, in units/s^2.
    pub max_acceleration: f32,
    /// Target speed outside `slow_down_radius`.
    pub cruise_velocity: f32,
    /// Arrival tolerance around a waypoint.
    pub precision_radius: f32,
    /// Distance to the *final* waypoint below which cruise scaling
    /// disengages.
    pub slow_down_radius: f32,
    /// If false, the facade feeds the raw planner polyline directly,
    /// skipping spline resampling (§4.6 step 3).
    pub use_spline: bool,
    /// Multiplier applied to polyline length to pick the spline sample
    /// count (§4.6 step 3).
    pub spline_resolution: usize,
    /// Bounds `FollowerState::history`; `None` leaves it unbounded (§5
    /// Memory).
    pub history_cap: Option<usize>,
    /// Which norm steps 4-5 measure against (§4.5).
    pub length_mode: LengthMode,
}

impl Default for FollowerParams {
    fn default() -> Self {
        Self {
            loop_time: 0.02,
            loop_time_deviation: 0.0,
            max_velocity: 60.0,
            max_acceleration: 25.0,
            cruise_velocity: 30.0,
            precision_radius: 2.0,
            slow_down_radius: 10.0,
            use_spline: true,
            spline_resolution: 4,
            history_cap: None,
            length_mode: LengthMode::IncludeTheta,
        }
    }
}

/// The outcome of one `FollowerState::tick` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// The robot advanced to a new pose; ticking may continue.
    Moved(Pose),
    /// The waypoint queue is empty; there is nothing left to drive toward.
    Done,
}

/// Mutable follower state: current pose, recent pose history, the remaining
/// waypoint queue, and the jitter RNG (§3 FollowerState).
pub struct FollowerState {
    pose: Pose,
    history: VecDeque<Pose>,
    queue: VecDeque<Waypoint>,
    params: FollowerParams,
    rng: StdRng,
}

impl FollowerState {
    #[must_use]
    pub fn new(
        pose: Pose,
        waypoints: impl IntoIterator<Item = Waypoint>,
        params: FollowerParams,
        rng: StdRng,
    ) -> Self {
        Self {
            pose,
            history: VecDeque::new(),
            queue: waypoints.into_iter().collect(),
            params,
            rng,
        }
    }

    #[inline]
    #[must_use]
    pub fn pose(&self) -> Pose {
        self.pose
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &VecDeque<Pose> {
        &self.history
    }

    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.queue.is_empty()
    }

    /// Advance the controller by one tick (§4.5).
    pub fn tick(&mut self) -> TickOutcome {
        let front_pose = loop {
            let Some(front) = self.queue.front().copied() else {
                return TickOutcome::Done;
            };
            let front_pose = front.pose();
            let prev_pose = self.history.back().copied().unwrap_or(self.pose);

            let direct_hit = self.pose.distance_to(front_pose) < self.params.precision_radius;
            let travelled = prev_pose.distance_to(self.pose);
            let remaining = self.pose.distance_to(front_pose);
            let swept_hit = !direct_hit
                && travelled > remaining
                && circle_intersects_segment(
                    front_pose.xy(),
                    self.params.precision_radius,
                    prev_pose.xy(),
                    self.pose.xy(),
                );

            if direct_hit || swept_hit {
                tracing::debug!(?front_pose, direct_hit, swept_hit, "follower: waypoint arrived");
                self.queue.pop_front();
                continue;
            }
            break front_pose;
        };

        let dt = self.params.loop_time;
        let mode = self.params.length_mode;
        let prev_pose = self.history.back().copied().unwrap_or(self.pose);

        // Step 3: velocity estimate against the nominal tick duration, not
        // the jittered effective duration computed below. Preserved
        // verbatim from the source (§9) even though it biases the estimate
        // whenever jitter is nonzero.
        let velocity = (self.pose - prev_pose) / dt;

        // Step 4: desired velocity toward the current waypoint.
        let mut desired = front_pose - self.pose;
        let final_pose = self
            .queue
            .back()
            .copied()
            .map(|wp| wp.pose())
            .unwrap_or(front_pose);
        let dist_to_final = self.pose.distance_to(final_pose);

        if dist_to_final >= self.params.slow_down_radius {
            let len = measure(desired, mode);
            if len == 0.0 {
                // Degeneracy guard: already coincident with the target this
                // tick. Skip the rescale and let the rest of the pipeline
                // integrate toward a zero commanded displacement.
                desired = Pose::ZERO;
            } else {
                desired = desired * (self.params.cruise_velocity / len);
            }
        }

        let displacement = desired * dt;
        let disp_len = measure(displacement, mode);
        if disp_len > self.params.max_velocity {
            desired = desired * (self.params.max_velocity / disp_len);
        }

        // Step 5: acceleration limit.
        let mut accel = (desired - velocity) / dt;
        let accel_len = measure(accel, mode);
        if accel_len > self.params.max_acceleration {
            accel = accel * (self.params.max_acceleration / accel_len);
        }

        // Step 6: integrate, using the jittered effective tick for position
        // (but not for the velocity estimate above, see step 3).
        let dt_eff = self.sample_dt_eff();
        let velocity_new = velocity + accel * dt;
        let pose_new = self.pose + velocity_new * dt_eff;

        self.push_history(self.pose);
        self.pose = pose_new;
        TickOutcome::Moved(pose_new)
    }

    fn push_history(&mut self, pose: Pose) {
        self.history.push_back(pose);
        if let Some(cap) = self.params.history_cap {
            while self.history.len() > cap {
                self.history.pop_front();
            }
        }
    }

    fn sample_dt_eff(&mut self) -> f32 {
        let dev = self.params.loop_time_deviation;
        if dev <= 0.0 {
            return self.params.loop_time;
        }
        let jitter = self.rng.gen_range(-dev..=dev);
        tracing::trace!(jitter, "follower: loop time jitter drawn");
        self.params.loop_time + jitter
    }
}
