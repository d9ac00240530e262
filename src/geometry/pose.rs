#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use bevy_math::{vec3, Vec3};
use std::ops::{Add, Div, Mul, Sub};

/// A 2D pose: position plus heading, carried through the pose algebra as a
/// single three-component vector so that `length()` combines all three — see
/// the crate-level docs for why the follower deliberately measures the
/// kinematic limits against this combined norm rather than `(x, y)` alone.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Pose(Vec3);

impl Pose {
    pub const ZERO: Self = Self(Vec3::ZERO);

    #[inline]
    #[must_use]
    pub fn new(x: f32, y: f32, theta: f32) -> Self {
        Self(vec3(x, y, theta))
    }

    #[inline]
    #[must_use]
    pub fn x(&self) -> f32 {
        self.0.x
    }

    #[inline]
    #[must_use]
    pub fn y(&self) -> f32 {
        self.0.y
    }

    #[inline]
    #[must_use]
    pub fn theta(&self) -> f32 {
        self.0.z
    }

    /// The planar `(x, y)` subvector only, ignoring heading.
    #[inline]
    #[must_use]
    pub fn xy(&self) -> bevy_math::Vec2 {
        self.0.truncate()
    }

    /// Euclidean distance to `other`, over `(x, y)` only. The arrival test
    /// (`FollowerState::tick`) and planner both use planar distance, never
    /// the theta-inclusive norm.
    #[inline]
    #[must_use]
    pub fn distance_to(&self, other: Pose) -> f32 {
        self.xy().distance(other.xy())
    }

    /// The combined `(x, y, theta)` Euclidean norm. Used by the follower's
    /// kinematic limit checks under the default [`crate::follower::LengthMode::IncludeTheta`].
    #[inline]
    #[must_use]
    pub fn length(&self) -> f32 {
        self.0.length()
    }

    /// The planar `(x, y)` norm only, ignoring heading. Used under
    /// [`crate::follower::LengthMode::PlanarOnly`].
    #[inline]
    #[must_use]
    pub fn planar_length(&self) -> f32 {
        self.xy().length()
    }
}

impl From<(f32, f32, f32)> for Pose {
    #[inline]
    fn from((x, y, theta): (f32, f32, f32)) -> Self {
        Self::new(x, y, theta)
    }
}

impl Add for Pose {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Pose {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul<f32> for Pose {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Div<f32> for Pose {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self::Output {
        Self(self.0 / rhs)
    }
}

/// A pose the follower treats as a navigation target. `theta` is carried but
/// unused by the arrival test, which is planar-distance-only (§4 Data Model).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Waypoint(Pose);

impl Waypoint {
    #[inline]
    #[must_use]
    pub fn new(x: f32, y: f32, theta: f32) -> Self {
        Self(Pose::new(x, y, theta))
    }

    #[inline]
    #[must_use]
    pub fn pose(&self) -> Pose {
        self.0
    }
}

impl From<Pose> for Waypoint {
    #[inline]
    fn from(pose: Pose) -> Self {
        Self(pose)
    }
}

impl From<Waypoint> for Pose {
    #[inline]
    fn from(wp: Waypoint) -> Self {
        wp.0
    }
}

impl From<(f32, f32)> for Waypoint {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y, 0.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_length_includes_theta() {
        let p = Pose::new(3.0, 4.0, 0.0);
        assert_eq!(p.length(), 5.0);
        let p = Pose::new(0.0, 0.0, 5.0);
        assert_eq!(p.length(), 5.0);
        let p = Pose::new(3.0, 4.0, 0.0);
        assert_eq!(p.planar_length(), 5.0);
    }

    #[test]
    fn test_distance_ignores_theta() {
        let a = Pose::new(0.0, 0.0, 0.0);
        let b = Pose::new(3.0, 4.0, 100.0);
        assert_eq!(a.distance_to(b), 5.0);
    }

    #[test]
    fn test_pose_algebra() {
        let a = Pose::new(1.0, 2.0, 3.0);
        let b = Pose::new(4.0, 5.0, 6.0);
        let sum = a + b;
        assert_eq!((sum.x(), sum.y(), sum.theta()), (5.0, 7.0, 9.0));
        let diff = b - a;
        assert_eq!((diff.x(), diff.y(), diff.theta()), (3.0, 3.0, 3.0));
        let scaled = a * 2.0;
        assert_eq!((scaled.x(), scaled.y(), scaled.theta()), (2.0, 4.0, 6.0));
        let divided = scaled / 2.0;
        assert_eq!(divided, a);
    }

    #[test]
    fn test_waypoint_roundtrip() {
        let wp = Waypoint::new(1.0, 2.0, 0.5);
        let pose: Pose = wp.into();
        assert_eq!(pose, Pose::new(1.0, 2.0, 0.5));
    }
}
