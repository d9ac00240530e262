#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use bevy_math::{ivec2, IVec2};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// An integer grid cell coordinate.
///
/// Backed by [`IVec2`], with the domain-specific methods the planner needs
/// layered on top.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point(IVec2);

impl Point {
    pub const ZERO: Self = Self(IVec2::ZERO);

    /// The eight 8-connected unit offsets, in a fixed order starting at north
    /// and proceeding clockwise.
    pub const NEIGHBOR_OFFSETS: [IVec2; 8] = [
        ivec2(0, 1),
        ivec2(1, 1),
        ivec2(1, 0),
        ivec2(1, -1),
        ivec2(0, -1),
        ivec2(-1, -1),
        ivec2(-1, 0),
        ivec2(-1, 1),
    ];

    /// The four 4-connected (cardinal) unit offsets.
    pub const CARDINAL_OFFSETS: [IVec2; 4] =
        [ivec2(0, 1), ivec2(1, 0), ivec2(0, -1), ivec2(-1, 0)];

    #[inline]
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self(ivec2(x, y))
    }

    #[inline]
    #[must_use]
    pub fn x(&self) -> i32 {
        self.0.x
    }

    #[inline]
    #[must_use]
    pub fn y(&self) -> i32 {
        self.0.y
    }

    #[inline]
    #[must_use]
    pub fn as_ivec2(&self) -> IVec2 {
        self.0
    }

    /// Squared Euclidean distance to `other`.
    #[inline]
    #[must_use]
    pub fn distance_squared_to(&self, other: Point) -> f32 {
        self.0.as_vec2().distance_squared(other.0.as_vec2())
    }

    /// Euclidean distance to `other`.
    #[inline]
    #[must_use]
    pub fn distance_to(&self, other: Point) -> f32 {
        self.0.as_vec2().distance(other.0.as_vec2())
    }

    /// The 8-connected neighbors of this point, in a fixed order. Does not
    /// filter on grid bounds; callers intersect with an [`crate::OccupancyGrid`].
    #[inline]
    #[must_use]
    pub fn neighbors8(&self) -> [Point; 8] {
        Self::NEIGHBOR_OFFSETS.map(|offset| Self(self.0 + offset))
    }

    /// The 4-connected (cardinal) neighbors of this point.
    #[inline]
    #[must_use]
    pub fn neighbors4(&self) -> [Point; 4] {
        Self::CARDINAL_OFFSETS.map(|offset| Self(self.0 + offset))
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (i32, i32) {
    #[inline]
    fn from(point: Point) -> Self {
        (point.x(), point.y())
    }
}

impl From<IVec2> for Point {
    #[inline]
    fn from(v: IVec2) -> Self {
        Self(v)
    }
}

impl From<Point> for IVec2 {
    #[inline]
    fn from(point: Point) -> Self {
        point.0
    }
}

impl Neg for Point {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul<i32> for Point {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: i32) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Div<i32> for Point {
    type Output = Self;

    #[inline]
    fn div(self, rhs: i32) -> Self::Output {
        Self(self.0 / rhs)
    }
}
