use bevy_math::Vec2;

/// Determine if a circle of radius `radius`, centered at `center`, intersects
/// the segment `p1 -> p2`.
///
/// Solves `a*t^2 + b*t + c = 0` for the parametric segment point
/// `p1 + t*(p2-p1)`, where `a = |d|^2`, `b = 2*f.d`, `c = |f|^2 - r^2`,
/// `d = p2 - p1`, `f = p1 - center`. Intersects iff `a > 0`, the
/// discriminant is non-negative, and at least one root lies in `[0, 1]`.
#[inline]
#[must_use]
pub fn circle_intersects_segment(center: Vec2, radius: f32, p1: Vec2, p2: Vec2) -> bool {
    let d = p2 - p1;
    let f = p1 - center;

    let a = d.length_squared();
    if a == 0.0 {
        return false;
    }
    let b = 2.0 * f.dot(d);
    let c = f.length_squared() - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return false;
    }

    let discriminant = discriminant.sqrt();
    let t1 = (-b - discriminant) / (2.0 * a);
    let t2 = (-b + discriminant) / (2.0 * a);

    (0.0..=1.0).contains(&t1) || (0.0..=1.0).contains(&t2)
}

#[cfg(test)]
mod test {
    use super::*;
    use bevy_math::vec2;

    #[test]
    fn test_segment_passes_through_circle() {
        // Robot teleports from (-3, 0) to (5, 0); waypoint at (1, 0), radius 2.
        assert!(circle_intersects_segment(
            vec2(1.0, 0.0),
            2.0,
            vec2(-3.0, 0.0),
            vec2(5.0, 0.0)
        ));
    }

    #[test]
    fn test_segment_misses_circle() {
        assert!(!circle_intersects_segment(
            vec2(1.0, 10.0),
            2.0,
            vec2(-3.0, 0.0),
            vec2(5.0, 0.0)
        ));
    }

    #[test]
    fn test_zero_length_segment_never_intersects() {
        assert!(!circle_intersects_segment(
            vec2(0.0, 0.0),
            1.0,
            vec2(0.0, 0.0),
            vec2(0.0, 0.0)
        ));
    }

    #[test]
    fn test_tangent_segment_counts_as_intersecting() {
        // Segment runs along y=1, circle of radius 1 centered at origin: tangent at (0,1).
        assert!(circle_intersects_segment(
            vec2(0.0, 0.0),
            1.0,
            vec2(-5.0, 1.0),
            vec2(5.0, 1.0)
        ));
    }
}
