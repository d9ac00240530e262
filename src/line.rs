use crate::Point;

/// Enumerate every grid cell the segment `a -> b` passes through, including
/// "corner touch" cells at a diagonal step, so that no diagonal can slip
/// between two blocked cells that only share a corner (§4.1).
///
/// This is a supercover variant of Bresenham's algorithm: the dominant axis
/// drives the step, and on each minor-axis crossing the accumulated error on
/// both sides of the step is compared against the axis delta. An exact tie
/// (the segment crosses precisely on a diagonal) emits both bridge cells; an
/// asymmetric crossing emits only the cell the segment actually enters.
///
/// `cells(a, b)` and `cells(b, a)` are reversals of each other, as the
/// algorithm is symmetric under swapping the endpoints and negating the step
/// directions.
#[must_use]
pub fn supercover_cells(a: Point, b: Point) -> Vec<Point> {
    if a == b {
        return vec![a];
    }

    let (mut x, mut y) = (a.x(), a.y());
    let mut dx = b.x() - x;
    let mut dy = b.y() - y;

    let mut cells = vec![Point::new(x, y)];

    let ystep = if dy < 0 {
        dy = -dy;
        -1
    } else {
        1
    };
    let xstep = if dx < 0 {
        dx = -dx;
        -1
    } else {
        1
    };

    let ddx = 2 * dx;
    let ddy = 2 * dy;

    if ddx >= ddy {
        let mut error = dx;
        let mut error_prev = dx;
        for _ in 0..dx {
            x += xstep;
            error += ddy;
            if error > ddx {
                y += ystep;
                error -= ddx;
                match (error + error_prev).cmp(&ddx) {
                    std::cmp::Ordering::Less => cells.push(Point::new(x, y - ystep)),
                    std::cmp::Ordering::Greater => cells.push(Point::new(x - xstep, y)),
                    std::cmp::Ordering::Equal => {
                        cells.push(Point::new(x, y - ystep));
                        cells.push(Point::new(x - xstep, y));
                    }
                }
            }
            cells.push(Point::new(x, y));
            error_prev = error;
        }
    } else {
        let mut error = dy;
        let mut error_prev = dy;
        for _ in 0..dy {
            y += ystep;
            error += ddx;
            if error > ddy {
                x += xstep;
                error -= ddy;
                match (error + error_prev).cmp(&ddy) {
                    std::cmp::Ordering::Less => cells.push(Point::new(x - xstep, y)),
                    std::cmp::Ordering::Greater => cells.push(Point::new(x, y - ystep)),
                    std::cmp::Ordering::Equal => {
                        cells.push(Point::new(x - xstep, y));
                        cells.push(Point::new(x, y - ystep));
                    }
                }
            }
            cells.push(Point::new(x, y));
            error_prev = error;
        }
    }

    cells
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashSet;

    fn as_set(points: &[Point]) -> HashSet<(i32, i32)> {
        points.iter().map(|&p| p.into()).collect()
    }

    #[test]
    fn test_includes_both_endpoints() {
        let a = Point::new(0, 0);
        let b = Point::new(5, 3);
        let cells = supercover_cells(a, b);
        assert_eq!(cells.first(), Some(&a));
        assert_eq!(cells.last(), Some(&b));
    }

    #[test]
    fn test_symmetry() {
        let cases = [
            (Point::new(0, 0), Point::new(3, 4)),
            (Point::new(0, 0), Point::new(10, 10)),
            (Point::new(2, 7), Point::new(9, 1)),
            (Point::new(0, 0), Point::new(5, 0)),
            (Point::new(0, 0), Point::new(0, 5)),
            (Point::new(-3, -2), Point::new(4, 6)),
        ];
        for (a, b) in cases {
            let forward = as_set(&supercover_cells(a, b));
            let backward = as_set(&supercover_cells(b, a));
            assert_eq!(forward, backward, "a={a:?} b={b:?}");
        }
    }

    #[test]
    fn test_axis_aligned_lines_visit_every_unit_cell() {
        let cells = supercover_cells(Point::new(0, 0), Point::new(4, 0));
        assert_eq!(
            cells,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(3, 0),
                Point::new(4, 0),
            ]
        );
    }

    #[test]
    fn test_exact_diagonal_has_no_bridge_cells() {
        let cells = supercover_cells(Point::new(0, 0), Point::new(3, 3));
        assert_eq!(
            cells,
            vec![
                Point::new(0, 0),
                Point::new(1, 1),
                Point::new(2, 2),
                Point::new(3, 3),
            ]
        );
    }

    #[test]
    fn test_corner_touch_property() {
        // A shallow diagonal must bridge every corner it clips, so that a
        // line-of-sight oracle built on this never lets a diagonal slip
        // between two blocked cells that share only a corner.
        let cells = supercover_cells(Point::new(0, 0), Point::new(5, 2));
        for pair in cells.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let dx = (b.x() - a.x()).abs();
            let dy = (b.y() - a.y()).abs();
            assert!(dx + dy <= 1, "cells {a:?} -> {b:?} are not 4-connected");
        }
    }

    #[test]
    fn test_same_point() {
        let p = Point::new(3, 3);
        assert_eq!(supercover_cells(p, p), vec![p]);
    }
}
