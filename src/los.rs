use crate::{supercover_cells, OccupancyGrid, Point};

/// Determine whether there is an unobstructed line of sight between `a` and
/// `b` over `grid` (§4.2).
///
/// Rules, in order:
/// 1. `a == b` is always true.
/// 2. Either endpoint out of bounds is always false.
/// 3. Every cell the rasterized segment passes through (§4.1) must be free.
///
/// `line_of_sight` is symmetric (`los(a, b) == los(b, a)`) and reflexive
/// (`los(a, a) == true`) — the invariant Theta*'s shortcutting depends on.
#[inline]
#[must_use]
pub fn line_of_sight(a: Point, b: Point, grid: &OccupancyGrid) -> bool {
    if a == b {
        return true;
    }
    if !grid.in_bounds(a) || !grid.in_bounds(b) {
        return false;
    }
    supercover_cells(a, b).into_iter().all(|cell| grid.is_free(cell))
}
