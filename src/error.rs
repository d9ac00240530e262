use thiserror::Error;

/// Errors surfaced by the planner and the orchestration facade.
///
/// "No path" is deliberately *not* a variant here — §7 treats an unreachable
/// goal as a valid absent result (`Ok(None)`), not a failure.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlanError {
    /// `start` or `goal` fell outside the grid's bounds, or landed on a
    /// blocked cell. The API refuses rather than silently forcing the cell
    /// free (§4.4 Failure modes).
    #[error("start or goal cell is out of bounds or blocked")]
    BlockedOrOutOfBounds,
    /// The spline resampler rejected the planner's polyline (§4.6). The
    /// facade composes the planner's and spline's error surfaces into this
    /// one type rather than introducing a third.
    #[error("spline resampling rejected the planned path: {0}")]
    Spline(#[from] SplineError),
}

/// Errors surfaced by [`crate::spline::interpolate_xy`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SplineError {
    /// `xs` and `ys` did not have the same length.
    #[error("xs and ys must have the same length")]
    LengthMismatch,
    /// Fewer than 2 input points were supplied.
    #[error("at least 2 input points are required")]
    TooFewPoints,
    /// Two consecutive input points coincide, producing a zero chord-length
    /// step and a division by zero in the tridiagonal solve.
    #[error("consecutive input points at index {0} and {1} coincide")]
    CoincidentPoints(usize, usize),
    /// The requested output sample count was less than 2.
    #[error("output sample count must be at least 2")]
    TooFewSamples,
}
