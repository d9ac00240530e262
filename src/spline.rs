//! Natural cubic spline interpolation, parameterized by cumulative
//! chord-length and resampled at evenly spaced parameter values (§4.3).
//!
//! Adapted from the Hermite-form natural cubic spline fit (Thomas algorithm
//! tridiagonal solve) the source ported from Ryan Seghers' C# implementation.

use crate::SplineError;

/// Resample `(xs, ys)` at `count` evenly arclength-spaced points along the
/// natural cubic spline through them.
///
/// Returns `Err` if `xs` and `ys` have mismatched lengths, fewer than 2
/// points, `count < 2`, or any two consecutive input points coincide (a zero
/// chord-length step would otherwise divide by zero in the tridiagonal
/// solve).
pub fn interpolate_xy(xs: &[f32], ys: &[f32], count: usize) -> Result<(Vec<f32>, Vec<f32>), SplineError> {
    if xs.len() != ys.len() {
        return Err(SplineError::LengthMismatch);
    }
    if xs.len() < 2 {
        return Err(SplineError::TooFewPoints);
    }
    if count < 2 {
        return Err(SplineError::TooFewSamples);
    }

    let n = xs.len();
    let mut distances = vec![0.0f32; n];
    for i in 1..n {
        let dx = xs[i] - xs[i - 1];
        let dy = ys[i] - ys[i - 1];
        let step = (dx * dx + dy * dy).sqrt();
        if step == 0.0 {
            return Err(SplineError::CoincidentPoints(i - 1, i));
        }
        distances[i] = distances[i - 1] + step;
    }

    let total = distances[n - 1];
    let step = total / (count - 1) as f32;
    let sample_params: Vec<f32> = (0..count).map(|j| j as f32 * step).collect();

    let xs_out = interpolate_1d(&distances, xs, &sample_params);
    let ys_out = interpolate_1d(&distances, ys, &sample_params);
    Ok((xs_out, ys_out))
}

/// Evaluate the natural cubic spline fit of `y(d)` at each parameter value in
/// `d_interp` (§4.3 steps 2-4).
fn interpolate_1d(d: &[f32], y: &[f32], d_interp: &[f32]) -> Vec<f32> {
    let (a, b) = hermite_coefficients(d, y);

    let mut out = Vec::with_capacity(d_interp.len());
    let mut segment = 0;
    for &di in d_interp {
        while segment < d.len() - 2 && di > d[segment + 1] {
            segment += 1;
        }
        let dd = d[segment + 1] - d[segment];
        let t = (di - d[segment]) / dd;
        let y0 = y[segment];
        let y1 = y[segment + 1];
        let value = (1.0 - t) * y0 + t * y1 + t * (1.0 - t) * (a[segment] * (1.0 - t) + b[segment] * t);
        out.push(value);
    }
    out
}

/// Solve the natural cubic spline's tridiagonal system for knot slopes `k`
/// via the Thomas algorithm (forward sweep, backward substitution), then
/// derive the Hermite control coefficients `a_i`, `b_i` per segment.
fn hermite_coefficients(d: &[f32], y: &[f32]) -> (Vec<f32>, Vec<f32>) {
    let n = d.len();

    let mut lower = vec![0.0f32; n]; // sub-diagonal
    let mut diag = vec![0.0f32; n]; // diagonal
    let mut upper = vec![0.0f32; n]; // super-diagonal
    let mut rhs = vec![0.0f32; n];

    let dx0 = d[1] - d[0];
    upper[0] = 1.0 / dx0;
    diag[0] = 2.0 * upper[0];
    rhs[0] = 3.0 * (y[1] - y[0]) / (dx0 * dx0);

    for i in 1..n - 1 {
        let dx1 = d[i] - d[i - 1];
        let dx2 = d[i + 1] - d[i];
        lower[i] = 1.0 / dx1;
        upper[i] = 1.0 / dx2;
        diag[i] = 2.0 * (lower[i] + upper[i]);
        let dy1 = y[i] - y[i - 1];
        let dy2 = y[i + 1] - y[i];
        rhs[i] = 3.0 * (dy1 / (dx1 * dx1) + dy2 / (dx2 * dx2));
    }

    let dx_last = d[n - 1] - d[n - 2];
    let dy_last = y[n - 1] - y[n - 2];
    lower[n - 1] = 1.0 / dx_last;
    diag[n - 1] = 2.0 * lower[n - 1];
    rhs[n - 1] = 3.0 * (dy_last / (dx_last * dx_last));

    let mut c_prime = vec![0.0f32; n];
    c_prime[0] = upper[0] / diag[0];
    for i in 1..n {
        c_prime[i] = upper[i] / (diag[i] - c_prime[i - 1] * lower[i]);
    }

    let mut d_prime = vec![0.0f32; n];
    d_prime[0] = rhs[0] / diag[0];
    for i in 1..n {
        d_prime[i] = (rhs[i] - d_prime[i - 1] * lower[i]) / (diag[i] - c_prime[i - 1] * lower[i]);
    }

    let mut k = vec![0.0f32; n];
    k[n - 1] = d_prime[n - 1];
    for i in (0..n - 1).rev() {
        k[i] = d_prime[i] - c_prime[i] * k[i + 1];
    }

    let mut a = vec![0.0f32; n - 1];
    let mut b = vec![0.0f32; n - 1];
    for i in 1..n {
        let dx = d[i] - d[i - 1];
        let dy = y[i] - y[i - 1];
        a[i - 1] = k[i - 1] * dx - dy;
        b[i - 1] = -k[i] * dx + dy;
    }

    (a, b)
}
