//! Natural cubic spline through a set of knots.
//!
//! Second derivatives are obtained from the usual tridiagonal system with
//! zero curvature at both ends; with two knots this reduces to the linear
//! interpolant. Evaluation outside the knot span extends the boundary
//! segment's cubic.
use crate::interpolation::errors::{SplineError, SplineResult};

/// A fitted natural cubic spline. Owns its knots; dropping it releases them.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline {
    points: Vec<f64>,
    values: Vec<f64>,
    second_derivs: Vec<f64>,
}

impl CubicSpline {
    /// Fit a natural cubic spline through `(points[i], values[i])`.
    ///
    /// # Errors
    /// - [`SplineError::LengthMismatch`] if the slices differ in length.
    /// - [`SplineError::TooFewKnots`] if fewer than two knots are given.
    /// - [`SplineError::NonFiniteKnot`] for NaN/±inf entries.
    /// - [`SplineError::NonIncreasingKnots`] unless `points` is strictly
    ///   increasing.
    pub fn natural(points: &[f64], values: &[f64]) -> SplineResult<Self> {
        if points.len() != values.len() {
            return Err(SplineError::LengthMismatch { points: points.len(), values: values.len() });
        }
        let n = points.len();
        if n < 2 {
            return Err(SplineError::TooFewKnots { found: n });
        }
        for (index, (&point, &value)) in points.iter().zip(values).enumerate() {
            if !point.is_finite() || !value.is_finite() {
                return Err(SplineError::NonFiniteKnot { index, point, value });
            }
        }
        for index in 1..n {
            if points[index] <= points[index - 1] {
                return Err(SplineError::NonIncreasingKnots { index });
            }
        }

        let second_derivs = natural_second_derivatives(points, values);
        Ok(Self { points: points.to_vec(), values: values.to_vec(), second_derivs })
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Evaluate the spline at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        let n = self.points.len();
        let i = self.points.partition_point(|&p| p <= x).saturating_sub(1).min(n - 2);

        let (x_lo, x_hi) = (self.points[i], self.points[i + 1]);
        let h = x_hi - x_lo;
        let a = (x_hi - x) / h;
        let b = (x - x_lo) / h;

        a * self.values[i]
            + b * self.values[i + 1]
            + ((a * a * a - a) * self.second_derivs[i]
                + (b * b * b - b) * self.second_derivs[i + 1])
                * (h * h)
                / 6.0
    }
}

/// Solve for the knot second derivatives with natural end conditions
/// (Thomas algorithm on the interior knots).
fn natural_second_derivatives(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len();
    let mut m = vec![0.0; n];
    if n < 3 {
        return m;
    }

    let interior = n - 2;
    let mut c_prime = vec![0.0; interior];
    let mut d_prime = vec![0.0; interior];

    for k in 0..interior {
        let i = k + 1;
        let h_prev = x[i] - x[i - 1];
        let h_next = x[i + 1] - x[i];
        let diag = 2.0 * (h_prev + h_next);
        let rhs = 6.0 * ((y[i + 1] - y[i]) / h_next - (y[i] - y[i - 1]) / h_prev);

        if k == 0 {
            c_prime[k] = h_next / diag;
            d_prime[k] = rhs / diag;
        } else {
            let w = diag - h_prev * c_prime[k - 1];
            c_prime[k] = h_next / w;
            d_prime[k] = (rhs - h_prev * d_prime[k - 1]) / w;
        }
    }

    m[interior] = d_prime[interior - 1];
    for k in (0..interior - 1).rev() {
        m[k + 1] = d_prime[k] - c_prime[k] * m[k + 2];
    }
    m
}
