//! Interpolation table for the covariance function on `[0, range]`.
//!
//! The kernel is sampled at `N` equally spaced distances
//! `d_i = i · range / (N − 1)`, scaled by `sill`, and a natural cubic
//! spline is fitted through the samples. Lookups then cost a binary search
//! and a cubic evaluation instead of a numerical integration.
//!
//! A table belongs to exactly one assembly call: it is built at call entry,
//! queried read-only, and dropped when the call returns.
use log::debug;

use crate::{
    interpolation::{
        errors::{InterpolationError, InterpolationResult},
        spline::CubicSpline,
    },
    quadrature::Integrator,
    wendland::{kernel::WendlandKernel, params::CovarianceParams},
};

#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationTable {
    spline: CubicSpline,
    range: f64,
}

impl InterpolationTable {
    /// Sample `sill · K(d / range)` at `points` distances and fit a spline.
    ///
    /// Parameters
    /// ----------
    /// - `points`: number of samples `N >= 2`.
    /// - `kernel`: correlation kernel bound to the call's parameters.
    /// - `cov`: supplies `sill` and `range`; the nugget is not sampled.
    ///
    /// Errors
    /// ------
    /// - [`InterpolationError::TooFewPoints`] for `points < 2`.
    /// - [`InterpolationError::Kernel`] for the first failing sample; no
    ///   table is produced.
    /// - [`InterpolationError::Spline`] if the samples cannot be fitted.
    pub fn build<I: Integrator + ?Sized>(
        points: usize, kernel: &WendlandKernel<'_, I>, cov: &CovarianceParams,
    ) -> InterpolationResult<Self> {
        if points < 2 {
            return Err(InterpolationError::TooFewPoints { points });
        }

        let range = cov.range();
        let spacing = range / (points as f64 - 1.0);

        let mut knots = Vec::with_capacity(points);
        let mut values = Vec::with_capacity(points);
        for i in 0..points {
            let point = i as f64 * spacing;
            let correlation = kernel
                .correlation(point / range)
                .map_err(|source| InterpolationError::Kernel { point, source })?;
            knots.push(point);
            values.push(cov.sill() * correlation);
        }

        let spline = CubicSpline::natural(&knots, &values)?;
        debug!("built interpolation table with {points} points over [0, {range}]");
        Ok(Self { spline, range })
    }

    /// Interpolated covariance at raw distance `distance`.
    ///
    /// Only meaningful for `0 <= distance < range`; callers classify
    /// distances before querying.
    pub fn query(&self, distance: f64) -> f64 {
        self.spline.eval(distance)
    }

    pub fn len(&self) -> usize {
        self.spline.points().len()
    }

    pub fn is_empty(&self) -> bool {
        self.spline.points().is_empty()
    }

    pub fn range(&self) -> f64 {
        self.range
    }

    /// Sample distances and sampled covariance values.
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.spline.points().iter().copied().zip(self.spline.values().iter().copied())
    }
}
