//! covariance::matrix — covariance matrices from distance matrices.
//!
//! Purpose
//! -------
//! Fill a covariance matrix of the same shape as a distance matrix by
//! classifying each entry into the origin, support or outside regime and
//! evaluating `C(d)` accordingly.
//!
//! Key behaviors
//! -------------
//! - Square input is treated as a symmetric distance matrix: the diagonal
//!   is set to `sill + nugget`, each pair `i < j` is evaluated once from
//!   the upper triangle and written to both `(i, j)` and `(j, i)`. The
//!   lower triangle of the input is never read.
//! - Rectangular input (cross-covariances) is filled cell by cell with no
//!   symmetry or diagonal assumption.
//! - Zero distance is detected by exact equality.
//!
//! Invariants & assumptions
//! ------------------------
//! - `C(d) = 0` exactly for `d >= range` in both modes.
//! - The first failing entry aborts the call; the partially filled buffer
//!   is dropped and never returned.
//! - Entries are evaluated sequentially on the calling thread.
use ndarray::{Array2, ArrayView2};

use crate::{
    covariance::{
        errors::CovarResult,
        evaluator::CovarianceEvaluator,
        options::{AssemblyMode, AssemblyOptions},
        regime::classify_exact,
    },
    quadrature::Integrator,
    wendland::params::{CovarianceParams, IntegrationTolerances, KernelParams},
};

/// Covariance matrix for `distances` using the strategy in `options`.
///
/// Parameters
/// ----------
/// - `distances`: `m×n` distance matrix; square input is read as symmetric
///   (upper triangle authoritative).
/// - `kernel`: `mu`, `smoothness`.
/// - `cov`: `sill`, `range`, `nugget`.
/// - `options`: tolerances, integration strategy and assembly mode.
///
/// Returns
/// -------
/// `CovarResult<Array2<f64>>`
///   The `m×n` covariance matrix, or the first failure.
///
/// Errors
/// ------
/// - [`CovarError::InvalidInterpolationPoints`](crate::covariance::CovarError::InvalidInterpolationPoints)
///   for interpolated mode with fewer than 2 points.
/// - [`CovarError::Interpolation`](crate::covariance::CovarError::Interpolation)
///   if a table sample fails.
/// - [`CovarError::Kernel`](crate::covariance::CovarError::Kernel) if a
///   direct evaluation fails.
///
/// Examples
/// --------
/// ```rust
/// # use gw_covar::covariance::{AssemblyOptions, covariance_matrix};
/// # use gw_covar::wendland::{CovarianceParams, KernelParams};
/// # use ndarray::array;
/// let kernel = KernelParams::new(1.0, 0.0).unwrap();
/// let cov = CovarianceParams::new(2.0, 10.0, 0.5).unwrap();
/// let dist = array![[0.0, 5.0], [5.0, 0.0]];
/// let c = covariance_matrix(dist.view(), &kernel, &cov, &AssemblyOptions::default()).unwrap();
/// assert_eq!(c, array![[2.5, 1.0], [1.0, 2.5]]);
/// ```
pub fn covariance_matrix(
    distances: ArrayView2<'_, f64>, kernel: &KernelParams, cov: &CovarianceParams,
    options: &AssemblyOptions,
) -> CovarResult<Array2<f64>> {
    covariance_matrix_with(
        distances,
        kernel,
        cov,
        &options.tolerances,
        options.mode,
        &options.strategy,
    )
}

/// Same as [`covariance_matrix`] with an explicit [`Integrator`].
pub fn covariance_matrix_with<I: Integrator + ?Sized>(
    distances: ArrayView2<'_, f64>, kernel: &KernelParams, cov: &CovarianceParams,
    tolerances: &IntegrationTolerances, mode: AssemblyMode, integrator: &I,
) -> CovarResult<Array2<f64>> {
    let evaluator = CovarianceEvaluator::prepare(*kernel, *cov, *tolerances, mode, integrator)?;
    let (rows, cols) = distances.dim();

    if rows == cols {
        fill_symmetric(distances, &evaluator)
    } else {
        fill_rectangular(distances, &evaluator)
    }
}

fn fill_symmetric<I: Integrator + ?Sized>(
    distances: ArrayView2<'_, f64>, evaluator: &CovarianceEvaluator<'_, I>,
) -> CovarResult<Array2<f64>> {
    let n = distances.nrows();
    let range = evaluator.params().range();
    let mut out = Array2::<f64>::zeros((n, n));

    for i in 0..n {
        out[[i, i]] = evaluator.params().variance();
        for j in (i + 1)..n {
            let d = distances[[i, j]];
            let value = evaluator.value(classify_exact(d, range), d)?;
            out[[i, j]] = value;
            out[[j, i]] = value;
        }
    }
    Ok(out)
}

fn fill_rectangular<I: Integrator + ?Sized>(
    distances: ArrayView2<'_, f64>, evaluator: &CovarianceEvaluator<'_, I>,
) -> CovarResult<Array2<f64>> {
    let (rows, cols) = distances.dim();
    let range = evaluator.params().range();
    let mut out = Array2::<f64>::zeros((rows, cols));

    for i in 0..rows {
        for j in 0..cols {
            let d = distances[[i, j]];
            out[[i, j]] = evaluator.value(classify_exact(d, range), d)?;
        }
    }
    Ok(out)
}
