//! covariance::vector — covariances for a flat list of distances.
//!
//! Used when only pairwise covariances (not a full grid) are needed, for
//! example for the non-zero entries of a sparse covariance matrix. Distances
//! below a caller-supplied `epsilon` are treated as zero, since vector
//! inputs typically come from computations where exact floating equality
//! with zero is unreliable.
use ndarray::Array1;

use crate::{
    covariance::{
        errors::CovarResult,
        evaluator::CovarianceEvaluator,
        options::{AssemblyMode, AssemblyOptions, verify_epsilon},
        regime::classify_threshold,
    },
    quadrature::Integrator,
    wendland::params::{CovarianceParams, IntegrationTolerances, KernelParams},
};

/// Covariance for each entry of `distances`.
///
/// Regimes: `d < epsilon` → `sill + nugget`; `epsilon <= d < range` →
/// kernel or interpolation; `d >= range` → `0`.
///
/// # Errors
/// - [`CovarError::InvalidEpsilon`](crate::covariance::CovarError::InvalidEpsilon)
///   if `epsilon` is negative or not finite (checked before any evaluation).
/// - Any evaluation or interpolation failure aborts the call, as for
///   [`covariance_matrix`](crate::covariance::covariance_matrix).
pub fn covariance_vector(
    distances: &[f64], kernel: &KernelParams, cov: &CovarianceParams, epsilon: f64,
    options: &AssemblyOptions,
) -> CovarResult<Array1<f64>> {
    covariance_vector_with(
        distances,
        kernel,
        cov,
        epsilon,
        &options.tolerances,
        options.mode,
        &options.strategy,
    )
}

/// Same as [`covariance_vector`] with an explicit [`Integrator`].
pub fn covariance_vector_with<I: Integrator + ?Sized>(
    distances: &[f64], kernel: &KernelParams, cov: &CovarianceParams, epsilon: f64,
    tolerances: &IntegrationTolerances, mode: AssemblyMode, integrator: &I,
) -> CovarResult<Array1<f64>> {
    verify_epsilon(epsilon)?;
    let evaluator = CovarianceEvaluator::prepare(*kernel, *cov, *tolerances, mode, integrator)?;
    let range = cov.range();

    let values = distances
        .iter()
        .map(|&d| evaluator.value(classify_threshold(d, epsilon, range), d))
        .collect::<CovarResult<Vec<f64>>>()?;
    Ok(Array1::from(values))
}
