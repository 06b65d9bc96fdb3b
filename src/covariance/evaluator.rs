//! Per-call covariance function `C(d)` shared by the matrix and vector
//! assemblers.
//!
//! Holds the kernel bound to the call's parameters and, in interpolated
//! mode, the call's own interpolation table. Both are dropped with the
//! evaluator when the assembly call returns.
use log::error;

use crate::{
    covariance::{
        errors::{CovarError, CovarResult},
        options::AssemblyMode,
        regime::DistanceRegime,
    },
    interpolation::{errors::InterpolationError, table::InterpolationTable},
    quadrature::Integrator,
    wendland::{
        errors::WendlandError,
        kernel::WendlandKernel,
        params::{CovarianceParams, IntegrationTolerances, KernelParams},
    },
};

#[derive(Debug)]
pub struct CovarianceEvaluator<'a, I: Integrator + ?Sized> {
    kernel: WendlandKernel<'a, I>,
    cov: CovarianceParams,
    table: Option<InterpolationTable>,
}

impl<'a, I: Integrator + ?Sized> CovarianceEvaluator<'a, I> {
    /// Bind parameters and, for interpolated mode, build the table.
    ///
    /// # Errors
    /// - [`CovarError::InvalidInterpolationPoints`] for fewer than 2 points.
    /// - [`CovarError::Interpolation`] if any table sample fails.
    pub fn prepare(
        kernel: KernelParams, cov: CovarianceParams, tolerances: IntegrationTolerances,
        mode: AssemblyMode, integrator: &'a I,
    ) -> CovarResult<Self> {
        let kernel = WendlandKernel::new(kernel, tolerances, integrator);
        let table = match mode {
            AssemblyMode::Direct => None,
            AssemblyMode::Interpolated { points } => {
                AssemblyMode::interpolated(points)?;
                let table = InterpolationTable::build(points, &kernel, &cov).inspect_err(|err| {
                    if let InterpolationError::Kernel { source, .. } = err {
                        log_kernel_failure(source);
                    }
                })?;
                Some(table)
            }
        };
        Ok(Self { kernel, cov, table })
    }

    pub fn params(&self) -> &CovarianceParams {
        &self.cov
    }

    pub fn is_interpolated(&self) -> bool {
        self.table.is_some()
    }

    /// Covariance at raw distance `distance` already classified as `regime`.
    ///
    /// # Errors
    /// [`CovarError::Kernel`] if a direct kernel evaluation fails.
    pub fn value(&self, regime: DistanceRegime, distance: f64) -> CovarResult<f64> {
        match regime {
            DistanceRegime::Origin => Ok(self.cov.variance()),
            DistanceRegime::Outside => Ok(0.0),
            DistanceRegime::Support => match &self.table {
                Some(table) => Ok(table.query(distance)),
                None => {
                    let correlation =
                        self.kernel.correlation(distance / self.cov.range()).map_err(|source| {
                            log_kernel_failure(&source);
                            CovarError::Kernel { distance, source }
                        })?;
                    Ok(self.cov.sill() * correlation)
                }
            },
        }
    }
}

/// Emit one diagnostic per failing stage of a kernel evaluation.
fn log_kernel_failure(err: &WendlandError) {
    if let WendlandError::KernelEvaluation { t, integration, beta } = err {
        if let Some(failure) = integration {
            error!("error occurred during numerical integration (t = {t}): {failure}");
        }
        if let Some(failure) = beta {
            error!("error occurred while calculating the beta function (t = {t}): {failure}");
        }
    }
}
