//! utils — argument handling shared by the Python bindings.
//!
//! Purpose
//! -------
//! Translate loosely-typed host arguments (plain floats, optional keywords,
//! array-likes) into the validated Rust configuration types consumed by
//! [`crate::covariance`].
//!
//! Key behaviors
//! -------------
//! - [`build_params`] validates and bundles the five covariance parameters.
//! - [`build_assembly_options`] maps the optional keywords `abstol`,
//!   `reltol`, `n_interpol`, `subdivisions`, `key` onto
//!   [`AssemblyOptions`].
//! - With `python-bindings`, `extract_f64_array` accepts NumPy arrays or
//!   Python sequences as contiguous `f64` buffers.
//!
//! Conventions
//! -----------
//! - Missing tolerances fall back to [`IntegrationTolerances::default`].
//! - `subdivisions` switches to adaptive integration; `key` is only read in
//!   that case and defaults to the 21-point rule.
use crate::{
    covariance::{AssemblyMode, AssemblyOptions, CovarResult},
    quadrature::{GaussKronrodRule, IntegrationStrategy},
    wendland::{CovarianceParams, IntegrationTolerances, KernelParams},
};

#[cfg(feature = "python-bindings")]
pub use self::python::*;

/// Validate kernel and covariance parameters in one step.
pub fn build_params(
    mu: f64, smoothness: f64, sill: f64, range: f64, nugget: f64,
) -> CovarResult<(KernelParams, CovarianceParams)> {
    let kernel = KernelParams::new(mu, smoothness)?;
    let cov = CovarianceParams::new(sill, range, nugget)?;
    Ok((kernel, cov))
}

/// Build [`AssemblyOptions`] from optional host keywords.
///
/// # Errors
/// Propagates tolerance, subdivision, rule-key and interpolation-point
/// validation failures.
pub fn build_assembly_options(
    abstol: Option<f64>, reltol: Option<f64>, n_interpol: Option<usize>,
    subdivisions: Option<usize>, key: Option<i32>,
) -> CovarResult<AssemblyOptions> {
    let defaults = IntegrationTolerances::default();
    let tolerances = IntegrationTolerances::new(
        abstol.unwrap_or(defaults.abstol()),
        reltol.unwrap_or(defaults.reltol()),
    )?;

    let strategy = match subdivisions {
        Some(limit) => {
            IntegrationStrategy::adaptive(limit, key.unwrap_or(GaussKronrodRule::Gk21.key()))?
        }
        None => IntegrationStrategy::NonAdaptive,
    };

    let mode = match n_interpol {
        Some(points) => AssemblyMode::interpolated(points)?,
        None => AssemblyMode::Direct,
    };

    AssemblyOptions::new(tolerances, strategy, mode)
}

#[cfg(feature = "python-bindings")]
mod python {
    use numpy::{
        IntoPyArray,    // Vec → PyArray
        PyArrayMethods, // .readonly()
        PyReadonlyArray1,
    };
    use pyo3::{prelude::*, types::PyAny};

    use super::{AssemblyOptions, CovarianceParams, KernelParams};
    use super::{build_assembly_options, build_params};

    /// Borrow `dist` as a contiguous `f64` array, copying sequences and
    /// non-contiguous arrays into a fresh buffer.
    pub fn extract_f64_array<'py>(
        py: Python<'py>, dist: &Bound<'py, PyAny>,
    ) -> PyResult<PyReadonlyArray1<'py, f64>> {
        if let Ok(arr) = dist.extract::<PyReadonlyArray1<f64>>() {
            if arr.as_slice().is_ok() {
                return Ok(arr);
            }
            return Ok(arr.as_array().to_vec().into_pyarray(py).readonly());
        }

        let distances: Vec<f64> = dist.extract().map_err(|_| {
            pyo3::exceptions::PyTypeError::new_err("dist must be a 1-D sequence of float64")
        })?;
        Ok(distances.into_pyarray(py).readonly())
    }

    pub fn extract_params(
        mu: f64, smoothness: f64, sill: f64, range: f64, nugget: f64,
    ) -> PyResult<(KernelParams, CovarianceParams)> {
        Ok(build_params(mu, smoothness, sill, range, nugget)?)
    }

    pub fn extract_assembly_options(
        abstol: Option<f64>, reltol: Option<f64>, n_interpol: Option<usize>,
        subdivisions: Option<usize>, key: Option<i32>,
    ) -> PyResult<AssemblyOptions> {
        Ok(build_assembly_options(abstol, reltol, n_interpol, subdivisions, key)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{covariance::CovarError, wendland::WendlandError};

    #[test]
    // Purpose
    // -------
    // No keywords gives the default configuration.
    //
    // Given
    // -----
    // - All optional arguments `None`.
    //
    // Expect
    // ------
    // - `AssemblyOptions::default()`.
    fn missing_keywords_use_defaults() {
        let opts = build_assembly_options(None, None, None, None, None).unwrap();
        assert_eq!(opts, AssemblyOptions::default());
    }

    #[test]
    // Purpose
    // -------
    // `subdivisions` selects adaptive integration with the 21-point rule
    // unless `key` says otherwise.
    //
    // Given
    // -----
    // - `subdivisions = 30` with and without `key = 1`, and
    //   `n_interpol = 64`.
    //
    // Expect
    // ------
    // - Adaptive strategy with the matching rule and interpolated mode.
    fn subdivisions_select_adaptive_strategy() {
        let opts = build_assembly_options(None, Some(1e-8), Some(64), Some(30), None).unwrap();
        assert_eq!(
            opts.strategy,
            IntegrationStrategy::Adaptive { subdivisions: 30, rule: GaussKronrodRule::Gk21 }
        );
        assert_eq!(opts.mode, AssemblyMode::Interpolated { points: 64 });
        assert_eq!(opts.tolerances.reltol(), 1e-8);

        let opts = build_assembly_options(None, None, None, Some(30), Some(1)).unwrap();
        assert_eq!(
            opts.strategy,
            IntegrationStrategy::Adaptive { subdivisions: 30, rule: GaussKronrodRule::Gk15 }
        );
    }

    #[test]
    // Purpose
    // -------
    // Invalid keywords surface as parameter or option errors.
    //
    // Given
    // -----
    // - Zero tolerances, an unknown rule key, and a 1-point table.
    //
    // Expect
    // ------
    // - `Parameter(InvalidTolerance)`, `Parameter(InvalidRuleKey)`,
    //   `InvalidInterpolationPoints` respectively.
    fn invalid_keywords_are_rejected() {
        assert!(matches!(
            build_assembly_options(Some(0.0), Some(0.0), None, None, None),
            Err(CovarError::Parameter(WendlandError::InvalidTolerance { .. }))
        ));
        assert!(matches!(
            build_assembly_options(Some(0.0), Some(1e-20), None, None, None),
            Err(CovarError::Parameter(WendlandError::InvalidTolerance { .. }))
        ));
        assert!(matches!(
            build_assembly_options(None, None, None, Some(10), Some(7)),
            Err(CovarError::Parameter(WendlandError::InvalidRuleKey { .. }))
        ));
        assert!(matches!(
            build_assembly_options(None, None, Some(1), None, None),
            Err(CovarError::InvalidInterpolationPoints { .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Parameter bundling validates every field.
    //
    // Given
    // -----
    // - A negative nugget.
    //
    // Expect
    // ------
    // - `Parameter(InvalidNugget)`.
    fn build_params_validates() {
        assert!(build_params(3.0, 1.0, 1.0, 2.0, 0.0).is_ok());
        assert!(matches!(
            build_params(3.0, 1.0, 1.0, 2.0, -1.0),
            Err(CovarError::Parameter(WendlandError::InvalidNugget { .. }))
        ));
    }
}
