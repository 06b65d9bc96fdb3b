//! gw_covar — Generalized Wendland covariance functions with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! covariance assembly to Python via the `_gw_covar` extension module. When the
//! `python-bindings` feature is enabled, this module defines the
//! Python-facing functions `covar_matrix` and `covar_vector`.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules: `wendland` (kernel), `quadrature`
//!   (Gauss–Kronrod integration), `interpolation` (cubic spline tables) and
//!   `covariance` (matrix/vector assembly).
//! - Define `#[pyfunction]` wrappers and the `#[pymodule]` initializer for
//!   the `_gw_covar` Python extension.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in the inner Rust modules; this file
//!   performs only FFI glue, option parsing, and error mapping.
//! - Parameter validation happens in the core modules; the bindings never
//!   duplicate it.
//!
//! Conventions
//! -----------
//! - Optional Python arguments map onto [`covariance::AssemblyOptions`]:
//!   `n_interpol` selects interpolated mode, `subdivisions`/`key` select the
//!   adaptive integration strategy.
//! - Errors from core Rust code are propagated as rich error types internally
//!   and converted to `ValueError` at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should call [`covariance::covariance_matrix`] and
//!   [`covariance::covariance_vector`] directly and can ignore the PyO3
//!   items guarded by the `python-bindings` feature.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules and
//!   by `tests/integration_covariance_pipeline.rs`.

pub mod covariance;
pub mod interpolation;
pub mod quadrature;
pub mod utils;
pub mod wendland;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray1, PyArray2, PyReadonlyArray2};

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    covariance::{covariance_matrix, covariance_vector},
    utils::{extract_assembly_options, extract_f64_array, extract_params},
};

/// covar_matrix — covariance matrix from a 2-D distance matrix.
///
/// Parameters
/// ----------
/// Called from Python as
/// `covar_matrix(dist, mu, smoothness, sill, range, nugget, abstol=None,
/// reltol=None, n_interpol=None, subdivisions=None, key=None)`:
/// - `dist`: 2-D `float64` array of distances. Square inputs are treated as
///   symmetric and only their upper triangle is read.
/// - `mu`, `smoothness`, `sill`, `range`, `nugget`: covariance parameters.
/// - `abstol`, `reltol`: integration tolerances (defaults `1e-10`, `1e-6`).
/// - `n_interpol`: when given, use a spline table with that many points.
/// - `subdivisions`, `key`: when `subdivisions` is given, integrate
///   adaptively with at most that many subintervals and Gauss–Kronrod rule
///   `key` (1 = 15-point, 2 = 21-point; default 2).
///
/// Errors
/// ------
/// - `ValueError` for invalid parameters or any failed evaluation.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    text_signature = "(dist, mu, smoothness, sill, range, nugget, /, abstol=None, reltol=None, n_interpol=None, subdivisions=None, key=None)",
    signature = (
        dist, mu, smoothness, sill, range, nugget,
        abstol = None, reltol = None, n_interpol = None, subdivisions = None, key = None
    )
)]
#[allow(clippy::too_many_arguments)]
pub fn covar_matrix<'py>(
    py: Python<'py>, dist: PyReadonlyArray2<'py, f64>, mu: f64, smoothness: f64, sill: f64,
    range: f64, nugget: f64, abstol: Option<f64>, reltol: Option<f64>, n_interpol: Option<usize>,
    subdivisions: Option<usize>, key: Option<i32>,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let (kernel, cov) = extract_params(mu, smoothness, sill, range, nugget)?;
    let options = extract_assembly_options(abstol, reltol, n_interpol, subdivisions, key)?;
    let out = covariance_matrix(dist.as_array(), &kernel, &cov, &options)?;
    Ok(out.into_pyarray(py))
}

/// covar_vector — covariances for a 1-D array of distances.
///
/// Parameters
/// ----------
/// Called from Python as
/// `covar_vector(dist, mu, smoothness, sill, range, nugget, epsilon,
/// abstol=None, reltol=None, n_interpol=None, subdivisions=None, key=None)`.
/// Arguments match [`covar_matrix`], plus:
/// - `dist`: 1-D array-like of `float64` distances.
/// - `epsilon`: distances below this value are treated as zero and receive
///   `sill + nugget`.
///
/// Errors
/// ------
/// - `ValueError` for invalid parameters or any failed evaluation.
/// - `TypeError` if `dist` cannot be read as a 1-D `float64` array.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    text_signature = "(dist, mu, smoothness, sill, range, nugget, epsilon, /, abstol=None, reltol=None, n_interpol=None, subdivisions=None, key=None)",
    signature = (
        dist, mu, smoothness, sill, range, nugget, epsilon,
        abstol = None, reltol = None, n_interpol = None, subdivisions = None, key = None
    )
)]
#[allow(clippy::too_many_arguments)]
pub fn covar_vector<'py>(
    py: Python<'py>, dist: &Bound<'py, PyAny>, mu: f64, smoothness: f64, sill: f64, range: f64,
    nugget: f64, epsilon: f64, abstol: Option<f64>, reltol: Option<f64>,
    n_interpol: Option<usize>, subdivisions: Option<usize>, key: Option<i32>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let (kernel, cov) = extract_params(mu, smoothness, sill, range, nugget)?;
    let options = extract_assembly_options(abstol, reltol, n_interpol, subdivisions, key)?;
    let arr = extract_f64_array(py, dist)?;
    let distances = arr.as_slice().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err("dist must be a contiguous 1-D float64 array")
    })?;
    let out = covariance_vector(distances, &kernel, &cov, epsilon, &options)?;
    Ok(out.into_pyarray(py))
}

/// _gw_covar — PyO3 module initializer for the Python extension.
///
/// Registers `covar_matrix` and `covar_vector`. Invoked automatically by
/// Python when importing the compiled extension.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _gw_covar(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(covar_matrix, m)?)?;
    m.add_function(wrap_pyfunction!(covar_vector, m)?)?;
    Ok(())
}
