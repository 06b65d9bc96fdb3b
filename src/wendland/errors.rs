//! Errors for Generalized Wendland kernel evaluation.
//!
//! [`WendlandError`] covers the two failure classes of the kernel layer:
//! parameters outside their documented domain (rejected before any
//! evaluation) and numerical failures of a single kernel evaluation
//! (integration status and/or Beta status). It implements
//! `Display`/`Error` and converts to `PyErr` when the `python-bindings`
//! feature is enabled.
#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

use crate::{quadrature::errors::QuadratureError, wendland::beta::BetaError};

/// Result alias for kernel-level operations.
pub type WendlandResult<T> = Result<T, WendlandError>;

#[derive(Debug, Clone, PartialEq)]
pub enum WendlandError {
    // ---- Kernel parameters ----
    /// `mu` must be finite and strictly positive.
    InvalidMu { mu: f64, reason: &'static str },
    /// `smoothness` must be finite and non-negative.
    InvalidSmoothness { smoothness: f64, reason: &'static str },

    // ---- Covariance parameters ----
    InvalidSill { sill: f64, reason: &'static str },
    InvalidRange { range: f64, reason: &'static str },
    InvalidNugget { nugget: f64, reason: &'static str },

    // ---- Integration settings ----
    InvalidTolerance { abstol: f64, reltol: f64, reason: &'static str },
    InvalidSubdivisions { subdivisions: usize, reason: &'static str },
    InvalidRuleKey { key: i32, reason: &'static str },

    // ---- Evaluation ----
    /// A kernel evaluation at normalized distance `t` reported a failure
    /// from the integration step, the Beta normalization, or both.
    KernelEvaluation { t: f64, integration: Option<QuadratureError>, beta: Option<BetaError> },
}

impl std::error::Error for WendlandError {}

impl std::fmt::Display for WendlandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Kernel parameters ----
            WendlandError::InvalidMu { mu, reason } => {
                write!(f, "Invalid mu: {mu}. {reason}")
            }
            WendlandError::InvalidSmoothness { smoothness, reason } => {
                write!(f, "Invalid smoothness: {smoothness}. {reason}")
            }

            // ---- Covariance parameters ----
            WendlandError::InvalidSill { sill, reason } => {
                write!(f, "Invalid sill: {sill}. {reason}")
            }
            WendlandError::InvalidRange { range, reason } => {
                write!(f, "Invalid range: {range}. {reason}")
            }
            WendlandError::InvalidNugget { nugget, reason } => {
                write!(f, "Invalid nugget: {nugget}. {reason}")
            }

            // ---- Integration settings ----
            WendlandError::InvalidTolerance { abstol, reltol, reason } => {
                write!(f, "Invalid tolerances (abstol = {abstol}, reltol = {reltol}). {reason}")
            }
            WendlandError::InvalidSubdivisions { subdivisions, reason } => {
                write!(f, "Invalid subdivision limit: {subdivisions}. {reason}")
            }
            WendlandError::InvalidRuleKey { key, reason } => {
                write!(f, "Invalid quadrature rule key: {key}. {reason}")
            }

            // ---- Evaluation ----
            WendlandError::KernelEvaluation { t, integration, beta } => {
                write!(f, "Kernel evaluation failed at normalized distance {t}")?;
                if let Some(err) = integration {
                    write!(f, "; error occurred during numerical integration: {err}")?;
                }
                if let Some(err) = beta {
                    write!(f, "; error occurred while calculating the beta function: {err}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<WendlandError> for PyErr {
    fn from(err: WendlandError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
