//! covariance::errors — whole-call failures of matrix and vector assembly.
//!
//! Purpose
//! -------
//! Provide [`CovarError`] and [`CovarResult`], the error surface of the
//! assembly entry points. Every failure is terminal for the call: the
//! assemblers return `Err` and no partially filled matrix or vector is
//! exposed.
//!
//! Conventions
//! -----------
//! - Parameter problems from the kernel layer arrive through
//!   `From<WendlandError>` as [`CovarError::Parameter`].
//! - Numerical failures carry the raw distance that triggered them.
//! - At the Python boundary every variant maps to `ValueError` with the
//!   `Display` message preserved.
#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

use crate::{interpolation::errors::InterpolationError, wendland::errors::WendlandError};

pub type CovarResult<T> = Result<T, CovarError>;

#[derive(Debug, Clone, PartialEq)]
pub enum CovarError {
    // ---- Parameter validation ----
    /// A kernel, covariance or integration parameter is out of domain.
    Parameter(WendlandError),
    /// The vector zero-distance threshold must be finite and non-negative.
    InvalidEpsilon { epsilon: f64, reason: &'static str },
    /// Interpolated mode needs at least two sample points.
    InvalidInterpolationPoints { points: usize, reason: &'static str },

    // ---- Evaluation ----
    /// Direct kernel evaluation failed at raw distance `distance`.
    Kernel { distance: f64, source: WendlandError },
    /// The interpolation table for the call could not be built.
    Interpolation(InterpolationError),
}

impl std::error::Error for CovarError {}

impl std::fmt::Display for CovarError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Parameter validation ----
            CovarError::Parameter(err) => write!(f, "Covariance Error: {err}"),
            CovarError::InvalidEpsilon { epsilon, reason } => {
                write!(f, "Covariance Error: invalid epsilon {epsilon}. {reason}")
            }
            CovarError::InvalidInterpolationPoints { points, reason } => write!(
                f,
                "Covariance Error: invalid number of interpolation points {points}. {reason}"
            ),

            // ---- Evaluation ----
            CovarError::Kernel { distance, source } => {
                write!(f, "Covariance Error: evaluation failed at distance {distance}: {source}")
            }
            CovarError::Interpolation(err) => write!(f, "Covariance Error: {err}"),
        }
    }
}

impl From<WendlandError> for CovarError {
    fn from(err: WendlandError) -> Self {
        CovarError::Parameter(err)
    }
}

impl From<InterpolationError> for CovarError {
    fn from(err: InterpolationError) -> Self {
        CovarError::Interpolation(err)
    }
}

#[cfg(feature = "python-bindings")]
impl From<CovarError> for PyErr {
    fn from(err: CovarError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
