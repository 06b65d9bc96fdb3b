//! Errors for spline fitting and interpolation-table construction.
#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

use crate::wendland::errors::WendlandError;

pub type SplineResult<T> = Result<T, SplineError>;

pub type InterpolationResult<T> = Result<T, InterpolationError>;

/// SplineError — invalid knot data for a cubic spline.
#[derive(Debug, Clone, PartialEq)]
pub enum SplineError {
    /// Fewer than two knots.
    TooFewKnots { found: usize },
    /// `points` and `values` differ in length.
    LengthMismatch { points: usize, values: usize },
    /// A knot or value is NaN/±inf.
    NonFiniteKnot { index: usize, point: f64, value: f64 },
    /// Knots are not strictly increasing at `index`.
    NonIncreasingKnots { index: usize },
}

impl std::error::Error for SplineError {}

impl std::fmt::Display for SplineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SplineError::TooFewKnots { found } => {
                write!(f, "Spline Error: need at least 2 knots, found {found}")
            }
            SplineError::LengthMismatch { points, values } => write!(
                f,
                "Spline Error: {points} knot positions but {values} knot values"
            ),
            SplineError::NonFiniteKnot { index, point, value } => write!(
                f,
                "Spline Error: knot {index} is not finite (x = {point}, y = {value})"
            ),
            SplineError::NonIncreasingKnots { index } => {
                write!(f, "Spline Error: knots must be strictly increasing (index {index})")
            }
        }
    }
}

/// InterpolationError — failure while building an interpolation table.
#[derive(Debug, Clone, PartialEq)]
pub enum InterpolationError {
    /// Fewer than two sample points were requested.
    TooFewPoints { points: usize },
    /// The kernel evaluation at sample distance `point` failed.
    Kernel { point: f64, source: WendlandError },
    /// The sampled values could not be fitted.
    Spline(SplineError),
}

impl std::error::Error for InterpolationError {}

impl std::fmt::Display for InterpolationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InterpolationError::TooFewPoints { points } => write!(
                f,
                "Invalid number of interpolation points: {points}. Must be at least 2."
            ),
            InterpolationError::Kernel { point, source } => {
                write!(f, "Interpolation table failed at distance {point}: {source}")
            }
            InterpolationError::Spline(err) => write!(f, "{err}"),
        }
    }
}

impl From<SplineError> for InterpolationError {
    fn from(err: SplineError) -> Self {
        InterpolationError::Spline(err)
    }
}

#[cfg(feature = "python-bindings")]
impl From<InterpolationError> for PyErr {
    fn from(err: InterpolationError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
