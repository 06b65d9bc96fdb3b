//! interpolation — spline acceleration of repeated kernel queries.
//!
//! Purpose
//! -------
//! Amortize the cost of the kernel's integral branch when many distances
//! share one parameter set: the kernel is evaluated `N` times on an
//! equally spaced grid over `[0, range]` and every further query is
//! answered by a natural cubic spline.
//!
//! Key behaviors
//! -------------
//! - [`CubicSpline`] fits and evaluates a natural cubic spline.
//! - [`InterpolationTable`] samples `sill · K(d / range)` and answers
//!   lookups by raw distance `d`.
//! - A failed sample aborts table construction with
//!   [`InterpolationError::Kernel`]; no partially built table exists.
//!
//! Invariants & assumptions
//! ------------------------
//! - Sample spacing is exactly `range / (N − 1)` with `N >= 2`.
//! - Tables are scoped to one assembly call and never cached across calls.
//! - Accuracy is controlled by `N`; the interpolated covariance converges
//!   to the direct one as `N` grows.

pub mod errors;
pub mod spline;
pub mod table;

pub use self::errors::{InterpolationError, InterpolationResult, SplineError, SplineResult};
pub use self::spline::CubicSpline;
pub use self::table::InterpolationTable;
