//! covariance — Generalized Wendland covariance matrices and vectors.
//!
//! Purpose
//! -------
//! Turn distances into covariances `C(d) = sill · K(d / range)` (plus the
//! nugget at the origin) using the kernel from [`crate::wendland`], either
//! evaluated directly at every distance or read from a per-call natural
//! cubic spline table built by [`crate::interpolation`].
//!
//! Key behaviors
//! -------------
//! - Assemble a covariance matrix from a distance matrix via
//!   [`covariance_matrix`]. Square inputs are treated as symmetric: only the
//!   upper triangle is read, the diagonal is `sill + nugget`, and results
//!   are mirrored into the lower triangle.
//! - Assemble a covariance vector from a flat list of distances via
//!   [`covariance_vector`], using an `epsilon` threshold for the origin.
//! - Select direct or interpolated evaluation with [`AssemblyMode`] and the
//!   integration strategy/tolerances with [`AssemblyOptions`].
//! - Abort the whole call with a [`CovarError`] on the first failing
//!   evaluation; no partially-filled output is ever returned.
//!
//! Invariants & assumptions
//! ------------------------
//! - Distances are trusted: no check for negativity or NaN. NaN distances
//!   fall into the zero regime because every comparison against them fails.
//! - Matrix origin test is exact equality with `0.0`; vector origin test is
//!   `d < epsilon`. Off-diagonal zeros in a square matrix receive
//!   `sill + nugget`.
//! - Interpolation tables are built per call and never shared or cached.
//!
//! Conventions
//! -----------
//! - Interpolation is queried at the raw distance `d`; direct evaluation
//!   passes the scaled `t = d / range` to the kernel.
//! - `d >= range` always yields exactly `0.0` in both modes.
//!
//! Testing notes
//! -------------
//! - Unit tests cover regime classification, option validation, symmetric
//!   and rectangular matrix fill, the vector epsilon policy, and whole-call
//!   abort using counting/failing integrator doubles.
//! - `tests/integration_covariance_pipeline.rs` exercises the public surface
//!   end-to-end.

pub mod errors;
pub mod evaluator;
pub mod matrix;
pub mod options;
pub mod regime;
pub mod vector;

// ---- Re-exports (primary surface) -----------------------------------------

pub use self::errors::{CovarError, CovarResult};
pub use self::matrix::{covariance_matrix, covariance_matrix_with};
pub use self::options::{AssemblyMode, AssemblyOptions};
pub use self::regime::DistanceRegime;
pub use self::vector::{covariance_vector, covariance_vector_with};

// ---- Optional convenience prelude for downstream crates ------------------
//
// Downstream crates can `use gw_covar::covariance::prelude::*;` to import
// the assembly surface together with the parameter types it consumes.

pub mod prelude {
    pub use super::errors::{CovarError, CovarResult};
    pub use super::matrix::covariance_matrix;
    pub use super::options::{AssemblyMode, AssemblyOptions};
    pub use super::vector::covariance_vector;
    pub use crate::quadrature::IntegrationStrategy;
    pub use crate::wendland::{CovarianceParams, IntegrationTolerances, KernelParams};
}
