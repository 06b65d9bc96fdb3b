//! wendland — the Generalized Wendland correlation kernel.
//!
//! Purpose
//! -------
//! Evaluate the compactly supported Generalized Wendland correlation
//! `K(t)` at normalized distances, together with the parameter types and
//! validation shared by the assembly layer.
//!
//! Key behaviors
//! -------------
//! - [`KernelParams`], [`CovarianceParams`] and [`IntegrationTolerances`]
//!   validate on construction; invalid values never reach an evaluation.
//! - [`WendlandKernel`] binds parameters, tolerances and an
//!   [`Integrator`](crate::quadrature::Integrator) and returns an
//!   [`EvaluationOutcome`] per query.
//! - The Beta normalization is delegated to `statrs` through
//!   [`beta::normalizing_beta`].
//!
//! Conventions
//! -----------
//! - Distances passed to the kernel are already divided by `range`.
//! - Failures are reported through [`WendlandError`]; nothing in this
//!   subtree panics on user input or logs.

pub mod beta;
pub mod errors;
pub mod kernel;
pub mod params;
pub mod validation;

// ---- Re-exports (primary surface) -----------------------------------------

pub use self::errors::{WendlandError, WendlandResult};
pub use self::kernel::{EvaluationOutcome, WendlandKernel};
pub use self::params::{CovarianceParams, IntegrationTolerances, KernelParams};
