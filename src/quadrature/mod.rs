//! quadrature — Gauss–Kronrod integration for the kernel's integral branch.
//!
//! Purpose
//! -------
//! Provide the definite-integral collaborator used by the Generalized
//! Wendland kernel: a non-adaptive nested 21/43/87-point sequence that
//! stops at the first stage meeting the tolerance, and a globally adaptive
//! bisection driver bounded by a subdivision budget.
//!
//! Key behaviors
//! -------------
//! - [`IntegrationStrategy`] selects between the two modes as a closed set
//!   of variants, each carrying its own payload.
//! - [`Integrator`] is the seam consumed by the kernel evaluator, so tests
//!   can observe or force failures of the integration step.
//! - Every call returns a [`QuadratureOutcome`]: value, error estimate,
//!   number of integrand evaluations and an optional [`QuadratureError`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Integrands are never evaluated at the interval endpoints.
//! - The requested accuracy is `max(abstol, reltol·|I|)`; a call with
//!   `abstol <= 0` and `reltol < 50·ε` is rejected up front.
//! - Work is bounded: at most 87 evaluations for the non-adaptive sequence,
//!   at most
//!   `points·(2·subdivisions − 1)` for the adaptive driver.
//!
//! Testing notes
//! -------------
//! - Unit tests cover exactness on polynomials, evaluation counts,
//!   singular integrands, budget exhaustion and tolerance rejection.

pub mod adaptive;
pub mod errors;
pub mod gauss_kronrod;
pub mod non_adaptive;
pub mod rules;
pub mod strategy;

pub use self::errors::QuadratureError;
pub use self::rules::GaussKronrodRule;
pub use self::strategy::{IntegrationStrategy, Integrator};

/// QuadratureOutcome — unreduced result of one integration.
///
/// Fields
/// ------
/// - `value`: best available estimate of the integral.
/// - `abs_error`: estimated absolute error of `value`.
/// - `evaluations`: number of integrand evaluations performed.
/// - `failure`: `None` on success, otherwise why the tolerance was missed.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadratureOutcome {
    pub value: f64,
    pub abs_error: f64,
    pub evaluations: usize,
    pub failure: Option<QuadratureError>,
}

impl QuadratureOutcome {
    /// Outcome for a call rejected before any evaluation.
    pub fn failed(failure: QuadratureError) -> Self {
        Self { value: 0.0, abs_error: 0.0, evaluations: 0, failure: Some(failure) }
    }
}

/// `true` unless both tolerances are too small to ever be met.
pub(crate) fn tolerance_is_usable(abstol: f64, reltol: f64) -> bool {
    !(abstol <= 0.0 && (reltol < 50.0 * f64::EPSILON || reltol < 0.5e-28))
}

#[cfg(test)]
pub(crate) mod test_doubles;
