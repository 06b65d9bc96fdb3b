//! wendland::kernel — evaluation of the normalized Generalized Wendland
//! correlation `K(t)`.
//!
//! Purpose
//! -------
//! Evaluate the unit-sill, unit-range correlation at a normalized distance
//! `t = d / range`, choosing between the closed form and the integral
//! representation:
//!
//! ```text
//! smoothness = 0 :  K(t) = (1 − t)^mu                                   (t < 1)
//! smoothness > 0 :  K(t) = ∫_t^1 (u² − t²)^s (1 − u)^(mu−1) du / B(1 + 2s, mu)
//! t >= 1         :  K(t) = 0
//! ```
//!
//! Key behaviors
//! -------------
//! - Returns the unreduced [`EvaluationOutcome`] (value, error estimate,
//!   evaluation count, integration status, Beta status); callers decide
//!   whether to accept it via [`EvaluationOutcome::into_result`].
//! - The Beta normalization is only computed when the raw integral is
//!   non-zero. A Beta failure is therefore never reported for an exactly
//!   zero integral.
//! - The closed-form branch performs no integration at all.
//!
//! Invariants & assumptions
//! ------------------------
//! - Callers pre-filter `d >= range`; only the local bound `t < 1` is
//!   checked here.
//! - The integrand is evaluated strictly inside `(t, 1)`, so the
//!   `(1 − u)^(mu − 1)` singularity for `mu < 1` is never hit directly.
use crate::{
    quadrature::{Integrator, errors::QuadratureError},
    wendland::{
        beta::{BetaError, normalizing_beta},
        errors::{WendlandError, WendlandResult},
        params::{IntegrationTolerances, KernelParams},
    },
};

/// EvaluationOutcome — result of one kernel evaluation before acceptance.
///
/// Fields
/// ------
/// - `t`: normalized distance that was evaluated.
/// - `value`: correlation value (normalized when the Beta step succeeded).
/// - `abs_error`: integration error estimate (`0` without integration).
/// - `evaluations`: integrand evaluations (`0` without integration).
/// - `integration`: integration status, `None` when clear.
/// - `beta`: Beta status, `None` when clear or skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationOutcome {
    pub t: f64,
    pub value: f64,
    pub abs_error: f64,
    pub evaluations: usize,
    pub integration: Option<QuadratureError>,
    pub beta: Option<BetaError>,
}

impl EvaluationOutcome {
    fn exact(t: f64, value: f64) -> Self {
        Self { t, value, abs_error: 0.0, evaluations: 0, integration: None, beta: None }
    }

    pub fn is_ok(&self) -> bool {
        self.integration.is_none() && self.beta.is_none()
    }

    /// Accept the value or turn any non-clear status into an error.
    ///
    /// # Errors
    /// [`WendlandError::KernelEvaluation`] carrying both statuses when either
    /// is set.
    pub fn into_result(self) -> WendlandResult<f64> {
        if self.is_ok() {
            Ok(self.value)
        } else {
            Err(WendlandError::KernelEvaluation {
                t: self.t,
                integration: self.integration,
                beta: self.beta,
            })
        }
    }
}

/// The correlation kernel bound to one parameter set and one integrator.
///
/// Built once per assembly call and shared by every query of that call.
#[derive(Debug)]
pub struct WendlandKernel<'a, I: Integrator + ?Sized> {
    params: KernelParams,
    tolerances: IntegrationTolerances,
    integrator: &'a I,
}

impl<'a, I: Integrator + ?Sized> WendlandKernel<'a, I> {
    pub fn new(params: KernelParams, tolerances: IntegrationTolerances, integrator: &'a I) -> Self {
        Self { params, tolerances, integrator }
    }

    pub fn params(&self) -> &KernelParams {
        &self.params
    }

    /// Evaluate `K(t)` and report the full outcome.
    pub fn evaluate(&self, t: f64) -> EvaluationOutcome {
        let mu = self.params.mu();
        let smoothness = self.params.smoothness();

        if smoothness == 0.0 {
            let value = if t < 1.0 { (1.0 - t).powf(mu) } else { 0.0 };
            return EvaluationOutcome::exact(t, value);
        }
        if t >= 1.0 {
            return EvaluationOutcome::exact(t, 0.0);
        }

        let integrand = |u: f64| (u * u - t * t).powf(smoothness) * (1.0 - u).powf(mu - 1.0);
        let quad = self.integrator.integrate(&integrand, t, 1.0, &self.tolerances);

        let mut outcome = EvaluationOutcome {
            t,
            value: quad.value,
            abs_error: quad.abs_error,
            evaluations: quad.evaluations,
            integration: quad.failure,
            beta: None,
        };

        if outcome.value != 0.0 {
            match normalizing_beta(smoothness, mu) {
                Ok(norm) => outcome.value /= norm,
                Err(err) => outcome.beta = Some(err),
            }
        }
        outcome
    }

    /// Evaluate `K(t)` and reject any failed status.
    pub fn correlation(&self, t: f64) -> WendlandResult<f64> {
        self.evaluate(t).into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quadrature::{
        IntegrationStrategy,
        test_doubles::{ConstantIntegrator, CountingIntegrator, FailingIntegrator},
    };
    use crate::wendland::beta::BetaError;
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The closed-form branch (smoothness = 0) and its independence from
    //   the integrator.
    // - The integral branch against the known Wendland closed form
    //   ψ_{3,1}(t) = (1 − t)^4 (1 + 4t) for mu = 3, smoothness = 1.
    // - Normalization K(0) = 1 and the support bound t >= 1.
    // - Propagation of integration and Beta failures into `into_result`.
    // - The Beta step being skipped when the raw integral is exactly zero.
    // -------------------------------------------------------------------------

    fn kernel(mu: f64, smoothness: f64) -> KernelParams {
        KernelParams::new(mu, smoothness).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // The closed-form branch never calls the integrator.
    //
    // Given
    // -----
    // - mu = 2, smoothness = 0, t ∈ {0, 0.5, 1, 3}.
    //
    // Expect
    // ------
    // - K(t) = (1 − t)² below 1, zero otherwise; zero integrator calls,
    //   zero evaluations, clear statuses.
    fn closed_form_branch_skips_integration() {
        let counting = CountingIntegrator::default();
        let k = WendlandKernel::new(kernel(2.0, 0.0), IntegrationTolerances::default(), &counting);

        for (t, expected) in [(0.0, 1.0), (0.5, 0.25), (1.0, 0.0), (3.0, 0.0)] {
            let out = k.evaluate(t);
            assert!(out.is_ok());
            assert_eq!(out.evaluations, 0);
            assert_relative_eq!(out.value, expected);
        }
        assert_eq!(counting.calls(), 0);
    }

    #[test]
    // Purpose
    // -------
    // The integral branch reproduces the polynomial Wendland function.
    //
    // Given
    // -----
    // - mu = 3, smoothness = 1, non-adaptive strategy.
    //
    // Expect
    // ------
    // - K(t) = (1 − t)^4 (1 + 4t) for several t in [0, 1).
    fn integral_branch_matches_wendland_closed_form() {
        let strategy = IntegrationStrategy::NonAdaptive;
        let k = WendlandKernel::new(kernel(3.0, 1.0), IntegrationTolerances::default(), &strategy);

        for t in [0.0_f64, 0.1, 0.25, 0.5, 0.9] {
            let expected = (1.0 - t).powi(4) * (1.0 + 4.0 * t);
            let got = k.correlation(t).unwrap();
            assert_relative_eq!(got, expected, epsilon = 1e-12, max_relative = 1e-10);
        }
    }

    #[test]
    // Purpose
    // -------
    // Normalization by the Beta function yields K(0) = 1 for a
    // non-polynomial parameter set under adaptive integration.
    //
    // Given
    // -----
    // - mu = 2.5, smoothness = 0.5, adaptive Gk21 with 200 subintervals.
    //
    // Expect
    // ------
    // - K(0) ≈ 1 within 1e-6.
    fn adaptive_branch_is_normalized_at_origin() {
        let strategy = IntegrationStrategy::adaptive(200, 2).unwrap();
        let tols = IntegrationTolerances::new(1e-12, 1e-10).unwrap();
        let k = WendlandKernel::new(kernel(2.5, 0.5), tols, &strategy);
        assert_relative_eq!(k.correlation(0.0).unwrap(), 1.0, epsilon = 1e-6);
    }

    #[test]
    // Purpose
    // -------
    // Outside the unit support the integral branch returns zero without
    // integrating.
    //
    // Given
    // -----
    // - smoothness = 1, t = 1 and t = 1.5, counting integrator.
    //
    // Expect
    // ------
    // - Value 0, clear statuses, zero integrator calls.
    fn integral_branch_is_zero_outside_support() {
        let counting = CountingIntegrator::default();
        let k = WendlandKernel::new(kernel(3.0, 1.0), IntegrationTolerances::default(), &counting);
        for t in [1.0, 1.5] {
            let out = k.evaluate(t);
            assert!(out.is_ok());
            assert_eq!(out.value, 0.0);
        }
        assert_eq!(counting.calls(), 0);
    }

    #[test]
    // Purpose
    // -------
    // An integration failure is reported, not absorbed.
    //
    // Given
    // -----
    // - An integrator that fails on its first call.
    //
    // Expect
    // ------
    // - `evaluate` keeps the status; `into_result` returns
    //   `KernelEvaluation` with the integration status set.
    fn integration_failure_propagates() {
        let failing = FailingIntegrator::after(0);
        let k = WendlandKernel::new(kernel(3.0, 1.0), IntegrationTolerances::default(), &failing);

        let out = k.evaluate(0.3);
        assert!(!out.is_ok());
        match out.into_result() {
            Err(WendlandError::KernelEvaluation { integration: Some(_), beta: None, t }) => {
                assert_eq!(t, 0.3)
            }
            other => panic!("expected KernelEvaluation error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // The default non-adaptive strategy handles non-polynomial parameter
    // sets, escalating past the 21-point stage where needed.
    //
    // Given
    // -----
    // - mu = 3.5, smoothness = 1.5, default tolerances; an adaptive
    //   reference with tight tolerances.
    //
    // Expect
    // ------
    // - Success at every t in [0, 0.95], K(0) ≈ 1, and agreement with the
    //   adaptive reference within 1e-6.
    fn non_adaptive_handles_fractional_parameters() {
        let params = kernel(3.5, 1.5);
        let non_adaptive = IntegrationStrategy::NonAdaptive;
        let k = WendlandKernel::new(params, IntegrationTolerances::default(), &non_adaptive);

        let adaptive = IntegrationStrategy::adaptive(200, 2).unwrap();
        let tight = IntegrationTolerances::new(1e-14, 1e-12).unwrap();
        let reference = WendlandKernel::new(params, tight, &adaptive);

        assert_relative_eq!(k.correlation(0.0).unwrap(), 1.0, epsilon = 1e-8);
        for i in 0..20 {
            let t = 0.05 * i as f64;
            let out = k.evaluate(t);
            assert!(out.is_ok(), "t = {t}: {:?}", out.integration);
            assert!(out.evaluations >= 21 && out.evaluations <= 87);
            let expected = reference.correlation(t).unwrap();
            assert_relative_eq!(out.value, expected, epsilon = 1e-9, max_relative = 1e-6);
        }
    }

    #[test]
    // Purpose
    // -------
    // A zero raw integral is returned as-is without consulting the Beta
    // function, so an otherwise failing Beta evaluation stays silent.
    //
    // Given
    // -----
    // - mu = 500, smoothness = 500, where B(1001, 500) underflows, and an
    //   integrator reporting exactly 0.
    //
    // Expect
    // ------
    // - OK outcome with value 0 and no Beta status.
    fn zero_integral_skips_beta() {
        let zero = ConstantIntegrator::new(0.0);
        let k = WendlandKernel::new(kernel(500.0, 500.0), IntegrationTolerances::default(), &zero);

        let out = k.evaluate(0.5);
        assert_eq!(zero.calls(), 1);
        assert!(out.is_ok());
        assert_eq!(out.value, 0.0);
        assert_eq!(out.beta, None);
        assert_eq!(out.into_result().unwrap(), 0.0);
    }

    #[test]
    // Purpose
    // -------
    // A Beta failure on a non-zero integral is reported, not absorbed.
    //
    // Given
    // -----
    // - mu = 500, smoothness = 500 (B(1001, 500) underflows) and an
    //   integrator reporting 1e-300.
    //
    // Expect
    // ------
    // - `beta: Some(Underflow)`, no integration status, and
    //   `into_result` returning `KernelEvaluation` with the Beta status.
    fn beta_underflow_propagates() {
        let tiny = ConstantIntegrator::new(1e-300);
        let k = WendlandKernel::new(kernel(500.0, 500.0), IntegrationTolerances::default(), &tiny);

        let out = k.evaluate(0.5);
        assert!(!out.is_ok());
        assert!(matches!(out.beta, Some(BetaError::Underflow { .. })));
        assert_eq!(out.integration, None);
        assert!(matches!(
            out.into_result(),
            Err(WendlandError::KernelEvaluation {
                integration: None,
                beta: Some(BetaError::Underflow { .. }),
                ..
            })
        ));
    }
}
