//! Integration strategies and the [`Integrator`] seam.
//!
//! The kernel evaluator only needs "integrate this closure over `[a, b]`
//! to these tolerances". [`IntegrationStrategy`] is the production
//! implementation; tests substitute counting or failing integrators.
use crate::{
    quadrature::{
        QuadratureOutcome, adaptive::integrate_adaptive, non_adaptive::integrate_non_adaptive,
        rules::GaussKronrodRule,
    },
    wendland::{
        errors::{WendlandError, WendlandResult},
        params::IntegrationTolerances,
    },
};

/// Definite-integral collaborator used by the kernel evaluator.
pub trait Integrator {
    /// Integrate `f` over `[a, b]` and report the unreduced outcome.
    fn integrate(
        &self, f: &dyn Fn(f64) -> f64, a: f64, b: f64, tolerances: &IntegrationTolerances,
    ) -> QuadratureOutcome;
}

/// How the integral branch of the kernel is computed.
///
/// Variants
/// --------
/// - `NonAdaptive`
///   The nested 21/43/87-point Gauss–Kronrod–Patterson sequence on the
///   whole interval, stopping at the first stage that meets the tolerance;
///   reports `ToleranceNotReached` when the 87-point estimate still misses.
/// - `Adaptive { subdivisions, rule }`
///   Bisection driven by the error estimate, bounded by `subdivisions`
///   subintervals, with `rule` applied on every subinterval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegrationStrategy {
    #[default]
    NonAdaptive,
    Adaptive { subdivisions: usize, rule: GaussKronrodRule },
}

impl IntegrationStrategy {
    /// Build an adaptive strategy from a subdivision budget and a rule key.
    ///
    /// # Errors
    /// - [`WendlandError::InvalidSubdivisions`] if `subdivisions == 0`.
    /// - [`WendlandError::InvalidRuleKey`] for keys other than 1 or 2.
    pub fn adaptive(subdivisions: usize, key: i32) -> WendlandResult<Self> {
        if subdivisions == 0 {
            return Err(WendlandError::InvalidSubdivisions {
                subdivisions,
                reason: "At least one subinterval is required.",
            });
        }
        let rule = GaussKronrodRule::from_key(key)?;
        Ok(IntegrationStrategy::Adaptive { subdivisions, rule })
    }
}

impl Integrator for IntegrationStrategy {
    fn integrate(
        &self, f: &dyn Fn(f64) -> f64, a: f64, b: f64, tolerances: &IntegrationTolerances,
    ) -> QuadratureOutcome {
        let (abstol, reltol) = (tolerances.abstol(), tolerances.reltol());
        match *self {
            IntegrationStrategy::NonAdaptive => integrate_non_adaptive(f, a, b, abstol, reltol),
            IntegrationStrategy::Adaptive { subdivisions, rule } => {
                integrate_adaptive(f, a, b, abstol, reltol, subdivisions, rule)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quadrature::errors::QuadratureError;
    use approx::assert_relative_eq;

    fn tols(abstol: f64, reltol: f64) -> IntegrationTolerances {
        IntegrationTolerances::new(abstol, reltol).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // The non-adaptive strategy accepts smooth integrands in one pass.
    //
    // Given
    // -----
    // - f(u) = (u² − 0.25)(1 − u)² on [0.5, 1], a polynomial of degree 4.
    //
    // Expect
    // ------
    // - No failure, 21 evaluations, value equal to the closed form.
    fn non_adaptive_handles_polynomial_integrand() {
        let f = |u: f64| (u * u - 0.25) * (1.0 - u).powi(2);
        let out = IntegrationStrategy::NonAdaptive.integrate(&f, 0.5, 1.0, &tols(1e-10, 1e-8));
        // Substituting v = 1 − u gives ∫_0^{1/2} (3/4 − 2v + v²) v² dv = 1/160.
        let exact = 1.0 / 160.0;
        assert!(out.failure.is_none(), "unexpected failure: {:?}", out.failure);
        assert_eq!(out.evaluations, 21);
        assert_relative_eq!(out.value, exact, epsilon = 1e-14);
    }

    #[test]
    // Purpose
    // -------
    // The non-adaptive strategy flags a missed tolerance instead of
    // silently returning an inaccurate value.
    //
    // Given
    // -----
    // - f(u) = (1 − u)^{-1/2} on [0, 1] with reltol 1e-12.
    //
    // Expect
    // ------
    // - `ToleranceNotReached` once all 87 points are spent.
    fn non_adaptive_reports_missed_tolerance() {
        let f = |u: f64| (1.0 - u).powf(-0.5);
        let out = IntegrationStrategy::NonAdaptive.integrate(&f, 0.0, 1.0, &tols(0.0, 1e-12));
        assert!(matches!(out.failure, Some(QuadratureError::ToleranceNotReached { .. })));
        assert_eq!(out.evaluations, 87);
    }

    #[test]
    // Purpose
    // -------
    // `IntegrationStrategy::adaptive` validates its payload.
    //
    // Given
    // -----
    // - (0, 1), (100, 9), (100, 1).
    //
    // Expect
    // ------
    // - InvalidSubdivisions, InvalidRuleKey, and a Gk15 adaptive strategy.
    fn adaptive_constructor_validates_payload() {
        assert!(matches!(
            IntegrationStrategy::adaptive(0, 1),
            Err(WendlandError::InvalidSubdivisions { .. })
        ));
        assert!(matches!(
            IntegrationStrategy::adaptive(100, 9),
            Err(WendlandError::InvalidRuleKey { key: 9, .. })
        ));
        assert_eq!(
            IntegrationStrategy::adaptive(100, 1).unwrap(),
            IntegrationStrategy::Adaptive { subdivisions: 100, rule: GaussKronrodRule::Gk15 }
        );
    }
}
