//! Integrators used by unit tests to observe or force quadrature results.
use std::cell::Cell;

use crate::{
    quadrature::{IntegrationStrategy, Integrator, QuadratureOutcome, errors::QuadratureError},
    wendland::params::IntegrationTolerances,
};

/// Delegates to the non-adaptive strategy and counts calls.
#[derive(Debug, Default)]
pub(crate) struct CountingIntegrator {
    calls: Cell<usize>,
}

impl CountingIntegrator {
    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Integrator for CountingIntegrator {
    fn integrate(
        &self, f: &dyn Fn(f64) -> f64, a: f64, b: f64, tolerances: &IntegrationTolerances,
    ) -> QuadratureOutcome {
        self.calls.set(self.calls.get() + 1);
        IntegrationStrategy::NonAdaptive.integrate(f, a, b, tolerances)
    }
}

/// Succeeds for the first `ok_calls` calls, then reports budget exhaustion.
#[derive(Debug)]
pub(crate) struct FailingIntegrator {
    ok_calls: usize,
    calls: Cell<usize>,
}

impl FailingIntegrator {
    pub(crate) fn after(ok_calls: usize) -> Self {
        Self { ok_calls, calls: Cell::new(0) }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Integrator for FailingIntegrator {
    fn integrate(
        &self, f: &dyn Fn(f64) -> f64, a: f64, b: f64, tolerances: &IntegrationTolerances,
    ) -> QuadratureOutcome {
        let n = self.calls.get();
        self.calls.set(n + 1);
        let mut out = IntegrationStrategy::NonAdaptive.integrate(f, a, b, tolerances);
        if n >= self.ok_calls {
            out.failure = Some(QuadratureError::MaxSubdivisions { limit: 1 });
        }
        out
    }
}

/// Reports a fixed integral value without evaluating the integrand.
#[derive(Debug)]
pub(crate) struct ConstantIntegrator {
    value: f64,
    calls: Cell<usize>,
}

impl ConstantIntegrator {
    pub(crate) fn new(value: f64) -> Self {
        Self { value, calls: Cell::new(0) }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Integrator for ConstantIntegrator {
    fn integrate(
        &self, _f: &dyn Fn(f64) -> f64, _a: f64, _b: f64, _tolerances: &IntegrationTolerances,
    ) -> QuadratureOutcome {
        self.calls.set(self.calls.get() + 1);
        QuadratureOutcome { value: self.value, abs_error: 0.0, evaluations: 0, failure: None }
    }
}
