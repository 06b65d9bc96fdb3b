//! Globally adaptive Gauss–Kronrod integration (QAG).
//!
//! The interval with the largest error estimate is bisected until the
//! accumulated error meets `max(abstol, reltol·|I|)` or the subdivision
//! budget is spent. The subinterval list lives only for the duration of one
//! call.
use crate::quadrature::{
    QuadratureOutcome,
    errors::QuadratureError,
    gauss_kronrod::apply_rule,
    rules::GaussKronrodRule,
    tolerance_is_usable,
};

#[derive(Debug, Clone, Copy)]
struct Subinterval {
    lower: f64,
    upper: f64,
    value: f64,
    error: f64,
}

/// Adaptive integration of `f` over `[a, b]`.
///
/// Parameters
/// ----------
/// - `limit`: maximum number of subintervals (the subdivision budget).
///   A budget of 1 allows only the initial rule application.
/// - `rule`: Gauss–Kronrod pair applied to every subinterval.
///
/// Returns
/// -------
/// A [`QuadratureOutcome`] whose `failure` is `None` iff the tolerance was
/// met. On failure the best available estimate is still reported.
pub fn integrate_adaptive(
    f: &dyn Fn(f64) -> f64, a: f64, b: f64, abstol: f64, reltol: f64, limit: usize,
    rule: GaussKronrodRule,
) -> QuadratureOutcome {
    if !tolerance_is_usable(abstol, reltol) {
        return QuadratureOutcome::failed(QuadratureError::InvalidTolerance { abstol, reltol });
    }

    let first = apply_rule(rule, f, a, b);
    let mut evaluations = rule.points();

    let tolerance = abstol.max(reltol * first.value.abs());
    let round_off = 50.0 * f64::EPSILON * first.result_abs;

    if first.abs_error <= round_off && first.abs_error > tolerance {
        return QuadratureOutcome {
            value: first.value,
            abs_error: first.abs_error,
            evaluations,
            failure: Some(QuadratureError::RoundoffDetected),
        };
    }
    if (first.abs_error <= tolerance && first.abs_error != first.result_asc)
        || first.abs_error == 0.0
    {
        return QuadratureOutcome {
            value: first.value,
            abs_error: first.abs_error,
            evaluations,
            failure: None,
        };
    }
    if limit <= 1 {
        return QuadratureOutcome {
            value: first.value,
            abs_error: first.abs_error,
            evaluations,
            failure: Some(QuadratureError::MaxSubdivisions { limit }),
        };
    }

    let mut intervals = Vec::with_capacity(limit);
    intervals.push(Subinterval { lower: a, upper: b, value: first.value, error: first.abs_error });

    let mut area = first.value;
    let mut err_sum = first.abs_error;
    let mut roundoff_type1 = 0usize;
    let mut roundoff_type2 = 0usize;
    let mut iteration = 1usize;
    let mut failure = None;

    loop {
        let (idx, current) = largest_error(&intervals);
        let mid = 0.5 * (current.lower + current.upper);

        let left = apply_rule(rule, f, current.lower, mid);
        let right = apply_rule(rule, f, mid, current.upper);
        evaluations += 2 * rule.points();

        let area12 = left.value + right.value;
        let error12 = left.abs_error + right.abs_error;

        err_sum += error12 - current.error;
        area += area12 - current.value;

        if left.result_asc != left.abs_error && right.result_asc != right.abs_error {
            let delta = current.value - area12;
            if delta.abs() <= 1e-5 * area12.abs() && error12 >= 0.99 * current.error {
                roundoff_type1 += 1;
            }
            if iteration >= 10 && error12 > current.error {
                roundoff_type2 += 1;
            }
        }

        let tolerance = abstol.max(reltol * area.abs());

        if err_sum > tolerance {
            if roundoff_type1 >= 6 || roundoff_type2 >= 20 {
                failure = Some(QuadratureError::RoundoffDetected);
            }
            if subinterval_too_small(current.lower, mid, current.upper) {
                failure = Some(QuadratureError::BadIntegrandBehavior {
                    lower: current.lower,
                    upper: current.upper,
                });
            }
        }

        intervals[idx] =
            Subinterval { lower: current.lower, upper: mid, value: left.value, error: left.abs_error };
        intervals.push(Subinterval {
            lower: mid,
            upper: current.upper,
            value: right.value,
            error: right.abs_error,
        });
        iteration += 1;

        if iteration >= limit || failure.is_some() || err_sum <= tolerance {
            break;
        }
    }

    let value = intervals.iter().map(|s| s.value).sum::<f64>();
    let tolerance = abstol.max(reltol * area.abs());

    let failure = if err_sum <= tolerance {
        None
    } else {
        Some(failure.unwrap_or(QuadratureError::MaxSubdivisions { limit }))
    };

    QuadratureOutcome { value, abs_error: err_sum, evaluations, failure }
}

fn largest_error(intervals: &[Subinterval]) -> (usize, Subinterval) {
    let mut best = 0;
    for (i, s) in intervals.iter().enumerate().skip(1) {
        if s.error > intervals[best].error {
            best = i;
        }
    }
    (best, intervals[best])
}

/// Bisection has reached machine resolution around `a2`.
fn subinterval_too_small(a1: f64, a2: f64, b2: f64) -> bool {
    let tmp = (1.0 + 100.0 * f64::EPSILON) * (a2.abs() + 1000.0 * f64::MIN_POSITIVE);
    a1.abs() <= tmp && b2.abs() <= tmp
}
