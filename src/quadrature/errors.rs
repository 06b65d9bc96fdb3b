//! quadrature::errors — status codes reported by the quadrature routines.
//!
//! A failed integration still produces a value and an error estimate; the
//! failure is carried next to them as a [`QuadratureError`] instead of
//! short-circuiting, so callers see the unreduced outcome and decide
//! whether to abort.

/// QuadratureError — reasons a requested accuracy was not delivered.
///
/// Variants
/// --------
/// - `InvalidTolerance`
///   Neither tolerance is usable: `abstol <= 0` and `reltol` is below
///   `50·ε` (the rule cannot resolve a tighter relative error).
/// - `ToleranceNotReached`
///   The non-adaptive sequence reached its 87-point stage with an error
///   estimate above `max(abstol, reltol·|value|)`.
/// - `MaxSubdivisions`
///   Adaptive bisection used its whole subdivision budget without meeting
///   the tolerance.
/// - `RoundoffDetected`
///   Round-off error prevents the tolerance from being reached.
/// - `BadIntegrandBehavior`
///   A subinterval shrank to machine precision (non-integrable
///   singularity or extreme local difficulty).
#[derive(Debug, Clone, PartialEq)]
pub enum QuadratureError {
    InvalidTolerance { abstol: f64, reltol: f64 },
    ToleranceNotReached { abs_error: f64, tolerance: f64 },
    MaxSubdivisions { limit: usize },
    RoundoffDetected,
    BadIntegrandBehavior { lower: f64, upper: f64 },
}

impl std::error::Error for QuadratureError {}

impl std::fmt::Display for QuadratureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuadratureError::InvalidTolerance { abstol, reltol } => write!(
                f,
                "Tolerance cannot be achieved with given abstol = {abstol} and reltol = {reltol}."
            ),
            QuadratureError::ToleranceNotReached { abs_error, tolerance } => write!(
                f,
                "Failed to reach tolerance with the highest-order rule (estimated error {abs_error}, requested {tolerance})."
            ),
            QuadratureError::MaxSubdivisions { limit } => {
                write!(f, "Number of subdivisions exceeded the limit of {limit}.")
            }
            QuadratureError::RoundoffDetected => {
                write!(f, "Roundoff error prevents the tolerance from being achieved.")
            }
            QuadratureError::BadIntegrandBehavior { lower, upper } => write!(
                f,
                "Bad integrand behavior found in the integration interval [{lower}, {upper}]."
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Check that the subdivision limit is embedded in the message.
    //
    // Given
    // -----
    // - `QuadratureError::MaxSubdivisions { limit: 17 }`.
    //
    // Expect
    // ------
    // - The `Display` output contains "17".
    fn max_subdivisions_display_includes_limit() {
        let msg = QuadratureError::MaxSubdivisions { limit: 17 }.to_string();
        assert!(msg.contains("17"), "Display should include the limit.\nGot: {msg}");
    }
}
