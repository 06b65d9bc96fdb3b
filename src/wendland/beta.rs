//! Normalizing constant of the Generalized Wendland kernel.
//!
//! The raw integral is divided by `B(1 + 2·smoothness, mu)` so that the
//! correlation equals one at distance zero.
use statrs::function::beta::checked_beta;

/// BetaError — failure of the special-function evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum BetaError {
    /// Arguments outside the domain of `B(a, b)`.
    Domain { a: f64, b: f64, reason: String },
    /// The result is too small to be represented.
    Underflow { a: f64, b: f64 },
    /// The result is infinite or NaN.
    Overflow { a: f64, b: f64 },
}

impl std::error::Error for BetaError {}

impl std::fmt::Display for BetaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BetaError::Domain { a, b, reason } => {
                write!(f, "Beta({a}, {b}) is undefined: {reason}")
            }
            BetaError::Underflow { a, b } => write!(f, "Beta({a}, {b}) underflows."),
            BetaError::Overflow { a, b } => write!(f, "Beta({a}, {b}) overflows."),
        }
    }
}

/// Compute `B(a, b)` and reject values that cannot normalize a kernel.
pub fn beta(a: f64, b: f64) -> Result<f64, BetaError> {
    let value = checked_beta(a, b).map_err(|e| BetaError::Domain { a, b, reason: e.to_string() })?;
    if !value.is_finite() {
        return Err(BetaError::Overflow { a, b });
    }
    if value == 0.0 {
        return Err(BetaError::Underflow { a, b });
    }
    Ok(value)
}

/// `B(1 + 2·smoothness, mu)`.
pub fn normalizing_beta(smoothness: f64, mu: f64) -> Result<f64, BetaError> {
    beta(1.0 + 2.0 * smoothness, mu)
}
