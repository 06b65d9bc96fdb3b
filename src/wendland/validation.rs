//! Validation helpers for kernel and covariance parameters.
//!
//! Each helper checks one scalar against its documented domain and returns
//! a field-specific [`WendlandError`] carrying the offending value, so the
//! constructors in [`params`](crate::wendland::params) stay one line per
//! field.
use crate::{
    quadrature::tolerance_is_usable,
    wendland::errors::{WendlandError, WendlandResult},
};

/// `mu` must be finite and strictly positive.
pub fn verify_mu(mu: f64) -> WendlandResult<()> {
    if !mu.is_finite() {
        return Err(WendlandError::InvalidMu { mu, reason: "mu must be finite." });
    }
    if mu <= 0.0 {
        return Err(WendlandError::InvalidMu { mu, reason: "mu must be positive." });
    }
    Ok(())
}

/// `smoothness` must be finite and non-negative.
pub fn verify_smoothness(smoothness: f64) -> WendlandResult<()> {
    if !smoothness.is_finite() {
        return Err(WendlandError::InvalidSmoothness {
            smoothness,
            reason: "smoothness must be finite.",
        });
    }
    if smoothness < 0.0 {
        return Err(WendlandError::InvalidSmoothness {
            smoothness,
            reason: "smoothness must be non-negative.",
        });
    }
    Ok(())
}

pub fn verify_sill(sill: f64) -> WendlandResult<()> {
    if !sill.is_finite() || sill < 0.0 {
        return Err(WendlandError::InvalidSill {
            sill,
            reason: "sill must be finite and non-negative.",
        });
    }
    Ok(())
}

pub fn verify_range(range: f64) -> WendlandResult<()> {
    if !range.is_finite() || range <= 0.0 {
        return Err(WendlandError::InvalidRange {
            range,
            reason: "range must be finite and positive.",
        });
    }
    Ok(())
}

pub fn verify_nugget(nugget: f64) -> WendlandResult<()> {
    if !nugget.is_finite() || nugget < 0.0 {
        return Err(WendlandError::InvalidNugget {
            nugget,
            reason: "nugget must be finite and non-negative.",
        });
    }
    Ok(())
}

/// Both tolerances finite and non-negative, and achievable: either
/// `abstol > 0` or `reltol >= 50·ε`.
pub fn verify_tolerances(abstol: f64, reltol: f64) -> WendlandResult<()> {
    if !abstol.is_finite() || !reltol.is_finite() {
        return Err(WendlandError::InvalidTolerance {
            abstol,
            reltol,
            reason: "Tolerances must be finite.",
        });
    }
    if abstol < 0.0 || reltol < 0.0 {
        return Err(WendlandError::InvalidTolerance {
            abstol,
            reltol,
            reason: "Tolerances must be non-negative.",
        });
    }
    if !tolerance_is_usable(abstol, reltol) {
        return Err(WendlandError::InvalidTolerance {
            abstol,
            reltol,
            reason: "abstol must be positive or reltol at least 50 times machine epsilon.",
        });
    }
    Ok(())
}
