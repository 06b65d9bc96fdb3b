//! Parameter types of the Generalized Wendland covariance.
//!
//! All three types validate on construction and are immutable afterwards;
//! one instance is shared read-only by every distance query of an
//! assembly call.
use crate::wendland::{
    errors::WendlandResult,
    validation::{
        verify_mu, verify_nugget, verify_range, verify_sill, verify_smoothness, verify_tolerances,
    },
};

/// Shape parameters of the normalized correlation kernel `K(t)`.
///
/// - `mu > 0` controls the decay towards the support boundary.
/// - `smoothness >= 0`; `0` selects the closed-form Askey kernel
///   `(1 − t)^mu`, positive values the integral representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelParams {
    mu: f64,
    smoothness: f64,
}

impl KernelParams {
    pub fn new(mu: f64, smoothness: f64) -> WendlandResult<Self> {
        verify_mu(mu)?;
        verify_smoothness(smoothness)?;
        Ok(Self { mu, smoothness })
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn smoothness(&self) -> f64 {
        self.smoothness
    }
}

/// Scale parameters of `C(d) = sill·K(d/range) + [d = 0]·nugget`.
///
/// `range` is the compact-support radius: `C(d) = 0` for `d >= range`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CovarianceParams {
    sill: f64,
    range: f64,
    nugget: f64,
}

impl CovarianceParams {
    pub fn new(sill: f64, range: f64, nugget: f64) -> WendlandResult<Self> {
        verify_sill(sill)?;
        verify_range(range)?;
        verify_nugget(nugget)?;
        Ok(Self { sill, range, nugget })
    }

    pub fn sill(&self) -> f64 {
        self.sill
    }

    pub fn range(&self) -> f64 {
        self.range
    }

    pub fn nugget(&self) -> f64 {
        self.nugget
    }

    /// Covariance at zero distance, `sill + nugget`.
    pub fn variance(&self) -> f64 {
        self.sill + self.nugget
    }
}

/// Accuracy requested from the integral branch.
///
/// Both tolerances are finite and non-negative and at least one is
/// strictly positive, which keeps adaptive refinement terminating.
///
/// Default: `abstol = 1e-10`, `reltol = 1e-6`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegrationTolerances {
    abstol: f64,
    reltol: f64,
}

impl IntegrationTolerances {
    pub fn new(abstol: f64, reltol: f64) -> WendlandResult<Self> {
        verify_tolerances(abstol, reltol)?;
        Ok(Self { abstol, reltol })
    }

    pub fn abstol(&self) -> f64 {
        self.abstol
    }

    pub fn reltol(&self) -> f64 {
        self.reltol
    }
}

impl Default for IntegrationTolerances {
    fn default() -> Self {
        Self { abstol: 1e-10, reltol: 1e-6 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wendland::errors::WendlandError;

    #[test]
    // Purpose
    // -------
    // Constructors store validated values and expose them unchanged.
    //
    // Given
    // -----
    // - mu = 3.5, smoothness = 1; sill = 2, range = 10, nugget = 0.5.
    //
    // Expect
    // ------
    // - Accessors return the inputs; `variance()` is 2.5.
    fn constructors_preserve_fields() {
        let kernel = KernelParams::new(3.5, 1.0).unwrap();
        assert_eq!(kernel.mu(), 3.5);
        assert_eq!(kernel.smoothness(), 1.0);

        let cov = CovarianceParams::new(2.0, 10.0, 0.5).unwrap();
        assert_eq!(cov.sill(), 2.0);
        assert_eq!(cov.range(), 10.0);
        assert_eq!(cov.nugget(), 0.5);
        assert_eq!(cov.variance(), 2.5);
    }

    #[test]
    // Purpose
    // -------
    // Constructors surface the first invalid field.
    //
    // Given
    // -----
    // - Negative smoothness; zero range; both tolerances zero; zero
    //   abstol with a relative tolerance below the round-off floor.
    //
    // Expect
    // ------
    // - InvalidSmoothness, InvalidRange, InvalidTolerance (twice).
    fn constructors_reject_invalid_fields() {
        assert!(matches!(
            KernelParams::new(1.0, -1.0),
            Err(WendlandError::InvalidSmoothness { .. })
        ));
        assert!(matches!(
            CovarianceParams::new(1.0, 0.0, 0.0),
            Err(WendlandError::InvalidRange { .. })
        ));
        assert!(matches!(
            IntegrationTolerances::new(0.0, 0.0),
            Err(WendlandError::InvalidTolerance { .. })
        ));
        assert!(matches!(
            IntegrationTolerances::new(0.0, 1e-20),
            Err(WendlandError::InvalidTolerance { .. })
        ));
    }
}
