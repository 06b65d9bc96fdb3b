//! Per-call configuration of covariance assembly.
use crate::{
    covariance::errors::{CovarError, CovarResult},
    quadrature::IntegrationStrategy,
    wendland::params::IntegrationTolerances,
};

/// How values in the support regime `0 < d < range` are obtained.
///
/// - `Direct`: one kernel evaluation per entry.
/// - `Interpolated { points }`: the kernel is sampled `points` times and
///   entries are read off a cubic spline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssemblyMode {
    #[default]
    Direct,
    Interpolated { points: usize },
}

impl AssemblyMode {
    /// Interpolated mode with `points` samples.
    ///
    /// # Errors
    /// [`CovarError::InvalidInterpolationPoints`] when `points < 2`.
    pub fn interpolated(points: usize) -> CovarResult<Self> {
        if points < 2 {
            return Err(CovarError::InvalidInterpolationPoints {
                points,
                reason: "At least 2 points are required.",
            });
        }
        Ok(AssemblyMode::Interpolated { points })
    }
}

/// AssemblyOptions — numeric configuration shared by every entry of one call.
///
/// Fields
/// ------
/// - `tolerances`: accuracy requested from the integral branch.
/// - `strategy`: non-adaptive or adaptive integration.
/// - `mode`: direct or interpolated evaluation.
///
/// Default: default tolerances, non-adaptive integration, direct mode.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AssemblyOptions {
    pub tolerances: IntegrationTolerances,
    pub strategy: IntegrationStrategy,
    pub mode: AssemblyMode,
}

impl AssemblyOptions {
    pub fn new(
        tolerances: IntegrationTolerances, strategy: IntegrationStrategy, mode: AssemblyMode,
    ) -> CovarResult<Self> {
        if let AssemblyMode::Interpolated { points } = mode {
            AssemblyMode::interpolated(points)?;
        }
        Ok(Self { tolerances, strategy, mode })
    }
}

/// `epsilon` must be finite and non-negative.
pub fn verify_epsilon(epsilon: f64) -> CovarResult<()> {
    if !epsilon.is_finite() || epsilon < 0.0 {
        return Err(CovarError::InvalidEpsilon {
            epsilon,
            reason: "epsilon must be finite and non-negative.",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Defaults select the cheapest configuration.
    //
    // Given
    // -----
    // - `AssemblyOptions::default()`.
    //
    // Expect
    // ------
    // - Direct mode, non-adaptive strategy, default tolerances.
    fn default_options_are_direct_and_non_adaptive() {
        let opts = AssemblyOptions::default();
        assert_eq!(opts.mode, AssemblyMode::Direct);
        assert_eq!(opts.strategy, IntegrationStrategy::NonAdaptive);
        assert_eq!(opts.tolerances, IntegrationTolerances::default());
    }

    #[test]
    // Purpose
    // -------
    // Interpolated mode and epsilon are validated.
    //
    // Given
    // -----
    // - points = 1 (via constructor and via `AssemblyOptions::new`),
    //   epsilon = −1 and NaN.
    //
    // Expect
    // ------
    // - `InvalidInterpolationPoints` and `InvalidEpsilon`.
    fn invalid_points_and_epsilon_are_rejected() {
        assert!(matches!(
            AssemblyMode::interpolated(1),
            Err(CovarError::InvalidInterpolationPoints { points: 1, .. })
        ));
        assert!(
            AssemblyOptions::new(
                IntegrationTolerances::default(),
                IntegrationStrategy::NonAdaptive,
                AssemblyMode::Interpolated { points: 1 },
            )
            .is_err()
        );
        assert!(matches!(verify_epsilon(-1.0), Err(CovarError::InvalidEpsilon { .. })));
        assert!(matches!(verify_epsilon(f64::NAN), Err(CovarError::InvalidEpsilon { .. })));
        assert!(verify_epsilon(0.0).is_ok());
    }
}
