//! Distance regimes of the compactly supported covariance.
//!
//! Matrix entries use an exact zero test, vector entries a caller-supplied
//! threshold. The two policies are kept separate on purpose.

/// Which branch of `C(d)` applies to a distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceRegime {
    /// Zero distance: `sill + nugget`.
    Origin,
    /// Inside the support: kernel or interpolation lookup.
    Support,
    /// At or beyond `range`: exactly zero.
    Outside,
}

/// Matrix policy: `d == 0` → Origin, `d < range` → Support, else Outside.
pub fn classify_exact(distance: f64, range: f64) -> DistanceRegime {
    if distance == 0.0 {
        DistanceRegime::Origin
    } else if distance < range {
        DistanceRegime::Support
    } else {
        DistanceRegime::Outside
    }
}

/// Vector policy: `d < epsilon` → Origin, `d < range` → Support, else Outside.
pub fn classify_threshold(distance: f64, epsilon: f64, range: f64) -> DistanceRegime {
    if distance < epsilon {
        DistanceRegime::Origin
    } else if distance < range {
        DistanceRegime::Support
    } else {
        DistanceRegime::Outside
    }
}
