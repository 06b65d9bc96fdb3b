//! Gauss–Kronrod abscissae and weights.
//!
//! Nodes are stored for the half interval `[0, 1]` in decreasing order, the
//! centre node last. Odd-indexed Kronrod nodes coincide with the embedded
//! Gauss nodes; `gauss_weights` are listed in the same order.
use crate::wendland::errors::{WendlandError, WendlandResult};

/// Abscissae of the 15-point Kronrod rule.
const XGK15: [f64; 8] = [
    0.991455371120812639206854697526329,
    0.949107912342758524526189684047851,
    0.864864423359769072789712788640926,
    0.741531185599394439863864773280788,
    0.586087235467691130294144845693013,
    0.405845151377397166906606412076961,
    0.207784955007898467600689403773245,
    0.000000000000000000000000000000000,
];

/// Weights of the 15-point Kronrod rule.
const WGK15: [f64; 8] = [
    0.022935322010529224963732008058970,
    0.063092092629978553290700663189204,
    0.104790010322250183839876322541518,
    0.140653259715525918745189590510238,
    0.169004726639267902826583426598550,
    0.190350578064785409913256402421014,
    0.204432940075298892414161999234649,
    0.209482141084727828012999174891714,
];

/// Weights of the embedded 7-point Gauss rule.
const WG7: [f64; 4] = [
    0.129484966168869693270611432679082,
    0.279705391489276667901467771423780,
    0.381830050505118944950369775488975,
    0.417959183673469387755102040816327,
];

/// Abscissae of the 21-point Kronrod rule.
const XGK21: [f64; 11] = [
    0.995657163025808080735527280689003,
    0.973906528517171720077964012084452,
    0.930157491355708226001207180059508,
    0.865063366688984510732096688423493,
    0.780817726586416897063717578345042,
    0.679409568299024406234327365114874,
    0.562757134668604683339000099272694,
    0.433395394129247190799265943165784,
    0.294392862701460198131126603103866,
    0.148874338981631210884826001129720,
    0.000000000000000000000000000000000,
];

/// Weights of the 21-point Kronrod rule.
const WGK21: [f64; 11] = [
    0.011694638867371874278064396062192,
    0.032558162307964727478818972459390,
    0.054755896574351996031381300244580,
    0.075039674810919952767043140916190,
    0.093125454583697605535065465083366,
    0.109387158802297641899210590325805,
    0.123491976262065851077958109831074,
    0.134709217311473325928054001771707,
    0.142775938577060080797094273138717,
    0.147739104901338491374841515972068,
    0.149445554002916905664936468389821,
];

/// Weights of the embedded 10-point Gauss rule.
const WG10: [f64; 5] = [
    0.066671344308688137593568809893332,
    0.149451349150580593145776339657697,
    0.219086362515982043995534934228163,
    0.269266719309996355091226921569469,
    0.295524224714752870173892994651338,
];

/// Quadrature rule used on each (sub)interval.
///
/// The numeric keys follow the usual QUADPACK convention (`1` for the
/// 15-point pair, `2` for the 21-point pair).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaussKronrodRule {
    Gk15,
    Gk21,
}

impl GaussKronrodRule {
    /// Map a caller-supplied rule key onto a rule.
    ///
    /// # Errors
    /// [`WendlandError::InvalidRuleKey`] for any key other than 1 or 2.
    pub fn from_key(key: i32) -> WendlandResult<Self> {
        match key {
            1 => Ok(GaussKronrodRule::Gk15),
            2 => Ok(GaussKronrodRule::Gk21),
            _ => Err(WendlandError::InvalidRuleKey {
                key,
                reason: "Supported rule keys are 1 (15-point) and 2 (21-point).",
            }),
        }
    }

    pub fn key(&self) -> i32 {
        match self {
            GaussKronrodRule::Gk15 => 1,
            GaussKronrodRule::Gk21 => 2,
        }
    }

    /// Number of integrand evaluations per application of the rule.
    pub fn points(&self) -> usize {
        2 * self.kronrod_nodes().len() - 1
    }

    pub(crate) fn kronrod_nodes(&self) -> &'static [f64] {
        match self {
            GaussKronrodRule::Gk15 => &XGK15,
            GaussKronrodRule::Gk21 => &XGK21,
        }
    }

    pub(crate) fn kronrod_weights(&self) -> &'static [f64] {
        match self {
            GaussKronrodRule::Gk15 => &WGK15,
            GaussKronrodRule::Gk21 => &WGK21,
        }
    }

    pub(crate) fn gauss_weights(&self) -> &'static [f64] {
        match self {
            GaussKronrodRule::Gk15 => &WG7,
            GaussKronrodRule::Gk21 => &WG10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    // Purpose
    // -------
    // The Kronrod weights on the half interval must integrate the constant
    // 1 over [-1, 1], i.e. 2·Σ w_j − w_centre = 2.
    //
    // Given
    // -----
    // - Both supported rules.
    //
    // Expect
    // ------
    // - The weight identity holds to rounding.
    fn kronrod_weights_integrate_constant() {
        for rule in [GaussKronrodRule::Gk15, GaussKronrodRule::Gk21] {
            let w = rule.kronrod_weights();
            let total = 2.0 * w.iter().sum::<f64>() - w[w.len() - 1];
            assert_relative_eq!(total, 2.0, epsilon = 1e-14);
        }
    }

    #[test]
    // Purpose
    // -------
    // Rule keys round-trip and unknown keys are rejected.
    //
    // Given
    // -----
    // - Keys 1, 2 and 7.
    //
    // Expect
    // ------
    // - 1 → Gk15 (15 points), 2 → Gk21 (21 points), 7 → InvalidRuleKey.
    fn from_key_maps_supported_keys_and_rejects_others() {
        let gk15 = GaussKronrodRule::from_key(1).unwrap();
        let gk21 = GaussKronrodRule::from_key(2).unwrap();
        assert_eq!(gk15, GaussKronrodRule::Gk15);
        assert_eq!(gk15.points(), 15);
        assert_eq!(gk21.points(), 21);
        assert_eq!(gk21.key(), 2);
        assert!(matches!(
            GaussKronrodRule::from_key(7),
            Err(WendlandError::InvalidRuleKey { key: 7, .. })
        ));
    }
}
