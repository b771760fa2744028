//! Greek sensitivity result types.
//!
//! Every pricing engine in the workspace reports its sensitivities through
//! [`Greeks`]; quanto contracts extend the set with cross-currency terms
//! through [`QuantoGreeks`].

use serde::{Deserialize, Serialize};

/// First- and second-order price sensitivities.
///
/// # Conventions
///
/// - `delta`: ∂V/∂S
/// - `gamma`: ∂²V/∂S²
/// - `vega`: ∂V/∂σ
/// - `theta`: value lost per unit time (computed from a negative time bump
///   and sign-flipped, so time decay reports as a negative number)
/// - `rho`: ∂V/∂r
///
/// All fields are finite floats; engines that zero out a knocked-out payoff
/// report [`Greeks::zero`] rather than propagating NaN.
///
/// # Examples
/// ```
/// use deriv_core::types::Greeks;
///
/// let g = Greeks::zero();
/// assert_eq!(g.delta, 0.0);
/// assert!(g.is_finite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Greeks {
    /// Sensitivity to the spot price.
    pub delta: f64,
    /// Convexity with respect to the spot price.
    pub gamma: f64,
    /// Sensitivity to volatility.
    pub vega: f64,
    /// Time decay (value lost per unit time).
    pub theta: f64,
    /// Sensitivity to the risk-free rate.
    pub rho: f64,
}

impl Greeks {
    /// Creates a Greek vector from its five components.
    #[inline]
    pub fn new(delta: f64, gamma: f64, vega: f64, theta: f64, rho: f64) -> Self {
        Self {
            delta,
            gamma,
            vega,
            theta,
            rho,
        }
    }

    /// All-zero Greek vector, used for knocked-out payoffs.
    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Returns `true` when every component is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.delta.is_finite()
            && self.gamma.is_finite()
            && self.vega.is_finite()
            && self.theta.is_finite()
            && self.rho.is_finite()
    }
}

/// Greek vector for quanto contracts.
///
/// Extends the standard set with the cross-currency sensitivities a quanto
/// desk monitors alongside the usual five.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct QuantoGreeks {
    /// The standard five sensitivities.
    pub base: Greeks,
    /// Cross-gamma between the underlying and the FX rate.
    pub cross_gamma: f64,
    /// Vanna: cross sensitivity between spot and volatility.
    pub vanna: f64,
    /// Charm: delta decay over time.
    pub charm: f64,
    /// Dual delta: sensitivity to the strike.
    pub dual_delta: f64,
    /// Lambda (elasticity): spot × delta / price, 0 when delta is 0.
    pub lambda: f64,
}

impl QuantoGreeks {
    /// Returns `true` when every component is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.base.is_finite()
            && self.cross_gamma.is_finite()
            && self.vanna.is_finite()
            && self.charm.is_finite()
            && self.dual_delta.is_finite()
            && self.lambda.is_finite()
    }
}
