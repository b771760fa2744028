//! Quanto option pricing.
//!
//! A quanto contract pays in domestic currency on a foreign underlying.
//! Pricing reduces to Black-Scholes on adjusted inputs:
//!
//! - effective rate: `r - r_f` (domestic minus foreign)
//! - effective volatility: `sqrt(σ² + σ_fx² - 2ρ·σ·σ_fx)`
//!
//! The Greek set is extended with the cross-currency sensitivities
//! (Cross-Gamma, Vanna, Charm, Dual Delta, Lambda).

use deriv_core::math::distributions::norm_cdf;
use deriv_core::types::QuantoGreeks;
use serde::{Deserialize, Serialize};

use super::BlackScholes;
use crate::instruments::{Maturity, OptionKind};
use crate::market::{MarketError, MarketInputs};

/// FX leg of a quanto contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantoInputs {
    /// Volatility of the FX rate (σ_fx).
    pub fx_volatility: f64,
    /// Correlation between the underlying and the FX rate (ρ).
    pub fx_correlation: f64,
    /// Foreign risk-free rate (r_f).
    pub foreign_rate: f64,
    /// Fixed conversion rate applied to the domestic payoff.
    pub exchange_rate: f64,
}

/// Quanto-adjusted closed-form engine.
///
/// # Examples
/// ```
/// use deriv_models::analytical::{QuantoInputs, QuantoOption};
/// use deriv_models::instruments::{Maturity, OptionKind};
/// use deriv_models::market::MarketInputs;
///
/// let market = MarketInputs::new(100.0, 0.05, 0.2, 0.0).unwrap();
/// let fx = QuantoInputs {
///     fx_volatility: 0.1,
///     fx_correlation: 0.3,
///     foreign_rate: 0.01,
///     exchange_rate: 1.0,
/// };
/// let quanto = QuantoOption::new(market, fx).unwrap();
/// let price = quanto.price(100.0, Maturity::from_years(1.0).unwrap(), OptionKind::Call);
/// assert!(price > 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct QuantoOption {
    fx: QuantoInputs,
    /// Black-Scholes engine over the rate/volatility-adjusted inputs.
    adjusted: BlackScholes,
}

impl QuantoOption {
    /// Builds the adjusted engine from domestic market inputs and the FX leg.
    ///
    /// # Errors
    ///
    /// [`MarketError::InvalidVolatility`] when the quanto adjustment
    /// collapses the effective volatility to zero (σ = σ_fx with ρ = 1).
    pub fn new(market: MarketInputs, fx: QuantoInputs) -> Result<Self, MarketError> {
        let adjusted_vol = (market.volatility * market.volatility
            + fx.fx_volatility * fx.fx_volatility
            - 2.0 * fx.fx_correlation * market.volatility * fx.fx_volatility)
            .sqrt();
        let adjusted = MarketInputs::new(
            market.spot,
            market.rate - fx.foreign_rate,
            adjusted_vol,
            market.dividend_yield,
        )?;
        Ok(Self {
            fx,
            adjusted: BlackScholes::new(adjusted),
        })
    }

    /// Effective volatility after the quanto adjustment.
    #[inline]
    pub fn adjusted_volatility(&self) -> f64 {
        self.adjusted.market().volatility
    }

    /// Price in domestic currency, scaled by the fixed exchange rate.
    pub fn price(&self, strike: f64, maturity: Maturity, kind: OptionKind) -> f64 {
        self.fx.exchange_rate * self.adjusted.price(strike, maturity, kind)
    }

    /// Extended Greek vector over the adjusted dynamics.
    ///
    /// Lambda is the elasticity `S·Δ / price`, reported as 0 when Delta is
    /// 0 (deep out-of-the-money limit) to avoid a 0/0.
    pub fn greeks(&self, strike: f64, maturity: Maturity, kind: OptionKind) -> QuantoGreeks {
        let base = self.adjusted.greeks(strike, maturity, kind);
        let m = self.adjusted.market();
        let t = maturity.years();
        let sqrt_t = t.sqrt();
        let d2 = self.adjusted.d2(strike, maturity);

        let cross_gamma = -self.fx.fx_correlation * m.spot * self.fx.fx_volatility / m.volatility;
        let vanna = m.spot * sqrt_t * (1.0 - self.fx.fx_correlation);
        let charm = -0.5 * m.spot * m.volatility * sqrt_t;
        let dual_delta = -(-m.rate * t).exp() * norm_cdf(-d2);

        let price = self.price(strike, maturity, kind);
        let lambda = if base.delta == 0.0 {
            0.0
        } else {
            m.spot * base.delta / price
        };

        QuantoGreeks {
            base,
            cross_gamma,
            vanna,
            charm,
            dual_delta,
            lambda,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn quanto(vol: f64, fx_vol: f64, rho: f64) -> QuantoOption {
        let market = MarketInputs::new(100.0, 0.05, vol, 0.0).unwrap();
        let fx = QuantoInputs {
            fx_volatility: fx_vol,
            fx_correlation: rho,
            foreign_rate: 0.01,
            exchange_rate: 1.0,
        };
        QuantoOption::new(market, fx).unwrap()
    }

    #[test]
    fn test_adjustment_formula() {
        let q = quanto(0.2, 0.1, 0.3);
        let expected = (0.2_f64.powi(2) + 0.1_f64.powi(2) - 2.0 * 0.3 * 0.2 * 0.1).sqrt();
        assert_relative_eq!(q.adjusted_volatility(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_correlation_increases_volatility() {
        // With ρ = 0 the FX leg only adds variance.
        let q = quanto(0.2, 0.1, 0.0);
        assert!(q.adjusted_volatility() > 0.2);
    }

    #[test]
    fn test_degenerate_adjustment_rejected() {
        // σ = σ_fx and ρ = 1 collapse the effective volatility to zero.
        let market = MarketInputs::new(100.0, 0.05, 0.2, 0.0).unwrap();
        let fx = QuantoInputs {
            fx_volatility: 0.2,
            fx_correlation: 1.0,
            foreign_rate: 0.01,
            exchange_rate: 1.0,
        };
        assert!(matches!(
            QuantoOption::new(market, fx),
            Err(MarketError::InvalidVolatility { .. })
        ));
    }

    #[test]
    fn test_price_uses_rate_spread() {
        // Quanto price must equal plain Black-Scholes at rate r - r_f and
        // the adjusted volatility.
        let q = quanto(0.2, 0.1, 0.3);
        let maturity = Maturity::from_years(1.0).unwrap();
        let reference = BlackScholes::new(
            MarketInputs::new(100.0, 0.04, q.adjusted_volatility(), 0.0).unwrap(),
        )
        .price(100.0, maturity, OptionKind::Call);
        assert_relative_eq!(
            q.price(100.0, maturity, OptionKind::Call),
            reference,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_exchange_rate_scales_price() {
        let market = MarketInputs::new(100.0, 0.05, 0.2, 0.0).unwrap();
        let fx = QuantoInputs {
            fx_volatility: 0.1,
            fx_correlation: 0.3,
            foreign_rate: 0.01,
            exchange_rate: 1.1,
        };
        let scaled = QuantoOption::new(market, fx).unwrap();
        let unscaled = quanto(0.2, 0.1, 0.3);
        let maturity = Maturity::from_years(1.0).unwrap();
        assert_relative_eq!(
            scaled.price(100.0, maturity, OptionKind::Call),
            1.1 * unscaled.price(100.0, maturity, OptionKind::Call),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_extended_greeks_finite_and_lambda_guard() {
        let q = quanto(0.2, 0.1, 0.3);
        let maturity = Maturity::from_years(1.0).unwrap();
        let greeks = q.greeks(100.0, maturity, OptionKind::Call);
        assert!(greeks.is_finite());
        assert!(greeks.lambda > 1.0, "ATM call elasticity exceeds 1");
        assert!(greeks.dual_delta < 0.0);
    }
}
