//! Black-Scholes pricing for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call**: C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put**:  P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! Validity of the inputs (S > 0, σ > 0, T > 0) is enforced by the
//! [`MarketInputs`] and [`Maturity`] constructors, so the denominator
//! `σ√T` can never be zero here.

use deriv_core::math::distributions::{norm_cdf, norm_pdf};
use deriv_core::types::Greeks;

use crate::instruments::{Maturity, OptionKind};
use crate::market::MarketInputs;

/// Closed-form Black-Scholes engine.
///
/// Returns the discounted risk-neutral expected payoff under lognormal
/// dynamics, dividend-yield aware, with analytic Greeks.
///
/// # Examples
/// ```
/// use deriv_models::analytical::BlackScholes;
/// use deriv_models::instruments::{Maturity, OptionKind};
/// use deriv_models::market::MarketInputs;
///
/// let market = MarketInputs::new(100.0, 0.05, 0.2, 0.0).unwrap();
/// let bs = BlackScholes::new(market);
/// let maturity = Maturity::from_years(1.0).unwrap();
///
/// let call = bs.price(100.0, maturity, OptionKind::Call);
/// let put = bs.price(100.0, maturity, OptionKind::Put);
///
/// // Put-call parity: C - P = S·e^(-qT) - K·e^(-rT)
/// let forward = 100.0 - 100.0 * (-0.05_f64).exp();
/// assert!((call - put - forward).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlackScholes {
    market: MarketInputs,
}

impl BlackScholes {
    /// Wraps a validated market parameter set.
    #[inline]
    pub fn new(market: MarketInputs) -> Self {
        Self { market }
    }

    /// Returns the market inputs.
    #[inline]
    pub fn market(&self) -> &MarketInputs {
        &self.market
    }

    /// d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
    #[inline]
    pub fn d1(&self, strike: f64, maturity: Maturity) -> f64 {
        let m = &self.market;
        let t = maturity.years();
        let vol_sqrt_t = m.volatility * t.sqrt();
        let drift = (m.rate - m.dividend_yield + 0.5 * m.volatility * m.volatility) * t;
        ((m.spot / strike).ln() + drift) / vol_sqrt_t
    }

    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, strike: f64, maturity: Maturity) -> f64 {
        self.d1(strike, maturity) - self.market.volatility * maturity.years().sqrt()
    }

    /// Discounted risk-neutral expected payoff.
    pub fn price(&self, strike: f64, maturity: Maturity, kind: OptionKind) -> f64 {
        let m = &self.market;
        let t = maturity.years();
        let d1 = self.d1(strike, maturity);
        let d2 = self.d2(strike, maturity);
        let carry_discount = (-m.dividend_yield * t).exp();
        let rate_discount = (-m.rate * t).exp();

        match kind {
            OptionKind::Call => {
                m.spot * carry_discount * norm_cdf(d1) - strike * rate_discount * norm_cdf(d2)
            }
            OptionKind::Put => {
                strike * rate_discount * norm_cdf(-d2) - m.spot * carry_discount * norm_cdf(-d1)
            }
        }
    }

    /// Analytic Greeks with separate call/put formulas.
    ///
    /// Theta here is the calendar derivative ∂V/∂t (negative for time
    /// decay), matching the sign the finite-difference engines report.
    pub fn greeks(&self, strike: f64, maturity: Maturity, kind: OptionKind) -> Greeks {
        let m = &self.market;
        let t = maturity.years();
        let sqrt_t = t.sqrt();
        let d1 = self.d1(strike, maturity);
        let d2 = self.d2(strike, maturity);
        let carry_discount = (-m.dividend_yield * t).exp();
        let rate_discount = (-m.rate * t).exp();

        let delta = match kind {
            OptionKind::Call => carry_discount * norm_cdf(d1),
            OptionKind::Put => carry_discount * (norm_cdf(d1) - 1.0),
        };

        // Gamma and Vega are kind-independent.
        let gamma = carry_discount * norm_pdf(d1) / (m.spot * m.volatility * sqrt_t);
        let vega = m.spot * carry_discount * norm_pdf(d1) * sqrt_t;

        let decay = -m.spot * carry_discount * norm_pdf(d1) * m.volatility / (2.0 * sqrt_t);
        let theta = match kind {
            OptionKind::Call => {
                decay - m.rate * strike * rate_discount * norm_cdf(d2)
                    + m.dividend_yield * m.spot * carry_discount * norm_cdf(d1)
            }
            OptionKind::Put => {
                decay + m.rate * strike * rate_discount * norm_cdf(-d2)
                    - m.dividend_yield * m.spot * carry_discount * norm_cdf(-d1)
            }
        };

        let rho = match kind {
            OptionKind::Call => strike * t * rate_discount * norm_cdf(d2),
            OptionKind::Put => -strike * t * rate_discount * norm_cdf(-d2),
        };

        Greeks::new(delta, gamma, vega, theta, rho)
    }
}
