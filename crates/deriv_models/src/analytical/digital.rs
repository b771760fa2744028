//! Digital (cash-or-nothing) option pricing.
//!
//! Pays a fixed cash amount when the option finishes in the money:
//!
//! - digital call: `cash · e^(-rT) · N(d₂)`
//! - digital put:  `cash · e^(-rT) · N(-d₂)`
//!
//! An optional knockout barrier extinguishes the contract outright when the
//! current spot has already breached it; price and every Greek then report
//! an explicit zero rather than NaN.

use deriv_core::math::distributions::{norm_cdf, norm_pdf};
use deriv_core::types::Greeks;
use serde::{Deserialize, Serialize};

use crate::instruments::{BarrierDirection, Maturity, OptionKind};
use crate::market::MarketInputs;

/// Knockout barrier attached to a digital payoff.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DigitalBarrier {
    /// Side the spot must stay away from.
    pub direction: BarrierDirection,
    /// Barrier level in spot units.
    pub level: f64,
}

impl DigitalBarrier {
    /// Whether the current spot has already breached the barrier.
    ///
    /// Checked by direct comparison against the spot, not simulated.
    #[inline]
    pub fn is_breached(&self, spot: f64) -> bool {
        match self.direction {
            BarrierDirection::Up => spot >= self.level,
            BarrierDirection::Down => spot <= self.level,
        }
    }
}

/// Cash-or-nothing digital option with an optional knockout barrier.
///
/// # Examples
/// ```
/// use deriv_models::analytical::DigitalOption;
/// use deriv_models::instruments::{BarrierDirection, Maturity, OptionKind};
/// use deriv_models::market::MarketInputs;
///
/// let market = MarketInputs::new(100.0, 0.05, 0.2, 0.0).unwrap();
/// let digital = DigitalOption::new(market, 100.0, 10.0);
/// let maturity = Maturity::from_years(1.0).unwrap();
/// let price = digital.price(maturity, OptionKind::Call);
/// assert!(price > 0.0 && price < 10.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DigitalOption {
    market: MarketInputs,
    strike: f64,
    cash_payout: f64,
    barrier: Option<DigitalBarrier>,
}

impl DigitalOption {
    /// Digital option without a knockout barrier.
    pub fn new(market: MarketInputs, strike: f64, cash_payout: f64) -> Self {
        Self {
            market,
            strike,
            cash_payout,
            barrier: None,
        }
    }

    /// Attaches a knockout barrier.
    pub fn with_barrier(mut self, direction: BarrierDirection, level: f64) -> Self {
        self.barrier = Some(DigitalBarrier { direction, level });
        self
    }

    /// Whether the knockout barrier (if any) is breached by the spot.
    #[inline]
    pub fn is_knocked_out(&self) -> bool {
        self.barrier
            .map(|b| b.is_breached(self.market.spot))
            .unwrap_or(false)
    }

    /// d₂ = (ln(S/K) + (r - q - σ²/2)T) / (σ√T)
    #[inline]
    fn d2(&self, maturity: Maturity) -> f64 {
        let m = &self.market;
        let t = maturity.years();
        let drift = (m.rate - m.dividend_yield - 0.5 * m.volatility * m.volatility) * t;
        ((m.spot / self.strike).ln() + drift) / (m.volatility * t.sqrt())
    }

    /// Risk-neutral probability of finishing in the money, N(±d₂).
    pub fn probability_itm(&self, maturity: Maturity, kind: OptionKind) -> f64 {
        let d2 = self.d2(maturity);
        match kind {
            OptionKind::Call => norm_cdf(d2),
            OptionKind::Put => norm_cdf(-d2),
        }
    }

    /// Immediate payoff at the current spot.
    pub fn payoff(&self, kind: OptionKind) -> f64 {
        let itm = match kind {
            OptionKind::Call => self.market.spot >= self.strike,
            OptionKind::Put => self.market.spot <= self.strike,
        };
        if itm {
            self.cash_payout
        } else {
            0.0
        }
    }

    /// Undiscounted expected payoff: nominal payoff × P(in the money).
    pub fn expected_payoff(&self, maturity: Maturity, kind: OptionKind) -> f64 {
        self.payoff(kind) * self.probability_itm(maturity, kind)
    }

    /// Discounted price, zero when the knockout barrier is breached.
    pub fn price(&self, maturity: Maturity, kind: OptionKind) -> f64 {
        if self.is_knocked_out() {
            return 0.0;
        }
        let discounted_cash = self.cash_payout * (-self.market.rate * maturity.years()).exp();
        discounted_cash * self.probability_itm(maturity, kind)
    }

    /// Greek vector, all-zero when the knockout barrier is breached.
    pub fn greeks(&self, maturity: Maturity, kind: OptionKind) -> Greeks {
        if self.is_knocked_out() {
            return Greeks::zero();
        }

        let m = &self.market;
        let t = maturity.years();
        let sqrt_t = t.sqrt();
        let d2 = self.d2(maturity);
        let pdf_d2 = norm_pdf(d2);
        let discounted_cash = self.cash_payout * (-m.rate * t).exp();

        let delta = discounted_cash * pdf_d2 / (m.spot * m.volatility * sqrt_t);
        let gamma = (-delta / m.spot) * (d2 / (m.spot * m.volatility * sqrt_t) + 1.0);
        let vega = -discounted_cash * pdf_d2 * d2 / m.volatility;
        let theta = -discounted_cash * pdf_d2 * (d2 / (2.0 * t) + m.rate);
        let rho = match kind {
            OptionKind::Call => -self.cash_payout * t * (-m.rate * t).exp() * norm_cdf(d2),
            OptionKind::Put => self.cash_payout * t * (-m.rate * t).exp() * norm_cdf(-d2),
        };

        Greeks::new(delta, gamma, vega, theta, rho)
    }
}
