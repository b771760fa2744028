//! Finite-difference bump engine.
//!
//! One bump policy serves every lattice instrument:
//!
//! - Delta: central difference, relative spot bump `1%·S`
//! - Gamma: second central difference on the same spot bumps
//! - Vega: forward difference, relative volatility bump `1%·σ`
//! - Rho: forward difference, absolute rate bump `1e-4`
//! - Theta: backward difference, maturity shortened by one day
//!
//! Theta is reported as the calendar derivative `∂V/∂t`, negative for a
//! decaying contract, matching the closed-form engine's sign. Contracts
//! inside one day of expiry report a theta of zero.

use deriv_core::types::Greeks;
use deriv_models::market::MarketInputs;
use deriv_models::Maturity;

use crate::RiskError;

/// One day in years.
pub const ONE_DAY: f64 = 1.0 / 365.0;

/// Relative and absolute bump sizes for the finite-difference Greeks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BumpPolicy {
    /// Relative spot bump for Delta and Gamma.
    pub spot_rel: f64,
    /// Relative volatility bump for Vega.
    pub vol_rel: f64,
    /// Absolute rate bump for Rho.
    pub rate_abs: f64,
    /// Absolute maturity shortening for Theta, in years.
    pub time_abs: f64,
}

impl Default for BumpPolicy {
    fn default() -> Self {
        Self {
            spot_rel: 0.01,
            vol_rel: 0.01,
            rate_abs: 1e-4,
            time_abs: ONE_DAY,
        }
    }
}

/// Runs the full bump schedule against an arbitrary pricing function.
///
/// `price` is called once per scenario with a perturbed copy of the
/// market inputs; the base inputs are never mutated. Any pricing error
/// from a scenario aborts the whole Greek vector.
pub fn bump_and_revalue<F>(
    market: &MarketInputs,
    maturity: Maturity,
    policy: &BumpPolicy,
    price: F,
) -> Result<Greeks, RiskError>
where
    F: Fn(&MarketInputs, Maturity) -> Result<f64, RiskError>,
{
    let base = price(market, maturity)?;

    let ds = policy.spot_rel * market.spot;
    let spot_up = price(&market.with_spot(market.spot + ds), maturity)?;
    let spot_down = price(&market.with_spot(market.spot - ds), maturity)?;
    let delta = (spot_up - spot_down) / (2.0 * ds);
    let gamma = (spot_up - 2.0 * base + spot_down) / (ds * ds);

    let dv = policy.vol_rel * market.volatility;
    let vol_up = price(&market.with_volatility(market.volatility + dv), maturity)?;
    let vega = (vol_up - base) / dv;

    let rate_up = price(&market.with_rate(market.rate + policy.rate_abs), maturity)?;
    let rho = (rate_up - base) / policy.rate_abs;

    let theta = if maturity.years() > policy.time_abs {
        let shortened = Maturity::from_years(maturity.years() - policy.time_abs)?;
        let time_down = price(market, shortened)?;
        (time_down - base) / policy.time_abs
    } else {
        0.0
    };

    Ok(Greeks::new(delta, gamma, vega, theta, rho))
}
