//! Bump-and-revalue Greeks for autocallable notes.
//!
//! The full Greek vector needs six lattice revaluations (base, spot up,
//! spot down, vol up, rate up, shortened maturity). Each is a pure
//! function of its own perturbed inputs, so the six scenarios fan out on
//! rayon and join into one result.

use deriv_core::types::Greeks;
use deriv_models::instruments::{AutocallTerms, Maturity};
use deriv_models::market::MarketInputs;
use deriv_pricing::lattice::price_autocallable;
use rayon::prelude::*;

use crate::fd::{BumpPolicy, ONE_DAY};
use crate::RiskError;

/// One perturbed pricing scenario.
struct Scenario {
    market: MarketInputs,
    maturity: Maturity,
    steps: usize,
}

/// Finite-difference Greeks of an autocallable note.
///
/// The theta scenario shortens the maturity by one day and scales the
/// step count to keep the step length unchanged, so observation dates
/// stay aligned with the base grid. Notes within one day of expiry
/// report a theta of zero.
///
/// # Errors
///
/// Propagates [`RiskError`] when any scenario revaluation fails.
pub fn autocall_greeks(
    market: &MarketInputs,
    terms: &AutocallTerms,
    maturity: Maturity,
    steps: usize,
) -> Result<Greeks, RiskError> {
    let policy = BumpPolicy::default();
    let t = maturity.years();
    let ds = policy.spot_rel * market.spot;
    let dv = policy.vol_rel * market.volatility;

    let theta_applicable = t > ONE_DAY;
    let theta_maturity = if theta_applicable {
        Maturity::from_years(t - ONE_DAY)?
    } else {
        maturity
    };
    // Same dt as the base grid, fewer steps.
    let theta_steps = if theta_applicable {
        ((theta_maturity.years() / t) * steps as f64).round().max(1.0) as usize
    } else {
        steps
    };

    let scenarios = [
        Scenario { market: *market, maturity, steps },
        Scenario { market: market.with_spot(market.spot + ds), maturity, steps },
        Scenario { market: market.with_spot(market.spot - ds), maturity, steps },
        Scenario { market: market.with_volatility(market.volatility + dv), maturity, steps },
        Scenario { market: market.with_rate(market.rate + policy.rate_abs), maturity, steps },
        Scenario { market: *market, maturity: theta_maturity, steps: theta_steps },
    ];

    tracing::debug!(scenarios = scenarios.len(), steps, "autocall greek fan-out");

    let prices: Vec<f64> = scenarios
        .par_iter()
        .map(|s| price_autocallable(&s.market, terms, s.maturity, s.steps))
        .collect::<Result<_, _>>()?;

    let (base, spot_up, spot_down, vol_up, rate_up, time_down) = (
        prices[0], prices[1], prices[2], prices[3], prices[4], prices[5],
    );

    let delta = (spot_up - spot_down) / (2.0 * ds);
    let gamma = (spot_up - 2.0 * base + spot_down) / (ds * ds);
    let vega = (vol_up - base) / dv;
    let rho = (rate_up - base) / policy.rate_abs;
    let theta = if theta_applicable {
        (time_down - base) / ONE_DAY
    } else {
        0.0
    };

    Ok(Greeks::new(delta, gamma, vega, theta, rho))
}
