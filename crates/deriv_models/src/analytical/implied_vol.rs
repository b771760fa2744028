//! Implied-volatility inversion.
//!
//! Newton-Raphson with closed-form Vega as the derivative, started at
//! σ = 0.2 and clamped into [0.001, 5.0]. When Newton fails (Vega
//! underflow on deep in/out-of-the-money quotes, exhausted budget) the
//! search falls back to bisection over the same interval, which always
//! returns a best-effort estimate.

use deriv_core::math::solvers::{BisectionSolver, NewtonRaphsonSolver, SolverConfig};

use super::BlackScholes;
use crate::instruments::{Maturity, OptionKind};
use crate::market::MarketInputs;

/// Initial Newton iterate.
const INITIAL_GUESS: f64 = 0.2;
/// Admissible volatility range for the search.
const VOL_BOUNDS: (f64, f64) = (0.001, 5.0);

fn price_at_vol(market: &MarketInputs, vol: f64, strike: f64, maturity: Maturity, kind: OptionKind) -> f64 {
    BlackScholes::new(market.with_volatility(vol)).price(strike, maturity, kind)
}

fn vega_at_vol(market: &MarketInputs, vol: f64, strike: f64, maturity: Maturity, kind: OptionKind) -> f64 {
    BlackScholes::new(market.with_volatility(vol))
        .greeks(strike, maturity, kind)
        .vega
}

/// Solves for the volatility reproducing `target_price` under
/// Black-Scholes.
///
/// The `volatility` field of `market` is ignored; spot, rate and dividend
/// yield are taken as given. `config` sets the tolerance and iteration
/// budget for both phases: Newton first, then the bisection fallback
/// under the same budget. The function always returns a value: when the
/// quote is unreachable within [0.001, 5.0] the bisection fallback
/// reports the closest bracket midpoint.
///
/// # Examples
/// ```
/// use deriv_core::math::solvers::SolverConfig;
/// use deriv_models::analytical::{implied_volatility, BlackScholes};
/// use deriv_models::instruments::{Maturity, OptionKind};
/// use deriv_models::market::MarketInputs;
///
/// let market = MarketInputs::new(100.0, 0.05, 0.25, 0.0).unwrap();
/// let maturity = Maturity::from_years(1.0).unwrap();
/// let quote = BlackScholes::new(market).price(100.0, maturity, OptionKind::Call);
///
/// let vol = implied_volatility(
///     &market, quote, 100.0, maturity, OptionKind::Call, SolverConfig::default(),
/// );
/// assert!((vol - 0.25).abs() < 1e-6);
/// ```
pub fn implied_volatility(
    market: &MarketInputs,
    target_price: f64,
    strike: f64,
    maturity: Maturity,
    kind: OptionKind,
    config: SolverConfig,
) -> f64 {
    let objective = |vol: f64| price_at_vol(market, vol, strike, maturity, kind) - target_price;

    let newton = NewtonRaphsonSolver::new(config);
    match newton.find_root(
        objective,
        |vol| vega_at_vol(market, vol, strike, maturity, kind),
        INITIAL_GUESS,
        Some(VOL_BOUNDS),
    ) {
        Ok(vol) => vol,
        Err(err) => {
            tracing::debug!(
                error = %err,
                strike,
                target_price,
                "newton implied vol failed, falling back to bisection"
            );
            let bisection = BisectionSolver::new(config);
            bisection.find_root(objective, VOL_BOUNDS.0, VOL_BOUNDS.1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn market() -> MarketInputs {
        MarketInputs::new(100.0, 0.05, 0.2, 0.0).unwrap()
    }

    fn years(t: f64) -> Maturity {
        Maturity::from_years(t).unwrap()
    }

    #[test]
    fn test_roundtrip_atm() {
        let m = market();
        let maturity = years(1.0);
        let quote = BlackScholes::new(m.with_volatility(0.3))
            .price(100.0, maturity, OptionKind::Call);
        let vol = implied_volatility(
            &m, quote, 100.0, maturity, OptionKind::Call, SolverConfig::default(),
        );
        assert_relative_eq!(vol, 0.3, epsilon = 1e-6);
    }

    #[test]
    fn test_roundtrip_put() {
        let m = market();
        let maturity = years(0.5);
        let quote = BlackScholes::new(m.with_volatility(0.45))
            .price(90.0, maturity, OptionKind::Put);
        let vol = implied_volatility(
            &m, quote, 90.0, maturity, OptionKind::Put, SolverConfig::default(),
        );
        assert_relative_eq!(vol, 0.45, epsilon = 1e-6);
    }

    #[test]
    fn test_caller_tolerance_and_budget_are_honoured() {
        // A looser caller-supplied configuration still round-trips well
        // inside its own tolerance.
        let m = market();
        let maturity = years(1.0);
        let quote = BlackScholes::new(m.with_volatility(0.3))
            .price(100.0, maturity, OptionKind::Call);
        let vol = implied_volatility(
            &m, quote, 100.0, maturity, OptionKind::Call, SolverConfig::new(1e-6, 25),
        );
        assert_relative_eq!(vol, 0.3, epsilon = 1e-4);
    }

    #[test]
    fn test_exhausted_budget_stays_bounded() {
        // Both phases share the caller's budget; even two iterations must
        // end inside the admissible range rather than diverge or panic.
        let m = market();
        let maturity = years(1.0);
        let quote = BlackScholes::new(m.with_volatility(0.3))
            .price(100.0, maturity, OptionKind::Call);
        let vol = implied_volatility(
            &m, quote, 100.0, maturity, OptionKind::Call, SolverConfig::new(1e-12, 2),
        );
        assert!(vol.is_finite());
        assert!((VOL_BOUNDS.0..=VOL_BOUNDS.1).contains(&vol));
    }

    #[test]
    fn test_deep_otm_falls_back_without_panicking() {
        // Deep out-of-the-money short-dated quote: Vega underflows at the
        // Newton start and bisection takes over.
        let m = market();
        let maturity = years(0.05);
        let vol = implied_volatility(
            &m, 0.001, 200.0, maturity, OptionKind::Call, SolverConfig::default(),
        );
        assert!(vol.is_finite());
        assert!((VOL_BOUNDS.0..=VOL_BOUNDS.1).contains(&vol));
    }

    #[test]
    fn test_unreachable_quote_returns_bounded_estimate() {
        // A quote above the spot violates no-arbitrage; the solver still
        // reports something inside the admissible range.
        let m = market();
        let vol = implied_volatility(
            &m, 150.0, 100.0, years(1.0), OptionKind::Call, SolverConfig::default(),
        );
        assert!((VOL_BOUNDS.0..=VOL_BOUNDS.1).contains(&vol));
    }

    proptest! {
        #[test]
        fn prop_roundtrip_recovers_volatility(
            true_vol in 0.01..3.0_f64,
            strike in 60.0..160.0_f64,
            t in 0.1..3.0_f64,
        ) {
            let m = market();
            let maturity = years(t);
            let quote = BlackScholes::new(m.with_volatility(true_vol))
                .price(strike, maturity, OptionKind::Call);
            // Skip quotes that are numerically indistinguishable from the
            // intrinsic bound; no solver can recover vol from those.
            prop_assume!(quote - (100.0 - strike * (-0.05 * t).exp()).max(0.0) > 1e-6);
            let vol = implied_volatility(
                &m, quote, strike, maturity, OptionKind::Call, SolverConfig::default(),
            );
            prop_assert!((vol - true_vol).abs() < 1e-4, "vol {} vs {}", vol, true_vol);
        }
    }
}
