//! Bump-and-revalue Greeks for the lattice pricers.

use deriv_core::types::Greeks;
use deriv_models::instruments::{BarrierTerms, ExerciseStyle, Maturity, OptionKind};
use deriv_models::market::MarketInputs;
use deriv_pricing::lattice;

use crate::fd::{bump_and_revalue, BumpPolicy};
use crate::RiskError;

/// Finite-difference Greeks of a vanilla lattice contract.
///
/// # Errors
///
/// Propagates [`RiskError`] when any scenario revaluation fails, for
/// instance when a rate bump degenerates the risk-neutral measure.
pub fn vanilla_greeks(
    market: &MarketInputs,
    strike: f64,
    maturity: Maturity,
    kind: OptionKind,
    style: ExerciseStyle,
    steps: usize,
) -> Result<Greeks, RiskError> {
    bump_and_revalue(market, maturity, &BumpPolicy::default(), |m, t| {
        lattice::price_vanilla(m, strike, t, kind, style, steps).map_err(RiskError::from)
    })
}

/// Finite-difference Greeks of a barrier lattice contract.
pub fn barrier_greeks(
    market: &MarketInputs,
    strike: f64,
    maturity: Maturity,
    kind: OptionKind,
    barrier: &BarrierTerms,
    steps: usize,
) -> Result<Greeks, RiskError> {
    bump_and_revalue(market, maturity, &BumpPolicy::default(), |m, t| {
        lattice::price_barrier(m, strike, t, kind, barrier, steps).map_err(RiskError::from)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use deriv_models::analytical::BlackScholes;
    use deriv_models::instruments::{BarrierDirection, KnockType};

    fn market() -> MarketInputs {
        MarketInputs::new(100.0, 0.05, 0.2, 0.0).unwrap()
    }

    fn years(t: f64) -> Maturity {
        Maturity::from_years(t).unwrap()
    }

    #[test]
    fn test_european_delta_matches_closed_form() {
        let m = market();
        let maturity = years(1.0);
        let fd = vanilla_greeks(
            &m,
            100.0,
            maturity,
            OptionKind::Call,
            ExerciseStyle::European,
            1000,
        )
        .unwrap();
        let analytic = BlackScholes::new(m).greeks(100.0, maturity, OptionKind::Call);
        assert_relative_eq!(fd.delta, analytic.delta, epsilon = 1e-2);
    }

    #[test]
    fn test_american_put_delta_negative() {
        let greeks = vanilla_greeks(
            &market(),
            100.0,
            years(1.0),
            OptionKind::Put,
            ExerciseStyle::American,
            500,
        )
        .unwrap();
        assert!(greeks.delta < 0.0);
        assert!(greeks.gamma >= 0.0);
        assert!(greeks.is_finite());
    }

    #[test]
    fn test_knocked_out_contract_has_flat_greeks() {
        // Spot on an up-and-out barrier: the price is pinned at the rebate
        // in every scenario that keeps the spot at or above the level.
        let barrier = BarrierTerms::new(BarrierDirection::Up, KnockType::Out, 95.0);
        let greeks = barrier_greeks(
            &market(),
            100.0,
            years(1.0),
            OptionKind::Call,
            &barrier,
            200,
        )
        .unwrap();
        assert_eq!(greeks.vega, 0.0);
        assert_eq!(greeks.theta, 0.0);
    }

    #[test]
    fn test_barrier_greeks_finite() {
        let barrier = BarrierTerms::new(BarrierDirection::Up, KnockType::Out, 140.0);
        let greeks = barrier_greeks(
            &market(),
            100.0,
            years(1.0),
            OptionKind::Call,
            &barrier,
            500,
        )
        .unwrap();
        assert!(greeks.is_finite());
        assert!(greeks.delta > 0.0, "distant barrier call keeps positive delta");
    }
}
