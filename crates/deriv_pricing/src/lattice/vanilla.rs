//! Vanilla option pricing on the CRR lattice.

use deriv_models::instruments::{ExerciseStyle, Maturity, OptionKind};
use deriv_models::market::MarketInputs;

use super::{CrrParams, LatticeError};

/// Prices a vanilla option by backward induction.
///
/// European contracts roll back the discounted expectation only;
/// American contracts additionally floor each node at its intrinsic
/// value, which makes early exercise worth exactly the difference to the
/// European price.
///
/// # Errors
///
/// Propagates [`LatticeError`] from the CRR parameterisation.
///
/// # Examples
/// ```
/// use deriv_models::instruments::{ExerciseStyle, Maturity, OptionKind};
/// use deriv_models::market::MarketInputs;
/// use deriv_pricing::lattice::price_vanilla;
///
/// let market = MarketInputs::new(100.0, 0.05, 0.2, 0.0).unwrap();
/// let maturity = Maturity::from_years(1.0).unwrap();
/// let price = price_vanilla(
///     &market, 100.0, maturity, OptionKind::Call, ExerciseStyle::European, 500,
/// ).unwrap();
/// assert!((price - 10.45).abs() < 0.05);
/// ```
pub fn price_vanilla(
    market: &MarketInputs,
    strike: f64,
    maturity: Maturity,
    kind: OptionKind,
    style: ExerciseStyle,
    steps: usize,
) -> Result<f64, LatticeError> {
    let params = CrrParams::new(market, maturity, steps)?;

    // Terminal payoffs, highest node first.
    let mut values: Vec<f64> = (0..=steps)
        .map(|j| kind.intrinsic(params.node_price(market.spot, steps, j), strike))
        .collect();

    for step in (0..steps).rev() {
        for j in 0..=step {
            let continuation = params.expectation(values[j], values[j + 1]);
            values[j] = if style.is_american() {
                let intrinsic = kind.intrinsic(params.node_price(market.spot, step, j), strike);
                continuation.max(intrinsic)
            } else {
                continuation
            };
        }
        values.truncate(step + 1);
    }

    Ok(values[0])
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
    fn test_european_call_converges_to_black_scholes() {
        // S=100, K=100, r=0.05, σ=0.2, T=1 → C ≈ 10.4506
        let price = price_vanilla(
            &market(),
            100.0,
            years(1.0),
            OptionKind::Call,
            ExerciseStyle::European,
            2000,
        )
        .unwrap();
        assert_relative_eq!(price, 10.4506, epsilon = 1e-2);
    }

    #[test]
    fn test_european_put_converges_to_black_scholes() {
        let price = price_vanilla(
            &market(),
            100.0,
            years(1.0),
            OptionKind::Put,
            ExerciseStyle::European,
            2000,
        )
        .unwrap();
        assert_relative_eq!(price, 5.5735, epsilon = 1e-2);
    }

    #[test]
    fn test_american_put_carries_early_exercise_premium() {
        let european = price_vanilla(
            &market(),
            110.0,
            years(1.0),
            OptionKind::Put,
            ExerciseStyle::European,
            500,
        )
        .unwrap();
        let american = price_vanilla(
            &market(),
            110.0,
            years(1.0),
            OptionKind::Put,
            ExerciseStyle::American,
            500,
        )
        .unwrap();
        assert!(american > european);
    }

    #[test]
    fn test_american_call_no_dividend_matches_european() {
        // Without dividends early exercise of a call is never optimal.
        let european = price_vanilla(
            &market(),
            100.0,
            years(1.0),
            OptionKind::Call,
            ExerciseStyle::European,
            500,
        )
        .unwrap();
        let american = price_vanilla(
            &market(),
            100.0,
            years(1.0),
            OptionKind::Call,
            ExerciseStyle::American,
            500,
        )
        .unwrap();
        assert_relative_eq!(american, european, epsilon = 1e-9);
    }

    #[test]
    fn test_american_at_least_european() {
        for strike in [80.0, 100.0, 120.0] {
            for kind in [OptionKind::Call, OptionKind::Put] {
                let eu = price_vanilla(&market(), strike, years(1.0), kind, ExerciseStyle::European, 200)
                    .unwrap();
                let am = price_vanilla(&market(), strike, years(1.0), kind, ExerciseStyle::American, 200)
                    .unwrap();
                assert!(am >= eu - 1e-12, "strike {strike}: {am} < {eu}");
            }
        }
    }

    #[test]
    fn test_degenerate_probability_propagates() {
        let m = MarketInputs::new(100.0, 0.9, 0.01, 0.0).unwrap();
        assert!(price_vanilla(&m, 100.0, years(1.0), OptionKind::Call, ExerciseStyle::European, 2)
            .is_err());
    }

    proptest! {
        #[test]
        fn prop_american_dominates_european(
            spot in 50.0..150.0_f64,
            strike in 50.0..150.0_f64,
            vol in 0.1..0.5_f64,
        ) {
            let m = MarketInputs::new(spot, 0.05, vol, 0.0).unwrap();
            let eu = price_vanilla(&m, strike, years(1.0), OptionKind::Put, ExerciseStyle::European, 50)
                .unwrap();
            let am = price_vanilla(&m, strike, years(1.0), OptionKind::Put, ExerciseStyle::American, 50)
                .unwrap();
            prop_assert!(am >= eu - 1e-9, "american {} below european {}", am, eu);
        }

        #[test]
        fn prop_price_dominated_by_spot_and_strike(
            spot in 50.0..150.0_f64,
            strike in 50.0..150.0_f64,
            vol in 0.1..0.5_f64,
        ) {
            let m = MarketInputs::new(spot, 0.05, vol, 0.0).unwrap();
            let call = price_vanilla(&m, strike, years(1.0), OptionKind::Call, ExerciseStyle::European, 50)
                .unwrap();
            let put = price_vanilla(&m, strike, years(1.0), OptionKind::Put, ExerciseStyle::European, 50)
                .unwrap();
            prop_assert!(call >= 0.0 && call <= spot + 1e-9);
            prop_assert!(put >= 0.0 && put <= strike + 1e-9);
        }
    }
}
