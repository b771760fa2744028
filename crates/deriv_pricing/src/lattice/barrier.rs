//! Barrier option pricing on the CRR lattice.

use deriv_models::instruments::{BarrierTerms, KnockType, Maturity, OptionKind};
use deriv_models::market::MarketInputs;

use super::{CrrParams, LatticeError};

/// Prices a European barrier option by backward induction with per-node
/// barrier checks.
///
/// At each interior node the discounted expectation is computed first,
/// then the barrier condition is applied to the node's underlying price:
/// a knock-out node is overwritten with the discounted rebate, a
/// knock-in node keeps its continuation value. Barrier comparison is
/// inclusive on the level.
///
/// Knock-in values on a lattice only reflect the barrier through the
/// terminal payoff; the Monte Carlo engine monitors the full path and is
/// the reference for knock-in quotes.
///
/// # Errors
///
/// Propagates [`LatticeError`] from the CRR parameterisation.
pub fn price_barrier(
    market: &MarketInputs,
    strike: f64,
    maturity: Maturity,
    kind: OptionKind,
    barrier: &BarrierTerms,
    steps: usize,
) -> Result<f64, LatticeError> {
    let params = CrrParams::new(market, maturity, steps)?;

    let mut values: Vec<f64> = (0..=steps)
        .map(|j| kind.intrinsic(params.node_price(market.spot, steps, j), strike))
        .collect();

    for step in (0..steps).rev() {
        for j in 0..=step {
            let mut value = params.expectation(values[j], values[j + 1]);

            let node_price = params.node_price(market.spot, step, j);
            if barrier.is_triggered(node_price) && barrier.knock == KnockType::Out {
                value = barrier.rebate;
            }

            values[j] = value;
        }
        values.truncate(step + 1);
    }

    Ok(values[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use deriv_models::instruments::{BarrierDirection, ExerciseStyle};

    use crate::lattice::price_vanilla;

    fn market() -> MarketInputs {
        MarketInputs::new(100.0, 0.05, 0.2, 0.0).unwrap()
    }

    fn years(t: f64) -> Maturity {
        Maturity::from_years(t).unwrap()
    }

    #[test]
    fn test_knock_out_cheaper_than_vanilla() {
        let barrier = BarrierTerms::new(BarrierDirection::Up, KnockType::Out, 130.0);
        let ko = price_barrier(&market(), 100.0, years(1.0), OptionKind::Call, &barrier, 500)
            .unwrap();
        let vanilla = price_vanilla(
            &market(),
            100.0,
            years(1.0),
            OptionKind::Call,
            ExerciseStyle::European,
            500,
        )
        .unwrap();
        assert!(ko < vanilla);
        assert!(ko > 0.0);
    }

    #[test]
    fn test_spot_on_barrier_is_knocked_out() {
        // Inclusive trigger: spot sitting on the level already pays only
        // the rebate.
        let barrier = BarrierTerms::new(BarrierDirection::Up, KnockType::Out, 100.0);
        let price = price_barrier(&market(), 100.0, years(1.0), OptionKind::Call, &barrier, 200)
            .unwrap();
        assert_eq!(price, 0.0);
    }

    #[test]
    fn test_rebate_floors_knocked_out_price() {
        let with_rebate = BarrierTerms::new(BarrierDirection::Up, KnockType::Out, 100.0)
            .with_rebate(2.5);
        let price = price_barrier(
            &market(),
            100.0,
            years(1.0),
            OptionKind::Call,
            &with_rebate,
            200,
        )
        .unwrap();
        assert_eq!(price, 2.5);
    }

    #[test]
    fn test_distant_barrier_approaches_vanilla() {
        let barrier = BarrierTerms::new(BarrierDirection::Up, KnockType::Out, 1000.0);
        let ko = price_barrier(&market(), 100.0, years(1.0), OptionKind::Call, &barrier, 500)
            .unwrap();
        let vanilla = price_vanilla(
            &market(),
            100.0,
            years(1.0),
            OptionKind::Call,
            ExerciseStyle::European,
            500,
        )
        .unwrap();
        assert!((ko - vanilla).abs() < 1e-6);
    }

    #[test]
    fn test_down_and_out_put() {
        let barrier = BarrierTerms::new(BarrierDirection::Down, KnockType::Out, 70.0);
        let ko = price_barrier(&market(), 100.0, years(1.0), OptionKind::Put, &barrier, 500)
            .unwrap();
        let vanilla = price_vanilla(
            &market(),
            100.0,
            years(1.0),
            OptionKind::Put,
            ExerciseStyle::European,
            500,
        )
        .unwrap();
        assert!(ko < vanilla);
        assert!(ko >= 0.0);
    }
}
