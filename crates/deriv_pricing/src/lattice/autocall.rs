//! Autocallable structured-note pricing on the CRR lattice.
//!
//! The note is rolled back through the tree together with a coupon
//! memory vector. Non-observation steps propagate both the value and
//! the memory by the same risk-neutral expectation; observation steps
//! apply the redemption test node by node.

use deriv_models::instruments::{AutocallTerms, AutocallVariant, Maturity};
use deriv_models::market::MarketInputs;

use super::{CrrParams, LatticeError};

/// Prices an autocallable note on unit notional.
///
/// Terminal payoff applies the capital-protection rule: below the
/// protection barrier the holder receives `S_T / S_0`, otherwise the
/// full notional. Intermediate observation dates redeem early at
/// `(1 + coupon)` (plus accrued memory coupons for Phenix) discounted
/// from the observation time; below the autocall barrier the coupon is
/// missed and, with memory, accrues to the node's memory balance.
///
/// # Errors
///
/// Propagates [`LatticeError`] from the CRR parameterisation.
pub fn price_autocallable(
    market: &MarketInputs,
    terms: &AutocallTerms,
    maturity: Maturity,
    steps: usize,
) -> Result<f64, LatticeError> {
    let params = CrrParams::new(market, maturity, steps)?;
    let observations = observation_steps(maturity, terms, &params);

    tracing::debug!(
        steps,
        observations = observations.len(),
        variant = ?terms.variant,
        "pricing autocallable note"
    );

    // Terminal layer: capital protection only, no coupon test.
    let mut values: Vec<f64> = (0..=steps)
        .map(|j| {
            let price = params.node_price(market.spot, steps, j);
            if price < terms.protection_barrier {
                price / market.spot
            } else {
                1.0
            }
        })
        .collect();
    let mut memory: Vec<f64> = vec![0.0; steps + 1];

    for step in (0..steps).rev() {
        let observation = observations.binary_search(&step).is_ok();
        let observation_discount = (-market.rate * step as f64 * params.dt).exp();

        let mut new_values = vec![0.0; step + 1];
        let mut new_memory = vec![0.0; step + 1];

        for j in 0..=step {
            let continuation = params.expectation(values[j], values[j + 1]);

            if observation {
                let node_price = params.node_price(market.spot, step, j);
                let accrued = if terms.memory_coupon { memory[j] } else { 0.0 };
                let (value, carried) = observation_payoff(
                    terms,
                    node_price,
                    continuation,
                    accrued,
                    observation_discount,
                );
                new_values[j] = value;
                new_memory[j] = carried;
            } else {
                new_values[j] = continuation;
                if terms.memory_coupon {
                    new_memory[j] = params.p * memory[j] + (1.0 - params.p) * memory[j + 1];
                }
            }
        }

        values = new_values;
        memory = new_memory;
    }

    Ok(values[0])
}

/// Redemption test at one observation node.
///
/// Returns the node value and the coupon memory carried forward. Above
/// the autocall barrier the note redeems at `(1 + coupon)` (Phenix adds
/// the accrued memory) discounted from the observation time and the
/// memory resets; below, the value stays at its continuation and the
/// missed coupon accrues.
fn observation_payoff(
    terms: &AutocallTerms,
    node_price: f64,
    continuation: f64,
    accrued: f64,
    observation_discount: f64,
) -> (f64, f64) {
    if node_price >= terms.autocall_barrier {
        let redemption = match terms.variant {
            AutocallVariant::Phenix if terms.memory_coupon => 1.0 + accrued + terms.coupon,
            _ => 1.0 + terms.coupon,
        };
        (redemption * observation_discount, 0.0)
    } else if terms.memory_coupon {
        (continuation, accrued + terms.coupon)
    } else {
        (continuation, 0.0)
    }
}

/// Lattice steps carrying an observation date.
///
/// Observation times are spread uniformly over `(0, T]`; each is
/// snapped to the nearest step index, deduplicated and sorted. The
/// terminal step is handled by the capital-protection payoff, not the
/// coupon test.
fn observation_steps(maturity: Maturity, terms: &AutocallTerms, params: &CrrParams) -> Vec<usize> {
    let t = maturity.years();
    let num_observations = (t * terms.frequency.periods_per_year() as f64) as usize;

    let mut steps: Vec<usize> = (1..=num_observations)
        .map(|k| {
            let obs_time = t * k as f64 / num_observations as f64;
            ((obs_time / params.dt + 1e-8).round() as usize).min(params.steps)
        })
        .collect();
    steps.sort_unstable();
    steps.dedup();
    steps
}
