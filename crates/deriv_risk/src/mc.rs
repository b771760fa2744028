//! Pathwise and likelihood-ratio Greeks over a shared path batch.
//!
//! All estimators score the batch that priced the contract instead of
//! re-simulating per bump: Delta and Gamma are pathwise (discounted ITM
//! indicator times the payoff's spot derivative), Vega and Theta are
//! likelihood-ratio estimators built from each path's Brownian
//! increment sum, Rho is the pathwise `payoff × T`.
//!
//! The estimators are unbiased only in the smooth parts of the payoff;
//! near a barrier or a kink they carry the usual Monte Carlo noise. A
//! larger batch, not a different bump size, is the lever for accuracy.

use deriv_core::types::Greeks;
use deriv_models::instruments::{
    AsianTerms, BarrierTerms, KnockType, LookbackStrike, OptionKind,
};
use deriv_pricing::mc::{
    lookback_payoff, observation_indices, path_average, path_extremes, PathBatch,
    SimulationError,
};

use crate::RiskError;

/// Likelihood-ratio scores shared by the Vega and Theta estimators.
///
/// `brownian_sum` is Σ dW over the path; the Vega score is
/// `ΣdW/σ − σT`, the Theta score re-weights the same sum by the drift
/// sensitivity.
#[derive(Clone, Copy)]
struct LrScores {
    vega: f64,
    theta: f64,
}

fn lr_scores(batch: &PathBatch, brownian_sum: f64) -> LrScores {
    let m = batch.market();
    let t = batch.maturity().years();
    let sigma = m.volatility;
    let drift = m.rate - m.dividend_yield - 0.5 * sigma * sigma;
    LrScores {
        vega: brownian_sum / sigma - sigma * t,
        theta: brownian_sum * drift / (sigma * sigma) - m.rate * t / sigma,
    }
}

/// Greeks of an Asian option from its pricing batch.
///
/// Delta differentiates the average through the path: each fixing scales
/// linearly with the spot, so `∂A/∂S = A/S` for both averaging kinds.
///
/// # Errors
///
/// [`SimulationError::EmptyFixingSchedule`] when the averaging frequency
/// rounds to zero fixings over the batch horizon, the same rejection the
/// pricing side applies.
pub fn mc_asian_greeks(
    batch: &PathBatch,
    strike: f64,
    kind: OptionKind,
    terms: &AsianTerms,
) -> Result<Greeks, RiskError> {
    let m = batch.market();
    let t = batch.maturity().years();
    let discount = batch.discount();
    let count = terms
        .frequency
        .observation_count(t, batch.time_steps());
    if count == 0 {
        return Err(SimulationError::EmptyFixingSchedule { maturity: t }.into());
    }
    let indices = observation_indices(batch.time_steps(), count);

    let n = batch.num_paths() as f64;
    let mut sums = Greeks::zero();

    for i in 0..batch.num_paths() {
        let average = path_average(batch.path(i), &indices, terms.average);
        let intrinsic = kind.intrinsic(average, strike);
        let payoff = discount * intrinsic;
        let itm = if intrinsic > 0.0 { 1.0 } else { 0.0 };

        let scores = lr_scores(batch, batch.shocks(i).iter().sum());

        sums.delta += discount * itm * kind.sign() * (average / m.spot);
        sums.gamma += -discount * itm * average / (m.spot * m.spot);
        sums.vega += payoff * scores.vega;
        sums.theta += -payoff * scores.theta;
        sums.rho += payoff * t;
    }

    Ok(Greeks::new(
        sums.delta / n,
        sums.gamma / n,
        sums.vega / n,
        sums.theta / n,
        sums.rho / n,
    ))
}

/// Greeks of a lookback option from its pricing batch.
///
/// Floating-strike contracts score against the realised extreme of each
/// path; the likelihood-ratio scores normalise the Brownian sum by
/// `√steps`, following the variance convention of the pricer this
/// estimator was validated against.
pub fn mc_lookback_greeks(
    batch: &PathBatch,
    strike: f64,
    kind: OptionKind,
    strike_style: LookbackStrike,
) -> Greeks {
    let m = batch.market();
    let t = batch.maturity().years();
    let discount = batch.discount();
    let n = batch.num_paths() as f64;
    let steps_norm = (batch.time_steps() as f64).sqrt();

    let mut sums = Greeks::zero();

    for i in 0..batch.num_paths() {
        let path = batch.path(i);
        let terminal = batch.terminal(i);
        let (min, max) = path_extremes(path);
        let effective_strike = match strike_style {
            LookbackStrike::Fixed => strike,
            LookbackStrike::Floating => match kind {
                OptionKind::Call => min,
                OptionKind::Put => max,
            },
        };
        let intrinsic = lookback_payoff(path, strike, kind, strike_style);
        let payoff = discount * intrinsic;

        let scores = lr_scores(batch, batch.shocks(i).iter().sum::<f64>() / steps_norm);

        if terminal > effective_strike {
            sums.delta += discount * terminal / m.spot;
        }
        sums.gamma += -discount * intrinsic / (m.spot * m.spot);
        sums.vega += payoff * scores.vega;
        sums.theta += -payoff * scores.theta;
        sums.rho += payoff * t;
    }

    Greeks::new(
        sums.delta / n,
        sums.gamma / n,
        sums.vega / n,
        sums.theta / n,
        sums.rho / n,
    )
}

/// Greeks of a barrier option from its pricing batch.
///
/// Pathwise Delta and Gamma only collect on qualifying paths (the rebate
/// leg has no spot sensitivity); the likelihood-ratio scores weight the
/// full payoff including rebates.
pub fn mc_barrier_greeks(
    batch: &PathBatch,
    strike: f64,
    kind: OptionKind,
    barrier: &BarrierTerms,
) -> Greeks {
    let m = batch.market();
    let t = batch.maturity().years();
    let discount = batch.discount();
    let n = batch.num_paths() as f64;

    let mut sums = Greeks::zero();

    for i in 0..batch.num_paths() {
        let crossed = batch.path(i).iter().any(|&s| barrier.is_triggered(s));
        let qualifies = match barrier.knock {
            KnockType::In => crossed,
            KnockType::Out => !crossed,
        };
        let terminal = batch.terminal(i);
        let intrinsic = if qualifies {
            kind.intrinsic(terminal, strike)
        } else {
            0.0
        };
        let cash = if qualifies { intrinsic } else { barrier.rebate };
        let payoff = discount * cash;
        let itm = if intrinsic > 0.0 { 1.0 } else { 0.0 };

        let scores = lr_scores(batch, batch.shocks(i).iter().sum());

        sums.delta += discount * itm * kind.sign() * (terminal / m.spot);
        sums.gamma += -discount * itm * terminal / (m.spot * m.spot);
        sums.vega += payoff * scores.vega;
        sums.theta += -payoff * scores.theta;
        sums.rho += payoff * t;
    }

    Greeks::new(
        sums.delta / n,
        sums.gamma / n,
        sums.vega / n,
        sums.theta / n,
        sums.rho / n,
    )
}
