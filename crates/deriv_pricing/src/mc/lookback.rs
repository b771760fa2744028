//! Lookback option pricing by Monte Carlo.

use deriv_models::instruments::{LookbackStrike, OptionKind};

use super::PathBatch;

/// Running minimum and maximum of one path, initial spot included.
#[inline]
pub fn path_extremes(path: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &s in path {
        min = min.min(s);
        max = max.max(s);
    }
    (min, max)
}

/// Lookback payoff at expiry for one path.
///
/// Fixed strike pays off against the running extreme; floating strike
/// pays the terminal price against the most favourable extreme.
pub fn lookback_payoff(
    path: &[f64],
    strike: f64,
    kind: OptionKind,
    strike_style: LookbackStrike,
) -> f64 {
    let (min, max) = path_extremes(path);
    let terminal = path[path.len() - 1];
    match (strike_style, kind) {
        (LookbackStrike::Fixed, OptionKind::Call) => (max - strike).max(0.0),
        (LookbackStrike::Fixed, OptionKind::Put) => (strike - min).max(0.0),
        (LookbackStrike::Floating, OptionKind::Call) => (terminal - min).max(0.0),
        (LookbackStrike::Floating, OptionKind::Put) => (max - terminal).max(0.0),
    }
}

/// Prices a lookback option against a simulated batch.
///
/// `strike` is ignored for floating-strike contracts.
pub fn price_lookback(
    batch: &PathBatch,
    strike: f64,
    kind: OptionKind,
    strike_style: LookbackStrike,
) -> f64 {
    let sum: f64 = (0..batch.num_paths())
        .map(|i| lookback_payoff(batch.path(i), strike, kind, strike_style))
        .sum();
    batch.discount() * sum / batch.num_paths() as f64
}
