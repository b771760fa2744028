//! Barrier option pricing by Monte Carlo.

use deriv_models::instruments::{BarrierTerms, KnockType, OptionKind};

use super::PathBatch;

/// Whether a path touches the barrier at any monitored point, the
/// initial spot included.
#[inline]
pub(crate) fn path_crosses(path: &[f64], barrier: &BarrierTerms) -> bool {
    path.iter().any(|&s| barrier.is_triggered(s))
}

/// Prices a knock-in or knock-out barrier option against a simulated
/// batch.
///
/// Each path is monitored at every simulation step. Knock-out pays the
/// vanilla terminal payoff on paths that never touch the barrier and the
/// rebate otherwise; knock-in swaps the two cases. With a zero rebate
/// the two prices decompose the vanilla payoff path by path.
pub fn price_barrier(
    batch: &PathBatch,
    strike: f64,
    kind: OptionKind,
    barrier: &BarrierTerms,
) -> f64 {
    let sum: f64 = (0..batch.num_paths())
        .map(|i| {
            let crossed = path_crosses(batch.path(i), barrier);
            let qualifies = match barrier.knock {
                KnockType::In => crossed,
                KnockType::Out => !crossed,
            };
            if qualifies {
                kind.intrinsic(batch.terminal(i), strike)
            } else {
                barrier.rebate
            }
        })
        .sum();

    batch.discount() * sum / batch.num_paths() as f64
}
