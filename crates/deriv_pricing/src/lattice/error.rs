//! Lattice engine errors.

use thiserror::Error;

/// Errors raised while building or traversing a binomial lattice.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LatticeError {
    /// The CRR risk-neutral probability left `[0, 1]`.
    ///
    /// Happens when the drift term outruns the volatility for the chosen
    /// step size; refining the grid or shortening the step restores a
    /// valid measure. The price is never computed from a degenerate tree.
    #[error("Risk-neutral probability {probability} outside [0, 1]; refine the time grid")]
    InvalidRiskNeutralProbability {
        /// The offending probability.
        probability: f64,
    },

    /// Step count must be at least 1.
    #[error("Invalid step count {steps}: must be >= 1")]
    InvalidStepCount {
        /// The offending step count.
        steps: usize,
    },
}
