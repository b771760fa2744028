//! Monte Carlo engine errors.

use thiserror::Error;

/// Configuration errors for the Monte Carlo engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// Path count outside `[1, 10_000_000]`.
    #[error("Invalid path count {0}: must be in range [1, 10_000_000]")]
    InvalidPathCount(usize),

    /// Step count outside `[1, 10_000]`.
    #[error("Invalid step count {0}: must be in range [1, 10_000]")]
    InvalidStepCount(usize),

    /// The averaging frequency yields no fixings over the horizon.
    #[error("Empty fixing schedule: no observations over a {maturity} year horizon")]
    EmptyFixingSchedule {
        /// Simulated horizon in years.
        maturity: f64,
    },
}
