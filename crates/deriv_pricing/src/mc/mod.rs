//! Monte Carlo pricing over geometric Brownian motion paths.
//!
//! [`PathBatch::generate`] simulates a seeded batch of GBM paths once and
//! keeps both the price paths and the underlying Brownian increments.
//! The payoff modules then price Asian, lookback and barrier contracts
//! against the batch, and risk code reuses the same batch for its
//! pathwise and likelihood-ratio estimators.

mod asian;
mod barrier;
mod config;
mod error;
mod lookback;
mod paths;
mod rng;

pub use asian::{observation_indices, path_average, price_asian};
pub use barrier::price_barrier;
pub use config::McConfig;
pub use error::SimulationError;
pub use lookback::{lookback_payoff, path_extremes, price_lookback};
pub use paths::PathBatch;
pub use rng::SimulationRng;
