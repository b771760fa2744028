//! Sensitivity (Greek) engines.
//!
//! Two estimation families:
//!
//! - [`fd`] / [`lattice`] / [`autocall`]: finite-difference
//!   bump-and-revalue over the lattice pricers, with one uniform bump
//!   policy across instruments and a rayon fan-out for the six
//!   autocallable scenarios
//! - [`mc`]: pathwise and likelihood-ratio estimators that reuse one
//!   simulated path batch instead of re-simulating per bump
//!
//! Every bump operates on a perturbed copy of the market inputs; the
//! originals are never mutated.

#![warn(missing_docs)]

pub mod autocall;
mod error;
pub mod fd;
pub mod lattice;
pub mod mc;

pub use autocall::autocall_greeks;
pub use error::RiskError;
pub use fd::BumpPolicy;
pub use lattice::{barrier_greeks, vanilla_greeks};
pub use mc::{mc_asian_greeks, mc_barrier_greeks, mc_lookback_greeks};
