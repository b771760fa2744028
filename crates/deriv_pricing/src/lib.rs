//! Numerical pricing engines.
//!
//! Two families of engines over the instrument terms defined in
//! `deriv_models`:
//!
//! - [`lattice`]: Cox-Ross-Rubinstein binomial trees for vanilla
//!   (European and American), barrier and autocallable contracts
//! - [`mc`]: seeded Monte Carlo over geometric Brownian motion paths for
//!   Asian, lookback and barrier payoffs
//!
//! Both are deterministic for a given input set; the Monte Carlo engine
//! additionally exposes its path batch so risk code can reuse one
//! simulation across several estimators.

#![warn(missing_docs)]

pub mod lattice;
pub mod mc;

pub use lattice::LatticeError;
pub use mc::{McConfig, PathBatch, SimulationError};
