//! Risk engine errors.

use deriv_models::instruments::TermsError;
use deriv_pricing::{LatticeError, SimulationError};
use thiserror::Error;

/// Errors surfaced by the Greek engines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RiskError {
    /// A scenario revaluation failed inside the lattice pricer.
    #[error(transparent)]
    Lattice(#[from] LatticeError),

    /// A bumped parameter produced invalid contract terms.
    #[error(transparent)]
    Terms(#[from] TermsError),

    /// The simulated batch cannot support the requested estimator.
    #[error(transparent)]
    Simulation(#[from] SimulationError),
}
