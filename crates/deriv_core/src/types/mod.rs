//! Shared type definitions.

pub mod error;
pub mod greeks;

pub use error::{PricingError, SolverError};
pub use greeks::{Greeks, QuantoGreeks};
