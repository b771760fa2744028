//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: errors from pricing operations
//! - `SolverError`: errors from root-finding solvers
//!
//! Invalid inputs are fatal and propagate to the caller immediately; the
//! only tolerated degeneracies are the documented solver fallback paths.

use thiserror::Error;

/// Categorised pricing errors.
///
/// Provides structured error handling for pricing operations with
/// descriptive context for each failure mode.
///
/// # Examples
/// ```
/// use deriv_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: negative spot price");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Model failed to produce a valid result.
    #[error("Model failure: {0}")]
    ModelFailure(String),

    /// Instrument type not supported by the requested engine.
    #[error("Unsupported instrument: {0}")]
    UnsupportedInstrument(String),
}

/// Root-finding solver errors.
///
/// # Examples
/// ```
/// use deriv_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100 };
/// assert!(format!("{}", err).contains("100"));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    /// The solver exhausted its iteration budget without converging.
    #[error("Solver failed to converge within {iterations} iterations")]
    MaxIterationsExceeded {
        /// Iteration budget that was exhausted.
        iterations: usize,
    },

    /// The derivative became too small for a Newton step.
    #[error("Derivative near zero at x = {x}")]
    DerivativeNearZero {
        /// Point at which the derivative underflowed.
        x: f64,
    },

    /// The bracketing interval does not contain a sign change.
    #[error("Root not bracketed in [{lo}, {hi}]")]
    RootNotBracketed {
        /// Lower bracket.
        lo: f64,
        /// Upper bracket.
        hi: f64,
    },

    /// The iteration produced a non-finite value.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_error_display() {
        let err = PricingError::NumericalInstability("NaN in backward pass".to_string());
        assert_eq!(
            format!("{}", err),
            "Numerical instability: NaN in backward pass"
        );

        let err = PricingError::UnsupportedInstrument("bermudan".to_string());
        assert!(format!("{}", err).contains("bermudan"));
    }

    #[test]
    fn test_solver_error_display() {
        let err = SolverError::DerivativeNearZero { x: 0.2 };
        assert!(format!("{}", err).contains("0.2"));

        let err = SolverError::RootNotBracketed { lo: 0.001, hi: 5.0 };
        assert!(format!("{}", err).contains("0.001"));
    }

    #[test]
    fn test_errors_are_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&PricingError::InvalidInput("x".to_string()));
        assert_error(&SolverError::MaxIterationsExceeded { iterations: 1 });
    }
}
