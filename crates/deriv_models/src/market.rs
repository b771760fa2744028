//! Market parameter records.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Market data validation errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MarketError {
    /// Spot must be strictly positive.
    #[error("Invalid spot price {spot}: must be > 0")]
    InvalidSpot {
        /// Offending spot value.
        spot: f64,
    },

    /// Volatility must be strictly positive.
    #[error("Invalid volatility {volatility}: must be > 0")]
    InvalidVolatility {
        /// Offending volatility value.
        volatility: f64,
    },
}

/// Immutable market parameter set consumed by every engine.
///
/// Constructed once per pricing request and read-only thereafter; the
/// sensitivity engine derives perturbed copies through the `with_*` helpers
/// and never mutates the original.
///
/// # Examples
/// ```
/// use deriv_models::market::MarketInputs;
///
/// let market = MarketInputs::new(100.0, 0.05, 0.2, 0.0).unwrap();
/// let bumped = market.with_spot(101.0);
/// assert_eq!(market.spot, 100.0);
/// assert_eq!(bumped.spot, 101.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketInputs {
    /// Current spot price (S), strictly positive.
    pub spot: f64,
    /// Risk-free interest rate (r), annualised.
    pub rate: f64,
    /// Volatility (σ), annualised, strictly positive.
    pub volatility: f64,
    /// Continuous dividend / carry yield (q).
    pub dividend_yield: f64,
}

impl MarketInputs {
    /// Creates a validated market parameter set.
    ///
    /// # Errors
    ///
    /// - [`MarketError::InvalidSpot`] if `spot <= 0`
    /// - [`MarketError::InvalidVolatility`] if `volatility <= 0`
    pub fn new(spot: f64, rate: f64, volatility: f64, dividend_yield: f64) -> Result<Self, MarketError> {
        if spot <= 0.0 || !spot.is_finite() {
            return Err(MarketError::InvalidSpot { spot });
        }
        if volatility <= 0.0 || !volatility.is_finite() {
            return Err(MarketError::InvalidVolatility { volatility });
        }
        Ok(Self {
            spot,
            rate,
            volatility,
            dividend_yield,
        })
    }

    /// Returns a copy with the spot replaced.
    #[inline]
    pub fn with_spot(&self, spot: f64) -> Self {
        Self { spot, ..*self }
    }

    /// Returns a copy with the volatility replaced.
    #[inline]
    pub fn with_volatility(&self, volatility: f64) -> Self {
        Self { volatility, ..*self }
    }

    /// Returns a copy with the rate replaced.
    #[inline]
    pub fn with_rate(&self, rate: f64) -> Self {
        Self { rate, ..*self }
    }
}
