//! Time-to-maturity derivation.
//!
//! A maturity is either given as a unit-tagged tenor (days, months, years)
//! or derived from a valuation/expiry date pair on an act/365 basis. Either
//! way the result must be strictly positive.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::TermsError;

/// Unit attached to a raw tenor figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    /// Calendar days (act/365).
    Days,
    /// Months (twelve per year).
    Months,
    /// Years.
    Years,
}

impl FromStr for TimeUnit {
    type Err = TermsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "days" => Ok(TimeUnit::Days),
            "months" => Ok(TimeUnit::Months),
            "years" => Ok(TimeUnit::Years),
            _ => Err(TermsError::UnknownTimeUnit(s.to_string())),
        }
    }
}

/// Validated time to maturity in years.
///
/// # Examples
/// ```
/// use deriv_models::instruments::{Maturity, TimeUnit};
///
/// let m = Maturity::from_tenor(18.0, TimeUnit::Months).unwrap();
/// assert!((m.years() - 1.5).abs() < 1e-12);
///
/// // Expired contracts are rejected outright.
/// assert!(Maturity::from_tenor(0.0, TimeUnit::Years).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Maturity(f64);

impl Maturity {
    /// Builds a maturity directly from a year fraction.
    ///
    /// # Errors
    ///
    /// [`TermsError::InvalidMaturity`] unless `years > 0`.
    pub fn from_years(years: f64) -> Result<Self, TermsError> {
        if years > 0.0 && years.is_finite() {
            Ok(Self(years))
        } else {
            Err(TermsError::InvalidMaturity { maturity: years })
        }
    }

    /// Converts a unit-tagged tenor into a year fraction.
    pub fn from_tenor(tenor: f64, unit: TimeUnit) -> Result<Self, TermsError> {
        let years = match unit {
            TimeUnit::Days => tenor / 365.0,
            TimeUnit::Months => tenor / 12.0,
            TimeUnit::Years => tenor,
        };
        Self::from_years(years)
    }

    /// Derives the year fraction between two dates on an act/365 basis.
    ///
    /// # Errors
    ///
    /// [`TermsError::InvalidMaturity`] when `expiry <= valuation`.
    pub fn from_dates(valuation: NaiveDate, expiry: NaiveDate) -> Result<Self, TermsError> {
        let days = (expiry - valuation).num_days();
        Self::from_years(days as f64 / 365.0)
    }

    /// The maturity as a year fraction.
    #[inline]
    pub fn years(&self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_tenor_conversions() {
        assert_relative_eq!(
            Maturity::from_tenor(365.0, TimeUnit::Days).unwrap().years(),
            1.0
        );
        assert_relative_eq!(
            Maturity::from_tenor(6.0, TimeUnit::Months).unwrap().years(),
            0.5
        );
        assert_relative_eq!(
            Maturity::from_tenor(2.0, TimeUnit::Years).unwrap().years(),
            2.0
        );
    }

    #[test]
    fn test_date_pair() {
        let valuation = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let expiry = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let m = Maturity::from_dates(valuation, expiry).unwrap();
        assert_relative_eq!(m.years(), 1.0);
    }

    #[test]
    fn test_non_positive_rejected() {
        assert!(Maturity::from_years(0.0).is_err());
        assert!(Maturity::from_years(-0.5).is_err());

        let d = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert!(Maturity::from_dates(d, d).is_err());
    }

    #[test]
    fn test_unknown_unit_string() {
        assert!(matches!(
            "fortnights".parse::<TimeUnit>(),
            Err(TermsError::UnknownTimeUnit(_))
        ));
    }
}
