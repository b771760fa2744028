//! Asian (average-price) contract terms.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::TermsError;

/// Averaging convention for the observed fixings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AverageKind {
    /// Arithmetic mean of the fixings.
    Arithmetic,
    /// Geometric mean (exponentiated mean of logs).
    Geometric,
}

impl FromStr for AverageKind {
    type Err = TermsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "arithmetic" => Ok(AverageKind::Arithmetic),
            "geometric" => Ok(AverageKind::Geometric),
            _ => Err(TermsError::UnknownAverageKind(s.to_string())),
        }
    }
}

/// How often the running average samples the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AveragingFrequency {
    /// One fixing per calendar day.
    Daily,
    /// One fixing per week.
    Weekly,
    /// One fixing per month.
    Monthly,
}

impl AveragingFrequency {
    /// Observations per year under this frequency.
    #[inline]
    pub fn observations_per_year(&self) -> f64 {
        match self {
            AveragingFrequency::Daily => 365.0,
            AveragingFrequency::Weekly => 52.0,
            AveragingFrequency::Monthly => 12.0,
        }
    }

    /// Number of fixings over a `maturity`-year horizon, capped at the
    /// number of simulated steps.
    ///
    /// Rounds to zero when the maturity is shorter than half a fixing
    /// interval; pricing engines reject that case rather than average an
    /// empty schedule.
    ///
    /// # Examples
    /// ```
    /// use deriv_models::instruments::AveragingFrequency;
    ///
    /// assert_eq!(AveragingFrequency::Monthly.observation_count(1.0, 200), 12);
    /// // Daily fixings over two years exceed a 200-step grid; capped.
    /// assert_eq!(AveragingFrequency::Daily.observation_count(2.0, 200), 200);
    /// ```
    #[inline]
    pub fn observation_count(&self, maturity: f64, time_steps: usize) -> usize {
        let n = (maturity * self.observations_per_year()).round() as usize;
        n.min(time_steps)
    }
}

impl FromStr for AveragingFrequency {
    type Err = TermsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "daily" => Ok(AveragingFrequency::Daily),
            "weekly" => Ok(AveragingFrequency::Weekly),
            "monthly" => Ok(AveragingFrequency::Monthly),
            _ => Err(TermsError::UnknownFrequency(s.to_string())),
        }
    }
}

/// Terms of an Asian (average-price) option.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AsianTerms {
    /// Arithmetic or geometric averaging.
    pub average: AverageKind,
    /// Fixing frequency.
    pub frequency: AveragingFrequency,
}
