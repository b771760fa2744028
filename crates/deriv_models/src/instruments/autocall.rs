//! Autocallable structured-note terms.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::TermsError;

/// Observation frequency of an autocallable note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObservationFrequency {
    /// One observation per year.
    Annual,
    /// Two observations per year.
    SemiAnnual,
    /// Four observations per year.
    Quarterly,
    /// Twelve observations per year.
    Monthly,
}

impl ObservationFrequency {
    /// Observations per year.
    #[inline]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            ObservationFrequency::Annual => 1,
            ObservationFrequency::SemiAnnual => 2,
            ObservationFrequency::Quarterly => 4,
            ObservationFrequency::Monthly => 12,
        }
    }
}

impl FromStr for ObservationFrequency {
    type Err = TermsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "annual" => Ok(ObservationFrequency::Annual),
            "semi-annual" => Ok(ObservationFrequency::SemiAnnual),
            "quarterly" => Ok(ObservationFrequency::Quarterly),
            "monthly" => Ok(ObservationFrequency::Monthly),
            _ => Err(TermsError::UnknownFrequency(s.to_string())),
        }
    }
}

/// Coupon behaviour on early redemption.
///
/// Athena pays the period coupon only; Phenix additionally pays every
/// missed coupon accumulated in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AutocallVariant {
    /// Coupon only at redemption.
    Athena,
    /// Coupon plus accrued memory coupons at redemption.
    Phenix,
}

impl FromStr for AutocallVariant {
    type Err = TermsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "athena" => Ok(AutocallVariant::Athena),
            "phenix" => Ok(AutocallVariant::Phenix),
            _ => Err(TermsError::UnknownAutocallVariant(s.to_string())),
        }
    }
}

/// Terms of an autocallable structured note (unit notional).
///
/// # Examples
/// ```
/// use deriv_models::instruments::{AutocallTerms, AutocallVariant, ObservationFrequency};
///
/// let terms = AutocallTerms {
///     coupon: 0.05,
///     autocall_barrier: 100.0,
///     protection_barrier: 60.0,
///     frequency: ObservationFrequency::SemiAnnual,
///     variant: AutocallVariant::Phenix,
///     memory_coupon: true,
/// };
/// assert_eq!(terms.frequency.periods_per_year(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AutocallTerms {
    /// Coupon rate paid per observation period.
    pub coupon: f64,
    /// Early-redemption barrier in spot units.
    pub autocall_barrier: f64,
    /// Capital-protection barrier in spot units.
    pub protection_barrier: f64,
    /// Observation schedule frequency.
    pub frequency: ObservationFrequency,
    /// Coupon behaviour at redemption.
    pub variant: AutocallVariant,
    /// Whether missed coupons accrue into memory.
    pub memory_coupon: bool,
}
