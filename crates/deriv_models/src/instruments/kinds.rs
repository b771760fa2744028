//! Option kind and exercise style.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::TermsError;

/// Call or put.
///
/// # Examples
/// ```
/// use deriv_models::instruments::OptionKind;
///
/// let kind: OptionKind = "call".parse().unwrap();
/// assert_eq!(kind, OptionKind::Call);
/// assert!("straddle".parse::<OptionKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionKind {
    /// Right to buy: payoff max(S − K, 0).
    Call,
    /// Right to sell: payoff max(K − S, 0).
    Put,
}

impl OptionKind {
    /// Intrinsic value of the payoff at the given spot and strike.
    #[inline]
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionKind::Call => (spot - strike).max(0.0),
            OptionKind::Put => (strike - spot).max(0.0),
        }
    }

    /// +1 for calls, −1 for puts.
    #[inline]
    pub fn sign(&self) -> f64 {
        match self {
            OptionKind::Call => 1.0,
            OptionKind::Put => -1.0,
        }
    }
}

impl FromStr for OptionKind {
    type Err = TermsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "call" => Ok(OptionKind::Call),
            "put" => Ok(OptionKind::Put),
            _ => Err(TermsError::UnknownOptionKind(s.to_string())),
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKind::Call => write!(f, "call"),
            OptionKind::Put => write!(f, "put"),
        }
    }
}

/// When the holder may exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExerciseStyle {
    /// Exercise only at expiry.
    European,
    /// Exercise at any time before expiry.
    American,
}

impl ExerciseStyle {
    /// `true` for American style.
    #[inline]
    pub fn is_american(&self) -> bool {
        matches!(self, ExerciseStyle::American)
    }
}

impl FromStr for ExerciseStyle {
    type Err = TermsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "european" => Ok(ExerciseStyle::European),
            "american" => Ok(ExerciseStyle::American),
            _ => Err(TermsError::UnknownExerciseStyle(s.to_string())),
        }
    }
}
