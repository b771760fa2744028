//! Single-barrier contract terms.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::TermsError;

/// Which side of the barrier the underlying must touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BarrierDirection {
    /// Barrier lies above the spot; triggered when `S >= level`.
    Up,
    /// Barrier lies below the spot; triggered when `S <= level`.
    Down,
}

/// Whether touching the barrier activates or extinguishes the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KnockType {
    /// Knock-in: the option only exists once the barrier is touched.
    In,
    /// Knock-out: the option dies when the barrier is touched.
    Out,
}

/// Terms of a single-barrier knock-in/out contract.
///
/// # Examples
/// ```
/// use deriv_models::instruments::{BarrierDirection, BarrierTerms, KnockType};
///
/// let terms: BarrierTerms = "up-and-out".parse().unwrap();
/// assert_eq!(terms.direction, BarrierDirection::Up);
/// assert_eq!(terms.knock, KnockType::Out);
///
/// let terms = terms.with_level(120.0).with_rebate(1.5);
/// assert!(terms.is_triggered(125.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarrierTerms {
    /// Barrier side relative to the spot.
    pub direction: BarrierDirection,
    /// Knock-in or knock-out.
    pub knock: KnockType,
    /// Barrier level in spot units.
    pub level: f64,
    /// Rebate paid on the non-qualifying side.
    pub rebate: f64,
}

impl BarrierTerms {
    /// Creates barrier terms with the given level and a zero rebate.
    pub fn new(direction: BarrierDirection, knock: KnockType, level: f64) -> Self {
        Self {
            direction,
            knock,
            level,
            rebate: 0.0,
        }
    }

    /// Returns a copy with the barrier level replaced.
    #[inline]
    pub fn with_level(&self, level: f64) -> Self {
        Self { level, ..*self }
    }

    /// Returns a copy with the rebate replaced.
    #[inline]
    pub fn with_rebate(&self, rebate: f64) -> Self {
        Self { rebate, ..*self }
    }

    /// Whether a price at `level` trips the barrier condition.
    #[inline]
    pub fn is_triggered(&self, price: f64) -> bool {
        match self.direction {
            BarrierDirection::Up => price >= self.level,
            BarrierDirection::Down => price <= self.level,
        }
    }
}

impl FromStr for BarrierTerms {
    type Err = TermsError;

    /// Parses styles like `up-and-in`, `down-out`, `up_in`.
    ///
    /// Level and rebate default to 0 and are set through the `with_*`
    /// helpers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        let direction = if lower.contains("up") {
            BarrierDirection::Up
        } else if lower.contains("down") {
            BarrierDirection::Down
        } else {
            return Err(TermsError::UnknownBarrierStyle(s.to_string()));
        };
        let knock = if lower.contains("out") {
            KnockType::Out
        } else if lower.contains("in") {
            KnockType::In
        } else {
            return Err(TermsError::UnknownBarrierStyle(s.to_string()));
        };
        Ok(Self::new(direction, knock, 0.0))
    }
}
