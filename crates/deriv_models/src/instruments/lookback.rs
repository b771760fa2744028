//! Lookback contract terms.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::TermsError;

/// Strike convention of a lookback option.
///
/// Fixed-strike contracts compare the path extremum against a contractual
/// strike; floating-strike contracts compare the terminal price against the
/// realised extremum itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LookbackStrike {
    /// Contractual strike against the path extremum.
    Fixed,
    /// Realised extremum acts as the strike.
    Floating,
}

impl FromStr for LookbackStrike {
    type Err = TermsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fixed" => Ok(LookbackStrike::Fixed),
            "floating" => Ok(LookbackStrike::Floating),
            _ => Err(TermsError::UnknownStrikeType(s.to_string())),
        }
    }
}
