//! Contract-term validation errors.

use thiserror::Error;

/// Errors raised while constructing or parsing contract terms.
///
/// All of these are invalid-input errors: they propagate to the caller
/// immediately, with no retry and no default substitution.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TermsError {
    /// Option kind string was not `call` or `put`.
    #[error("Unknown option kind '{0}': expected 'call' or 'put'")]
    UnknownOptionKind(String),

    /// Exercise style string was not `european` or `american`.
    #[error("Unknown exercise style '{0}': expected 'European' or 'American'")]
    UnknownExerciseStyle(String),

    /// Barrier style string did not name a direction and a knock type.
    #[error("Unknown barrier style '{0}': expected up/down combined with in/out")]
    UnknownBarrierStyle(String),

    /// Averaging convention was not `arithmetic` or `geometric`.
    #[error("Unknown average kind '{0}': expected 'arithmetic' or 'geometric'")]
    UnknownAverageKind(String),

    /// Observation frequency string was not recognised.
    #[error("Unknown observation frequency '{0}'")]
    UnknownFrequency(String),

    /// Lookback strike type was not `fixed` or `floating`.
    #[error("Unknown strike type '{0}': expected 'fixed' or 'floating'")]
    UnknownStrikeType(String),

    /// Autocall variant was not `athena` or `phenix`.
    #[error("Unknown autocall variant '{0}': expected 'athena' or 'phenix'")]
    UnknownAutocallVariant(String),

    /// Tenor unit was not days, months or years.
    #[error("Unknown time unit '{0}': expected 'days', 'months' or 'years'")]
    UnknownTimeUnit(String),

    /// Time to maturity must be strictly positive.
    #[error("Invalid maturity {maturity}: must be > 0 years")]
    InvalidMaturity {
        /// Offending maturity in years.
        maturity: f64,
    },
}
