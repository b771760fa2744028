//! Contract-term types.
//!
//! One flat record per instrument family with enum discriminants, replacing
//! any notion of an instrument class hierarchy: the pricing engines receive
//! these records plus [`crate::market::MarketInputs`] and stay pure.

mod asian;
mod autocall;
mod barrier;
mod error;
mod kinds;
mod lookback;
mod maturity;

pub use asian::{AsianTerms, AverageKind, AveragingFrequency};
pub use autocall::{AutocallTerms, AutocallVariant, ObservationFrequency};
pub use barrier::{BarrierDirection, BarrierTerms, KnockType};
pub use error::TermsError;
pub use kinds::{ExerciseStyle, OptionKind};
pub use lookback::LookbackStrike;
pub use maturity::{Maturity, TimeUnit};
