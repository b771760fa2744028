//! Closed-form analytics.
//!
//! Black-Scholes pricing and Greeks under lognormal dynamics, the quanto
//! and digital variants, and implied-volatility inversion.

mod black_scholes;
mod digital;
mod implied_vol;
mod quanto;

pub use black_scholes::BlackScholes;
pub use digital::DigitalOption;
pub use implied_vol::implied_volatility;
pub use quanto::{QuantoInputs, QuantoOption};
