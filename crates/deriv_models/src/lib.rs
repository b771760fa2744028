//! # Deriv Models (L2: Business Logic)
//!
//! Market inputs, contract terms and closed-form analytics.
//!
//! This crate provides:
//! - Immutable market parameter records ([`market::MarketInputs`])
//! - Contract-term enums and records (option kind, exercise style,
//!   maturity, barrier, Asian/lookback conventions, autocallable terms)
//! - Closed-form Black-Scholes pricing and Greeks, quanto and
//!   digital variants
//! - Implied-volatility inversion with a bisection fallback
//!
//! ## Design Principles
//!
//! - **Enum discriminants** instead of inheritance chains: one term record
//!   per instrument family, dispatched to the matching engine function
//! - **Perturbed copies, never mutation**: bump helpers return new records

#![warn(missing_docs)]

pub mod analytical;
pub mod instruments;
pub mod market;

pub use instruments::{ExerciseStyle, Maturity, OptionKind};
pub use market::MarketInputs;
