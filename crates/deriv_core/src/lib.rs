//! # Deriv Core (L1: Foundation)
//!
//! Shared numerical and type foundations for the pricing workspace.
//!
//! This crate provides:
//! - Structured error types (`PricingError`, `SolverError`)
//! - Greek sensitivity result types (`Greeks`, `QuantoGreeks`)
//! - Standard normal distribution functions (`norm_cdf`, `norm_pdf`)
//! - Root-finding solvers (Newton-Raphson, bisection) with shared
//!   configuration
//!
//! ## Design Principles
//!
//! - **Pure functions** over shared mutable state
//! - **Typed errors** propagated with `?`, never swallowed
//! - **f64 throughout** the numerical kernels

#![warn(missing_docs)]

pub mod math;
pub mod types;

pub use types::error::{PricingError, SolverError};
pub use types::greeks::{Greeks, QuantoGreeks};
