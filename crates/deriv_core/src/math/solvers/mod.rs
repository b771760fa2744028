//! Root-finding solvers.
//!
//! The implied-volatility inversion in `deriv_models` drives these: a
//! Newton-Raphson solver for the fast path and a bisection solver for the
//! degenerate-Vega fallback.

mod bisection;
mod config;
mod newton_raphson;

pub use bisection::BisectionSolver;
pub use config::SolverConfig;
pub use newton_raphson::NewtonRaphsonSolver;
