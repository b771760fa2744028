//! Numerical building blocks: distributions and root-finding solvers.

pub mod distributions;
pub mod solvers;
