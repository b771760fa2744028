//! Cox-Ross-Rubinstein binomial lattice engines.
//!
//! All engines share the CRR parameterisation in [`crr`]: up factor
//! `u = exp(σ√Δt)`, down factor `d = 1/u`, risk-neutral probability
//! `p = (e^((r-q)Δt) - d) / (u - d)`. Construction fails fast when `p`
//! leaves `[0, 1]`; prices from a degenerate tree are never reported.

mod autocall;
mod barrier;
mod crr;
mod error;
mod vanilla;

pub use autocall::price_autocallable;
pub use barrier::price_barrier;
pub use crr::CrrParams;
pub use error::LatticeError;
pub use vanilla::price_vanilla;
