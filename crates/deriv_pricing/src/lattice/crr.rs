//! CRR lattice parameterisation.

use deriv_models::market::MarketInputs;
use deriv_models::Maturity;

use super::LatticeError;

/// Precomputed Cox-Ross-Rubinstein step parameters.
///
/// # Examples
/// ```
/// use deriv_models::market::MarketInputs;
/// use deriv_models::instruments::Maturity;
/// use deriv_pricing::lattice::CrrParams;
///
/// let market = MarketInputs::new(100.0, 0.05, 0.2, 0.0).unwrap();
/// let params = CrrParams::new(&market, Maturity::from_years(1.0).unwrap(), 500).unwrap();
/// assert!(params.p > 0.0 && params.p < 1.0);
/// assert!((params.u * params.d - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrrParams {
    /// Step length Δt = T / steps.
    pub dt: f64,
    /// Up factor u = exp(σ√Δt).
    pub u: f64,
    /// Down factor d = 1/u.
    pub d: f64,
    /// Risk-neutral up probability.
    pub p: f64,
    /// One-step discount factor e^(-rΔt).
    pub step_discount: f64,
    /// Number of time steps.
    pub steps: usize,
}

impl CrrParams {
    /// Derives the step parameters and validates the risk-neutral measure.
    ///
    /// # Errors
    ///
    /// - [`LatticeError::InvalidStepCount`] when `steps == 0`
    /// - [`LatticeError::InvalidRiskNeutralProbability`] when
    ///   `p = (e^((r-q)Δt) - d) / (u - d)` leaves `[0, 1]`
    pub fn new(market: &MarketInputs, maturity: Maturity, steps: usize) -> Result<Self, LatticeError> {
        if steps == 0 {
            return Err(LatticeError::InvalidStepCount { steps });
        }

        let dt = maturity.years() / steps as f64;
        let u = (market.volatility * dt.sqrt()).exp();
        let d = 1.0 / u;
        let p = (((market.rate - market.dividend_yield) * dt).exp() - d) / (u - d);

        if !(0.0..=1.0).contains(&p) || !p.is_finite() {
            return Err(LatticeError::InvalidRiskNeutralProbability { probability: p });
        }

        Ok(Self {
            dt,
            u,
            d,
            p,
            step_discount: (-market.rate * dt).exp(),
            steps,
        })
    }

    /// Underlying price at node `(step, down_moves)`.
    ///
    /// `down_moves` counts the down branches taken, so the highest node of
    /// a step sits at `down_moves = 0`.
    #[inline]
    pub fn node_price(&self, spot: f64, step: usize, down_moves: usize) -> f64 {
        spot * self.u.powi((step - down_moves) as i32) * self.d.powi(down_moves as i32)
    }

    /// One-step discounted risk-neutral expectation.
    #[inline]
    pub fn expectation(&self, value_up: f64, value_down: f64) -> f64 {
        self.step_discount * (self.p * value_up + (1.0 - self.p) * value_down)
    }
}
