//! GBM path batch generation.
//!
//! Paths follow the log-Euler scheme: log increments
//! `(r - q - σ²/2)Δt + σ dW` are accumulated from `ln S₀` and
//! exponentiated, so every simulated price stays strictly positive.
//!
//! Both the price paths and the Brownian increments are retained in
//! row-major layout. The increments feed the likelihood-ratio Greek
//! estimators, which must score exactly the shocks that produced the
//! prices.

use deriv_models::market::MarketInputs;
use deriv_models::Maturity;

use super::{McConfig, SimulationError, SimulationRng};

/// One batch of simulated GBM paths with their driving shocks.
///
/// Row-major storage: path `i` occupies
/// `spots[i * (time_steps + 1) .. (i + 1) * (time_steps + 1)]` with the
/// initial spot at offset 0, and `shocks[i * time_steps ..]` holds the
/// Brownian increments `dW` (√Δt included).
pub struct PathBatch {
    market: MarketInputs,
    maturity: Maturity,
    spots: Vec<f64>,
    shocks: Vec<f64>,
    num_paths: usize,
    time_steps: usize,
}

impl PathBatch {
    /// Simulates a batch under the given configuration.
    ///
    /// # Errors
    ///
    /// Currently infallible for a validated [`McConfig`]; the `Result`
    /// reserves room for allocation-size guards.
    ///
    /// # Examples
    /// ```
    /// use deriv_models::instruments::Maturity;
    /// use deriv_models::market::MarketInputs;
    /// use deriv_pricing::mc::{McConfig, PathBatch};
    ///
    /// let market = MarketInputs::new(100.0, 0.05, 0.2, 0.0).unwrap();
    /// let config = McConfig::new(1_000, 50, Some(42)).unwrap();
    /// let batch = PathBatch::generate(&market, Maturity::from_years(1.0).unwrap(), &config).unwrap();
    /// assert_eq!(batch.path(0)[0], 100.0);
    /// ```
    pub fn generate(
        market: &MarketInputs,
        maturity: Maturity,
        config: &McConfig,
    ) -> Result<Self, SimulationError> {
        let num_paths = config.num_paths;
        let time_steps = config.time_steps;
        let dt = maturity.years() / time_steps as f64;
        let sqrt_dt = dt.sqrt();
        let drift_dt =
            (market.rate - market.dividend_yield - 0.5 * market.volatility * market.volatility)
                * dt;

        tracing::debug!(
            num_paths,
            time_steps,
            seed = ?config.seed,
            "generating GBM path batch"
        );

        let mut rng = match config.seed {
            Some(seed) => SimulationRng::from_seed(seed),
            None => SimulationRng::from_entropy(),
        };
        let mut shocks = vec![0.0; num_paths * time_steps];
        rng.fill_normal(&mut shocks);
        // Scale to Brownian increments dW = √Δt · Z.
        for dw in shocks.iter_mut() {
            *dw *= sqrt_dt;
        }

        let log_spot = market.spot.ln();
        let mut spots = vec![0.0; num_paths * (time_steps + 1)];
        for path_idx in 0..num_paths {
            let spot_offset = path_idx * (time_steps + 1);
            let shock_offset = path_idx * time_steps;

            spots[spot_offset] = market.spot;
            let mut log_s = log_spot;
            for step in 0..time_steps {
                log_s += drift_dt + market.volatility * shocks[shock_offset + step];
                spots[spot_offset + step + 1] = log_s.exp();
            }
        }

        Ok(Self {
            market: *market,
            maturity,
            spots,
            shocks,
            num_paths,
            time_steps,
        })
    }

    /// Market inputs the batch was simulated under.
    #[inline]
    pub fn market(&self) -> &MarketInputs {
        &self.market
    }

    /// Maturity of the simulation horizon.
    #[inline]
    pub fn maturity(&self) -> Maturity {
        self.maturity
    }

    /// Number of simulated paths.
    #[inline]
    pub fn num_paths(&self) -> usize {
        self.num_paths
    }

    /// Steps per path (excluding the initial spot).
    #[inline]
    pub fn time_steps(&self) -> usize {
        self.time_steps
    }

    /// Step length in years.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.maturity.years() / self.time_steps as f64
    }

    /// Price path `i`, `time_steps + 1` points starting at the spot.
    #[inline]
    pub fn path(&self, i: usize) -> &[f64] {
        let width = self.time_steps + 1;
        &self.spots[i * width..(i + 1) * width]
    }

    /// Brownian increments that drove path `i`.
    #[inline]
    pub fn shocks(&self, i: usize) -> &[f64] {
        &self.shocks[i * self.time_steps..(i + 1) * self.time_steps]
    }

    /// Terminal price of path `i`.
    #[inline]
    pub fn terminal(&self, i: usize) -> f64 {
        self.spots[i * (self.time_steps + 1) + self.time_steps]
    }

    /// Discount factor over the full horizon, e^(-rT).
    #[inline]
    pub fn discount(&self) -> f64 {
        (-self.market.rate * self.maturity.years()).exp()
    }
}
