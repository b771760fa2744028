//! Monte Carlo simulation configuration.

use super::SimulationError;

/// Simulation sizing and seeding.
///
/// A fixed seed makes every run reproducible; identical configurations
/// over identical inputs produce bitwise identical prices. Without a
/// seed the generator is seeded from system entropy, so repeated runs
/// draw independent batches.
///
/// # Examples
/// ```
/// use deriv_pricing::mc::McConfig;
///
/// let config = McConfig::new(100_000, 200, Some(42)).unwrap();
/// assert_eq!(config.num_paths, 100_000);
/// assert!(McConfig::new(0, 200, Some(42)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct McConfig {
    /// Number of simulated paths.
    pub num_paths: usize,
    /// Number of time steps per path.
    pub time_steps: usize,
    /// PRNG seed; entropy-seeded when absent.
    pub seed: Option<u64>,
}

impl McConfig {
    /// Maximum admissible path count.
    pub const MAX_PATHS: usize = 10_000_000;
    /// Maximum admissible step count.
    pub const MAX_STEPS: usize = 10_000;

    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// [`SimulationError::InvalidPathCount`] or
    /// [`SimulationError::InvalidStepCount`] when a bound is violated.
    pub fn new(
        num_paths: usize,
        time_steps: usize,
        seed: Option<u64>,
    ) -> Result<Self, SimulationError> {
        if num_paths == 0 || num_paths > Self::MAX_PATHS {
            return Err(SimulationError::InvalidPathCount(num_paths));
        }
        if time_steps == 0 || time_steps > Self::MAX_STEPS {
            return Err(SimulationError::InvalidStepCount(time_steps));
        }
        Ok(Self {
            num_paths,
            time_steps,
            seed,
        })
    }

    /// Returns a copy pinned to the given seed.
    #[inline]
    pub fn with_seed(&self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..*self
        }
    }
}

impl Default for McConfig {
    /// 100 000 paths over 200 steps, entropy-seeded.
    fn default() -> Self {
        Self {
            num_paths: 100_000,
            time_steps: 200,
            seed: None,
        }
    }
}
