//! Newton-Raphson root-finding solver.

use super::SolverConfig;
use crate::types::SolverError;

/// Newton-Raphson root finder.
///
/// Uses Newton's iteration `x_{n+1} = x_n - f(x_n) / f'(x_n)` for quadratic
/// convergence on smooth functions. The caller supplies the derivative; the
/// implied-volatility solver passes closed-form Vega here.
///
/// # Example
///
/// ```
/// use deriv_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
///
/// // Solve x² - 2 = 0 (find √2)
/// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
/// let root = solver
///     .find_root(|x| x * x - 2.0, |x| 2.0 * x, 1.0, None)
///     .unwrap();
/// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonRaphsonSolver {
    config: SolverConfig,
}

impl NewtonRaphsonSolver {
    /// Create a solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Find a root of `f` using the explicit derivative `f_prime`.
    ///
    /// When `bounds` is supplied, the iterate is clamped back into the
    /// interval after every step; volatility searches use this to keep the
    /// iterate inside its admissible range.
    ///
    /// # Errors
    ///
    /// - [`SolverError::DerivativeNearZero`] when `|f'(x)|` underflows below
    ///   the configured tolerance
    /// - [`SolverError::MaxIterationsExceeded`] when the budget runs out
    /// - [`SolverError::NumericalInstability`] when an iterate goes
    ///   non-finite
    pub fn find_root<F, G>(
        &self,
        f: F,
        f_prime: G,
        x0: f64,
        bounds: Option<(f64, f64)>,
    ) -> Result<f64, SolverError>
    where
        F: Fn(f64) -> f64,
        G: Fn(f64) -> f64,
    {
        let mut x = x0;

        for _ in 0..self.config.max_iterations {
            let f_val = f(x);

            if f_val.abs() < self.config.tolerance {
                return Ok(x);
            }

            let f_prime_val = f_prime(x);
            if f_prime_val.abs() < self.config.tolerance {
                return Err(SolverError::DerivativeNearZero { x });
            }

            x -= f_val / f_prime_val;

            if let Some((lo, hi)) = bounds {
                x = x.clamp(lo, hi);
            }

            if !x.is_finite() {
                return Err(SolverError::NumericalInstability(
                    "Newton iteration produced non-finite value".to_string(),
                ));
            }
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }

    /// Returns the solver configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }
}
