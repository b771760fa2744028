//! Bisection root-finding solver.

use super::SolverConfig;

/// Bisection root finder for monotonically increasing functions.
///
/// Serves as the robust fallback when Newton-Raphson cannot be trusted
/// (near-zero derivative, exhausted budget). Each step halves the interval
/// based on the sign of `f(mid)`; when the iteration budget runs out the
/// final midpoint is returned as a best-effort estimate rather than an
/// error.
///
/// # Example
///
/// ```
/// use deriv_core::math::solvers::{BisectionSolver, SolverConfig};
///
/// let solver = BisectionSolver::new(SolverConfig::new(1e-10, 200));
/// let root = solver.find_root(|x| x * x - 2.0, 0.0, 5.0);
/// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-8);
/// ```
#[derive(Debug, Clone)]
pub struct BisectionSolver {
    config: SolverConfig,
}

impl BisectionSolver {
    /// Create a solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Find a root of the increasing function `f` on `[lo, hi]`.
    ///
    /// Converges when `|f(mid)| < tolerance`; otherwise halves towards the
    /// side where the sign change must lie. Always returns a value: the
    /// final interval midpoint stands in when convergence was not reached
    /// within the budget.
    pub fn find_root<F>(&self, f: F, mut lo: f64, mut hi: f64) -> f64
    where
        F: Fn(f64) -> f64,
    {
        debug_assert!(lo < hi, "bisection interval must be ordered");

        for _ in 0..self.config.max_iterations {
            let mid = 0.5 * (lo + hi);
            let f_mid = f(mid);

            if f_mid.abs() < self.config.tolerance {
                return mid;
            }

            if f_mid < 0.0 {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        0.5 * (lo + hi)
    }

    /// Returns the solver configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_sqrt_2() {
        let solver = BisectionSolver::new(SolverConfig::new(1e-12, 200));
        let root = solver.find_root(|x| x * x - 2.0, 0.0, 5.0);
        assert!((root - std::f64::consts::SQRT_2).abs() < 1e-8);
    }

    #[test]
    fn test_linear_root() {
        let solver = BisectionSolver::new(SolverConfig::new(1e-12, 200));
        let root = solver.find_root(|x| 3.0 * x - 1.5, -10.0, 10.0);
        assert!((root - 0.5).abs() < 1e-8);
    }

    #[test]
    fn test_budget_exhaustion_returns_midpoint() {
        // Two iterations cannot converge; the result must still be a finite
        // point inside the original interval.
        let solver = BisectionSolver::new(SolverConfig::new(1e-15, 2));
        let root = solver.find_root(|x| x - std::f64::consts::E, 0.0, 10.0);
        assert!(root.is_finite());
        assert!((0.0..=10.0).contains(&root));
    }
}
