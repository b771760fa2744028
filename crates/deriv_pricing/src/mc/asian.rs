//! Asian option pricing by Monte Carlo.

use deriv_models::instruments::{AsianTerms, AverageKind, OptionKind};

use super::{PathBatch, SimulationError};

/// Fixing indices on the simulation grid.
///
/// `count` indices spread uniformly over `[0, time_steps)`, truncated to
/// integers; the first fixing is the initial spot.
pub fn observation_indices(time_steps: usize, count: usize) -> Vec<usize> {
    (0..count).map(|k| k * time_steps / count).collect()
}

/// Average of one path over the given fixing indices.
pub fn path_average(path: &[f64], indices: &[usize], average: AverageKind) -> f64 {
    let n = indices.len() as f64;
    match average {
        AverageKind::Arithmetic => indices.iter().map(|&idx| path[idx]).sum::<f64>() / n,
        AverageKind::Geometric => {
            (indices.iter().map(|&idx| path[idx].ln()).sum::<f64>() / n).exp()
        }
    }
}

/// Prices an Asian option against a simulated batch.
///
/// The payoff replaces the terminal price with the average of the
/// observed fixings; the fixing count follows the averaging frequency,
/// capped at the grid resolution.
///
/// # Errors
///
/// [`SimulationError::EmptyFixingSchedule`] when the maturity is short
/// enough that the averaging frequency rounds to zero fixings; averaging
/// an empty schedule has no meaningful value.
///
/// # Examples
/// ```
/// use deriv_models::instruments::{AsianTerms, AverageKind, AveragingFrequency, Maturity, OptionKind};
/// use deriv_models::market::MarketInputs;
/// use deriv_pricing::mc::{price_asian, McConfig, PathBatch};
///
/// let market = MarketInputs::new(100.0, 0.05, 0.2, 0.0).unwrap();
/// let config = McConfig::new(20_000, 200, Some(42)).unwrap();
/// let batch = PathBatch::generate(&market, Maturity::from_years(1.0).unwrap(), &config).unwrap();
/// let terms = AsianTerms {
///     average: AverageKind::Arithmetic,
///     frequency: AveragingFrequency::Monthly,
/// };
/// let price = price_asian(&batch, 100.0, OptionKind::Call, &terms).unwrap();
/// assert!(price > 0.0);
/// ```
pub fn price_asian(
    batch: &PathBatch,
    strike: f64,
    kind: OptionKind,
    terms: &AsianTerms,
) -> Result<f64, SimulationError> {
    let count = terms
        .frequency
        .observation_count(batch.maturity().years(), batch.time_steps());
    if count == 0 {
        return Err(SimulationError::EmptyFixingSchedule {
            maturity: batch.maturity().years(),
        });
    }
    let indices = observation_indices(batch.time_steps(), count);

    let sum: f64 = (0..batch.num_paths())
        .map(|i| {
            let average = path_average(batch.path(i), &indices, terms.average);
            kind.intrinsic(average, strike)
        })
        .sum();

    Ok(batch.discount() * sum / batch.num_paths() as f64)
}
