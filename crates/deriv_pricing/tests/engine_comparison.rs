//! Cross-engine comparison tests.
//!
//! The lattice and Monte Carlo engines price overlapping contract
//! families; where a closed-form reference exists, both must converge to
//! it, and where the engines overlap they must agree with each other.

use approx::assert_relative_eq;
use deriv_models::analytical::BlackScholes;
use deriv_models::instruments::{
    AsianTerms, AverageKind, AveragingFrequency, BarrierDirection, BarrierTerms, ExerciseStyle,
    KnockType, Maturity, OptionKind,
};
use deriv_models::market::MarketInputs;
use deriv_pricing::lattice;
use deriv_pricing::mc::{self, McConfig, PathBatch};

fn standard_market() -> MarketInputs {
    MarketInputs::new(100.0, 0.05, 0.2, 0.0).unwrap()
}

fn one_year() -> Maturity {
    Maturity::from_years(1.0).unwrap()
}

#[test]
fn test_lattice_converges_to_black_scholes() {
    let market = standard_market();
    let reference = BlackScholes::new(market);

    for (strike, kind) in [
        (90.0, OptionKind::Call),
        (100.0, OptionKind::Call),
        (110.0, OptionKind::Call),
        (100.0, OptionKind::Put),
    ] {
        let analytical = reference.price(strike, one_year(), kind);
        let lattice_price = lattice::price_vanilla(
            &market,
            strike,
            one_year(),
            kind,
            ExerciseStyle::European,
            2000,
        )
        .unwrap();
        assert_relative_eq!(lattice_price, analytical, epsilon = 1e-2);
    }
}

#[test]
fn test_mc_terminal_payoff_converges_to_black_scholes() {
    let market = standard_market();
    let analytical = BlackScholes::new(market).price(100.0, one_year(), OptionKind::Call);

    let config = McConfig::new(200_000, 50, Some(42)).unwrap();
    let batch = PathBatch::generate(&market, one_year(), &config).unwrap();
    let mc_price: f64 = batch.discount()
        * (0..batch.num_paths())
            .map(|i| OptionKind::Call.intrinsic(batch.terminal(i), 100.0))
            .sum::<f64>()
        / batch.num_paths() as f64;

    // ~200k paths leave roughly 0.03 standard error on this payoff.
    assert_relative_eq!(mc_price, analytical, max_relative = 0.02);
}

#[test]
fn test_mc_and_lattice_agree_on_knock_out_barrier() {
    let market = standard_market();
    let barrier = BarrierTerms::new(BarrierDirection::Up, KnockType::Out, 140.0);

    let lattice_price = lattice::price_barrier(
        &market,
        100.0,
        one_year(),
        OptionKind::Call,
        &barrier,
        2000,
    )
    .unwrap();

    let config = McConfig::new(200_000, 500, Some(42)).unwrap();
    let batch = PathBatch::generate(&market, one_year(), &config).unwrap();
    let mc_price = mc::price_barrier(&batch, 100.0, OptionKind::Call, &barrier);

    // Discrete monitoring biases both engines the same direction; they
    // agree far better with each other than with continuous formulas.
    assert_relative_eq!(mc_price, lattice_price, max_relative = 0.05);
}

#[test]
fn test_in_out_parity_recovers_vanilla() {
    let market = standard_market();
    let config = McConfig::new(100_000, 200, Some(42)).unwrap();
    let batch = PathBatch::generate(&market, one_year(), &config).unwrap();

    let ki = BarrierTerms::new(BarrierDirection::Down, KnockType::In, 80.0);
    let ko = BarrierTerms::new(BarrierDirection::Down, KnockType::Out, 80.0);

    let vanilla: f64 = batch.discount()
        * (0..batch.num_paths())
            .map(|i| OptionKind::Put.intrinsic(batch.terminal(i), 100.0))
            .sum::<f64>()
        / batch.num_paths() as f64;

    let sum = mc::price_barrier(&batch, 100.0, OptionKind::Put, &ki)
        + mc::price_barrier(&batch, 100.0, OptionKind::Put, &ko);
    assert_relative_eq!(sum, vanilla, epsilon = 1e-10);
}

#[test]
fn test_asian_price_between_zero_and_vanilla() {
    let market = standard_market();
    let config = McConfig::new(100_000, 200, Some(42)).unwrap();
    let batch = PathBatch::generate(&market, one_year(), &config).unwrap();
    let terms = AsianTerms {
        average: AverageKind::Arithmetic,
        frequency: AveragingFrequency::Monthly,
    };

    let asian = mc::price_asian(&batch, 100.0, OptionKind::Call, &terms).unwrap();
    let vanilla = BlackScholes::new(market).price(100.0, one_year(), OptionKind::Call);
    assert!(asian > 0.0);
    assert!(asian < vanilla);
}

#[test]
fn test_seeded_runs_are_bitwise_identical() {
    let market = standard_market();
    let terms = AsianTerms {
        average: AverageKind::Geometric,
        frequency: AveragingFrequency::Weekly,
    };

    let price = |seed: u64| {
        let config = McConfig::new(20_000, 100, Some(seed)).unwrap();
        let batch = PathBatch::generate(&market, one_year(), &config).unwrap();
        mc::price_asian(&batch, 100.0, OptionKind::Call, &terms).unwrap()
    };

    assert_eq!(price(7), price(7));
    assert_ne!(price(7), price(8));
}
