//! Monte Carlo outcome sampling.
//!
//! Draws normal samples around a projected final value via the
//! Box–Muller transform and buckets them into a fixed-width histogram
//! spanning +/-3 standard deviations. Samples landing outside that range
//! are discarded rather than clamped, so the tails are slightly
//! undercounted.

use std::f64::consts::PI;

use rand::Rng;

use crate::models::{MonteCarloBin, OutcomeDistribution};

pub const DEFAULT_ITERATIONS: u32 = 1000;
pub const DEFAULT_BINS: usize = 20;

/// Sample an outcome distribution using the supplied random source.
///
/// Standard deviation is `final_expected_value * volatility_fraction`.
/// A degenerate deviation (zero value or zero volatility) collapses every
/// draw onto the middle bin instead of dividing by a zero bin width.
pub fn sample_outcomes<R: Rng>(
    final_expected_value: f64,
    volatility_fraction: f64,
    iterations: u32,
    num_bins: usize,
    rng: &mut R,
) -> OutcomeDistribution {
    let std_deviation = final_expected_value * volatility_fraction;

    if iterations == 0 || num_bins == 0 {
        return OutcomeDistribution {
            final_expected_value,
            std_deviation,
            iterations,
            bins: Vec::new(),
        };
    }

    let range_min = final_expected_value - 3.0 * std_deviation;
    let bin_width = 6.0 * std_deviation / num_bins as f64;
    let mut counts = vec![0u32; num_bins];

    for _ in 0..iterations {
        // Uniform draws in (0, 1]; u1 must exclude 0 for ln()
        let u1: f64 = 1.0 - rng.gen::<f64>();
        let u2: f64 = 1.0 - rng.gen::<f64>();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
        let sample = final_expected_value + z * std_deviation;

        if bin_width > 0.0 {
            let offset = sample - range_min;
            if offset < 0.0 || offset > 6.0 * std_deviation {
                continue; // outside +/-3 sigma: discard
            }
            let index = ((offset / bin_width) as usize).min(num_bins - 1);
            counts[index] += 1;
        } else {
            counts[num_bins / 2] += 1;
        }
    }

    let bins = counts
        .into_iter()
        .enumerate()
        .map(|(i, occurrence_count)| MonteCarloBin {
            value_range_midpoint: range_min + (i as f64 + 0.5) * bin_width,
            occurrence_count,
            probability_percent: f64::from(occurrence_count) / f64::from(iterations) * 100.0,
        })
        .collect();

    OutcomeDistribution {
        final_expected_value,
        std_deviation,
        iterations,
        bins,
    }
}

/// Sample with the default iteration and bin counts and a thread-local
/// random source.
pub fn sample_outcomes_default(
    final_expected_value: f64,
    volatility_fraction: f64,
) -> OutcomeDistribution {
    sample_outcomes(
        final_expected_value,
        volatility_fraction,
        DEFAULT_ITERATIONS,
        DEFAULT_BINS,
        &mut rand::thread_rng(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_mass_conservation() {
        let mut rng = StdRng::seed_from_u64(7);
        let dist = sample_outcomes(12000.0, 0.05, 1000, 20, &mut rng);

        assert_eq!(dist.bins.len(), 20);
        let total_count: u32 = dist.bins.iter().map(|b| b.occurrence_count).sum();
        assert!(total_count <= 1000);
        // +/-3 sigma covers ~99.7% of a normal; nearly all draws must land
        assert!(total_count > 950);

        let total_probability: f64 = dist.bins.iter().map(|b| b.probability_percent).sum();
        assert!(total_probability <= 100.0 + 1e-9);
    }

    #[test]
    fn test_fixed_seed_is_reproducible() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let dist_a = sample_outcomes(50000.0, 0.08, 500, 20, &mut a);
        let dist_b = sample_outcomes(50000.0, 0.08, 500, 20, &mut b);

        for (bin_a, bin_b) in dist_a.bins.iter().zip(&dist_b.bins) {
            assert_eq!(bin_a.occurrence_count, bin_b.occurrence_count);
        }
    }

    #[test]
    fn test_bin_midpoints_span_three_sigma() {
        let mut rng = StdRng::seed_from_u64(1);
        let dist = sample_outcomes(10000.0, 0.10, 100, 20, &mut rng);

        let sigma = 1000.0;
        assert!((dist.std_deviation - sigma).abs() < 1e-9);
        let width = 6.0 * sigma / 20.0;
        assert!((dist.bins[0].value_range_midpoint - (10000.0 - 3.0 * sigma + 0.5 * width)).abs() < 1e-9);
        assert!(
            (dist.bins[19].value_range_midpoint - (10000.0 + 3.0 * sigma - 0.5 * width)).abs() < 1e-9
        );
    }

    #[test]
    fn test_mass_concentrates_around_center() {
        let mut rng = StdRng::seed_from_u64(99);
        let dist = sample_outcomes(10000.0, 0.05, 2000, 20, &mut rng);

        // Middle four bins (roughly +/-0.6 sigma) should outweigh the outer four
        let middle: u32 = dist.bins[8..12].iter().map(|b| b.occurrence_count).sum();
        let edges: u32 = dist.bins[..2]
            .iter()
            .chain(&dist.bins[18..])
            .map(|b| b.occurrence_count)
            .sum();
        assert!(middle > edges * 5);
    }

    #[test]
    fn test_degenerate_sigma_collapses_to_middle_bin() {
        let mut rng = StdRng::seed_from_u64(3);
        let dist = sample_outcomes(10000.0, 0.0, 100, 20, &mut rng);

        assert_eq!(dist.std_deviation, 0.0);
        assert_eq!(dist.bins[10].occurrence_count, 100);
        let elsewhere: u32 = dist
            .bins
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != 10)
            .map(|(_, b)| b.occurrence_count)
            .sum();
        assert_eq!(elsewhere, 0);
        for bin in &dist.bins {
            assert!(bin.value_range_midpoint.is_finite());
        }
    }

    #[test]
    fn test_zero_iterations_returns_empty() {
        let mut rng = StdRng::seed_from_u64(3);
        let dist = sample_outcomes(10000.0, 0.05, 0, 20, &mut rng);
        assert!(dist.bins.is_empty());
    }
}
