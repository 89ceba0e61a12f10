//! Histogram invariants over random normal data

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use sampling_histogram::{fixed_histogram, HistogramComparison};

fn normal_data(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let dist = Normal::new(0.0, 1.0).unwrap();
    (0..n).map(|_| dist.sample(&mut rng)).collect()
}

#[test]
fn test_normal_data_peaks_near_center() {
    let data = normal_data(5000, 42);
    let hist = fixed_histogram(&data, 30).unwrap();

    let peak = hist
        .bins()
        .iter()
        .max_by_key(|bin| bin.count)
        .map(|bin| bin.center())
        .unwrap();
    assert!(peak.abs() < 1.0, "peak at {peak}");
}

#[test]
fn test_subset_of_population_fits_common_range() {
    let full = normal_data(500, 7);
    let subset: Vec<f64> = full.iter().copied().take(50).collect();
    let cmp = HistogramComparison::build_on_common_range(&full, &subset, 30).unwrap();

    assert_eq!(cmp.subset.total_count(), 50);
    assert_eq!(cmp.subset.counts().iter().sum::<usize>(), 50);
    let overlap = cmp.overlap().unwrap();
    assert!(overlap > 0.0 && overlap <= 1.0 + 1e-12);
}

proptest! {
    #[test]
    fn prop_counts_sum_to_sample_size(n in 1usize..400, bins in 1usize..60, seed in any::<u64>()) {
        let data = normal_data(n, seed);
        let hist = fixed_histogram(&data, bins).unwrap();

        prop_assert_eq!(hist.counts().iter().sum::<usize>(), n);
        prop_assert_eq!(hist.total_count(), n);
        prop_assert!(hist.len() == bins || hist.len() == 1);
    }

    #[test]
    fn prop_edges_are_monotonic(n in 2usize..400, bins in 1usize..60, seed in any::<u64>()) {
        let data = normal_data(n, seed);
        let hist = fixed_histogram(&data, bins).unwrap();
        let edges = hist.edges();

        prop_assert!(edges.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(edges.first().copied(), Some(hist.min()));
        prop_assert_eq!(edges.last().copied(), Some(hist.max()));
    }

    #[test]
    fn prop_every_value_has_a_bin(n in 1usize..200, bins in 1usize..40, seed in any::<u64>()) {
        let data = normal_data(n, seed);
        let hist = fixed_histogram(&data, bins).unwrap();
        for &x in &data {
            prop_assert!(hist.find_bin(x).is_some());
        }
    }
}
