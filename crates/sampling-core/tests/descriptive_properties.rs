//! Property tests for the descriptive statistics helpers

use approx::assert_relative_eq;
use proptest::prelude::*;
use sampling_core::utils::{mean, sorted, standard_error, std_dev, variance};

proptest! {
    #[test]
    fn prop_mean_is_bounded_by_extremes(data in prop::collection::vec(-1e6f64..1e6, 1..200)) {
        let m = mean(&data);
        let min = data.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(m >= min - 1e-6 && m <= max + 1e-6);
    }

    #[test]
    fn prop_variance_is_shift_invariant(
        data in prop::collection::vec(-100.0f64..100.0, 2..100),
        shift in -1e3f64..1e3,
    ) {
        let shifted: Vec<f64> = data.iter().map(|x| x + shift).collect();
        let v = variance(&data);
        let vs = variance(&shifted);
        prop_assert!((v - vs).abs() <= 1e-6 * v.max(1.0));
    }

    #[test]
    fn prop_standard_error_is_non_negative(data in prop::collection::vec(-1e3f64..1e3, 0..100)) {
        prop_assert!(standard_error(&data) >= 0.0);
    }

    #[test]
    fn prop_sorted_is_ordered_permutation(data in prop::collection::vec(-1e3f64..1e3, 0..100)) {
        let s = sorted(&data);
        prop_assert_eq!(s.len(), data.len());
        prop_assert!(s.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn test_standard_error_scales_with_sqrt_n() {
    // Repeating a pattern keeps the sd nearly constant while n grows
    let base = [1.0, 2.0, 3.0, 4.0];
    let small: Vec<f64> = base.iter().cycle().take(16).cloned().collect();
    let large: Vec<f64> = base.iter().cycle().take(64).cloned().collect();

    let ratio = standard_error(&small) / standard_error(&large);
    let sd_ratio = std_dev(&small) / std_dev(&large);
    assert_relative_eq!(ratio, 2.0 * sd_ratio, epsilon = 1e-12);
}
