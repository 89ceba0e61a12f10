//! Fixed-width histograms for comparing a population with a subset of it
//!
//! # Examples
//!
//! ```rust
//! use sampling_histogram::{FixedWidthBuilder, HistogramBuilder};
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! let histogram = FixedWidthBuilder::new(5).unwrap().build(&data).unwrap();
//!
//! assert_eq!(histogram.counts(), vec![2, 2, 2, 2, 2]);
//! for bin in histogram.bins() {
//!     println!("  [{:.1}, {:.1}): count={}, density={:.3}",
//!              bin.left, bin.right, bin.count, bin.density);
//! }
//! ```
//!
//! ```rust
//! use sampling_histogram::HistogramComparison;
//!
//! let full: Vec<f64> = (0..100).map(|i| i as f64).collect();
//! let subset: Vec<f64> = full.iter().copied().step_by(5).collect();
//!
//! let comparison = HistogramComparison::build(&full, &subset, 30).unwrap();
//! assert_eq!(comparison.subset_size(), 20);
//! ```

pub mod builders;
pub mod comparison;
pub mod traits;
pub mod types;

pub use builders::FixedWidthBuilder;
pub use comparison::HistogramComparison;
pub use traits::HistogramBuilder;
pub use types::{Histogram, HistogramBin};

/// Create a histogram with a fixed number of equal-width bins
pub fn fixed_histogram(data: &[f64], num_bins: usize) -> Result<Histogram> {
    FixedWidthBuilder::new(num_bins)?.build(data)
}

pub use sampling_core::Result;
