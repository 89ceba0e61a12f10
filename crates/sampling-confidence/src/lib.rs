//! Confidence interval estimation for the sample mean
//!
//! This crate constructs two-sided intervals `mean ± critical × SE` where
//! the standard error uses the Bessel-corrected sample standard deviation:
//!
//! - **Student-t intervals**: critical value from t with n - 1 degrees of freedom
//! - **Normal intervals**: large-sample approximation with the z quantile
//!
//! # Examples
//!
//! ```rust
//! use sampling_confidence::{estimate, IntervalEstimator, ConfidenceIntervalEstimator};
//!
//! let sample = vec![4.8, 5.1, 5.0, 4.9, 5.3, 5.2];
//!
//! // One-off estimate
//! let ci = estimate(&sample, 0.95).unwrap();
//! println!("95% CI for mean: [{:.2}, {:.2}]", ci.lower, ci.upper);
//!
//! // Reusable estimator with the level fixed up front
//! let estimator = IntervalEstimator::students_t(0.99).unwrap();
//! let wider = estimator.confidence_interval(&sample).unwrap();
//! assert!(wider.width() > ci.width());
//! ```

mod interval;
mod traits;
mod types;

// Re-exports
pub use interval::{estimate, CriticalDistribution, IntervalEstimator};
pub use traits::ConfidenceIntervalEstimator;
pub use types::{ConfidenceInterval, ConfidenceLevel};

pub use sampling_core::Result;
