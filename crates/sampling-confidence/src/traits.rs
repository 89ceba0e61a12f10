//! Core trait for confidence interval estimation
//!
//! Sample-size sweeps are generic over this trait, so any interval
//! construction with a fixed confidence level can be swept.

use crate::types::ConfidenceInterval;
use sampling_core::Result;

/// Confidence interval estimator with a fixed confidence level
pub trait ConfidenceIntervalEstimator {
    /// Calculate confidence interval for the given sample
    fn confidence_interval(&self, sample: &[f64]) -> Result<ConfidenceInterval>;

    /// Get the confidence level
    fn confidence_level(&self) -> f64;

    /// Smallest sample the estimator accepts
    fn min_sample_size(&self) -> usize {
        2
    }
}

impl<E: ConfidenceIntervalEstimator + ?Sized> ConfidenceIntervalEstimator for &E {
    fn confidence_interval(&self, sample: &[f64]) -> Result<ConfidenceInterval> {
        (**self).confidence_interval(sample)
    }

    fn confidence_level(&self) -> f64 {
        (**self).confidence_level()
    }

    fn min_sample_size(&self) -> usize {
        (**self).min_sample_size()
    }
}
