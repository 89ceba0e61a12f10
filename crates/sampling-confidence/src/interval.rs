//! Confidence intervals for the mean based on theoretical distributions

use crate::{ConfidenceInterval, ConfidenceIntervalEstimator, ConfidenceLevel};
use sampling_core::utils::{mean, standard_error};
use sampling_core::{Error, Result};
use statrs::distribution::{ContinuousCDF, Normal, StudentsT};

/// Distribution the critical value is taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriticalDistribution {
    /// Student-t with n - 1 degrees of freedom
    StudentsT,
    /// Standard normal, ignoring the sample size
    Normal,
}

/// Interval estimator for the population mean
///
/// Computes `mean ± critical × SE` where SE is the Bessel-corrected sample
/// standard deviation divided by √n. With [`CriticalDistribution::StudentsT`]
/// the critical value is the `1 - α/2` quantile of Student-t with n - 1
/// degrees of freedom, so the central `confidence_level` mass lies inside
/// `[-t, +t]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalEstimator {
    /// Confidence level
    level: ConfidenceLevel,
    distribution: CriticalDistribution,
}

impl IntervalEstimator {
    /// Create a Student-t interval estimator
    ///
    /// # Errors
    /// `InvalidParameter` if `confidence_level` is not in (0, 1)
    pub fn students_t(confidence_level: f64) -> Result<Self> {
        Ok(Self {
            level: ConfidenceLevel::new(confidence_level)?,
            distribution: CriticalDistribution::StudentsT,
        })
    }

    /// Create a normal-approximation interval estimator
    ///
    /// # Errors
    /// `InvalidParameter` if `confidence_level` is not in (0, 1)
    pub fn normal(confidence_level: f64) -> Result<Self> {
        Ok(Self {
            level: ConfidenceLevel::new(confidence_level)?,
            distribution: CriticalDistribution::Normal,
        })
    }

    /// Build from an already validated level
    pub fn with_level(level: ConfidenceLevel, distribution: CriticalDistribution) -> Self {
        Self {
            level,
            distribution,
        }
    }

    pub fn level(&self) -> ConfidenceLevel {
        self.level
    }

    pub fn distribution(&self) -> CriticalDistribution {
        self.distribution
    }

    /// Critical value for a sample of `n` observations
    ///
    /// # Errors
    /// `InsufficientData` if `n < 2` for the t-distribution.
    pub fn critical_value(&self, n: usize) -> Result<f64> {
        let p = 1.0 - self.level.tail_probability();
        match self.distribution {
            CriticalDistribution::StudentsT => {
                if n < 2 {
                    return Err(Error::insufficient(2, n));
                }
                let df = (n - 1) as f64;
                let t_dist = StudentsT::new(0.0, 1.0, df).map_err(|e| {
                    Error::Computation(format!("Failed to create t-distribution: {}", e))
                })?;
                Ok(t_dist.inverse_cdf(p))
            }
            CriticalDistribution::Normal => {
                let normal = Normal::new(0.0, 1.0).map_err(|e| {
                    Error::Computation(format!("Failed to create normal distribution: {}", e))
                })?;
                Ok(normal.inverse_cdf(p))
            }
        }
    }

    /// Point estimate and interval for the mean of `data`
    ///
    /// Zero-variance data yields a zero-width interval.
    ///
    /// # Errors
    /// `InsufficientData` if `data` has fewer than two observations.
    pub fn estimate(&self, data: &[f64]) -> Result<ConfidenceInterval> {
        if data.len() < 2 {
            return Err(Error::insufficient(2, data.len()));
        }

        let estimate = mean(data);
        let std_error = standard_error(data);
        let critical_value = self.critical_value(data.len())?;

        // An infinite quantile times a zero standard error is NaN
        let margin = if std_error == 0.0 {
            0.0
        } else {
            critical_value * std_error
        };
        Ok(ConfidenceInterval::new(
            estimate - margin,
            estimate + margin,
            estimate,
            self.level.value(),
        ))
    }
}

impl ConfidenceIntervalEstimator for IntervalEstimator {
    fn confidence_interval(&self, sample: &[f64]) -> Result<ConfidenceInterval> {
        self.estimate(sample)
    }

    fn confidence_level(&self) -> f64 {
        self.level.value()
    }
}

/// Student-t interval for the mean of `data` at `confidence_level`
///
/// The level is validated before the data.
///
/// # Errors
/// `InvalidParameter` for a level outside (0, 1), `InsufficientData` for
/// fewer than two observations.
pub fn estimate(data: &[f64], confidence_level: f64) -> Result<ConfidenceInterval> {
    IntervalEstimator::students_t(confidence_level)?.estimate(data)
}
