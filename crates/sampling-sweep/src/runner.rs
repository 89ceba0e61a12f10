//! Sweep execution
//!
//! Each step draws a fresh subsample of its own size from the population
//! and estimates on it. Steps are independent: step `i` uses subsample
//! stream `i` of the runner's seed, so later subsamples are not supersets of
//! earlier ones and no step reads another step's output.

use crate::types::SweepResult;
use sampling_confidence::{ConfidenceInterval, ConfidenceIntervalEstimator, IntervalEstimator};
use sampling_core::{Error, Result};
use sampling_population::{check_subsample_size, Subsampler};
use tracing::{debug, instrument, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Runs an interval estimator across an increasing sequence of sample sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepRunner {
    sampler: Subsampler,
}

impl SweepRunner {
    /// Runner whose subsamples are derived from `seed`
    pub fn with_seed(seed: u64) -> Self {
        Self {
            sampler: Subsampler::new(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.sampler.seed()
    }

    /// Student-t sweep at `confidence_level`
    ///
    /// # Errors
    /// See [`sweep_with`](Self::sweep_with); additionally `InvalidParameter`
    /// if `confidence_level` is not in (0, 1).
    pub fn sweep(
        &self,
        population: &[f64],
        sizes: &[usize],
        confidence_level: f64,
    ) -> Result<SweepResult> {
        let estimator = IntervalEstimator::students_t(confidence_level)?;
        self.sweep_with(population, sizes, &estimator)
    }

    /// Sweep with any interval estimator
    ///
    /// Every size is validated before any estimate is computed; a failing
    /// sweep returns no partial result. Empty `sizes` gives an empty result.
    ///
    /// # Errors
    /// - `InvalidParameter` if a size is zero, exceeds the population, or
    ///   the sizes are not strictly increasing
    /// - `InsufficientData` if a size is below the estimator's minimum
    #[instrument(
        skip(self, population, sizes, estimator),
        fields(
            population_len = population.len(),
            steps = sizes.len(),
            level = estimator.confidence_level()
        )
    )]
    pub fn sweep_with<E>(
        &self,
        population: &[f64],
        sizes: &[usize],
        estimator: &E,
    ) -> Result<SweepResult>
    where
        E: ConfidenceIntervalEstimator + Sync,
    {
        validate_sizes(sizes, population.len(), estimator.min_sample_size())?;

        let intervals = self.run_steps(population, sizes, estimator)?;

        debug!(seed = self.seed(), "Sweep completed");
        Ok(SweepResult::from_intervals(
            sizes.to_vec(),
            &intervals,
            estimator.confidence_level(),
        ))
    }

    fn step<E>(
        &self,
        population: &[f64],
        index: usize,
        size: usize,
        estimator: &E,
    ) -> Result<ConfidenceInterval>
    where
        E: ConfidenceIntervalEstimator,
    {
        let subsample = self.sampler.draw(population, size, index as u64)?;
        let ci = estimator.confidence_interval(&subsample)?;
        trace!(
            index,
            size,
            mean = ci.estimate,
            lower = ci.lower,
            upper = ci.upper,
            "Sweep step"
        );
        Ok(ci)
    }

    #[cfg(not(feature = "parallel"))]
    fn run_steps<E>(
        &self,
        population: &[f64],
        sizes: &[usize],
        estimator: &E,
    ) -> Result<Vec<ConfidenceInterval>>
    where
        E: ConfidenceIntervalEstimator + Sync,
    {
        sizes
            .iter()
            .enumerate()
            .map(|(i, &size)| self.step(population, i, size, estimator))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn run_steps<E>(
        &self,
        population: &[f64],
        sizes: &[usize],
        estimator: &E,
    ) -> Result<Vec<ConfidenceInterval>>
    where
        E: ConfidenceIntervalEstimator + Sync,
    {
        sizes
            .par_iter()
            .enumerate()
            .map(|(i, &size)| self.step(population, i, size, estimator))
            .collect()
    }
}

/// Check a whole size list up front
///
/// Domain errors are reported before insufficient-data errors.
pub fn validate_sizes(sizes: &[usize], population_len: usize, min_size: usize) -> Result<()> {
    for (i, &size) in sizes.iter().enumerate() {
        check_subsample_size(size, population_len)?;
        if i > 0 && size <= sizes[i - 1] {
            return Err(Error::InvalidParameter(format!(
                "Sweep sizes must be strictly increasing: {} follows {}",
                size,
                sizes[i - 1]
            )));
        }
    }

    if let Some(&size) = sizes.iter().find(|&&size| size < min_size) {
        return Err(Error::insufficient(min_size, size));
    }
    Ok(())
}
