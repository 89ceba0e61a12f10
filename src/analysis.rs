//! End-to-end analysis run
//!
//! Generates the population, sweeps interval estimates over the configured
//! size sequence and bins a random subset against the full data.

use crate::config::AnalysisConfig;
use sampling_core::utils::{mean, std_dev};
use sampling_core::Result;
use sampling_histogram::HistogramComparison;
use sampling_population::{generate, Population, Subsampler};
use sampling_sweep::{SweepResult, SweepRunner};
use serde::Serialize;
use tracing::{debug, instrument};

/// A validated analysis, ready to run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Analysis {
    config: AnalysisConfig,
}

impl Analysis {
    /// # Errors
    /// `InvalidParameter` if the configuration fails validation.
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Run every stage; the first failure aborts the run
    #[instrument(
        skip(self),
        fields(
            max_sample_size = self.config.max_sample_size,
            level = self.config.confidence_level,
            seed = self.config.seed
        )
    )]
    pub fn run(&self) -> Result<AnalysisReport> {
        let config = self.config;

        let population = generate(config.max_sample_size, config.population_seed())?;
        let sizes = config.size_sequence()?.to_vec();
        let sweep = SweepRunner::with_seed(config.sweep_seed()).sweep(
            &population,
            &sizes,
            config.confidence_level,
        )?;
        debug!(steps = sweep.len(), "Sweep stage finished");

        let subset =
            Subsampler::new(config.subset_seed()).draw(&population, config.subset_size, 0)?;
        let histograms = HistogramComparison::build(&population, &subset, config.histogram_bins)?;
        debug!(subset_size = subset.len(), "Histogram stage finished");

        Ok(AnalysisReport {
            config,
            population,
            sweep,
            subset,
            histograms,
        })
    }
}

/// Everything one run produces
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub config: AnalysisConfig,
    pub population: Population,
    pub sweep: SweepResult,
    pub subset: Vec<f64>,
    pub histograms: HistogramComparison,
}

impl AnalysisReport {
    pub fn summary(&self) -> ReportSummary {
        let widths = self.sweep.widths();
        ReportSummary {
            confidence_level: self.config.confidence_level,
            population_size: self.population.len(),
            population_mean: mean(&self.population),
            population_std_dev: std_dev(&self.population),
            steps: self.sweep.len(),
            first_width: widths.first().copied(),
            last_width: widths.last().copied(),
            subset_size: self.subset.len(),
            subset_mean: mean(&self.subset),
        }
    }
}

/// Headline numbers of a run, for logs and JSON output
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReportSummary {
    pub confidence_level: f64,
    pub population_size: usize,
    pub population_mean: f64,
    pub population_std_dev: f64,
    pub steps: usize,
    pub first_width: Option<f64>,
    pub last_width: Option<f64>,
    pub subset_size: usize,
    pub subset_mean: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use sampling_core::Error;

    fn small_config() -> AnalysisConfig {
        AnalysisConfig {
            max_sample_size: 100,
            subset_size: 20,
            histogram_bins: 10,
            ..Default::default()
        }
    }

    #[test]
    fn test_run_small() {
        let report = Analysis::new(small_config()).unwrap().run().unwrap();

        assert_eq!(report.population.len(), 100);
        assert_eq!(report.population.seed(), Some(42));
        assert_eq!(report.sweep.sizes(), &[10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
        assert_eq!(report.subset.len(), 20);
        assert_eq!(report.histograms.full.total_count(), 100);
        assert_eq!(report.histograms.subset_size(), 20);
        assert_eq!(report.histograms.full.len(), 10);
    }

    #[test]
    fn test_invalid_config_rejected_up_front() {
        let config = AnalysisConfig {
            subset_size: 1000,
            ..small_config()
        };
        assert!(matches!(
            Analysis::new(config),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_unit_step_rejected_up_front() {
        let config = AnalysisConfig {
            size_step: 1,
            ..small_config()
        };
        assert!(matches!(
            Analysis::new(config),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_smallest_valid_step_runs() {
        let config = AnalysisConfig {
            size_step: 2,
            max_sample_size: 20,
            subset_size: 10,
            ..small_config()
        };
        let report = Analysis::new(config).unwrap().run().unwrap();
        assert_eq!(report.sweep.sizes().first(), Some(&2));
        assert_eq!(report.sweep.len(), 10);
    }

    #[test]
    fn test_summary() {
        let report = Analysis::new(small_config()).unwrap().run().unwrap();
        let summary = report.summary();

        assert_eq!(summary.population_size, 100);
        assert_eq!(summary.steps, 10);
        assert_eq!(summary.subset_size, 20);
        assert!(summary.first_width.unwrap() > summary.last_width.unwrap());
    }
}
