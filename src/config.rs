//! Analysis configuration

use sampling_core::{check_confidence_level, Error, Result};
use sampling_sweep::SizeSequence;
use serde::{Deserialize, Serialize};

/// Interactive ranges the dashboard exposes for each parameter
pub const CONFIDENCE_LEVEL_RANGE: (f64, f64) = (0.90, 0.99);
pub const MAX_SAMPLE_SIZE_RANGE: (usize, usize) = (10, 1000);
pub const MIN_SUBSET_SIZE: usize = 10;

/// Parameters of one analysis run
///
/// Every field has a default, so a partial JSON document such as
/// `{"seed": 7}` is a complete configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Interval coverage, in (0, 1)
    pub confidence_level: f64,
    /// Population size and upper bound of the sweep
    pub max_sample_size: usize,
    /// Size of the subset shown next to the full data histogram
    pub subset_size: usize,
    /// Population seed; the sweep and subset derive theirs from it
    pub seed: u64,
    /// Bins per histogram
    pub histogram_bins: usize,
    /// First sweep size and increment between sizes
    pub size_step: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            confidence_level: 0.95,
            max_sample_size: 500,
            subset_size: 50,
            seed: 42,
            histogram_bins: 30,
            size_step: 10,
        }
    }
}

impl AnalysisConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::InvalidParameter(format!("Invalid configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::Computation(format!("Failed to serialize configuration: {e}")))
    }

    /// Check every field against its domain
    pub fn validate(&self) -> Result<()> {
        check_confidence_level(self.confidence_level)?;

        if self.max_sample_size == 0 {
            return Err(Error::InvalidParameter(
                "max_sample_size must be positive".to_string(),
            ));
        }
        if self.subset_size == 0 {
            return Err(Error::InvalidParameter(
                "subset_size must be positive".to_string(),
            ));
        }
        if self.subset_size > self.max_sample_size {
            return Err(Error::size_exceeds_population(
                self.subset_size,
                self.max_sample_size,
            ));
        }
        if self.histogram_bins == 0 {
            return Err(Error::InvalidParameter(
                "histogram_bins must be positive".to_string(),
            ));
        }
        // A one-observation step has no interval
        if self.size_step < 2 {
            return Err(Error::InvalidParameter(format!(
                "size_step must be at least 2, got {}",
                self.size_step
            )));
        }
        Ok(())
    }

    /// Pull each field into the dashboard's interactive range
    pub fn clamped(&self) -> Self {
        let (level_lo, level_hi) = CONFIDENCE_LEVEL_RANGE;
        let (max_lo, max_hi) = MAX_SAMPLE_SIZE_RANGE;
        let max_sample_size = self.max_sample_size.clamp(max_lo, max_hi);

        Self {
            confidence_level: self.confidence_level.clamp(level_lo, level_hi),
            max_sample_size,
            subset_size: self.subset_size.clamp(MIN_SUBSET_SIZE, max_sample_size),
            ..*self
        }
    }

    /// Sizes visited by the sweep: `size_step, 2 * size_step, …` up to
    /// `max_sample_size`
    pub fn size_sequence(&self) -> Result<SizeSequence> {
        SizeSequence::arithmetic(self.size_step, self.size_step, self.max_sample_size)
    }

    pub fn population_seed(&self) -> u64 {
        self.seed
    }

    pub fn sweep_seed(&self) -> u64 {
        self.seed.wrapping_add(1)
    }

    pub fn subset_seed(&self) -> u64 {
        self.seed.wrapping_add(2)
    }
}
