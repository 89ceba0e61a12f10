//! Seeded population generation

use crate::population::Population;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use sampling_core::{Error, Result};
use tracing::debug;

/// Draws reproducible populations from a normal distribution
///
/// The random source is created inside [`generate`](Self::generate) from the
/// seed argument alone, so the output never depends on what else the process
/// has sampled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleGenerator {
    mean: f64,
    std_dev: f64,
}

impl SampleGenerator {
    /// Generator for N(mean, std_dev²)
    pub fn new(mean: f64, std_dev: f64) -> Result<Self> {
        if !mean.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "Distribution mean {mean} must be finite"
            )));
        }
        if !(std_dev.is_finite() && std_dev > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "Distribution standard deviation {std_dev} must be finite and positive"
            )));
        }
        Ok(Self { mean, std_dev })
    }

    /// Generator for the standard normal N(0, 1)
    pub fn standard_normal() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
        }
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Generate `size` independent draws using `seed`
    ///
    /// Identical `(size, seed)` pairs always produce bit-identical
    /// populations.
    ///
    /// # Errors
    /// `InvalidParameter` if `size` is zero.
    pub fn generate(&self, size: usize, seed: u64) -> Result<Population> {
        if size == 0 {
            return Err(Error::InvalidParameter(
                "Population size must be at least 1".to_string(),
            ));
        }

        let normal = Normal::new(self.mean, self.std_dev).map_err(|e| {
            Error::Computation(format!("Failed to create normal distribution: {e}"))
        })?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let values: Vec<f64> = normal.sample_iter(&mut rng).take(size).collect();

        debug!(size, seed, mean = self.mean, std_dev = self.std_dev, "Generated population");
        Ok(Population::from_parts(values, Some(seed)))
    }
}

impl Default for SampleGenerator {
    fn default() -> Self {
        Self::standard_normal()
    }
}

/// Generate a standard normal population of `size` draws
pub fn generate(size: usize, seed: u64) -> Result<Population> {
    SampleGenerator::standard_normal().generate(size, seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_is_bit_identical() {
        let a = generate(500, 42).unwrap();
        let b = generate(500, 42).unwrap();
        let bits_a: Vec<u64> = a.iter().map(|x| x.to_bits()).collect();
        let bits_b: Vec<u64> = b.iter().map(|x| x.to_bits()).collect();
        assert_eq!(bits_a, bits_b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = generate(100, 1).unwrap();
        let b = generate(100, 2).unwrap();
        assert_ne!(a.as_slice(), b.as_slice());
    }

    #[test]
    fn test_exact_size_and_seed_recorded() {
        let population = generate(37, 7).unwrap();
        assert_eq!(population.len(), 37);
        assert_eq!(population.seed(), Some(7));
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(generate(0, 42), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn test_invalid_distribution_parameters() {
        assert!(SampleGenerator::new(0.0, 0.0).is_err());
        assert!(SampleGenerator::new(0.0, -1.0).is_err());
        assert!(SampleGenerator::new(f64::NAN, 1.0).is_err());
        assert!(SampleGenerator::new(0.0, f64::INFINITY).is_err());
        assert!(SampleGenerator::new(10.0, 2.0).is_ok());
    }

    #[test]
    fn test_standard_normal_moments() {
        let population = generate(20_000, 42).unwrap();
        let mean = sampling_core::utils::mean(population.as_slice());
        let sd = sampling_core::utils::std_dev(population.as_slice());
        assert!(mean.abs() < 0.05, "mean {mean} too far from 0");
        assert!((sd - 1.0).abs() < 0.05, "sd {sd} too far from 1");
    }

    #[test]
    fn test_shifted_normal_moments() {
        let generator = SampleGenerator::new(100.0, 15.0).unwrap();
        let population = generator.generate(20_000, 3).unwrap();
        let mean = sampling_core::utils::mean(population.as_slice());
        let sd = sampling_core::utils::std_dev(population.as_slice());
        assert!((mean - 100.0).abs() < 1.0);
        assert!((sd - 15.0).abs() < 1.0);
    }
}
