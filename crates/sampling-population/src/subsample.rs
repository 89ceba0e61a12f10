//! Without-replacement subsampling
//!
//! A [`Subsampler`] turns `(seed, stream)` into an independent ChaCha
//! stream, so any number of draws can be taken from one seed without them
//! sharing random state or depending on call order.

use rand::seq::index;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sampling_core::{Error, Result};
use tracing::trace;

/// Reproducible source of without-replacement subsamples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subsampler {
    seed: u64,
}

impl Subsampler {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Random source for one draw
    fn rng(&self, stream: u64) -> ChaCha8Rng {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        rng.set_stream(stream);
        rng
    }

    /// Draw `size` distinct observations from `population`
    ///
    /// Each `stream` yields an independent subsample; repeating the same
    /// `(seed, stream, size)` repeats the draw exactly.
    ///
    /// # Errors
    /// `InvalidParameter` if `size` is zero or exceeds `population.len()`.
    pub fn draw(&self, population: &[f64], size: usize, stream: u64) -> Result<Vec<f64>> {
        check_subsample_size(size, population.len())?;

        let mut rng = self.rng(stream);
        let indices = index::sample(&mut rng, population.len(), size);
        trace!(size, stream, "Drew subsample");

        Ok(indices.iter().map(|i| population[i]).collect())
    }
}

/// Check that a subsample of `size` can be drawn from `population_len` values
pub fn check_subsample_size(size: usize, population_len: usize) -> Result<()> {
    if size == 0 {
        return Err(Error::InvalidParameter(
            "Subsample size must be at least 1".to_string(),
        ));
    }
    if size > population_len {
        return Err(Error::size_exceeds_population(size, population_len));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indexed(n: usize) -> Vec<f64> {
        (0..n).map(|i| i as f64).collect()
    }

    #[test]
    fn test_draw_is_without_replacement() {
        let population = indexed(100);
        let sample = Subsampler::new(42).draw(&population, 60, 0).unwrap();

        let mut seen: Vec<usize> = sample.iter().map(|&x| x as usize).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 60);
    }

    #[test]
    fn test_full_draw_is_permutation() {
        let population = indexed(30);
        let mut sample = Subsampler::new(1).draw(&population, 30, 5).unwrap();
        sample.sort_by(|a, b| a.total_cmp(b));
        assert_eq!(sample, population);
    }

    #[test]
    fn test_same_stream_repeats() {
        let population = indexed(1000);
        let sampler = Subsampler::new(9);
        assert_eq!(
            sampler.draw(&population, 50, 3).unwrap(),
            sampler.draw(&population, 50, 3).unwrap()
        );
    }

    #[test]
    fn test_streams_are_independent() {
        let population = indexed(1000);
        let sampler = Subsampler::new(9);
        assert_ne!(
            sampler.draw(&population, 50, 0).unwrap(),
            sampler.draw(&population, 50, 1).unwrap()
        );
    }

    #[test]
    fn test_size_bounds() {
        let population = indexed(10);
        let sampler = Subsampler::new(0);
        assert!(matches!(
            sampler.draw(&population, 0, 0),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            sampler.draw(&population, 11, 0),
            Err(Error::InvalidParameter(_))
        ));
        assert_eq!(sampler.draw(&population, 1, 0).unwrap().len(), 1);
    }
}
