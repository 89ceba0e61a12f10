//! Population generation and subsampling
//!
//! This crate produces the fixed population an analysis run works on and
//! draws subsamples from it without replacement:
//!
//! - **[`SampleGenerator`]**: N(μ, σ²) draws, reproducible from a seed
//! - **[`Population`]**: immutable, non-empty observations
//! - **[`Subsampler`]**: independent without-replacement draws per stream
//!
//! # Example
//!
//! ```rust
//! use sampling_population::{generate, Subsampler};
//!
//! let population = generate(500, 42).unwrap();
//! let subset = Subsampler::new(7).draw(&population, 50, 0).unwrap();
//!
//! assert_eq!(population.len(), 500);
//! assert_eq!(subset.len(), 50);
//! ```

mod generator;
mod population;
mod subsample;

pub use generator::{generate, SampleGenerator};
pub use population::Population;
pub use subsample::{check_subsample_size, Subsampler};

pub use sampling_core::Result;
