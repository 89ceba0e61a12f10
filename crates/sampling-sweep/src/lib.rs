//! Confidence interval sweeps over increasing sample sizes
//!
//! A sweep answers "what would the interval look like had we collected
//! exactly k fresh observations?" for each k in a size sequence. Every step
//! draws its own subsample without replacement; steps are never nested
//! prefixes of one another.
//!
//! # Example
//!
//! ```rust
//! use sampling_population::generate;
//! use sampling_sweep::{SizeSequence, SweepRunner};
//!
//! let population = generate(100, 42).unwrap();
//! let sizes = SizeSequence::up_to(population.len()).to_vec();
//!
//! let result = SweepRunner::with_seed(43)
//!     .sweep(&population, &sizes, 0.95)
//!     .unwrap();
//!
//! for point in result.points() {
//!     println!("{}", point);
//! }
//! ```
//!
//! # Features
//!
//! - `parallel`: run steps on the rayon pool. Output is identical to the
//!   sequential run because each step's randomness depends only on the seed
//!   and the step index.

mod runner;
mod sizes;
mod types;

pub use runner::{validate_sizes, SweepRunner};
pub use sizes::{SizeSequence, DEFAULT_START, DEFAULT_STEP};
pub use types::{SweepPoint, SweepResult};

pub use sampling_core::Result;
