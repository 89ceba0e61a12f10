//! Sample-size sweeps of confidence intervals for the mean
//!
//! This crate ties the workspace together: it generates a normal
//! population, estimates the mean's Student-t interval on independent
//! subsamples of increasing size, and bins a random subset against the full
//! data.
//!
//! # Quick Start
//!
//! ```rust
//! use sampling_stats::{Analysis, AnalysisConfig};
//!
//! let config = AnalysisConfig {
//!     max_sample_size: 200,
//!     ..Default::default()
//! };
//! let report = Analysis::new(config).unwrap().run().unwrap();
//!
//! for point in report.sweep.points() {
//!     println!("{}", point);
//! }
//! ```
//!
//! # Crate Organization
//!
//! - [`common`]: error type and descriptive statistics
//! - [`population`]: population generation and subsampling
//! - [`confidence`]: interval estimators
//! - [`sweep`]: sweeps over size sequences
//! - [`histogram`]: fixed-width histograms and comparisons
//!
//! Rendering lives in the separate `sampling-viz` crate.

pub mod analysis;
pub mod config;

pub use analysis::{Analysis, AnalysisReport, ReportSummary};
pub use config::AnalysisConfig;

// Re-export all sub-crates
pub use sampling_confidence as confidence;
pub use sampling_core as common;
pub use sampling_histogram as histogram;
pub use sampling_population as population;
pub use sampling_sweep as sweep;

pub use sampling_confidence::{estimate, ConfidenceInterval, IntervalEstimator};
pub use sampling_core::{Error, Result};
pub use sampling_population::{generate, Population, Subsampler};
pub use sampling_sweep::{SizeSequence, SweepResult, SweepRunner};
