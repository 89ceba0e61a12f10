//! Core error type and descriptive statistics for sampling analysis
//!
//! Every sampling-stats crate reports failures through [`Error`] and uses the
//! helpers in [`utils`] for means, Bessel-corrected variances and standard
//! errors.
//!
//! # Example
//!
//! ```rust
//! use sampling_core::utils::{mean, standard_error};
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let m = mean(&data);
//! let se = standard_error(&data);
//!
//! println!("Mean: {}, SE: {}", m, se);
//! ```

pub mod error;
pub mod utils;

// Re-export core types
pub use error::{check_confidence_level, Error, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::utils::{mean, standard_error, std_dev, variance};
}
