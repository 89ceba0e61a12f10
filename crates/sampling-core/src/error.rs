//! Error types for sampling analysis
//!
//! Provides a unified error type for all sampling-stats crates.

use thiserror::Error;

/// Core error type for sampling operations
#[derive(Error, Debug)]
pub enum Error {
    /// A size, level or configuration value outside its valid domain
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Failure inside a plotting backend
    #[error("Rendering error: {0}")]
    Rendering(String),

    /// IO error (for writing rendered output)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a confidence level outside (0, 1)
    pub fn invalid_confidence_level(level: f64) -> Self {
        Self::InvalidParameter(format!("Confidence level {level} must be in (0, 1)"))
    }

    /// Create an error for a subsample larger than its population
    pub fn size_exceeds_population(size: usize, population: usize) -> Self {
        Self::InvalidParameter(format!(
            "Sample size {size} exceeds population size {population}"
        ))
    }

    /// Create an error for a sample too small to estimate from
    pub fn insufficient(expected: usize, actual: usize) -> Self {
        Self::InsufficientData { expected, actual }
    }
}

/// Check that `level` lies strictly inside (0, 1)
///
/// NaN is rejected.
pub fn check_confidence_level(level: f64) -> Result<()> {
    if level > 0.0 && level < 1.0 {
        Ok(())
    } else {
        Err(Error::invalid_confidence_level(level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidParameter("size must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: size must be positive");

        let err = Error::InsufficientData { expected: 2, actual: 1 };
        assert_eq!(
            err.to_string(),
            "Insufficient data: expected at least 2 samples, got 1"
        );

        let err = Error::Computation("bad degrees of freedom".to_string());
        assert_eq!(err.to_string(), "Computation error: bad degrees of freedom");

        let err = Error::Rendering("backend closed".to_string());
        assert_eq!(err.to_string(), "Rendering error: backend closed");
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::invalid_confidence_level(1.5);
        assert_eq!(
            err.to_string(),
            "Invalid parameter: Confidence level 1.5 must be in (0, 1)"
        );

        let err = Error::size_exceeds_population(50, 30);
        assert_eq!(
            err.to_string(),
            "Invalid parameter: Sample size 50 exceeds population size 30"
        );

        match Error::insufficient(2, 0) {
            Error::InsufficientData { expected, actual } => {
                assert_eq!(expected, 2);
                assert_eq!(actual, 0);
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_check_confidence_level() {
        assert!(check_confidence_level(0.95).is_ok());
        assert!(check_confidence_level(1e-9).is_ok());
        assert!(check_confidence_level(0.0).is_err());
        assert!(check_confidence_level(1.0).is_err());
        assert!(check_confidence_level(-0.5).is_err());
        assert!(check_confidence_level(f64::NAN).is_err());
    }

    #[test]
    fn test_error_from_io_error() {
        use std::io;

        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "read-only");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => assert!(err.to_string().contains("read-only")),
            _ => panic!("Wrong error type"),
        }
    }
}
