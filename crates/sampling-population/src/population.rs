//! The immutable population shared by every analysis step

use sampling_core::{Error, Result};
use std::ops::Deref;

/// A fixed, non-empty sequence of observations
///
/// Read-only after construction; a different size means building a new
/// population.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    values: Vec<f64>,
    seed: Option<u64>,
}

impl Population {
    /// Wrap caller-supplied observations
    ///
    /// # Errors
    /// `InvalidParameter` if `values` is empty.
    pub fn from_values(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::InvalidParameter(
                "Population must contain at least one observation".to_string(),
            ));
        }
        Ok(Self { values, seed: None })
    }

    pub(crate) fn from_parts(values: Vec<f64>, seed: Option<u64>) -> Self {
        debug_assert!(!values.is_empty());
        Self { values, seed }
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; kept for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Seed the population was generated from, if it was generated
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.values.iter()
    }

    /// Consume the population and return its observations
    pub fn into_inner(self) -> Vec<f64> {
        self.values
    }
}

impl Deref for Population {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.values
    }
}

impl AsRef<[f64]> for Population {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
