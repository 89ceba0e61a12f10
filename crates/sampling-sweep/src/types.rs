//! Sweep output types

use sampling_confidence::ConfidenceInterval;
use serde::Serialize;
use std::fmt;

/// One step of a sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint {
    pub size: usize,
    pub mean: f64,
    pub lower: f64,
    pub upper: f64,
}

impl SweepPoint {
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

impl fmt::Display for SweepPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={}: mean={:.4} [{:.4}, {:.4}]",
            self.size, self.mean, self.lower, self.upper
        )
    }
}

/// Parallel series produced by a sweep
///
/// All four sequences have the same length and are indexed in lockstep;
/// `sizes` is strictly increasing and `lower[i] <= means[i] <= upper[i]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepResult {
    sizes: Vec<usize>,
    means: Vec<f64>,
    lower: Vec<f64>,
    upper: Vec<f64>,
    confidence_level: f64,
}

impl SweepResult {
    /// A sweep with no steps
    pub fn empty(confidence_level: f64) -> Self {
        Self {
            sizes: Vec::new(),
            means: Vec::new(),
            lower: Vec::new(),
            upper: Vec::new(),
            confidence_level,
        }
    }

    pub(crate) fn from_intervals(
        sizes: Vec<usize>,
        intervals: &[ConfidenceInterval],
        confidence_level: f64,
    ) -> Self {
        debug_assert_eq!(sizes.len(), intervals.len());
        Self {
            sizes,
            means: intervals.iter().map(|ci| ci.estimate).collect(),
            lower: intervals.iter().map(|ci| ci.lower).collect(),
            upper: intervals.iter().map(|ci| ci.upper).collect(),
            confidence_level,
        }
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn means(&self) -> &[f64] {
        &self.means
    }

    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    pub fn confidence_level(&self) -> f64 {
        self.confidence_level
    }

    pub fn get(&self, index: usize) -> Option<SweepPoint> {
        Some(SweepPoint {
            size: *self.sizes.get(index)?,
            mean: self.means[index],
            lower: self.lower[index],
            upper: self.upper[index],
        })
    }

    /// Steps in size order
    pub fn points(&self) -> impl Iterator<Item = SweepPoint> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }

    /// Interval widths in size order
    pub fn widths(&self) -> Vec<f64> {
        self.upper
            .iter()
            .zip(&self.lower)
            .map(|(u, l)| u - l)
            .collect()
    }

    /// `(sizes, means, lower, upper)`
    pub fn into_parts(self) -> (Vec<usize>, Vec<f64>, Vec<f64>, Vec<f64>) {
        (self.sizes, self.means, self.lower, self.upper)
    }
}
