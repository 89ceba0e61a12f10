//! Side-by-side histograms of a population and a subset of it

use crate::builders::FixedWidthBuilder;
use crate::traits::HistogramBuilder;
use crate::types::Histogram;
use sampling_core::Result;
use serde::Serialize;

/// Histograms of a full data set and a subset of it, built with the same
/// number of bins
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramComparison {
    pub full: Histogram,
    pub subset: Histogram,
}

impl HistogramComparison {
    /// Bin each data set over its own range
    pub fn build(full: &[f64], subset: &[f64], bins: usize) -> Result<Self> {
        let builder = FixedWidthBuilder::new(bins)?;
        Ok(Self {
            full: builder.build(full)?,
            subset: builder.build(subset)?,
        })
    }

    /// Bin both data sets over the full data's range so bins line up
    pub fn build_on_common_range(full: &[f64], subset: &[f64], bins: usize) -> Result<Self> {
        let full_hist = FixedWidthBuilder::new(bins)?.build(full)?;
        if full_hist.is_empty() {
            return Self::build(full, subset, bins);
        }

        let builder = FixedWidthBuilder::with_range(bins, full_hist.min(), full_hist.max())?;
        Ok(Self {
            subset: builder.build(subset)?,
            full: full_hist,
        })
    }

    /// Sample size behind the subset panel
    pub fn subset_size(&self) -> usize {
        self.subset.total_count()
    }

    /// Whether both histograms use identical bin edges
    pub fn shares_edges(&self) -> bool {
        !self.full.is_empty() && self.full.edges() == self.subset.edges()
    }

    /// Overlap of relative frequencies, in `[0, 1]`
    ///
    /// `None` unless the bins line up.
    pub fn overlap(&self) -> Option<f64> {
        if !self.shares_edges() {
            return None;
        }
        let overlap = self
            .full
            .frequencies()
            .iter()
            .zip(self.subset.frequencies())
            .map(|(&a, b)| a.min(b))
            .sum();
        Some(overlap)
    }
}
