//! Fixed-width histogram building

use crate::traits::HistogramBuilder;
use crate::types::{Histogram, HistogramBin};
use sampling_core::{Error, Result};

/// Fixed-width histogram builder
///
/// Creates a histogram with a specified number of equal-width bins spanning
/// either the sample's own range or an explicit range. Non-finite values are
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedWidthBuilder {
    num_bins: usize,
    range: Option<(f64, f64)>,
}

impl FixedWidthBuilder {
    /// Create a new fixed-width histogram builder
    pub fn new(num_bins: usize) -> Result<Self> {
        if num_bins == 0 {
            return Err(Error::InvalidParameter(
                "Histogram needs at least one bin".to_string(),
            ));
        }
        Ok(Self {
            num_bins,
            range: None,
        })
    }

    /// Bin over `[min, max]` instead of the sample's own range
    ///
    /// Values outside the range are not counted.
    pub fn with_range(num_bins: usize, min: f64, max: f64) -> Result<Self> {
        if !(min.is_finite() && max.is_finite()) || min > max {
            return Err(Error::InvalidParameter(format!(
                "Invalid histogram range [{min}, {max}]"
            )));
        }
        let mut builder = Self::new(num_bins)?;
        builder.range = Some((min, max));
        Ok(builder)
    }

    pub fn num_bins(&self) -> usize {
        self.num_bins
    }

    pub fn range(&self) -> Option<(f64, f64)> {
        self.range
    }

    fn build_sorted(&self, sorted: &[f64]) -> Histogram {
        let (min, max) = match self.range {
            Some(range) => range,
            None => match (sorted.first(), sorted.last()) {
                (Some(&first), Some(&last)) => (first, last),
                _ => return Histogram::empty(),
            },
        };

        let in_range: &[f64] = {
            let start = sorted.partition_point(|&x| x < min);
            let end = sorted.partition_point(|&x| x <= max);
            &sorted[start..end.max(start)]
        };
        let total = in_range.len();

        if max - min < 1e-10 {
            // All values are the same
            let bin = HistogramBin::new(min, max, total, total);
            return Histogram::new(vec![bin], total, min, max);
        }

        let width = (max - min) / self.num_bins as f64;
        let mut bins: Vec<HistogramBin> = (0..self.num_bins)
            .map(|i| {
                let left = min + i as f64 * width;
                let right = if i == self.num_bins - 1 {
                    max // Ensure last bin includes max
                } else {
                    min + (i + 1) as f64 * width
                };
                HistogramBin::new(left, right, 0, total)
            })
            .collect();

        // Single pass through sorted data
        let mut current_bin = 0;
        for &value in in_range {
            while current_bin < self.num_bins - 1 && value >= bins[current_bin].right {
                current_bin += 1;
            }
            bins[current_bin].count += 1;
        }

        for bin in &mut bins {
            bin.update_density(total);
        }

        Histogram::new(bins, total, min, max)
    }
}

impl HistogramBuilder for FixedWidthBuilder {
    fn build(&self, sample: &[f64]) -> Result<Histogram> {
        let mut sorted: Vec<f64> = sample.iter().copied().filter(|x| x.is_finite()).collect();
        sorted.sort_by(f64::total_cmp);
        Ok(self.build_sorted(&sorted))
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.num_bins)
    }
}
