//! Sample size sequences for sweeps

use sampling_core::{Error, Result};

/// First size of the default sequence
pub const DEFAULT_START: usize = 10;
/// Increment of the default sequence
pub const DEFAULT_STEP: usize = 10;

/// Arithmetic progression `start, start + step, …` bounded by `max`
///
/// `max` itself is included when it falls on the progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSequence {
    start: usize,
    step: usize,
    max: usize,
}

impl SizeSequence {
    /// Progression from `start` in increments of `step`, up to `max`
    ///
    /// # Errors
    /// `InvalidParameter` if `start` or `step` is zero.
    pub fn arithmetic(start: usize, step: usize, max: usize) -> Result<Self> {
        if start == 0 {
            return Err(Error::InvalidParameter(
                "Size sequence must start at a positive size".to_string(),
            ));
        }
        if step == 0 {
            return Err(Error::InvalidParameter(
                "Size sequence step must be positive".to_string(),
            ));
        }
        Ok(Self { start, step, max })
    }

    /// The default policy: 10, 20, 30, … up to `max`
    pub fn up_to(max: usize) -> Self {
        Self {
            start: DEFAULT_START,
            step: DEFAULT_STEP,
            max,
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> {
        (self.start..=self.max).step_by(self.step)
    }

    pub fn len(&self) -> usize {
        if self.start > self.max {
            0
        } else {
            (self.max - self.start) / self.step + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl IntoIterator for SizeSequence {
    type Item = usize;
    type IntoIter = std::iter::StepBy<std::ops::RangeInclusive<usize>>;

    fn into_iter(self) -> Self::IntoIter {
        (self.start..=self.max).step_by(self.step)
    }
}
