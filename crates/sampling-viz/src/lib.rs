//! SVG rendering for confidence interval sweeps and histogram comparisons
//!
//! Charts are drawn with `plotters` into an in-memory SVG string, so callers
//! decide where (or whether) the result is written.
//!
//! ```rust
//! use sampling_population::generate;
//! use sampling_sweep::{SizeSequence, SweepRunner};
//! use sampling_viz::{band_polygon, render_sweep_svg};
//!
//! let population = generate(100, 42).unwrap();
//! let sizes = SizeSequence::up_to(100).to_vec();
//! let sweep = SweepRunner::with_seed(43).sweep(&population, &sizes, 0.95).unwrap();
//!
//! assert_eq!(band_polygon(&sweep).len(), 2 * sweep.len());
//! let svg = render_sweep_svg(&sweep).unwrap();
//! assert!(svg.contains("<svg"));
//! ```

mod histogram_chart;
mod output;
mod sweep_chart;

pub use histogram_chart::{render_histograms_svg, subset_title, FULL_DATA_TITLE};
pub use output::write_svg;
pub use sweep_chart::{band_label, band_polygon, render_sweep_svg, SWEEP_TITLE};

pub use sampling_core::{Error, Result};

use std::ops::Range;

pub(crate) fn rendering_error<E: std::fmt::Display>(err: E) -> Error {
    Error::Rendering(err.to_string())
}

/// Axis range with a margin, widened when the data has no spread
pub(crate) fn padded_range(min: f64, max: f64, fraction: f64) -> Range<f64> {
    let span = max - min;
    if !span.is_finite() || span <= 0.0 {
        let pad = if min.abs() > 0.0 { min.abs() * 0.1 } else { 1.0 };
        return (min - pad)..(max + pad);
    }
    let pad = span * fraction;
    (min - pad)..(max + pad)
}
