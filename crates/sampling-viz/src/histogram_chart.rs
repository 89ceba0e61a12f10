use crate::{padded_range, rendering_error};
use plotters::coord::Shift;
use plotters::prelude::*;
use sampling_core::Result;
use sampling_histogram::{Histogram, HistogramComparison};
use tracing::debug;

pub const FULL_DATA_TITLE: &str = "Histogram of Full Data";

const PANELS_SIZE: (u32, u32) = (1200, 500);
const LIGHT_BLUE: RGBColor = RGBColor(173, 216, 230);
const LIGHT_GREEN: RGBColor = RGBColor(144, 238, 144);

pub fn subset_title(subset_size: usize) -> String {
    format!("Histogram of Subset (n={subset_size})")
}

/// Render the full data and subset histograms side by side
pub fn render_histograms_svg(comparison: &HistogramComparison) -> Result<String> {
    debug!(
        full_bins = comparison.full.len(),
        subset_bins = comparison.subset.len(),
        "rendering histogram panels"
    );

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, PANELS_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(rendering_error)?;
        let panels = root.split_evenly((1, 2));

        draw_panel(&panels[0], &comparison.full, FULL_DATA_TITLE, LIGHT_BLUE)?;
        draw_panel(
            &panels[1],
            &comparison.subset,
            &subset_title(comparison.subset_size()),
            LIGHT_GREEN,
        )?;

        root.present().map_err(rendering_error)?;
    }

    Ok(svg)
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    histogram: &Histogram,
    title: &str,
    color: RGBColor,
) -> Result<()> {
    let x_range = if histogram.is_empty() {
        0.0..1.0
    } else {
        padded_range(histogram.min(), histogram.max(), 0.02)
    };
    let y_max = histogram.max_count().max(1) as f64 * 1.1;

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_range, 0.0..y_max)
        .map_err(rendering_error)?;

    chart
        .configure_mesh()
        .x_desc("Data Value")
        .y_desc("Frequency")
        .draw()
        .map_err(rendering_error)?;

    for bin in histogram.bins() {
        let corners = [(bin.left, 0.0), (bin.right, bin.count as f64)];
        chart
            .draw_series(std::iter::once(Rectangle::new(corners, color.filled())))
            .map_err(rendering_error)?;
        chart
            .draw_series(std::iter::once(Rectangle::new(corners, BLACK.stroke_width(1))))
            .map_err(rendering_error)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subset_title() {
        assert_eq!(subset_title(50), "Histogram of Subset (n=50)");
    }

    #[test]
    fn test_render_two_panels() {
        let full: Vec<f64> = (0..200).map(|i| (i as f64 * 0.1).cos()).collect();
        let subset: Vec<f64> = full.iter().copied().step_by(4).collect();
        let comparison = HistogramComparison::build(&full, &subset, 30).unwrap();
        let svg = render_histograms_svg(&comparison).unwrap();

        assert!(svg.contains(FULL_DATA_TITLE));
        assert!(svg.contains("Histogram of Subset (n=50)"));
        assert!(svg.contains("Frequency"));
        assert!(svg.contains("<rect"));
    }

    #[test]
    fn test_render_degenerate_histograms() {
        let comparison = HistogramComparison::build(&[2.0; 5], &[], 10).unwrap();
        let svg = render_histograms_svg(&comparison).unwrap();
        assert!(svg.contains("Histogram of Subset (n=0)"));
    }
}
