use crate::{padded_range, rendering_error};
use plotters::prelude::*;
use sampling_core::Result;
use sampling_sweep::SweepResult;
use tracing::debug;

pub const SWEEP_TITLE: &str = "Sample Size vs Mean and Confidence Interval";

const SWEEP_SIZE: (u32, u32) = (1000, 600);
const BAND_COLOR: RGBColor = RGBColor(0, 100, 80);

/// Outline of the interval band: upper bounds left to right, then lower
/// bounds right to left
pub fn band_polygon(result: &SweepResult) -> Vec<(f64, f64)> {
    let sizes = result.sizes();
    let mut points = Vec::with_capacity(sizes.len() * 2);
    points.extend(
        sizes
            .iter()
            .zip(result.upper())
            .map(|(&size, &upper)| (size as f64, upper)),
    );
    points.extend(
        sizes
            .iter()
            .zip(result.lower())
            .rev()
            .map(|(&size, &lower)| (size as f64, lower)),
    );
    points
}

/// Legend entry for the band, e.g. "95% Confidence Interval"
pub fn band_label(confidence_level: f64) -> String {
    format!(
        "{}% Confidence Interval",
        (confidence_level * 1000.0).round() / 10.0
    )
}

/// Render the mean line and its interval band as an SVG document
pub fn render_sweep_svg(result: &SweepResult) -> Result<String> {
    let (x_range, y_range) = if result.is_empty() {
        (0.0..1.0, 0.0..1.0)
    } else {
        let sizes = result.sizes();
        let lo = result.lower().iter().copied().fold(f64::INFINITY, f64::min);
        let hi = result.upper().iter().copied().fold(f64::NEG_INFINITY, f64::max);
        (
            padded_range(sizes[0] as f64, sizes[sizes.len() - 1] as f64, 0.02),
            padded_range(lo, hi, 0.05),
        )
    };
    debug!(steps = result.len(), "rendering sweep chart");

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, SWEEP_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(rendering_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(SWEEP_TITLE, ("sans-serif", 22))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_range, y_range)
            .map_err(rendering_error)?;

        chart
            .configure_mesh()
            .x_desc("Sample Size")
            .y_desc("Mean / Confidence Interval")
            .draw()
            .map_err(rendering_error)?;

        if !result.is_empty() {
            chart
                .draw_series(std::iter::once(Polygon::new(
                    band_polygon(result),
                    BAND_COLOR.mix(0.2).filled(),
                )))
                .map_err(rendering_error)?
                .label(band_label(result.confidence_level()))
                .legend(|(x, y)| {
                    Rectangle::new([(x, y - 5), (x + 20, y + 5)], BAND_COLOR.mix(0.2).filled())
                });

            let means: Vec<(f64, f64)> = result
                .sizes()
                .iter()
                .zip(result.means())
                .map(|(&size, &mean)| (size as f64, mean))
                .collect();

            chart
                .draw_series(LineSeries::new(means.iter().copied(), &BLUE))
                .map_err(rendering_error)?
                .label("Mean")
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
            chart
                .draw_series(means.iter().map(|&point| Circle::new(point, 3, BLUE.filled())))
                .map_err(rendering_error)?;

            chart
                .configure_series_labels()
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()
                .map_err(rendering_error)?;
        }

        root.present().map_err(rendering_error)?;
    }

    Ok(svg)
}
