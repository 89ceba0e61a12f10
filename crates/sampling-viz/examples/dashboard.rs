//! Run the full analysis and write both charts as SVG files.
//!
//! ```text
//! cargo run -p sampling-viz --example dashboard -- [config.json] [output-dir]
//! ```
//!
//! Set `RUST_LOG=debug` to follow each stage.

use anyhow::{Context, Result};
use sampling_stats::{Analysis, AnalysisConfig};
use sampling_viz::{render_histograms_svg, render_sweep_svg, write_svg};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading configuration from {path}"))?;
            AnalysisConfig::from_json_str(&json)?
        }
        None => AnalysisConfig::default(),
    }
    .clamped();
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "target/dashboard".to_string()));

    info!(?config, "Running analysis");
    let report = Analysis::new(config)?.run()?;

    let sweep_path = out_dir.join("sweep.svg");
    write_svg(&sweep_path, &render_sweep_svg(&report.sweep)?)?;
    let histogram_path = out_dir.join("histograms.svg");
    write_svg(&histogram_path, &render_histograms_svg(&report.histograms)?)?;

    let summary = report.summary();
    println!("{}", serde_json::to_string_pretty(&summary)?);
    info!(
        sweep = %sweep_path.display(),
        histograms = %histogram_path.display(),
        "Charts written"
    );
    Ok(())
}
