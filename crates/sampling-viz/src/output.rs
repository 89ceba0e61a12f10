use sampling_core::Result;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Write a rendered SVG document, creating parent directories as needed
pub fn write_svg(path: impl AsRef<Path>, svg: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, svg)?;
    debug!(path = %path.display(), bytes = svg.len(), "wrote svg");
    Ok(())
}
