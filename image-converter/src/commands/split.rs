use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::files::{ensure_exists, ensure_writable, load_rgba, save_png, slice_output_path};

/// Split `input` into `slice_width x slice_height` PNG slices.
///
/// Every slice path is checked before anything is written. A slice that fails
/// to save is logged and the rest are still attempted. Returns the written
/// paths in row-major order.
pub fn run_split(
    input: &Path,
    slice_width: u32,
    slice_height: u32,
    out_dir: Option<&Path>,
    config: &AppConfig,
) -> Result<Vec<PathBuf>> {
    ensure_exists(input)?;
    let image = load_rgba(input)?;
    let grid = image_ops::split(&image, slice_width, slice_height)?;

    info!(rows = grid.rows(), cols = grid.cols(), "Splitting image");

    if let Some(dir) = out_dir {
        fs::create_dir_all(dir).map_err(|source| CliError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let targets: Vec<PathBuf> = grid
        .iter()
        .map(|(pos, _)| slice_output_path(input, out_dir, pos))
        .collect();
    for target in &targets {
        ensure_writable(target, config.overwrite)?;
    }

    let total = targets.len();
    let mut written = Vec::with_capacity(total);
    for ((_, slice), target) in grid.into_cells().zip(targets) {
        match save_png(&slice, &target) {
            Ok(()) => written.push(target),
            Err(e) => warn!("{e}"),
        }
    }

    let failed = total - written.len();
    if failed > 0 {
        return Err(CliError::SaveFailed { failed, total });
    }

    info!(count = total, "Split complete");
    Ok(written)
}
