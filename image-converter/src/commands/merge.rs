use std::path::Path;

use image_ops::MergeMode;
use tracing::info;

use crate::config::AppConfig;
use crate::error::Result;
use crate::files::{ensure_exists, ensure_writable, load_rgba, save_png};

/// Merge `first` and `second` into `output` using the numeric `mode`.
pub fn run_merge(
    first: &Path,
    second: &Path,
    output: &Path,
    mode: u32,
    config: &AppConfig,
) -> Result<()> {
    let mode = MergeMode::from_code(mode)?;
    ensure_exists(first)?;
    ensure_exists(second)?;
    ensure_writable(output, config.overwrite)?;

    let image1 = load_rgba(first)?;
    let image2 = load_rgba(second)?;
    let result = image_ops::merge(&image1, &image2, mode)?;
    save_png(&result, output)?;

    info!(
        mode = mode.description(),
        output = %output.display(),
        "Merged images"
    );
    Ok(())
}
