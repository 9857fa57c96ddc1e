use std::path::{Path, PathBuf};

use image_ops::TileLayout;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::error::Result;
use crate::files::{check_image_files, ensure_writable, list_directory_images, load_rgba, save_png};

/// Where the images to tile come from.
#[derive(Debug, Clone)]
pub enum TileSource {
    /// Explicit files, tiled in the given order.
    Files(Vec<PathBuf>),
    /// Every supported file in a directory, tiled in name order.
    Directory(PathBuf),
}

impl TileSource {
    /// Resolve to the ordered list of files to load.
    ///
    /// Explicit files must all exist and be supported. A directory is filtered
    /// to supported files, warning when some are skipped.
    pub fn resolve(&self, config: &AppConfig) -> Result<Vec<PathBuf>> {
        match self {
            TileSource::Files(paths) => {
                check_image_files(paths, config)?;
                Ok(paths.clone())
            }
            TileSource::Directory(dir) => {
                let listing = list_directory_images(dir, config)?;
                if !listing.skipped.is_empty() {
                    warn!(
                        skipped = listing.skipped.len(),
                        dir = %dir.display(),
                        "Skipping files that are not supported image types"
                    );
                }
                Ok(listing.images)
            }
        }
    }
}

/// Tile the images from `source` into a square mosaic saved at `output`.
pub fn run_tile(source: &TileSource, output: &Path, config: &AppConfig) -> Result<TileLayout> {
    ensure_writable(output, config.overwrite)?;

    let paths = source.resolve(config)?;
    let images = paths
        .iter()
        .map(|p| load_rgba(p))
        .collect::<Result<Vec<_>>>()?;

    let layout = TileLayout::new(&images)?;
    info!(
        grid_size = layout.side,
        cell_size = layout.cell_size,
        empty_cells = layout.empty_cells(),
        "Tiling images"
    );

    let mosaic = image_ops::tile_with_layout(&layout, &images)?;
    save_png(&mosaic, output)?;

    info!(count = images.len(), output = %output.display(), "Tile complete");
    Ok(layout)
}
