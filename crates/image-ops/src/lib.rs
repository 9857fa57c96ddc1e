//! Pixel compositing and grid layout for the image converter.
//!
//! Provides the brightest-alpha merge, exact-division splitting into a
//! row/column grid, and square mosaic tiling. All operations work on decoded
//! `RgbaImage` buffers and never touch the filesystem.

pub mod grid;
pub mod merge;
pub mod pixel;
pub mod split;
pub mod tile;

// Re-exports for convenience
pub use grid::{Grid, GridPos};
pub use merge::{MergeMode, keep_brightest, merge};
pub use split::split;
pub use tile::{TileLayout, grid_side, tile, tile_with_layout};

use std::fmt;

/// Image axis named in dimension errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Width => f.write_str("width"),
            Axis::Height => f.write_str("height"),
        }
    }
}

/// Errors raised before any pixel work starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageOpsError {
    #[error(
        "Images must be the same size: first is {}x{}, second is {}x{}",
        .first.0, .first.1, .second.0, .second.1
    )]
    DimensionMismatch {
        first: (u32, u32),
        second: (u32, u32),
    },

    #[error("Unsupported merge mode: {0}")]
    UnsupportedMode(u32),

    #[error("Split {axis} does not evenly divide image {axis} ({size} / {divisor})")]
    IndivisibleDimension { axis: Axis, size: u32, divisor: u32 },

    #[error("No input images to tile")]
    NoInputImages,

    #[error("Mosaic canvas too large: {side} cells of {cell_size}px per side")]
    CanvasTooLarge { cell_size: u32, side: u32 },

    #[error("Tile layout does not fit image {index}")]
    LayoutMismatch { index: usize },
}

/// Result type alias for image operations.
pub type Result<T> = std::result::Result<T, ImageOpsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indivisible_message_names_axis_and_divisor() {
        let err = ImageOpsError::IndivisibleDimension {
            axis: Axis::Height,
            size: 10,
            divisor: 3,
        };
        assert_eq!(
            err.to_string(),
            "Split height does not evenly divide image height (10 / 3)"
        );
    }

    #[test]
    fn dimension_mismatch_message_lists_both_sizes() {
        let err = ImageOpsError::DimensionMismatch {
            first: (4, 4),
            second: (4, 5),
        };
        assert_eq!(
            err.to_string(),
            "Images must be the same size: first is 4x4, second is 4x5"
        );
    }
}
