//! Exact-division splitting of one image into a grid of slices.

use image::{RgbaImage, imageops};
use rayon::prelude::*;
use tracing::debug;

use crate::grid::{Grid, GridPos};
use crate::{Axis, ImageOpsError, Result};

/// Check that `divisor` is positive and divides `size` exactly.
fn check_divisor(axis: Axis, size: u32, divisor: u32) -> Result<u32> {
    if divisor == 0 || size % divisor != 0 {
        return Err(ImageOpsError::IndivisibleDimension {
            axis,
            size,
            divisor,
        });
    }
    Ok(size / divisor)
}

/// Split `image` into `slice_width x slice_height` slices.
///
/// The returned grid has `height / slice_height` rows and
/// `width / slice_width` columns. Cell `(r, c)` is an owned copy of the region
/// whose top-left corner is `(c * slice_width, r * slice_height)`.
///
/// The width is validated before the height; either failing yields
/// [`ImageOpsError::IndivisibleDimension`] naming the axis and divisor.
pub fn split(image: &RgbaImage, slice_width: u32, slice_height: u32) -> Result<Grid<RgbaImage>> {
    let (width, height) = image.dimensions();
    let cols = check_divisor(Axis::Width, width, slice_width)?;
    let rows = check_divisor(Axis::Height, height, slice_height)?;

    debug!(width, height, rows, cols, "Splitting image");

    let cells: Vec<RgbaImage> = (0..rows as usize * cols as usize)
        .into_par_iter()
        .map(|index| {
            let GridPos { row, col } = GridPos::from_index(index, cols);
            imageops::crop_imm(
                image,
                col * slice_width,
                row * slice_height,
                slice_width,
                slice_height,
            )
            .to_image()
        })
        .collect();

    Ok(Grid::from_cells(rows, cols, cells))
}
