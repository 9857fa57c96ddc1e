//! Square mosaic tiling.
//!
//! Every cell is a square as large as the biggest input dimension, and the
//! grid is the smallest square with room for every image. Images are placed
//! row-major and centered in their cells without scaling.

use image::{RgbaImage, imageops};
use tracing::debug;

use crate::grid::GridPos;
use crate::{ImageOpsError, Result};

/// Side length of the smallest square grid holding `count` cells.
pub fn grid_side(count: usize) -> usize {
    let root = count.isqrt();
    if root * root == count { root } else { root + 1 }
}

/// Computed geometry of a mosaic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileLayout {
    /// Width and height of every cell, in pixels.
    pub cell_size: u32,
    /// Number of cells along each side of the grid.
    pub side: u32,
    /// Number of images placed.
    pub count: usize,
}

impl TileLayout {
    /// Layout for the given images, in order.
    pub fn new(images: &[RgbaImage]) -> Result<Self> {
        let cell_size = images
            .iter()
            .map(|img| img.width().max(img.height()))
            .max()
            .ok_or(ImageOpsError::NoInputImages)?;
        Self::from_parts(images.len(), cell_size)
    }

    /// Layout for `count` images whose largest dimension is `cell_size`.
    pub fn from_parts(count: usize, cell_size: u32) -> Result<Self> {
        if count == 0 {
            return Err(ImageOpsError::NoInputImages);
        }
        let side = u32::try_from(grid_side(count)).unwrap_or(u32::MAX);
        let layout = Self {
            cell_size,
            side,
            count,
        };
        layout.canvas_size()?;
        Ok(layout)
    }

    /// Width and height of the square output canvas.
    pub fn canvas_size(&self) -> Result<u32> {
        self.cell_size
            .checked_mul(self.side)
            .ok_or(ImageOpsError::CanvasTooLarge {
                cell_size: self.cell_size,
                side: self.side,
            })
    }

    /// Cells left empty after placing every image.
    pub fn empty_cells(&self) -> usize {
        let side = self.side as usize;
        side * side - self.count
    }

    /// Grid cell of the `index`-th image.
    pub fn cell(&self, index: usize) -> GridPos {
        GridPos::from_index(index, self.side)
    }

    /// Top-left canvas position for a `width x height` image at `index`.
    ///
    /// `None` when `index` is past the last image or the image is larger
    /// than a cell.
    pub fn draw_position(&self, index: usize, width: u32, height: u32) -> Option<(u32, u32)> {
        if index >= self.count || width > self.cell_size || height > self.cell_size {
            return None;
        }
        let GridPos { row, col } = self.cell(index);
        let half = self.cell_size / 2;
        let center_x = col * self.cell_size + half;
        let center_y = row * self.cell_size + half;
        Some((center_x - width / 2, center_y - height / 2))
    }
}

/// Tile `images` into a single square mosaic.
///
/// The canvas starts fully transparent; cells past the last image stay empty.
pub fn tile(images: &[RgbaImage]) -> Result<RgbaImage> {
    let layout = TileLayout::new(images)?;
    tile_with_layout(&layout, images)
}

/// Draw `images` using a layout the caller already computed.
///
/// Fails with [`ImageOpsError::LayoutMismatch`] if the layout was built for a
/// different number of images or an image does not fit its cell.
pub fn tile_with_layout(layout: &TileLayout, images: &[RgbaImage]) -> Result<RgbaImage> {
    if images.len() != layout.count {
        return Err(ImageOpsError::LayoutMismatch {
            index: images.len().min(layout.count),
        });
    }
    let canvas_size = layout.canvas_size()?;

    debug!(
        count = layout.count,
        side = layout.side,
        cell_size = layout.cell_size,
        canvas_size,
        "Tiling images"
    );

    let mut canvas = RgbaImage::new(canvas_size, canvas_size);
    for (index, img) in images.iter().enumerate() {
        let (x, y) = layout
            .draw_position(index, img.width(), img.height())
            .ok_or(ImageOpsError::LayoutMismatch { index })?;
        imageops::replace(&mut canvas, img, i64::from(x), i64::from(y));
    }

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

    fn solid(width: u32, height: u32, pixel: Rgba<u8>) -> RgbaImage {
        RgbaImage::from_pixel(width, height, pixel)
    }

    #[test]
    fn grid_side_perfect_squares() {
        assert_eq!(grid_side(1), 1);
        assert_eq!(grid_side(4), 2);
        assert_eq!(grid_side(9), 3);
        assert_eq!(grid_side(16), 4);
    }

    #[test]
    fn grid_side_rounds_up() {
        assert_eq!(grid_side(2), 2);
        assert_eq!(grid_side(5), 3);
        assert_eq!(grid_side(8), 3);
        assert_eq!(grid_side(10), 4);
    }

    #[test]
    fn layout_counts_empty_cells() {
        assert_eq!(TileLayout::from_parts(4, 1).unwrap().empty_cells(), 0);
        assert_eq!(TileLayout::from_parts(5, 1).unwrap().empty_cells(), 4);
        assert_eq!(TileLayout::from_parts(9, 1).unwrap().empty_cells(), 0);
    }

    #[test]
    fn cell_size_is_largest_dimension() {
        let images = [
            solid(10, 10, RED),
            solid(20, 5, RED),
            solid(5, 20, RED),
        ];
        let layout = TileLayout::new(&images).unwrap();
        assert_eq!(layout.cell_size, 20);
        assert_eq!(layout.side, 2);
    }

    #[test]
    fn cells_fill_row_major() {
        let layout = TileLayout::from_parts(5, 10).unwrap();
        assert_eq!(layout.cell(0), GridPos::new(0, 0));
        assert_eq!(layout.cell(2), GridPos::new(0, 2));
        assert_eq!(layout.cell(3), GridPos::new(1, 0));
        assert_eq!(layout.cell(4), GridPos::new(1, 1));
    }

    #[test]
    fn draw_position_centers_in_cell() {
        let layout = TileLayout::from_parts(4, 20).unwrap();
        assert_eq!(layout.draw_position(0, 10, 10), Some((5, 5)));
        // Cell (1, 1): center (30, 30)
        assert_eq!(layout.draw_position(3, 20, 5), Some((20, 28)));
        // Odd sizes round toward the top-left
        assert_eq!(layout.draw_position(0, 7, 7), Some((7, 7)));
    }

    #[test]
    fn draw_position_rejects_oversized_image() {
        let layout = TileLayout::from_parts(1, 20).unwrap();
        assert_eq!(layout.draw_position(0, 30, 30), None);
        assert_eq!(layout.draw_position(0, 20, 21), None);
        assert_eq!(layout.draw_position(0, 20, 20), Some((0, 0)));
    }

    #[test]
    fn draw_position_rejects_index_past_last_image() {
        let layout = TileLayout::from_parts(5, 10).unwrap();
        assert_eq!(layout.draw_position(5, 4, 4), None);
        assert_eq!(layout.draw_position(8, 4, 4), None);
    }

    #[test]
    fn wide_images_are_centered_vertically() {
        let images: Vec<_> = (0..9).map(|_| solid(7, 3, RED)).collect();
        let layout = TileLayout::new(&images).unwrap();
        assert_eq!(layout.canvas_size().unwrap(), 21);
        assert_eq!(layout.draw_position(0, 7, 3), Some((0, 2)));

        let mosaic = tile(&images).unwrap();
        assert_eq!(mosaic.dimensions(), (21, 21));
        assert_eq!(*mosaic.get_pixel(0, 1), CLEAR);
        assert_eq!(*mosaic.get_pixel(0, 2), RED);
    }

    #[test]
    fn tile_with_layout_draws_given_geometry() {
        let images = [solid(4, 4, RED), solid(2, 2, RED)];
        let layout = TileLayout::new(&images).unwrap();
        let mosaic = tile_with_layout(&layout, &images).unwrap();
        assert_eq!(mosaic, tile(&images).unwrap());
    }

    #[test]
    fn tile_with_layout_rejects_mismatched_layout() {
        let images = [solid(4, 4, RED), solid(2, 2, RED)];

        let short = TileLayout::from_parts(1, 4).unwrap();
        assert_eq!(
            tile_with_layout(&short, &images).unwrap_err(),
            ImageOpsError::LayoutMismatch { index: 1 }
        );

        let small_cells = TileLayout::from_parts(2, 3).unwrap();
        assert_eq!(
            tile_with_layout(&small_cells, &images).unwrap_err(),
            ImageOpsError::LayoutMismatch { index: 0 }
        );
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(tile(&[]).unwrap_err(), ImageOpsError::NoInputImages);
        assert_eq!(
            TileLayout::from_parts(0, 10).unwrap_err(),
            ImageOpsError::NoInputImages
        );
    }

    #[test]
    fn oversized_canvas_is_rejected() {
        assert!(matches!(
            TileLayout::from_parts(4, u32::MAX),
            Err(ImageOpsError::CanvasTooLarge { side: 2, .. })
        ));
    }

    #[test]
    fn tile_four_images_into_2x2() {
        let images: Vec<_> = (0..4).map(|_| solid(3, 3, RED)).collect();
        let mosaic = tile(&images).unwrap();
        assert_eq!(mosaic.dimensions(), (6, 6));
        assert!(mosaic.pixels().all(|p| *p == RED));
    }

    #[test]
    fn tile_five_images_leaves_trailing_cells_transparent() {
        let images: Vec<_> = (0..5).map(|_| solid(2, 2, RED)).collect();
        let mosaic = tile(&images).unwrap();
        assert_eq!(mosaic.dimensions(), (6, 6));

        // Cell (1, 1) holds the fifth image
        assert_eq!(*mosaic.get_pixel(2, 2), RED);
        // Cells (1, 2) and (2, *) are empty
        assert_eq!(*mosaic.get_pixel(4, 2), CLEAR);
        for x in 0..6 {
            assert_eq!(*mosaic.get_pixel(x, 5), CLEAR);
        }
    }

    #[test]
    fn small_image_is_centered_and_padded() {
        let images = [solid(10, 10, RED), solid(20, 20, Rgba([0, 0, 255, 255]))];
        let mosaic = tile(&images).unwrap();
        assert_eq!(mosaic.dimensions(), (40, 40));

        assert_eq!(*mosaic.get_pixel(4, 4), CLEAR);
        assert_eq!(*mosaic.get_pixel(5, 5), RED);
        assert_eq!(*mosaic.get_pixel(14, 14), RED);
        assert_eq!(*mosaic.get_pixel(15, 15), CLEAR);
        assert_eq!(*mosaic.get_pixel(20, 0), Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn translucent_pixels_are_copied_unblended() {
        let ghost = Rgba([10, 20, 30, 40]);
        let mosaic = tile(&[solid(2, 2, ghost)]).unwrap();
        assert!(mosaic.pixels().all(|p| *p == ghost));
    }
}
