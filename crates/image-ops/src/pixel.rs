//! Per-pixel channel access.

use image::Rgba;

/// Alpha channel of a pixel.
#[inline]
pub fn alpha(pixel: &Rgba<u8>) -> u8 {
    pixel.0[3]
}
