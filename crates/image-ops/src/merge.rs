//! Two-image merge using the keep-brightest alpha rule.

use image::{Pixel, Rgba, RgbaImage};
use rayon::prelude::*;
use tracing::debug;

use crate::pixel::alpha;
use crate::{ImageOpsError, Result};

const OPAQUE: u8 = 0xFF;

/// How two pixels at the same coordinate are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeMode {
    /// Opaque pixels win outright, otherwise the higher alpha wins.
    #[default]
    KeepBrightest,
}

impl MergeMode {
    /// All supported modes, in code order.
    pub const ALL: &'static [MergeMode] = &[MergeMode::KeepBrightest];

    /// Resolve a numeric mode selector.
    pub fn from_code(code: u32) -> Result<Self> {
        match code {
            0 => Ok(MergeMode::KeepBrightest),
            other => Err(ImageOpsError::UnsupportedMode(other)),
        }
    }

    pub fn code(self) -> u32 {
        match self {
            MergeMode::KeepBrightest => 0,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MergeMode::KeepBrightest => "keep brightest",
        }
    }
}

/// Pick between two pixels by alpha.
///
/// A fully opaque `first` always wins, then a fully opaque `second`.
/// Otherwise the higher alpha wins and ties go to `first`.
pub fn keep_brightest(first: Rgba<u8>, second: Rgba<u8>) -> Rgba<u8> {
    let (a1, a2) = (alpha(&first), alpha(&second));
    if a1 == OPAQUE {
        first
    } else if a2 == OPAQUE {
        second
    } else if a1 >= a2 {
        first
    } else {
        second
    }
}

/// Merge two equally-sized images pixel by pixel.
///
/// Fails with [`ImageOpsError::DimensionMismatch`] before touching any pixel
/// if the sizes differ.
pub fn merge(first: &RgbaImage, second: &RgbaImage, mode: MergeMode) -> Result<RgbaImage> {
    if first.dimensions() != second.dimensions() {
        return Err(ImageOpsError::DimensionMismatch {
            first: first.dimensions(),
            second: second.dimensions(),
        });
    }

    let (width, height) = first.dimensions();
    debug!(width, height, ?mode, "Merging images");

    let rule = match mode {
        MergeMode::KeepBrightest => keep_brightest,
    };

    let channels = usize::from(Rgba::<u8>::CHANNEL_COUNT);
    let mut result = RgbaImage::new(width, height);
    result
        .par_chunks_exact_mut(channels)
        .zip(first.par_chunks_exact(channels))
        .zip(second.par_chunks_exact(channels))
        .for_each(|((out, p1), p2)| {
            let chosen = rule(*Rgba::from_slice(p1), *Rgba::from_slice(p2));
            out.copy_from_slice(&chosen.0);
        });

    Ok(result)
}
