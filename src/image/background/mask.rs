use image::GrayImage;
use imageproc::distance_transform::Norm;
use imageproc::morphology;
use rayon::prelude::*;

use crate::image::background::PARALLEL_PIXEL_THRESHOLD;

/// Luma above this value is considered background.
pub(super) const BACKGROUND_THRESHOLD: u8 = 240;

pub(super) const MASK_BACKGROUND: u8 = 0;
pub(super) const MASK_FOREGROUND: u8 = 255;

/// Radius of the square structuring element used by [`open_mask`] (3x3).
const OPENING_RADIUS: u8 = 1;

/// Build the inverted binary threshold mask.
///
/// Background (luma > `threshold`) maps to `MASK_BACKGROUND`, everything else
/// to `MASK_FOREGROUND`.
pub(super) fn foreground_mask(gray: &GrayImage, threshold: u8) -> GrayImage {
    let (width, height) = gray.dimensions();
    let len = width as usize * height as usize;
    let src = gray.as_raw();

    let mut mask = GrayImage::new(width, height);
    let out: &mut [u8] = &mut mask;

    let classify = |luma: u8| {
        if luma > threshold {
            MASK_BACKGROUND
        } else {
            MASK_FOREGROUND
        }
    };

    if len >= PARALLEL_PIXEL_THRESHOLD {
        out.par_iter_mut()
            .zip(src.par_iter())
            .for_each(|(m, &luma)| *m = classify(luma));
    } else {
        for (m, &luma) in out.iter_mut().zip(src.iter()) {
            *m = classify(luma);
        }
    }

    mask
}

/// Morphological opening with a 3x3 square: erosion followed by dilation.
///
/// Removes foreground specks thinner than three pixels. Pixels outside the
/// image count neither as background nor as foreground.
pub(super) fn open_mask(mask: &GrayImage) -> GrayImage {
    morphology::open(mask, Norm::LInf, OPENING_RADIUS)
}
