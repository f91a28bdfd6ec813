use image::{GrayImage, RgbaImage};
use rayon::prelude::*;

use crate::image::background::PARALLEL_PIXEL_THRESHOLD;

// ITU-R BT.601 weights in 14-bit fixed point (sum = 1 << 14).
const R_WEIGHT: u32 = 4899;
const G_WEIGHT: u32 = 9617;
const B_WEIGHT: u32 = 1868;
const LUMA_SHIFT: u32 = 14;
const LUMA_ROUND: u32 = 1 << (LUMA_SHIFT - 1);

/// Luma of an RGBA pixel. Alpha is ignored.
#[inline]
pub(super) fn luma(pixel: &[u8]) -> u8 {
    let r = u32::from(pixel[0]);
    let g = u32::from(pixel[1]);
    let b = u32::from(pixel[2]);
    ((r * R_WEIGHT + g * G_WEIGHT + b * B_WEIGHT + LUMA_ROUND) >> LUMA_SHIFT) as u8
}

/// Convert an RGBA image to single-channel luma.
pub(super) fn to_luma(img: &RgbaImage) -> GrayImage {
    let (width, height) = img.dimensions();
    let len = width as usize * height as usize;
    let raw = img.as_raw();

    let mut gray = GrayImage::new(width, height);
    let out: &mut [u8] = &mut gray;

    if len >= PARALLEL_PIXEL_THRESHOLD {
        out.par_iter_mut()
            .zip(raw.par_chunks_exact(4))
            .for_each(|(y, pixel)| *y = luma(pixel));
    } else {
        for (y, pixel) in out.iter_mut().zip(raw.chunks_exact(4)) {
            *y = luma(pixel);
        }
    }

    gray
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};

    use super::{luma, to_luma};

    #[test]
    fn pure_colors() {
        assert_eq!(luma(&[255, 255, 255, 255]), 255);
        assert_eq!(luma(&[0, 0, 0, 255]), 0);
        assert_eq!(luma(&[255, 0, 0, 255]), 76);
        assert_eq!(luma(&[0, 255, 0, 255]), 150);
        assert_eq!(luma(&[0, 0, 255, 255]), 29);
    }

    #[test]
    fn gray_input_is_identity() {
        for v in 0..=255_u8 {
            assert_eq!(luma(&[v, v, v, 255]), v, "v={v}");
        }
    }

    #[test]
    fn ignores_alpha() {
        assert_eq!(luma(&[200, 120, 40, 0]), luma(&[200, 120, 40, 255]));
    }

    #[test]
    fn parallel_and_serial_agree() {
        // 256 * 160 pixels crosses the parallel threshold.
        let img = RgbaImage::from_fn(256, 160, |x, y| {
            Rgba([x as u8, (y * 3) as u8, (x ^ y) as u8, 255])
        });
        let gray = to_luma(&img);

        for (x, y, pixel) in img.enumerate_pixels() {
            assert_eq!(gray.get_pixel(x, y)[0], luma(&pixel.0));
        }
    }
}
