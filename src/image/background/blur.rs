use image::GrayImage;
use rayon::prelude::*;

use crate::image::background::PARALLEL_PIXEL_THRESHOLD;

// Separable [1, 2, 1] kernel; both passes together sum to 16.
const KERNEL_SHIFT: u32 = 4;
const KERNEL_ROUND: u16 = 1 << (KERNEL_SHIFT - 1);

/// 3x3 Gaussian blur with reflect-101 borders (`dcb|abcd|cba`).
///
/// The horizontal pass keeps unnormalized sums so the result is rounded
/// exactly once.
pub(super) fn gaussian_blur_3x3(mask: &GrayImage) -> GrayImage {
    let (width, height) = mask.dimensions();
    if width == 0 || height == 0 {
        return mask.clone();
    }

    let w = width as usize;
    let h = height as usize;
    let parallel = w * h >= PARALLEL_PIXEL_THRESHOLD;
    let src = mask.as_raw();

    let mut horizontal = vec![0_u16; w * h];
    if parallel {
        horizontal
            .par_chunks_exact_mut(w)
            .zip(src.par_chunks_exact(w))
            .for_each(|(out, row)| blur_row(row, out));
    } else {
        for (out, row) in horizontal.chunks_exact_mut(w).zip(src.chunks_exact(w)) {
            blur_row(row, out);
        }
    }

    let mut blurred = GrayImage::new(width, height);
    let out: &mut [u8] = &mut blurred;
    let blur_column = |(y, out_row): (usize, &mut [u8])| {
        let above = &horizontal[prev_index(y, h) * w..][..w];
        let center = &horizontal[y * w..][..w];
        let below = &horizontal[next_index(y, h) * w..][..w];
        for (x, value) in out_row.iter_mut().enumerate() {
            let sum = above[x] + 2 * center[x] + below[x];
            *value = ((sum + KERNEL_ROUND) >> KERNEL_SHIFT) as u8;
        }
    };

    if parallel {
        out.par_chunks_exact_mut(w)
            .enumerate()
            .for_each(blur_column);
    } else {
        out.chunks_exact_mut(w).enumerate().for_each(blur_column);
    }

    blurred
}

#[inline]
fn blur_row(row: &[u8], out: &mut [u16]) {
    let len = row.len();
    for (x, sum) in out.iter_mut().enumerate() {
        let left = u16::from(row[prev_index(x, len)]);
        let center = u16::from(row[x]);
        let right = u16::from(row[next_index(x, len)]);
        *sum = left + 2 * center + right;
    }
}

/// Reflect-101 index of `i - 1`.
#[inline]
fn prev_index(i: usize, len: usize) -> usize {
    match i {
        0 if len > 1 => 1,
        0 => 0,
        _ => i - 1,
    }
}

/// Reflect-101 index of `i + 1`.
#[inline]
fn next_index(i: usize, len: usize) -> usize {
    if i + 1 < len {
        i + 1
    } else {
        i.saturating_sub(1)
    }
}
