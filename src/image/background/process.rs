use std::fs;
use std::path::Path;

use image::{DynamicImage, ImageFormat, RgbaImage};
use rayon::prelude::*;

use crate::image::background::PARALLEL_PIXEL_THRESHOLD;
use crate::image::background::blur::gaussian_blur_3x3;
use crate::image::background::error::NobgError;
use crate::image::background::gray::to_luma;
use crate::image::background::mask::{
    BACKGROUND_THRESHOLD, MASK_BACKGROUND, foreground_mask, open_mask,
};
use crate::{debug, debug_do, log};

/// Remove background from an image file and write PNG output.
///
/// The output is always PNG, whatever the extension of `output`. Nothing is
/// written when the input cannot be decoded.
pub fn remove_background(input: &Path, output: &Path) -> Result<(), NobgError> {
    log!("nobg"; "reading {}", input.display());
    let img = image::open(input).map_err(|err| NobgError::Open(input.to_path_buf(), err))?;

    debug!("nobg"; "{}x{} {:?}", img.width(), img.height(), img.color());
    if !img.color().has_alpha() {
        debug!("nobg"; "no alpha channel, adding an opaque one");
    }

    let processed = process_image(img);

    debug_do! {
        let transparent = processed.pixels().filter(|p| p[3] == 0).count();
        let total = processed.width() as usize * processed.height() as usize;
        debug!("nobg"; "{} of {} pixels transparent", transparent, total);
    }

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)
            .map_err(|err| NobgError::CreateDir(parent.to_path_buf(), err))?;
    }

    processed
        .save_with_format(output, ImageFormat::Png)
        .map_err(|err| NobgError::Save(output.to_path_buf(), err))?;
    log!("save"; "{}", output.display());
    Ok(())
}

/// Make the near-white background of `img` transparent.
///
/// Colour channels are copied unchanged; only alpha is cleared where the
/// smoothed mask is empty.
pub fn process_image(img: DynamicImage) -> RgbaImage {
    let mut output = img.to_rgba8();
    let (width, height) = output.dimensions();
    if width == 0 || height == 0 {
        return output;
    }

    let gray = to_luma(&output);
    let mask = foreground_mask(&gray, BACKGROUND_THRESHOLD);
    let mask = open_mask(&mask);
    let mask = gaussian_blur_3x3(&mask);
    apply_alpha_mask(&mut output, mask.as_raw());

    output
}

/// Zero alpha wherever `mask` is empty, keep it elsewhere.
fn apply_alpha_mask(output: &mut RgbaImage, mask: &[u8]) {
    let len = output.width() as usize * output.height() as usize;
    debug_assert_eq!(mask.len(), len);

    let raw: &mut [u8] = output;
    let apply = |(pixel, &m): (&mut [u8], &u8)| {
        if m == MASK_BACKGROUND {
            pixel[3] = 0;
        }
    };

    if len >= PARALLEL_PIXEL_THRESHOLD {
        raw.par_chunks_exact_mut(4)
            .zip(mask.par_iter())
            .for_each(apply);
    } else {
        raw.chunks_exact_mut(4).zip(mask.iter()).for_each(apply);
    }
}
