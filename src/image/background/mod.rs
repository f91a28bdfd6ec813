//! Remove near-white background from images.
//!
//! Pixels brighter than a fixed luma threshold are treated as background.
//! The resulting mask is cleaned with a morphological opening and softened
//! with a small Gaussian blur before it zeroes the alpha channel.

mod blur;
mod error;
mod gray;
mod mask;
mod process;

pub use process::remove_background;

/// Images with at least this many pixels are processed with rayon.
const PARALLEL_PIXEL_THRESHOLD: usize = 32 * 1024;
