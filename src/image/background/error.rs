//! Background removal error types.

use image::ImageError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading, processing or writing an image
#[derive(Debug, Error)]
pub enum NobgError {
    #[error("cannot read image `{0}`")]
    Open(PathBuf, #[source] ImageError),

    #[error("cannot create output directory `{0}`")]
    CreateDir(PathBuf, #[source] std::io::Error),

    #[error("cannot write image `{0}`")]
    Save(PathBuf, #[source] ImageError),
}
