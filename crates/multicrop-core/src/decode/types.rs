//! Core types for image decoding.

use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView, ImageFormat};
use thiserror::Error;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The bytes do not look like any supported image format.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// I/O error during file reading.
    #[error("I/O error: {0}")]
    IoError(String),
}

/// A decoded raster together with where it came from.
///
/// The format is remembered so results can be written back without
/// converting between encodings.
#[derive(Debug, Clone)]
pub struct ImageHandle {
    /// Source file path.
    pub path: PathBuf,
    /// Decoded pixels in the source color type.
    pub image: DynamicImage,
    /// Encoding detected from the file contents.
    pub format: ImageFormat,
}

impl ImageHandle {
    pub fn new(path: impl Into<PathBuf>, image: DynamicImage, format: ImageFormat) -> Self {
        Self {
            path: path.into(),
            image,
            format,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// RGBA8 copy of the pixels, row-major, for drawing surfaces.
    pub fn to_rgba_pixels(&self) -> Vec<u8> {
        self.image.to_rgba8().into_raw()
    }
}
