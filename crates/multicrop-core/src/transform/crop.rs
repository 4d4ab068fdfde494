//! Pixel-rectangle cropping.
//!
//! Crops are expressed as [`CropRect`] values in raw pixel coordinates. The
//! same rectangle is applied verbatim to every image in a batch, with no
//! scaling between images of different sizes.
//!
//! # Coordinate System
//!
//! - (0, 0) = top-left corner
//! - `right`/`bottom` are exclusive pixel edges
//! - A rectangle must lie fully inside the image it is applied to

use image::{DynamicImage, GenericImageView};
use thiserror::Error;

use crate::geometry::CropRect;

/// Errors that can occur while cropping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CropError {
    /// The rectangle selects no pixels
    #[error("Crop region {0} has zero width or height")]
    EmptyRegion(CropRect),

    /// The rectangle reaches past the image edges
    #[error("Crop region {rect} exceeds image bounds {width}x{height}")]
    OutOfBounds {
        rect: CropRect,
        width: u32,
        height: u32,
    },
}

/// Apply a pixel crop to an image.
///
/// # Arguments
///
/// * `image` - Source image to crop
/// * `rect` - Crop rectangle in pixel coordinates; inverted edges are reordered
///
/// # Returns
///
/// A new image of exactly `rect.width() x rect.height()` pixels, keeping the
/// source color type.
///
/// # Errors
///
/// - `CropError::EmptyRegion` for zero-area rectangles
/// - `CropError::OutOfBounds` when the rectangle does not fit the image
///
/// # Example
///
/// ```
/// use image::{DynamicImage, RgbImage};
/// use multicrop_core::geometry::CropRect;
/// use multicrop_core::transform::apply_crop;
///
/// let image = DynamicImage::ImageRgb8(RgbImage::new(800, 600));
/// let cropped = apply_crop(&image, CropRect::new(100, 100, 300, 400)).unwrap();
/// assert_eq!((cropped.width(), cropped.height()), (200, 300));
/// ```
pub fn apply_crop(image: &DynamicImage, rect: CropRect) -> Result<DynamicImage, CropError> {
    let rect = rect.normalized();
    if rect.is_empty() {
        return Err(CropError::EmptyRegion(rect));
    }

    let (width, height) = image.dimensions();
    if !rect.fits_within(width, height) {
        return Err(CropError::OutOfBounds {
            rect,
            width,
            height,
        });
    }

    // Fast path: full-frame crop returns a clone
    if rect.left == 0 && rect.top == 0 && rect.right == width && rect.bottom == height {
        return Ok(image.clone());
    }

    Ok(image.crop_imm(rect.left, rect.top, rect.width(), rect.height()))
}

/// Apply a sequence of crops in order.
///
/// Each rectangle is interpreted relative to the result of the previous one,
/// so the sequence replays a series of interactive crops exactly.
pub fn apply_crops<'a, I>(image: &DynamicImage, rects: I) -> Result<DynamicImage, CropError>
where
    I: IntoIterator<Item = &'a CropRect>,
{
    let mut current = image.clone();
    for rect in rects {
        current = apply_crop(&current, *rect)?;
    }
    Ok(current)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
