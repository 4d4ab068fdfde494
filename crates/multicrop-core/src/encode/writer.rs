//! Encoding cropped images back into their source format.
//!
//! JPEG goes through the `image` crate's `JpegEncoder` so the quality setting
//! is explicit; every other format uses the crate's default encoder.

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ExtendedColorType, GenericImageView, ImageEncoder, ImageFormat};
use std::io::Cursor;
use thiserror::Error;

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The encoder rejected the image
    #[error("{format:?} encoding failed: {reason}")]
    EncodingFailed { format: ImageFormat, reason: String },
}

/// Encode an image into `format`.
///
/// # Arguments
///
/// * `image` - Image to encode
/// * `format` - Target format, normally the format the source was read in
/// * `jpeg_quality` - JPEG quality (1-100), ignored for other formats
///
/// # Returns
///
/// The encoded file bytes.
///
/// # Example
///
/// ```
/// use image::{DynamicImage, ImageFormat, RgbImage};
/// use multicrop_core::encode::encode_image;
///
/// let image = DynamicImage::ImageRgb8(RgbImage::new(10, 10));
/// let png = encode_image(&image, ImageFormat::Png, 95).unwrap();
/// assert_eq!(&png[1..4], b"PNG");
/// ```
pub fn encode_image(
    image: &DynamicImage,
    format: ImageFormat,
    jpeg_quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let mut buffer = Cursor::new(Vec::new());
    let result = match format {
        ImageFormat::Jpeg => encode_jpeg(image, &mut buffer, jpeg_quality),
        other => image.write_to(&mut buffer, other),
    };
    result.map_err(|e| EncodeError::EncodingFailed {
        format,
        reason: e.to_string(),
    })?;

    Ok(buffer.into_inner())
}

fn encode_jpeg(
    image: &DynamicImage,
    buffer: &mut Cursor<Vec<u8>>,
    quality: u8,
) -> image::ImageResult<()> {
    // Clamp quality to valid range (1-100)
    let encoder = JpegEncoder::new_with_quality(buffer, quality.clamp(1, 100));
    let (width, height) = image.dimensions();

    match image {
        DynamicImage::ImageLuma8(gray) => {
            encoder.write_image(gray.as_raw(), width, height, ExtendedColorType::L8)
        }
        // JPEG has no alpha channel and no 16-bit mode
        other => {
            let rgb = other.to_rgb8();
            encoder.write_image(rgb.as_raw(), width, height, ExtendedColorType::Rgb8)
        }
    }
}
