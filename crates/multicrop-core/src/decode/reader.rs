//! Image decoding with format detection.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, ImageReader};

use super::DecodeError;

/// Decode image bytes, detecting the format from the contents.
///
/// The file extension is deliberately not consulted: a file named `.png`
/// holding something else is reported as unreadable rather than trusted.
///
/// # Arguments
///
/// * `bytes` - Raw encoded file bytes
///
/// # Returns
///
/// The decoded image in its source color type and the detected format.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the format cannot be recognized.
/// Returns `DecodeError::CorruptedFile` if decoding fails.
pub fn decode_image(bytes: &[u8]) -> Result<(DynamicImage, ImageFormat), DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::IoError(e.to_string()))?;

    let format = reader.format().ok_or(DecodeError::InvalidFormat)?;

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    Ok((img, format))
}
