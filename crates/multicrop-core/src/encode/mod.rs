//! Image encoding for Multicrop.
//!
//! This module provides functionality for:
//! - Encoding cropped images in the format they were read in
//! - Configurable JPEG quality for JPEG sources
//!
//! # Examples
//!
//! ```ignore
//! use image::ImageFormat;
//! use multicrop_core::encode::encode_image;
//!
//! let bytes = encode_image(&cropped, ImageFormat::Png, 95).unwrap();
//! println!("Encoded {} bytes", bytes.len());
//! ```

mod writer;

pub use writer::{encode_image, EncodeError};
