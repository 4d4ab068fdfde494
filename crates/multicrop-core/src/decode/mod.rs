//! Image decoding for Multicrop.
//!
//! This module provides functionality for:
//! - Decoding PNG and JPEG files from bytes
//! - Remembering the source encoding so outputs keep their format
//!
//! # Architecture
//!
//! Decoding works on byte slices; where the bytes come from is decided by an
//! [`ImageStore`](crate::store::ImageStore). All operations are synchronous.
//!
//! # Examples
//!
//! ```ignore
//! use multicrop_core::decode::decode_image;
//!
//! let bytes = std::fs::read("screenshot.png").unwrap();
//! let (image, format) = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} {:?} image", image.width(), image.height(), format);
//! ```

mod reader;
mod types;

pub use reader::decode_image;
pub use types::{DecodeError, ImageHandle};
