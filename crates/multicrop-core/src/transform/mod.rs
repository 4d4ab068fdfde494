//! Image transformation operations.
//!
//! Only pixel cropping is needed: every crop drawn on the reference image is
//! replayed, in order, on every other image of the batch.
//!
//! # Coordinate System
//!
//! - Crop coordinates are raw pixels, not normalized
//! - Origin is top-left corner

mod crop;

pub use crop::{apply_crop, apply_crops, CropError};
