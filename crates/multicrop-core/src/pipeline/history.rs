//! Ordered record of committed crops.

use image::DynamicImage;

use crate::geometry::CropRect;
use crate::transform::{apply_crops, CropError};

/// Crops committed against the reference image, oldest first.
///
/// Append-only while a reference image is loaded; cleared when a new one is
/// loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CropHistory {
    crops: Vec<CropRect>,
}

impl CropHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rect: CropRect) {
        self.crops.push(rect);
    }

    pub fn clear(&mut self) {
        self.crops.clear();
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }

    pub fn as_slice(&self) -> &[CropRect] {
        &self.crops
    }

    /// Replay every crop, in recorded order, on `image`.
    pub fn replay(&self, image: &DynamicImage) -> Result<DynamicImage, CropError> {
        apply_crops(image, &self.crops)
    }

    /// Dimensions every replayed image ends up with, once anything is recorded.
    pub fn final_dimensions(&self) -> Option<(u32, u32)> {
        self.crops.last().map(|rect| (rect.width(), rect.height()))
    }
}
