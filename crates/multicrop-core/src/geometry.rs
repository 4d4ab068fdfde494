//! Pixel-space geometry shared by the selection tracker and the crop pipeline.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner of the reference image
//! - `x` grows to the right, `y` grows downwards
//! - Rectangle edges are pixel boundaries, so a rectangle spanning
//!   `left..right` covers `right - left` columns

use serde::{Deserialize, Serialize};

/// A pointer position in image pixel space.
///
/// Coordinates are signed because a drag may leave the image surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Clamp the point into `[0, width] x [0, height]`.
    pub fn clamp_to(self, width: u32, height: u32) -> Self {
        Self {
            x: self.x.clamp(0, saturating_i32(width)),
            y: self.y.clamp(0, saturating_i32(height)),
        }
    }

    /// Clamp only the negative half-planes, leaving the far edges open.
    pub fn clamp_non_negative(self) -> Self {
        Self {
            x: self.x.max(0),
            y: self.y.max(0),
        }
    }
}

fn saturating_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// A rectangle exactly as dragged: two corners in no particular order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl SelectionRect {
    /// Build a selection from the drag anchor and the current pointer.
    pub fn from_corners(anchor: Point, pointer: Point) -> Self {
        Self {
            x0: anchor.x,
            y0: anchor.y,
            x1: pointer.x,
            y1: pointer.y,
        }
    }

    /// Order the corners into `(left, top, right, bottom)`.
    ///
    /// Each axis is ordered independently, so the result does not depend on
    /// which corner the drag started from. Negative coordinates clamp to 0.
    pub fn normalize(&self) -> CropRect {
        let to_u32 = |v: i32| u32::try_from(v.max(0)).unwrap_or(0);
        CropRect {
            left: to_u32(self.x0.min(self.x1)),
            top: to_u32(self.y0.min(self.y1)),
            right: to_u32(self.x0.max(self.x1)),
            bottom: to_u32(self.y0.max(self.y1)),
        }
    }
}

/// A normalized crop rectangle: `left <= right` and `top <= bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CropRect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropRect {
    /// Create a rectangle from two arbitrary corners, ordering them.
    pub fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        Self {
            left: x0.min(x1),
            top: y0.min(y1),
            right: x0.max(x1),
            bottom: y0.max(y1),
        }
    }

    /// Reorder the edges of a rectangle built field by field.
    pub fn normalized(self) -> Self {
        Self::new(self.left, self.top, self.right, self.bottom)
    }

    pub fn width(&self) -> u32 {
        self.right.abs_diff(self.left)
    }

    pub fn height(&self) -> u32 {
        self.bottom.abs_diff(self.top)
    }

    /// A zero-width or zero-height rectangle selects no pixels.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Check if the rectangle lies entirely inside a `width x height` image.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.right <= width && self.bottom <= height
    }
}

impl std::fmt::Display for CropRect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}
