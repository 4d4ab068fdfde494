//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core Multicrop
//! types, handling the conversion between Rust and JavaScript representations.

use multicrop_core::ImageHandle;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// A raster ready to be drawn on a canvas.
///
/// Pixels are RGBA, 4 bytes per pixel in row-major order, which is the layout
/// `ImageData` expects.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is
/// made to JavaScript memory as a `Uint8Array`.
#[wasm_bindgen]
pub struct JsRasterImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsRasterImage {
    /// Create a new JsRasterImage from dimensions and RGBA pixel data.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsRasterImage {
        JsRasterImage {
            width,
            height,
            pixels,
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGBA pixel data as Uint8Array (copied).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }
}

impl JsRasterImage {
    pub(crate) fn from_handle(handle: &ImageHandle) -> Self {
        Self {
            width: handle.width(),
            height: handle.height(),
            pixels: handle.to_rgba_pixels(),
        }
    }
}

/// A file that could not be cropped or saved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailureJs {
    pub path: String,
    pub message: String,
}

/// Outcome of saving a selection.
///
/// Encoded output files stay in WASM memory until read with `bytes(i)`.
#[wasm_bindgen]
pub struct JsSaveReport {
    files: Vec<(String, Vec<u8>)>,
    failures: Vec<FailureJs>,
    summary: String,
}

#[wasm_bindgen]
impl JsSaveReport {
    /// Number of files saved
    #[wasm_bindgen(getter)]
    pub fn count(&self) -> usize {
        self.files.len()
    }

    /// Output path of the i-th saved file
    pub fn path(&self, index: usize) -> Option<String> {
        self.files.get(index).map(|(path, _)| path.clone())
    }

    /// Encoded bytes of the i-th saved file, in the source format
    pub fn bytes(&self, index: usize) -> Option<Vec<u8>> {
        self.files.get(index).map(|(_, bytes)| bytes.clone())
    }

    /// Failures as `[{ path, message }]`
    pub fn failures(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.failures).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// e.g. "2 of 3 saved; failures: ..."
    #[wasm_bindgen(getter)]
    pub fn summary(&self) -> String {
        self.summary.clone()
    }
}

impl JsSaveReport {
    pub(crate) fn new(
        files: Vec<(String, Vec<u8>)>,
        failures: Vec<FailureJs>,
        summary: String,
    ) -> Self {
        Self {
            files,
            failures,
            summary,
        }
    }

    pub(crate) fn failure_list(&self) -> &[FailureJs] {
        &self.failures
    }
}
