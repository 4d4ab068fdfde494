//! WASM bindings for the crop session.
//!
//! The browser owns the canvas and the file picker. It hands file bytes to the
//! session under the names the user picked, forwards pointer events, and gets
//! back rasters to draw and encoded files to download.
//!
//! # Example
//!
//! ```typescript
//! import { JsCropSession } from '@multicrop/wasm';
//!
//! const session = new JsCropSession();
//! for (const file of files) {
//!   session.add_file(file.name, new Uint8Array(await file.arrayBuffer()));
//! }
//! const reference = session.open_selection(files.map((f) => f.name));
//!
//! canvas.onpointerdown = (e) => session.on_press(e.offsetX, e.offsetY);
//! canvas.onpointermove = (e) => session.on_move(e.offsetX, e.offsetY);
//! canvas.onpointerup = (e) => session.on_release(e.offsetX, e.offsetY);
//!
//! const cropped = session.crop();
//! const report = session.save_selection();
//! console.log(report.summary);
//! ```

use std::collections::HashSet;
use std::path::PathBuf;

use multicrop_core::{
    CropSession, MemoryStore, MulticropConfig, MulticropError, Point, PointerHandler,
};
use wasm_bindgen::prelude::*;

use crate::types::{FailureJs, JsRasterImage, JsSaveReport};

fn to_js_error(err: MulticropError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// A cropping session backed by in-memory files.
#[wasm_bindgen]
pub struct JsCropSession {
    inner: CropSession<MemoryStore>,
}

#[wasm_bindgen]
impl JsCropSession {
    /// Create a session with default settings.
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsCropSession {
        JsCropSession {
            inner: CropSession::new(MemoryStore::new()),
        }
    }

    /// Create a session from a settings object, e.g.
    /// `{ output_prefix: "cropped-", jpeg_quality: 90 }`. Missing keys keep
    /// their defaults.
    pub fn with_config(config: JsValue) -> Result<JsCropSession, JsValue> {
        let config: MulticropConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;
        Ok(JsCropSession {
            inner: CropSession::with_config(MemoryStore::new(), config),
        })
    }

    /// Make a picked file available under `name`.
    pub fn add_file(&mut self, name: String, bytes: Vec<u8>) {
        self.inner.store_mut().insert(name, bytes);
    }

    /// Forget a file added earlier. Returns whether it was present.
    pub fn remove_file(&mut self, name: String) -> bool {
        self.inner
            .store_mut()
            .remove(std::path::Path::new(&name))
            .is_some()
    }

    /// Forget every added file.
    pub fn clear_files(&mut self) {
        self.inner.store_mut().clear();
    }

    /// Number of files currently held.
    #[wasm_bindgen(getter)]
    pub fn file_count(&self) -> usize {
        self.inner.store().len()
    }

    /// Validate the picked names and load the first one as the reference.
    ///
    /// Files added for an earlier selection and not picked again are dropped.
    pub fn open_selection(&mut self, names: Vec<String>) -> Result<JsRasterImage, JsValue> {
        self.open_selection_inner(names).map_err(to_js_error)
    }

    /// Load `name` as the reference image, discarding earlier crops.
    pub fn load_reference(&mut self, name: String) -> Result<JsRasterImage, JsValue> {
        self.inner
            .load_reference(name)
            .map(JsRasterImage::from_handle)
            .map_err(to_js_error)
    }

    /// Whether a reference image is loaded.
    #[wasm_bindgen(getter)]
    pub fn active(&self) -> bool {
        self.inner.is_active()
    }

    pub fn on_press(&mut self, x: i32, y: i32) {
        self.inner.on_press(Point::new(x, y));
    }

    pub fn on_move(&mut self, x: i32, y: i32) {
        self.inner.on_move(Point::new(x, y));
    }

    pub fn on_release(&mut self, x: i32, y: i32) {
        self.inner.on_release(Point::new(x, y));
    }

    /// The rectangle to draw as live preview: `{ x0, y0, x1, y1 }` or `undefined`.
    pub fn selection(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.selection())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Crop the reference image to the drawn rectangle and return it.
    pub fn crop(&mut self) -> Result<JsRasterImage, JsValue> {
        self.crop_inner().map_err(to_js_error)
    }

    /// Committed crops as `[{ left, top, right, bottom }]`.
    pub fn history(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.inner.history().as_slice())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Crop every selected file and encode the results.
    pub fn save_selection(&mut self) -> Result<JsSaveReport, JsValue> {
        self.save_selection_inner().map_err(to_js_error)
    }
}

impl Default for JsCropSession {
    fn default() -> Self {
        Self::new()
    }
}

impl JsCropSession {
    fn open_selection_inner(&mut self, names: Vec<String>) -> Result<JsRasterImage, MulticropError> {
        let paths = names.into_iter().map(PathBuf::from).collect();
        let reference = self
            .inner
            .open_selection(paths)
            .map(JsRasterImage::from_handle)?;

        let selected: HashSet<PathBuf> = self.inner.selected_files().iter().cloned().collect();
        let store = self.inner.store_mut();
        let before = store.len();
        store.retain(|path| selected.contains(path));
        log::debug!("dropped {} files outside the selection", before - store.len());

        Ok(reference)
    }

    fn crop_inner(&mut self) -> Result<JsRasterImage, MulticropError> {
        self.inner.crop().map(JsRasterImage::from_handle)
    }

    fn save_selection_inner(&mut self) -> Result<JsSaveReport, MulticropError> {
        let report = self.inner.save_selection()?;
        let summary = report.summary("saved");

        // Outputs leave WASM memory with the report
        let store = self.inner.store_mut();
        let files = report
            .succeeded
            .iter()
            .filter_map(|path| {
                store
                    .remove(path)
                    .map(|bytes| (path.to_string_lossy().into_owned(), bytes))
            })
            .collect();
        let failures = report
            .failed
            .iter()
            .map(|failure| FailureJs {
                path: failure.path.to_string_lossy().into_owned(),
                message: failure.error.to_string(),
            })
            .collect();

        Ok(JsSaveReport::new(files, failures, summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, RgbImage};
    use std::io::Cursor;

    fn png(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(RgbImage::new(width, height));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    fn session_with(files: &[(&str, Vec<u8>)]) -> JsCropSession {
        let mut session = JsCropSession::new();
        for (name, bytes) in files {
            session.add_file(name.to_string(), bytes.clone());
        }
        session
    }

    #[test]
    fn test_open_and_crop() {
        let mut session = session_with(&[("shots/a.png", png(800, 600))]);
        let reference = session
            .open_selection_inner(vec!["shots/a.png".to_string()])
            .unwrap();
        assert_eq!((reference.width(), reference.height()), (800, 600));
        assert!(session.active());

        session.on_press(100, 100);
        session.on_move(300, 400);
        session.on_release(300, 400);
        let cropped = session.crop_inner().unwrap();

        assert_eq!((cropped.width(), cropped.height()), (200, 300));
        assert_eq!(cropped.byte_length(), 200 * 300 * 4);
    }

    #[test]
    fn test_open_selection_drops_stale_inputs() {
        let mut session = session_with(&[("old.png", png(10, 10))]);
        session
            .open_selection_inner(vec!["old.png".to_string()])
            .unwrap();
        session.add_file("new.png".to_string(), png(10, 10));
        assert_eq!(session.file_count(), 2);

        session
            .open_selection_inner(vec!["new.png".to_string()])
            .unwrap();
        assert_eq!(session.file_count(), 1);
        assert!(session.inner.store().contains(std::path::Path::new("new.png")));
    }

    #[test]
    fn test_failed_open_keeps_inputs() {
        let mut session = session_with(&[("a.png", png(10, 10)), ("b.png", png(10, 10))]);
        assert!(session
            .open_selection_inner(vec!["missing.png".to_string()])
            .is_err());
        assert_eq!(session.file_count(), 2);
    }

    #[test]
    fn test_remove_and_clear_files() {
        let mut session = session_with(&[("a.png", png(4, 4)), ("b.png", png(4, 4))]);

        assert!(session.remove_file("a.png".to_string()));
        assert!(!session.remove_file("a.png".to_string()));
        assert_eq!(session.file_count(), 1);

        session.clear_files();
        assert_eq!(session.file_count(), 0);
    }

    #[test]
    fn test_crop_before_open() {
        let mut session = JsCropSession::new();
        assert!(matches!(
            session.crop_inner(),
            Err(MulticropError::NoReferenceImage)
        ));
    }

    #[test]
    fn test_save_selection_moves_outputs_out() {
        let mut session = session_with(&[
            ("a.png", png(50, 50)),
            ("b.png", b"broken".to_vec()),
            ("c.png", png(50, 50)),
        ]);
        session
            .open_selection_inner(vec![
                "a.png".to_string(),
                "b.png".to_string(),
                "c.png".to_string(),
            ])
            .unwrap();
        session.on_press(0, 0);
        session.on_release(20, 10);
        session.crop_inner().unwrap();

        let report = session.save_selection_inner().unwrap();
        assert_eq!(report.count(), 2);
        assert_eq!(report.path(0).as_deref(), Some("Multicropped-a.png"));
        assert_eq!(report.path(1).as_deref(), Some("Multicropped-c.png"));
        assert_eq!(report.failure_list().len(), 1);
        assert_eq!(report.failure_list()[0].path, "b.png");
        assert!(report.summary().starts_with("2 of 3 saved"));

        let bytes = report.bytes(0).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (20, 10));
        assert!(!session.inner.store().contains(std::path::Path::new("Multicropped-a.png")));
    }
}
