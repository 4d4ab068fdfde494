//! The crop session: one reference image, its crop history, and the batch
//! operations that replay that history on the rest of the selection.

use std::path::{Path, PathBuf};

use crate::config::MulticropConfig;
use crate::decode::{decode_image, ImageHandle};
use crate::encode::encode_image;
use crate::error::MulticropError;
use crate::geometry::{CropRect, Point, SelectionRect};
use crate::paths::{derive_output_path, validate_selection};
use crate::selection::{PointerHandler, SelectionTracker};
use crate::store::ImageStore;
use crate::transform::apply_crop;

use super::history::CropHistory;
use super::report::{BatchReport, OutputSpec};

/// State of one cropping session.
///
/// Owns the selection tracker, the crop history and the reference image.
/// Pointer events go in through [`PointerHandler`]; everything else is an
/// explicit method call from the front end.
#[derive(Debug)]
pub struct CropSession<S: ImageStore> {
    store: S,
    config: MulticropConfig,
    tracker: SelectionTracker,
    history: CropHistory,
    reference: Option<ImageHandle>,
    selected: Vec<PathBuf>,
}

impl<S: ImageStore> CropSession<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, MulticropConfig::default())
    }

    pub fn with_config(store: S, config: MulticropConfig) -> Self {
        Self {
            store,
            config,
            tracker: SelectionTracker::new(),
            history: CropHistory::new(),
            reference: None,
            selected: Vec::new(),
        }
    }

    pub fn config(&self) -> &MulticropConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn history(&self) -> &CropHistory {
        &self.history
    }

    pub fn reference(&self) -> Option<&ImageHandle> {
        self.reference.as_ref()
    }

    /// True once a reference image is loaded.
    pub fn is_active(&self) -> bool {
        self.reference.is_some()
    }

    /// Live selection rectangle for the front end to draw.
    pub fn selection(&self) -> Option<SelectionRect> {
        self.tracker.selection()
    }

    pub fn tracker(&self) -> &SelectionTracker {
        &self.tracker
    }

    /// Files remembered by the last successful [`open_selection`](Self::open_selection).
    pub fn selected_files(&self) -> &[PathBuf] {
        &self.selected
    }

    fn read_image(&self, path: &Path) -> Result<ImageHandle, MulticropError> {
        let bytes = self
            .store
            .read(path)
            .map_err(|e| MulticropError::unreadable(path, e))?;
        let (image, format) =
            decode_image(&bytes).map_err(|e| MulticropError::unreadable(path, e))?;
        Ok(ImageHandle::new(path, image, format))
    }

    /// Load a new reference image and start a new session on it.
    ///
    /// On success the crop history and any pending selection are discarded.
    /// On failure the current session is left untouched.
    pub fn load_reference(&mut self, path: impl AsRef<Path>) -> Result<&ImageHandle, MulticropError> {
        let handle = self.read_image(path.as_ref())?;
        log::info!(
            "loaded reference {} ({}x{}, {:?})",
            handle.path.display(),
            handle.width(),
            handle.height(),
            handle.format
        );

        self.history.clear();
        self.tracker.reset();
        self.tracker.set_bounds(handle.width(), handle.height());
        Ok(self.reference.insert(handle))
    }

    /// Crop the reference image in place and record the crop.
    ///
    /// # Errors
    ///
    /// - `NoReferenceImage` when nothing is loaded
    /// - `NoActiveSelection` when `rect` is `None`
    /// - `EmptySelection` for zero-area rectangles; the history is unchanged
    /// - `CropOutOfBounds` when `rect` does not fit the current reference
    pub fn commit_crop(&mut self, rect: Option<CropRect>) -> Result<&ImageHandle, MulticropError> {
        let reference = self
            .reference
            .as_mut()
            .ok_or(MulticropError::NoReferenceImage)?;
        let rect = rect.ok_or(MulticropError::NoActiveSelection)?.normalized();

        reference.image = apply_crop(&reference.image, rect)
            .map_err(|e| MulticropError::from_crop(&reference.path, e))?;
        self.history.push(rect);
        self.tracker
            .set_bounds(reference.image.width(), reference.image.height());

        log::debug!(
            "crop {} committed, reference now {}x{} ({} crops recorded)",
            rect,
            reference.image.width(),
            reference.image.height(),
            self.history.len()
        );
        Ok(reference)
    }

    /// Commit the tracker's pending selection.
    ///
    /// The selection is only consumed when a reference image is loaded.
    pub fn crop(&mut self) -> Result<&ImageHandle, MulticropError> {
        if !self.is_active() {
            return Err(MulticropError::NoReferenceImage);
        }
        let rect = self.tracker.commit();
        self.commit_crop(rect)
    }

    /// Produce the cropped output for every path, in order.
    ///
    /// The reference path yields the in-memory cropped reference. Every other
    /// path is read fresh and has the whole crop history replayed on it.
    /// Unreadable files and replays that do not fit are reported per file and
    /// the remaining files are still processed.
    pub fn apply_all<P: AsRef<Path>>(
        &self,
        paths: &[P],
    ) -> Result<BatchReport<OutputSpec>, MulticropError> {
        let reference = self
            .reference
            .as_ref()
            .ok_or(MulticropError::NoReferenceImage)?;

        if let Some((width, height)) = self.history.final_dimensions() {
            log::debug!(
                "replaying {} crops onto {} files, expecting {}x{} outputs",
                self.history.len(),
                paths.len(),
                width,
                height
            );
        }

        let mut report = BatchReport::new();
        for path in paths {
            let path = path.as_ref();
            match self.crop_file(reference, path) {
                Ok(spec) => report.push_success(spec),
                Err(err) => {
                    log::warn!("skipping {}: {}", path.display(), err);
                    report.push_failure(path, err);
                }
            }
        }

        log::info!("{}", report.summary("cropped"));
        Ok(report)
    }

    fn crop_file(&self, reference: &ImageHandle, path: &Path) -> Result<OutputSpec, MulticropError> {
        let output = derive_output_path(path, &self.config.output_prefix);
        if path == reference.path() {
            return Ok(OutputSpec {
                source: path.to_path_buf(),
                output,
                image: reference.image.clone(),
                format: reference.format,
            });
        }

        let source = self.read_image(path)?;
        let image = self
            .history
            .replay(&source.image)
            .map_err(|e| MulticropError::from_crop(path, e))?;
        Ok(OutputSpec {
            source: source.path,
            output,
            image,
            format: source.format,
        })
    }

    /// Write every output, replacing existing files without asking.
    ///
    /// Returns the paths written; failed writes are reported per file and do
    /// not stop the batch.
    pub fn persist(&mut self, specs: &[OutputSpec]) -> BatchReport<PathBuf> {
        let mut report = BatchReport::new();
        for spec in specs {
            match self.write_output(spec) {
                Ok(()) => report.push_success(spec.output.clone()),
                Err(err) => {
                    log::warn!("failed to save {}: {}", spec.output.display(), err);
                    report.push_failure(&spec.output, err);
                }
            }
        }

        log::info!("{}", report.summary("saved"));
        report
    }

    fn write_output(&mut self, spec: &OutputSpec) -> Result<(), MulticropError> {
        let bytes = encode_image(&spec.image, spec.format, self.config.jpeg_quality)
            .map_err(|e| MulticropError::write(&spec.output, e))?;
        self.store
            .write(&spec.output, &bytes)
            .map_err(|e| MulticropError::write(&spec.output, e))
    }

    /// Validate a file selection, load its first file as the reference and
    /// remember the whole selection for [`save_selection`](Self::save_selection).
    pub fn open_selection(&mut self, paths: Vec<PathBuf>) -> Result<&ImageHandle, MulticropError> {
        validate_selection(paths.as_slice(), &self.config)?;
        let first = paths[0].clone();
        self.load_reference(&first)?;
        self.selected = paths;
        self.reference
            .as_ref()
            .ok_or(MulticropError::NoReferenceImage)
    }

    /// [`apply_all`](Self::apply_all) over the remembered selection.
    pub fn apply_selection(&self) -> Result<BatchReport<OutputSpec>, MulticropError> {
        self.apply_all(self.selected.as_slice())
    }

    /// Crop and save every selected file.
    ///
    /// Failures from both steps are merged into one report, so its summary
    /// reads `N of M saved` over the whole selection.
    pub fn save_selection(&mut self) -> Result<BatchReport<PathBuf>, MulticropError> {
        let applied = self.apply_selection()?;
        let mut saved = self.persist(&applied.succeeded);

        let mut failed = applied.failed;
        failed.append(&mut saved.failed);
        saved.failed = failed;
        Ok(saved)
    }
}

impl<S: ImageStore> PointerHandler for CropSession<S> {
    fn on_press(&mut self, pointer: Point) {
        self.tracker.on_press(pointer);
    }

    fn on_move(&mut self, pointer: Point) {
        self.tracker.on_move(pointer);
    }

    fn on_release(&mut self, pointer: Point) {
        self.tracker.on_release(pointer);
    }
}
