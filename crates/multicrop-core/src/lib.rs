//! Multicrop Core - batch cropping library
//!
//! This crate provides the core of Multicrop: draw one crop rectangle on a
//! reference image and apply the same rectangle (or sequence of rectangles)
//! to every other selected image, saving each result as
//! `Multicropped-<name>` next to its source.
//!
//! Drawing, file dialogs and windows belong to the front end. The core only
//! takes pointer events and file paths, and hands back rectangles, rasters
//! and output paths.

pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod geometry;
pub mod paths;
pub mod pipeline;
pub mod selection;
pub mod store;
pub mod transform;

pub use config::MulticropConfig;
pub use decode::ImageHandle;
pub use error::MulticropError;
pub use geometry::{CropRect, Point, SelectionRect};
pub use paths::derive_output_path;
pub use pipeline::{BatchFailure, BatchReport, CropHistory, CropSession, OutputSpec};
pub use selection::{PointerHandler, SelectionTracker};
pub use store::{FsStore, ImageStore, MemoryStore};
pub use transform::apply_crop;
