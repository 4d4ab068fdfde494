//! Batch crop pipeline.
//!
//! A [`CropSession`] holds one reference image. Crops drawn on it are applied
//! in place and appended to a [`CropHistory`]; the history is then replayed on
//! every other selected file and the results are written next to their
//! sources.
//!
//! # Flow
//!
//! 1. `open_selection` / `load_reference` - start a session
//! 2. pointer events + `crop` - commit one or more rectangles
//! 3. `apply_all` - produce an [`OutputSpec`] per file
//! 4. `persist` - encode and write each output
//!
//! Steps 3 and 4 report failures per file in a [`BatchReport`] and keep going.

mod history;
mod report;
mod session;

pub use history::CropHistory;
pub use report::{BatchFailure, BatchReport, OutputSpec};
pub use session::CropSession;
