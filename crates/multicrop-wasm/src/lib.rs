//! Multicrop WASM - WebAssembly bindings for Multicrop
//!
//! This crate exposes the multicrop-core session to a JavaScript front end,
//! which draws the canvas, runs the file picker and offers the results for
//! download.
//!
//! # Module Structure
//!
//! - `session` - The crop session: files in, pointer events, crop, save
//! - `types` - WASM-compatible wrapper types for rasters and save reports
//! - `logger` - Console backend for the `log` facade
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsCropSession } from '@multicrop/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const session = new JsCropSession();
//! session.add_file(file.name, new Uint8Array(await file.arrayBuffer()));
//! const reference = session.open_selection([file.name]);
//! console.log(`Loaded ${reference.width}x${reference.height}`);
//! ```

use wasm_bindgen::prelude::*;

mod logger;
mod session;
mod types;

// Re-export public types
pub use session::JsCropSession;
pub use types::{JsRasterImage, JsSaveReport};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    logger::init(log::LevelFilter::Info);
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
