//! PixelPerfect WASM - WebAssembly bindings for PixelPerfect
//!
//! This crate exposes the pixelperfect-core functionality to the
//! JavaScript front-end of the editor.
//!
//! # Module Structure
//!
//! - `editor` - The editing session controller (settings, active key,
//!   image slot, load generations, render and export)
//! - `types` - WASM-compatible wrapper types for image data
//! - `decode` - Standalone image decoding bindings
//! - `encode` - Standalone JPEG encoding bindings
//!
//! # Usage
//!
//! ```typescript
//! import init, { Editor } from '@pixelperfect/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const editor = new Editor();
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! editor.load_from_bytes(bytes);
//!
//! editor.set_active('brightness');
//! editor.set_active_value(150);
//! const frame = editor.render();
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod editor;
mod encode;
mod types;

// Re-export public types
pub use decode::decode_image;
pub use editor::Editor;
pub use encode::{encode_jpeg, encode_jpeg_from_raster};
pub use types::JsRaster;

/// Slider upper bound for an adjustment key name.
///
/// Unknown names fall back to a bound of 100 rather than failing.
#[wasm_bindgen]
pub fn slider_max_for(name: &str) -> u32 {
    pixelperfect_core::slider_max_for(name)
}

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&format!("pixelperfect-wasm {} ready", version()).into());
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
