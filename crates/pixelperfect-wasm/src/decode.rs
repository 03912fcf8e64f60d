//! Image decoding WASM bindings.
//!
//! Exposes the core decoder to JavaScript so a file picked or dropped by the
//! user can be turned into a raster off the main thread (e.g. in a Web
//! Worker) before being handed to the editor session.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image } from '@pixelperfect/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! console.log(`Decoded ${image.width}x${image.height}`);
//! ```

use pixelperfect_core::decode;
use wasm_bindgen::prelude::*;

use crate::types::JsRaster;

/// Decode an image file (JPEG or PNG) from bytes.
///
/// The container format is guessed from the bytes and EXIF orientation is
/// applied, so the result matches what the browser would have displayed for
/// the same file.
///
/// # Errors
///
/// Returns an error if the bytes are not a recognized image container or
/// the file is corrupted.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsRaster, JsValue> {
    decode::decode_image(bytes)
        .map(JsRaster::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
