//! Image encoding WASM bindings.
//!
//! Exposes the core JPEG encoder to JavaScript for the export workflow. The
//! editor session's `export_jpeg` covers the normal download path; these
//! standalone functions let a front-end encode arbitrary rasters (e.g. from
//! a worker) with an explicit quality.
//!
//! # Example
//!
//! ```typescript
//! import { encode_jpeg, encode_jpeg_from_raster } from '@pixelperfect/wasm';
//!
//! const jpegBytes = encode_jpeg(pixels, width, height, 90);
//! const blob = new Blob([jpegBytes], { type: 'image/jpeg' });
//! ```

use pixelperfect_core::encode;
use wasm_bindgen::prelude::*;

use crate::types::JsRaster;

/// Encode RGB pixel data to JPEG bytes.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data as a `Uint8Array` (3 bytes per pixel)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `quality` - JPEG quality (1-100; exports use 90)
///
/// # Errors
///
/// Returns an error if the pixel buffer length doesn't match
/// width * height * 3, a dimension is zero, or encoding fails internally.
#[wasm_bindgen]
pub fn encode_jpeg(pixels: &[u8], width: u32, height: u32, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(pixels, width, height, quality).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode a raster to JPEG bytes.
///
/// Convenience wrapper over [`encode_jpeg`] for an existing `JsRaster`.
#[wasm_bindgen]
pub fn encode_jpeg_from_raster(raster: &JsRaster, quality: u8) -> Result<Vec<u8>, JsValue> {
    let pixels = raster.pixels();
    encode::encode_jpeg(&pixels, raster.width(), raster.height(), quality)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Tests for encode bindings.
///
/// The `Result<_, JsValue>` surface only runs on wasm32; see the tests in
/// `pixelperfect_core::encode` for the underlying functionality.
#[cfg(test)]
mod tests {
    use crate::types::JsRaster;

    #[test]
    fn test_encode_via_core_produces_valid_jpeg() {
        let raster = JsRaster::new(10, 10, vec![128u8; 10 * 10 * 3]);
        let jpeg =
            pixelperfect_core::encode_jpeg(&raster.pixels(), raster.width(), raster.height(), 90)
                .unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }
}
