//! The editing session.
//!
//! `Editor` is the single controller object the front-end talks to. It owns
//! every piece of mutable state: the adjustment settings, the active
//! adjustment key bound to the shared slider, the decoded source image slot,
//! and the load generation counter. Event handlers in JavaScript call the
//! mutators here and then repaint from [`Editor::render`].
//!
//! # Load generations
//!
//! Image decoding is asynchronous on the JS side, so two loads can overlap.
//! [`Editor::begin_load`] issues a generation token and
//! [`Editor::complete_load`] applies a decoded image only if its token is
//! still current: the last load started always wins, and a stale decode is
//! dropped instead of clobbering a newer image.

use pixelperfect_core::{
    decode_image, encode_export, render_frame, AdjustmentKey, EditSettings, FilterChain, Raster,
    EXPORT_FILE_NAME,
};
use wasm_bindgen::prelude::*;

use crate::types::JsRaster;

/// The editing session controller.
#[wasm_bindgen]
pub struct Editor {
    settings: EditSettings,
    active: AdjustmentKey,
    source: Option<Raster>,
    load_generation: u32,
}

#[wasm_bindgen]
impl Editor {
    /// Create a session with default settings and no image loaded.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Editor {
        Editor {
            settings: EditSettings::new(),
            active: AdjustmentKey::Brightness,
            source: None,
            load_generation: 0,
        }
    }

    /// Restore every adjustment to its default and make brightness the
    /// active key again. The loaded image is kept.
    pub fn reset(&mut self) {
        self.settings = EditSettings::default();
        self.active = AdjustmentKey::Brightness;
    }

    /// Select the adjustment bound to the shared slider.
    ///
    /// Unknown names are a no-op and return false; the key set is closed.
    /// After a successful switch the front-end re-reads `slider_max` and
    /// `active_value` to rebind the control.
    pub fn set_active(&mut self, name: &str) -> bool {
        match AdjustmentKey::from_name(name) {
            Some(key) => {
                self.active = key;
                true
            }
            None => false,
        }
    }

    /// Name of the active adjustment key.
    pub fn active_name(&self) -> String {
        self.active.name().to_string()
    }

    /// Current value of the active adjustment.
    pub fn active_value(&self) -> f32 {
        self.settings.value(self.active)
    }

    /// Slider upper bound for the active adjustment.
    pub fn slider_max(&self) -> u32 {
        self.active.slider_max()
    }

    /// Write a slider value through the active key.
    ///
    /// The value is stored as-is; the slider's own min/max enforce the
    /// range.
    pub fn set_active_value(&mut self, value: f32) {
        self.settings.set_value(self.active, value);
    }

    /// Step the rotation accumulator (±90 per action button).
    pub fn rotate_by(&mut self, delta_degrees: i32) {
        self.settings.rotate_by(delta_degrees);
    }

    /// Toggle the horizontal mirror.
    pub fn toggle_flip_h(&mut self) {
        self.settings.toggle_flip_h();
    }

    /// Toggle the vertical mirror.
    pub fn toggle_flip_v(&mut self) {
        self.settings.toggle_flip_v();
    }

    /// Start a load and get its generation token.
    ///
    /// Every call invalidates the tokens of loads still in flight.
    pub fn begin_load(&mut self) -> u32 {
        self.load_generation = self.load_generation.wrapping_add(1);
        self.load_generation
    }

    /// Finish a load started with [`begin_load`](Editor::begin_load).
    ///
    /// Applies the decoded image and resets the settings only when `token`
    /// is still the current generation; a stale token is dropped and false
    /// is returned.
    pub fn complete_load(&mut self, token: u32, image: &JsRaster) -> bool {
        self.apply_load(token, image.to_raster())
    }

    /// Decode and load an image in one synchronous step.
    pub fn load_from_bytes(&mut self, bytes: &[u8]) -> Result<(), JsValue> {
        let token = self.begin_load();
        let raster = decode_image(bytes).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.apply_load(token, raster);
        Ok(())
    }

    /// True once a load has completed.
    pub fn has_image(&self) -> bool {
        self.source.is_some()
    }

    /// Export stays disabled until an image is loaded.
    pub fn can_export(&self) -> bool {
        self.has_image()
    }

    /// Output surface width under the current rotation, if an image is
    /// loaded.
    pub fn output_width(&self) -> Option<u32> {
        self.output_dimensions().map(|(w, _)| w)
    }

    /// Output surface height under the current rotation, if an image is
    /// loaded.
    pub fn output_height(&self) -> Option<u32> {
        self.output_dimensions().map(|(_, h)| h)
    }

    /// Render the current frame.
    ///
    /// Returns undefined when no image is loaded yet, which the front-end
    /// treats as "nothing to draw".
    pub fn render(&self) -> Option<JsRaster> {
        self.source
            .as_ref()
            .map(|source| JsRaster::from_raster(render_frame(&self.settings, source)))
    }

    /// The composed filter expression for the current settings, valid as a
    /// 2D canvas context `filter` value.
    pub fn filter_expression(&self) -> String {
        FilterChain::from_settings(&self.settings).expression()
    }

    /// Render and encode the current frame as a JPEG for download.
    ///
    /// The front-end keeps the download control disabled until
    /// [`can_export`](Editor::can_export) is true; calling this without an
    /// image is an error.
    pub fn export_jpeg(&self) -> Result<Vec<u8>, JsValue> {
        let source = self
            .source
            .as_ref()
            .ok_or_else(|| JsValue::from_str("No image loaded"))?;
        let frame = render_frame(&self.settings, source);
        encode_export(&frame).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Fixed base name for the downloaded file.
    pub fn export_file_name() -> String {
        EXPORT_FILE_NAME.to_string()
    }

    /// Serialize the current settings to a plain JS object.
    pub fn settings_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.settings).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Restore settings from a JS object produced by
    /// [`settings_json`](Editor::settings_json).
    pub fn restore_settings_json(&mut self, value: JsValue) -> Result<(), JsValue> {
        self.settings =
            serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    fn output_dimensions(&self) -> Option<(u32, u32)> {
        self.source.as_ref().map(|source| {
            pixelperfect_core::oriented_dimensions(
                source.width,
                source.height,
                self.settings.rotate,
            )
        })
    }

    fn apply_load(&mut self, token: u32, raster: Raster) -> bool {
        if token != self.load_generation {
            return false;
        }
        self.source = Some(raster);
        self.reset();
        true
    }

    #[cfg(test)]
    fn settings(&self) -> &EditSettings {
        &self.settings
    }
}
