//! PixelPerfect Core - Image processing library
//!
//! This crate provides the core image processing functionality for
//! PixelPerfect: adjustment settings, the ordered filter chain, quarter-turn
//! orientation, frame rendering, and image decode/encode.

pub mod decode;
pub mod encode;
pub mod filters;
pub mod render;
pub mod transform;

pub use decode::{decode_image, DecodeError, Orientation, Raster};
pub use encode::{encode_export, encode_jpeg, EncodeError, EXPORT_FILE_NAME, EXPORT_QUALITY};
pub use filters::FilterChain;
pub use render::render_frame;
pub use transform::{apply_orientation, oriented_dimensions, swaps_dimensions};

/// Adjustment settings for an editing session.
///
/// The six percent-scale values feed the filter chain; `rotate` is an
/// unbounded accumulator stepped by ±90 per action, and the flip fields are
/// pure axis scales that only ever hold 1 or -1.
///
/// Serialized field names are camelCase to match the front-end's settings
/// object.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditSettings {
    /// Brightness (0 to 200 percent, 100 = unchanged)
    pub brightness: f32,
    /// Saturation (0 to 200 percent, 100 = unchanged)
    pub saturation: f32,
    /// Color inversion (0 to 100 percent, 0 = unchanged)
    pub inversion: f32,
    /// Grayscale mix (0 to 100 percent, 0 = unchanged)
    pub grayscale: f32,
    /// Contrast (0 to 200 percent, 100 = unchanged)
    pub contrast: f32,
    /// Sepia mix (0 to 100 percent, 0 = unchanged)
    pub sepia: f32,
    /// Accumulated rotation in degrees, stepped by ±90
    pub rotate: i32,
    /// Horizontal axis scale: 1 or -1
    pub flip_h: i8,
    /// Vertical axis scale: 1 or -1
    pub flip_v: i8,
}

impl Default for EditSettings {
    fn default() -> Self {
        Self {
            brightness: 100.0,
            saturation: 100.0,
            inversion: 0.0,
            grayscale: 0.0,
            contrast: 100.0,
            sepia: 0.0,
            rotate: 0,
            flip_h: 1,
            flip_v: 1,
        }
    }
}

impl EditSettings {
    /// Create settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all values are at their defaults
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Read the value of one of the six bounded adjustments.
    pub fn value(&self, key: AdjustmentKey) -> f32 {
        match key {
            AdjustmentKey::Brightness => self.brightness,
            AdjustmentKey::Saturation => self.saturation,
            AdjustmentKey::Inversion => self.inversion,
            AdjustmentKey::Grayscale => self.grayscale,
            AdjustmentKey::Contrast => self.contrast,
            AdjustmentKey::Sepia => self.sepia,
        }
    }

    /// Write the value of one of the six bounded adjustments.
    ///
    /// No clamping is performed here: range enforcement belongs to the input
    /// control that produced the value.
    pub fn set_value(&mut self, key: AdjustmentKey, value: f32) {
        match key {
            AdjustmentKey::Brightness => self.brightness = value,
            AdjustmentKey::Saturation => self.saturation = value,
            AdjustmentKey::Inversion => self.inversion = value,
            AdjustmentKey::Grayscale => self.grayscale = value,
            AdjustmentKey::Contrast => self.contrast = value,
            AdjustmentKey::Sepia => self.sepia = value,
        }
    }

    /// Add a rotation step. The accumulator is unbounded; equivalent angles
    /// are normalized downstream where the geometry is computed.
    pub fn rotate_by(&mut self, delta_degrees: i32) {
        self.rotate += delta_degrees;
    }

    /// Toggle the horizontal mirror. Applying twice restores the original.
    pub fn toggle_flip_h(&mut self) {
        self.flip_h = -self.flip_h;
    }

    /// Toggle the vertical mirror. Applying twice restores the original.
    pub fn toggle_flip_v(&mut self) {
        self.flip_v = -self.flip_v;
    }

    /// True when the current rotation turns the image on its side, swapping
    /// output width and height. Computed from the live `rotate` value.
    pub fn swaps_dimensions(&self) -> bool {
        transform::swaps_dimensions(self.rotate)
    }
}

/// One of the six percent-scale adjustments.
///
/// The declaration order is the filter composition order; composition is not
/// commutative, so this order is part of the rendering contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustmentKey {
    Brightness,
    Saturation,
    Inversion,
    Grayscale,
    Contrast,
    Sepia,
}

impl AdjustmentKey {
    /// All keys, in filter composition order.
    pub const ALL: [AdjustmentKey; 6] = [
        AdjustmentKey::Brightness,
        AdjustmentKey::Saturation,
        AdjustmentKey::Inversion,
        AdjustmentKey::Grayscale,
        AdjustmentKey::Contrast,
        AdjustmentKey::Sepia,
    ];

    /// The settings-key name, as used by the adjustment selector controls.
    pub fn name(self) -> &'static str {
        match self {
            AdjustmentKey::Brightness => "brightness",
            AdjustmentKey::Saturation => "saturation",
            AdjustmentKey::Inversion => "inversion",
            AdjustmentKey::Grayscale => "grayscale",
            AdjustmentKey::Contrast => "contrast",
            AdjustmentKey::Sepia => "sepia",
        }
    }

    /// Parse a settings-key name. The key set is closed; anything else is None.
    pub fn from_name(name: &str) -> Option<AdjustmentKey> {
        AdjustmentKey::ALL.into_iter().find(|k| k.name() == name)
    }

    /// The filter function name used when composing a canvas filter expression.
    pub fn css_function(self) -> &'static str {
        match self {
            AdjustmentKey::Brightness => "brightness",
            AdjustmentKey::Saturation => "saturate",
            AdjustmentKey::Inversion => "invert",
            AdjustmentKey::Grayscale => "grayscale",
            AdjustmentKey::Contrast => "contrast",
            AdjustmentKey::Sepia => "sepia",
        }
    }

    /// Upper bound for the shared slider when this key is active.
    pub fn slider_max(self) -> u32 {
        match self {
            AdjustmentKey::Brightness => 200,
            AdjustmentKey::Saturation => 200,
            AdjustmentKey::Inversion => 100,
            AdjustmentKey::Grayscale => 100,
            AdjustmentKey::Contrast => 200,
            AdjustmentKey::Sepia => 100,
        }
    }

    /// The value at which this adjustment leaves pixels unchanged.
    pub fn identity_value(self) -> f32 {
        match self {
            AdjustmentKey::Brightness | AdjustmentKey::Saturation | AdjustmentKey::Contrast => {
                100.0
            }
            AdjustmentKey::Inversion | AdjustmentKey::Grayscale | AdjustmentKey::Sepia => 0.0,
        }
    }
}

/// Slider bound for a key name; unrecognized names fall back to 100 rather
/// than failing.
pub fn slider_max_for(name: &str) -> u32 {
    AdjustmentKey::from_name(name)
        .map(AdjustmentKey::slider_max)
        .unwrap_or(100)
}
