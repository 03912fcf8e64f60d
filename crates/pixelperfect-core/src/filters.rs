//! The ordered filter chain.
//!
//! The six percent-scale adjustments compose into a single chain applied to
//! RGB pixel data. Composition is not commutative, so the order is fixed:
//!
//! 1. brightness
//! 2. saturate
//! 3. invert
//! 4. grayscale
//! 5. contrast
//! 6. sepia
//!
//! Each stage follows the CSS Filter Effects definition of the function of
//! the same name, evaluated on normalized 0..1 channels with the amount given
//! as a percentage (100% is the identity for brightness/saturate/contrast,
//! 0% for the rest).

use crate::{AdjustmentKey, EditSettings};

/// An ordered list of (adjustment, value) pairs.
///
/// The chain can be folded two ways: into a canvas-compatible filter
/// expression string, or directly over pixel data.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterChain {
    stages: Vec<(AdjustmentKey, f32)>,
}

impl FilterChain {
    /// Build the chain from settings, in the fixed composition order.
    pub fn from_settings(settings: &EditSettings) -> Self {
        let stages = AdjustmentKey::ALL
            .into_iter()
            .map(|key| (key, settings.value(key)))
            .collect();
        Self { stages }
    }

    /// The (adjustment, value) pairs in composition order.
    pub fn stages(&self) -> &[(AdjustmentKey, f32)] {
        &self.stages
    }

    /// True when every stage is at its identity value.
    pub fn is_identity(&self) -> bool {
        self.stages
            .iter()
            .all(|(key, value)| *value == key.identity_value())
    }

    /// Fold the chain into a filter expression string, one
    /// `function(value%)` term per stage in composition order.
    ///
    /// The result is valid as a 2D canvas context `filter` value, which lets
    /// a front-end run a GPU-composited preview while exports go through
    /// [`apply`](Self::apply).
    pub fn expression(&self) -> String {
        let terms: Vec<String> = self
            .stages
            .iter()
            .map(|(key, value)| format!("{}({}%)", key.css_function(), value))
            .collect();
        terms.join(" ")
    }

    /// Apply every stage to RGB pixel data in place.
    ///
    /// # Arguments
    /// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
    pub fn apply(&self, pixels: &mut [u8]) {
        // Early exit if nothing changes pixels
        if self.is_identity() {
            return;
        }

        for chunk in pixels.chunks_exact_mut(3) {
            let mut r = chunk[0] as f32 / 255.0;
            let mut g = chunk[1] as f32 / 255.0;
            let mut b = chunk[2] as f32 / 255.0;

            for (key, value) in &self.stages {
                (r, g, b) = apply_stage(*key, r, g, b, *value);
            }

            chunk[0] = (r.clamp(0.0, 1.0) * 255.0).round() as u8;
            chunk[1] = (g.clamp(0.0, 1.0) * 255.0).round() as u8;
            chunk[2] = (b.clamp(0.0, 1.0) * 255.0).round() as u8;
        }
    }
}

#[inline]
fn apply_stage(key: AdjustmentKey, r: f32, g: f32, b: f32, value: f32) -> (f32, f32, f32) {
    match key {
        AdjustmentKey::Brightness => apply_brightness(r, g, b, value),
        AdjustmentKey::Saturation => apply_saturate(r, g, b, value),
        AdjustmentKey::Inversion => apply_invert(r, g, b, value),
        AdjustmentKey::Grayscale => apply_grayscale(r, g, b, value),
        AdjustmentKey::Contrast => apply_contrast(r, g, b, value),
        AdjustmentKey::Sepia => apply_sepia(r, g, b, value),
    }
}

/// Calculate luminance using ITU-R BT.709 coefficients.
#[inline]
fn luminance(r: f32, g: f32, b: f32) -> f32 {
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// brightness(value%): linear multiplier on every channel.
#[inline]
fn apply_brightness(r: f32, g: f32, b: f32, value: f32) -> (f32, f32, f32) {
    if value == 100.0 {
        return (r, g, b);
    }
    let factor = value / 100.0;
    (r * factor, g * factor, b * factor)
}

/// saturate(value%): scale the distance from luminance gray.
#[inline]
fn apply_saturate(r: f32, g: f32, b: f32, value: f32) -> (f32, f32, f32) {
    if value == 100.0 {
        return (r, g, b);
    }
    let factor = value / 100.0;
    let gray = luminance(r, g, b);
    (
        gray + (r - gray) * factor,
        gray + (g - gray) * factor,
        gray + (b - gray) * factor,
    )
}

/// invert(value%): blend each channel toward its complement.
#[inline]
fn apply_invert(r: f32, g: f32, b: f32, value: f32) -> (f32, f32, f32) {
    if value == 0.0 {
        return (r, g, b);
    }
    let amount = value / 100.0;
    (
        r * (1.0 - amount) + (1.0 - r) * amount,
        g * (1.0 - amount) + (1.0 - g) * amount,
        b * (1.0 - amount) + (1.0 - b) * amount,
    )
}

/// grayscale(value%): blend each channel toward luminance gray.
#[inline]
fn apply_grayscale(r: f32, g: f32, b: f32, value: f32) -> (f32, f32, f32) {
    if value == 0.0 {
        return (r, g, b);
    }
    let amount = value / 100.0;
    let gray = luminance(r, g, b);
    (
        r * (1.0 - amount) + gray * amount,
        g * (1.0 - amount) + gray * amount,
        b * (1.0 - amount) + gray * amount,
    )
}

/// contrast(value%): scale the distance from mid-gray.
#[inline]
fn apply_contrast(r: f32, g: f32, b: f32, value: f32) -> (f32, f32, f32) {
    if value == 100.0 {
        return (r, g, b);
    }
    let factor = value / 100.0;
    let midpoint = 0.5;
    (
        (r - midpoint) * factor + midpoint,
        (g - midpoint) * factor + midpoint,
        (b - midpoint) * factor + midpoint,
    )
}

/// sepia(value%): blend toward the sepia color matrix output.
#[inline]
fn apply_sepia(r: f32, g: f32, b: f32, value: f32) -> (f32, f32, f32) {
    if value == 0.0 {
        return (r, g, b);
    }
    let amount = value / 100.0;
    let sr = 0.393 * r + 0.769 * g + 0.189 * b;
    let sg = 0.349 * r + 0.686 * g + 0.168 * b;
    let sb = 0.272 * r + 0.534 * g + 0.131 * b;
    (
        r * (1.0 - amount) + sr * amount,
        g * (1.0 - amount) + sg * amount,
        b * (1.0 - amount) + sb * amount,
    )
}


// ============================================================================
// Property-Based Tests
// ============================================================================
