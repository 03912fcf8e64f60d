//! The render pipeline.
//!
//! A render is a pure function of (settings, source image): orient the
//! source, then fold the filter chain over the oriented pixels. Purity makes
//! renders idempotent, so redrawing with unchanged settings always produces
//! the identical frame.
//!
//! # Pipeline order
//!
//! 1. Orientation (mirror, then quarter-turn rotation; output dimensions
//!    swap when the rotation is an odd multiple of 90)
//! 2. Filter chain (brightness, saturate, invert, grayscale, contrast,
//!    sepia)
//!
//! The filters are per-pixel maps, so running them after the geometric step
//! is equivalent to filtering the source first; doing it this way touches
//! each output pixel exactly once.
//!
//! The source is drawn 1:1; there is no scaling or fit logic.

use crate::decode::Raster;
use crate::filters::FilterChain;
use crate::transform::apply_orientation;
use crate::EditSettings;

/// Render a frame from the source image under the given settings.
///
/// The caller owns the "nothing loaded yet" case: without a source there is
/// nothing to render and this function is simply not called.
pub fn render_frame(settings: &EditSettings, source: &Raster) -> Raster {
    let mut frame = apply_orientation(source, settings.rotate, settings.flip_h, settings.flip_v);
    FilterChain::from_settings(settings).apply(&mut frame.pixels);
    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Gradient source so geometric moves are observable.
    fn test_source(width: u32, height: u32) -> Raster {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push((x * 7 % 256) as u8);
                pixels.push((y * 11 % 256) as u8);
                pixels.push(64);
            }
        }
        Raster::new(width, height, pixels)
    }

    #[test]
    fn test_default_settings_render_is_identity() {
        let source = test_source(16, 9);
        let frame = render_frame(&EditSettings::new(), &source);
        assert_eq!(frame, source);
    }

    #[test]
    fn test_render_is_idempotent() {
        let source = test_source(12, 8);
        let mut settings = EditSettings::new();
        settings.brightness = 130.0;
        settings.rotate_by(90);
        settings.toggle_flip_h();

        let first = render_frame(&settings, &source);
        let second = render_frame(&settings, &source);
        assert_eq!(first, second);
    }

    #[test]
    fn test_quarter_turn_swaps_output_dimensions() {
        let source = test_source(100, 50);
        let mut settings = EditSettings::new();

        settings.rotate_by(90);
        let frame = render_frame(&settings, &source);
        assert_eq!((frame.width, frame.height), (50, 100));

        settings.rotate_by(90);
        let frame = render_frame(&settings, &source);
        assert_eq!((frame.width, frame.height), (100, 50));
    }

    #[test]
    fn test_unbounded_rotation_accumulator() {
        let source = test_source(10, 4);
        let mut settings = EditSettings::new();
        settings.rotate = 90 + 4 * 360; // many full turns past a quarter

        let frame = render_frame(&settings, &source);
        assert_eq!((frame.width, frame.height), (4, 10));

        settings.rotate = -90;
        let frame = render_frame(&settings, &source);
        assert_eq!((frame.width, frame.height), (4, 10));
    }

    #[test]
    fn test_full_turn_restores_source() {
        let source = test_source(9, 7);
        let mut settings = EditSettings::new();
        settings.rotate = 360;
        let frame = render_frame(&settings, &source);
        assert_eq!(frame, source);
    }

    #[test]
    fn test_flip_twice_restores_source() {
        let source = test_source(8, 8);
        let mut settings = EditSettings::new();
        settings.toggle_flip_h();
        let flipped = render_frame(&settings, &source);
        assert_ne!(flipped, source);

        settings.toggle_flip_h();
        let restored = render_frame(&settings, &source);
        assert_eq!(restored, source);
    }

    #[test]
    fn test_filters_apply_after_orientation() {
        let source = test_source(6, 4);
        let mut settings = EditSettings::new();
        settings.rotate_by(90);
        settings.inversion = 100.0;

        let frame = render_frame(&settings, &source);

        // Same as orienting and inverting by hand.
        let mut expected = apply_orientation(&source, 90, 1, 1);
        FilterChain::from_settings(&settings).apply(&mut expected.pixels);
        assert_eq!(frame, expected);
    }

    #[test]
    fn test_rotate_then_flip_then_export_dimensions() {
        // Load a 100x50 source, rotate right once, flip horizontal, export:
        // the byte stream must decode back to a 50x100 raster.
        let source = test_source(100, 50);
        let mut settings = EditSettings::new();
        settings.rotate_by(90);
        settings.toggle_flip_h();

        let frame = render_frame(&settings, &source);
        let jpeg = crate::encode::encode_export(&frame).unwrap();
        let decoded = crate::decode::decode_image(&jpeg).unwrap();

        assert_eq!(decoded.width, 50);
        assert_eq!(decoded.height, 100);
    }

    #[test]
    fn test_adjustments_change_pixels_not_dimensions() {
        let source = test_source(5, 5);
        let mut settings = EditSettings::new();
        settings.sepia = 80.0;
        settings.contrast = 140.0;

        let frame = render_frame(&settings, &source);
        assert_eq!((frame.width, frame.height), (5, 5));
        assert_ne!(frame.pixels, source.pixels);
    }
}
