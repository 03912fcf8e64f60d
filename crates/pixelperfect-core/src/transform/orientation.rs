//! Exact quarter-turn rotation with axis mirrors.
//!
//! # Algorithm
//!
//! The orientation uses inverse mapping: for each pixel in the output image,
//! we compute the source pixel that lands there. A destination coordinate is
//! first un-rotated (the inverse of `turns` clockwise quarter turns), then
//! un-mirrored, which matches the forward order of mirror-then-rotate.

use crate::decode::Raster;

/// True when the rotation leaves the image on its side, swapping the output
/// width and height (an odd multiple of 90 degrees).
///
/// Works for any accumulated angle, including negatives and values beyond
/// ±360.
#[inline]
pub fn swaps_dimensions(degrees: i32) -> bool {
    degrees.rem_euclid(180) != 0
}

/// Output surface dimensions for a source of `width` x `height` under the
/// given rotation.
///
/// # Example
///
/// ```
/// use pixelperfect_core::transform::oriented_dimensions;
///
/// assert_eq!(oriented_dimensions(100, 50, 90), (50, 100));
/// assert_eq!(oriented_dimensions(100, 50, 180), (100, 50));
/// ```
pub fn oriented_dimensions(width: u32, height: u32, degrees: i32) -> (u32, u32) {
    if swaps_dimensions(degrees) {
        (height, width)
    } else {
        (width, height)
    }
}

/// Number of clockwise quarter turns for an accumulated angle.
///
/// `degrees` must be a multiple of 90; the settings only ever step rotation
/// by quarter turns.
#[inline]
fn quarter_turns(degrees: i32) -> i32 {
    debug_assert_eq!(degrees % 90, 0, "rotation must be a multiple of 90");
    degrees.rem_euclid(360) / 90
}

/// Apply mirrors and rotation to an image.
///
/// The mirrors act on the source axes before the rotation places it, matching
/// a center-translate, rotate, scale(flipH, flipV) transform stack. Positive
/// `degrees` rotate clockwise. `flip_h` and `flip_v` are pure axis scales and
/// must be 1 or -1.
///
/// Returns a new [`Raster`]; dimensions swap when `degrees` is an odd
/// multiple of 90.
pub fn apply_orientation(source: &Raster, degrees: i32, flip_h: i8, flip_v: i8) -> Raster {
    let turns = quarter_turns(degrees);

    // Fast path: identity orientation
    if turns == 0 && flip_h == 1 && flip_v == 1 {
        return source.clone();
    }

    let (src_w, src_h) = (source.width as usize, source.height as usize);
    let (dst_w, dst_h) = oriented_dimensions(source.width, source.height, degrees);
    let mut output = vec![0u8; (dst_w * dst_h * 3) as usize];

    for dst_y in 0..dst_h as usize {
        for dst_x in 0..dst_w as usize {
            // Invert the clockwise quarter turns to find the mirrored
            // source coordinate.
            let (mx, my) = match turns {
                1 => (dst_y, src_h - 1 - dst_x),
                2 => (src_w - 1 - dst_x, src_h - 1 - dst_y),
                3 => (src_w - 1 - dst_y, dst_x),
                _ => (dst_x, dst_y),
            };

            // Invert the mirrors.
            let src_x = if flip_h == -1 { src_w - 1 - mx } else { mx };
            let src_y = if flip_v == -1 { src_h - 1 - my } else { my };

            let src_idx = (src_y * src_w + src_x) * 3;
            let dst_idx = (dst_y * dst_w as usize + dst_x) * 3;
            output[dst_idx..dst_idx + 3].copy_from_slice(&source.pixels[src_idx..src_idx + 3]);
        }
    }

    Raster::new(dst_w, dst_h, output)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2x2 raster with four distinct solid pixels:
    ///
    /// ```text
    /// A B      A = (10, 0, 0)   B = (20, 0, 0)
    /// C D      C = (30, 0, 0)   D = (40, 0, 0)
    /// ```
    fn quad() -> Raster {
        Raster::new(2, 2, vec![10, 0, 0, 20, 0, 0, 30, 0, 0, 40, 0, 0])
    }

    fn reds(raster: &Raster) -> Vec<u8> {
        raster.pixels.iter().step_by(3).copied().collect()
    }

    #[test]
    fn test_swaps_dimensions_predicate() {
        assert!(!swaps_dimensions(0));
        assert!(swaps_dimensions(90));
        assert!(!swaps_dimensions(180));
        assert!(swaps_dimensions(270));
        assert!(!swaps_dimensions(360));
        assert!(swaps_dimensions(-90));
        assert!(swaps_dimensions(450));
        assert!(!swaps_dimensions(-720));
    }

    #[test]
    fn test_oriented_dimensions() {
        assert_eq!(oriented_dimensions(100, 50, 0), (100, 50));
        assert_eq!(oriented_dimensions(100, 50, 90), (50, 100));
        assert_eq!(oriented_dimensions(100, 50, 180), (100, 50));
        assert_eq!(oriented_dimensions(100, 50, -90), (50, 100));
        assert_eq!(oriented_dimensions(100, 50, 450), (50, 100));
    }

    #[test]
    fn test_identity_orientation() {
        let src = quad();
        let result = apply_orientation(&src, 0, 1, 1);
        assert_eq!(result.pixels, src.pixels);
        assert_eq!((result.width, result.height), (2, 2));
    }

    #[test]
    fn test_rotate_90_clockwise() {
        // A B        C A
        // C D   ->   D B
        let result = apply_orientation(&quad(), 90, 1, 1);
        assert_eq!(reds(&result), vec![30, 10, 40, 20]);
    }

    #[test]
    fn test_rotate_180() {
        // A B        D C
        // C D   ->   B A
        let result = apply_orientation(&quad(), 180, 1, 1);
        assert_eq!(reds(&result), vec![40, 30, 20, 10]);
    }

    #[test]
    fn test_rotate_270_equals_minus_90() {
        let cw = apply_orientation(&quad(), 270, 1, 1);
        let ccw = apply_orientation(&quad(), -90, 1, 1);
        assert_eq!(cw.pixels, ccw.pixels);
        // A B        B D
        // C D   ->   A C
        assert_eq!(reds(&cw), vec![20, 40, 10, 30]);
    }

    #[test]
    fn test_angles_beyond_full_turn() {
        let single = apply_orientation(&quad(), 90, 1, 1);
        let wrapped = apply_orientation(&quad(), 450, 1, 1);
        let negative = apply_orientation(&quad(), -270, 1, 1);
        assert_eq!(single.pixels, wrapped.pixels);
        assert_eq!(single.pixels, negative.pixels);
    }

    #[test]
    fn test_four_quarter_turns_identity() {
        let mut raster = quad();
        for _ in 0..4 {
            raster = apply_orientation(&raster, 90, 1, 1);
        }
        assert_eq!(raster.pixels, quad().pixels);
    }

    #[test]
    fn test_flip_horizontal() {
        // A B        B A
        // C D   ->   D C
        let result = apply_orientation(&quad(), 0, -1, 1);
        assert_eq!(reds(&result), vec![20, 10, 40, 30]);
    }

    #[test]
    fn test_flip_vertical() {
        // A B        C D
        // C D   ->   A B
        let result = apply_orientation(&quad(), 0, 1, -1);
        assert_eq!(reds(&result), vec![30, 40, 10, 20]);
    }

    #[test]
    fn test_both_flips_equal_rotate_180() {
        let flipped = apply_orientation(&quad(), 0, -1, -1);
        let rotated = apply_orientation(&quad(), 180, 1, 1);
        assert_eq!(flipped.pixels, rotated.pixels);
    }

    #[test]
    fn test_mirror_applies_before_rotation() {
        // Flip horizontal first:  B A     then rotate 90 CW:  D B
        //                         D C                         C A
        let result = apply_orientation(&quad(), 90, -1, 1);
        assert_eq!(reds(&result), vec![40, 20, 30, 10]);
    }

    #[test]
    fn test_rectangular_dimension_swap() {
        let src = Raster::new(3, 1, vec![10, 0, 0, 20, 0, 0, 30, 0, 0]);
        let result = apply_orientation(&src, 90, 1, 1);
        assert_eq!((result.width, result.height), (1, 3));
        // A B C rotated CW reads top to bottom: A B C
        assert_eq!(reds(&result), vec![10, 20, 30]);
    }

    #[test]
    fn test_single_pixel() {
        let src = Raster::new(1, 1, vec![128, 64, 32]);
        let result = apply_orientation(&src, 90, -1, -1);
        assert_eq!(result.pixels, vec![128, 64, 32]);
    }
}
