//! Image orientation: quarter-turn rotation and axis mirrors.
//!
//! Rotation in the editor is always stepped by ±90 degrees, so orientation is
//! an exact pixel mapping with no interpolation. Mirrors are applied before
//! the rotation places the image: the render transform scales the source by
//! (flipH, flipV) and then rotates it about the center.
//!
//! Angles are accumulated without bound by the settings; everything here
//! normalizes with a Euclidean modulus, so -90, 270 and 630 are the same
//! orientation.

mod orientation;

pub use orientation::{apply_orientation, oriented_dimensions, swaps_dimensions};
