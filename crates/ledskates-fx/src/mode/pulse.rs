//! Whole-strip modes driven by a brightness curve

use crate::color::{BLACK, Rgb, scale_color};
use crate::math8::{ease8, scale8, triwave8};

/// Lowest level of the breathing curve, so the strip never goes fully dark
const BREATH_FLOOR: u8 = 24;

/// On for the first half of the cycle, off for the second
pub(super) fn blink<const N: usize>(color: Rgb, phase: u8) -> [Rgb; N] {
    if phase < 128 { [color; N] } else { [BLACK; N] }
}

/// Smooth in-out pulse that stays above [`BREATH_FLOOR`]
pub(super) fn breath<const N: usize>(color: Rgb, phase: u8) -> [Rgb; N] {
    let level = BREATH_FLOOR + scale8(ease8(triwave8(phase)), 255 - BREATH_FLOOR);
    [scale_color(color, level); N]
}

/// Linear fade from off to full and back
pub(super) fn fade<const N: usize>(color: Rgb, phase: u8) -> [Rgb; N] {
    [scale_color(color, triwave8(phase)); N]
}
