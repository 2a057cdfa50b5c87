//! Rainbow modes

use super::strip_offset8;
use crate::color::{BLACK, Rgb, hue_color};

/// Whole strip in one hue, cycling through the color wheel
pub(super) fn rainbow<const N: usize>(phase: u8) -> [Rgb; N] {
    [hue_color(phase); N]
}

/// Full color wheel spread over the strip, rotating once per cycle
pub(super) fn rainbow_cycle<const N: usize>(phase: u8) -> [Rgb; N] {
    let mut leds = [BLACK; N];
    for (i, led) in leds.iter_mut().enumerate() {
        *led = hue_color(phase.wrapping_add(strip_offset8(i, N)));
    }
    leds
}
