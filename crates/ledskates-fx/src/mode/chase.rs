//! Modes that move light along the strip

use super::strip_offset8;
use crate::color::{BLACK, Rgb, scale_color};
use crate::math8::triwave8;

/// Lights LEDs one after another, then turns them off in the same order
pub(super) fn color_wipe<const N: usize>(color: Rgb, phase: u8) -> [Rgb; N] {
    let filling = phase < 128;
    let count = (usize::from(phase & 0x7F) * (N + 1) / 128).min(N);

    let mut leds = [BLACK; N];
    for (i, led) in leds.iter_mut().enumerate() {
        let lit = if filling { i < count } else { i >= count };
        if lit {
            *led = color;
        }
    }
    leds
}

/// Every third LED lit, the pattern stepping forward three times per cycle
pub(super) fn theater_chase<const N: usize>(color: Rgb, phase: u8) -> [Rgb; N] {
    let offset = usize::from(phase) * 3 / 256;

    let mut leds = [BLACK; N];
    for (i, led) in leds.iter_mut().enumerate() {
        if i % 3 == offset {
            *led = color;
        }
    }
    leds
}

/// Single LED bouncing between both ends of the strip
pub(super) fn scan<const N: usize>(color: Rgb, phase: u8) -> [Rgb; N] {
    let mut leds = [BLACK; N];
    if N == 0 {
        return leds;
    }
    let position = usize::from(triwave8(phase)) * (N - 1) / 254;
    leds[position.min(N - 1)] = color;
    leds
}

/// Brightness wave travelling along the strip
pub(super) fn running_lights<const N: usize>(color: Rgb, phase: u8) -> [Rgb; N] {
    let mut leds = [BLACK; N];
    for (i, led) in leds.iter_mut().enumerate() {
        let wave = phase.wrapping_sub(strip_offset8(i, N));
        *led = scale_color(color, triwave8(wave));
    }
    leds
}
