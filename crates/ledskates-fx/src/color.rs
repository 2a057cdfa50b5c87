//! Color helpers

use smart_leds::RGB8;

use crate::math8::scale8;

pub type Rgb = RGB8;
pub use smart_leds::hsv::{Hsv, hsv2rgb};

/// Black (all channels off)
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Create an RGB color from a u32 value (0xRRGGBB format)
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Scale every channel of `color` by `level` (0-255 = 0.0-1.0)
#[inline]
pub fn scale_color(color: Rgb, level: u8) -> Rgb {
    Rgb {
        r: scale8(color.r, level),
        g: scale8(color.g, level),
        b: scale8(color.b, level),
    }
}

/// Fully saturated color of the given hue
#[inline]
pub fn hue_color(hue: u8) -> Rgb {
    hsv2rgb(Hsv {
        hue,
        sat: 255,
        val: 255,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpacks_rgb24() {
        assert_eq!(rgb_from_u32(0x12_34_56), Rgb { r: 0x12, g: 0x34, b: 0x56 });
        assert_eq!(rgb_from_u32(0x00FF00), Rgb { r: 0, g: 255, b: 0 });
    }

    #[test]
    fn scaling_to_zero_is_black() {
        assert_eq!(scale_color(rgb_from_u32(0xFF_FFFF), 0), BLACK);
    }
}
