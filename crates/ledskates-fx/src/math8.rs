use embassy_time::Duration;

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * scale as u16) >> 8) as u8
}

/// Triangle wave: rises 0 to 254 over the first half of `x`, falls back after
#[inline]
pub const fn triwave8(x: u8) -> u8 {
    let half = if x & 0x80 != 0 { 255 - x } else { x };
    half << 1
}

/// Cubic ease-in/ease-out of an 8-bit fraction
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn ease8(x: u8) -> u8 {
    let x = u32::from(x);
    let squared = x * x / 255;
    let cubed = squared * x / 255;
    // 3x^2 - 2x^3
    (3 * squared).saturating_sub(2 * cubed).min(255) as u8
}

/// Position within a repeating period, as a fraction 0-255
///
/// # Arguments
/// * `elapsed` - Time since the animation started
/// * `period` - Length of one cycle
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn phase8(elapsed: Duration, period: Duration) -> u8 {
    let period_ms = period.as_millis().max(1);
    let offset_ms = elapsed.as_millis() % period_ms;
    ((offset_ms * 256) / period_ms) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale8_bounds() {
        assert_eq!(scale8(255, 0), 0);
        assert_eq!(scale8(255, 128), 127);
        assert_eq!(scale8(0, 255), 0);
    }

    #[test]
    fn triwave8_peaks_mid_cycle() {
        assert_eq!(triwave8(0), 0);
        assert_eq!(triwave8(64), 128);
        assert_eq!(triwave8(127), 254);
        assert_eq!(triwave8(128), 254);
        assert_eq!(triwave8(255), 0);
    }

    #[test]
    fn ease8_keeps_endpoints() {
        assert_eq!(ease8(0), 0);
        assert_eq!(ease8(255), 255);
        assert!(ease8(64) < 64);
        assert!(ease8(192) > 192);
    }

    #[test]
    fn phase8_wraps_each_period() {
        let period = Duration::from_millis(1000);
        assert_eq!(phase8(Duration::from_millis(0), period), 0);
        assert_eq!(phase8(Duration::from_millis(500), period), 128);
        assert_eq!(phase8(Duration::from_millis(999), period), 255);
        assert_eq!(phase8(Duration::from_millis(1500), period), 128);
    }
}
