//! Relative and absolute value adjustments
//!
//! Brightness and speed values share one control channel for absolute sets
//! and relative nudges. The first character of the value selects the branch:
//! `-`, a single space, or anything else for an absolute number. Brightness
//! and speed assign opposite directions to the two sigils.

use crate::numeric::{parse_u8, parse_u16};

/// Floor applied before a multiplicative increase, so zero can grow
const GROW_FLOOR: u32 = 5;

/// Adjustment requested by a brightness or speed command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment<T> {
    /// Scale the current value by 0.8
    Decrease,
    /// Scale `max(current, 5)` by 1.2
    Increase,
    /// Set the value directly
    Set(T),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sigil {
    Minus,
    Space,
    Other,
}

fn sigil(value: &str) -> Sigil {
    match value.as_bytes().first() {
        Some(b'-') => Sigil::Minus,
        Some(b' ') => Sigil::Space,
        _ => Sigil::Other,
    }
}

impl Adjustment<u8> {
    /// Decode a brightness value: `-` decreases, space increases
    pub fn brightness(value: &str) -> Self {
        match sigil(value) {
            Sigil::Minus => Self::Decrease,
            Sigil::Space => Self::Increase,
            Sigil::Other => Self::Set(parse_u8(value)),
        }
    }

    /// Apply the adjustment to the current brightness
    #[allow(clippy::cast_possible_truncation)]
    pub fn apply(self, current: u8) -> u8 {
        match self {
            Self::Decrease => shrink(u32::from(current)) as u8,
            Self::Increase => grow(u32::from(current)).min(u32::from(u8::MAX)) as u8,
            Self::Set(value) => value,
        }
    }
}

impl Adjustment<u16> {
    /// Decode a speed value: `-` increases, space decreases
    pub fn speed(value: &str) -> Self {
        match sigil(value) {
            Sigil::Minus => Self::Increase,
            Sigil::Space => Self::Decrease,
            Sigil::Other => Self::Set(parse_u16(value)),
        }
    }

    /// Apply the adjustment to the current speed
    #[allow(clippy::cast_possible_truncation)]
    pub fn apply(self, current: u16) -> u16 {
        match self {
            Self::Decrease => shrink(u32::from(current)) as u16,
            Self::Increase => grow(u32::from(current)).min(u32::from(u16::MAX)) as u16,
            Self::Set(value) => value,
        }
    }
}

/// `current * 0.8`, truncated
const fn shrink(current: u32) -> u32 {
    current * 4 / 5
}

/// `max(current, 5) * 1.2`, truncated
const fn grow(current: u32) -> u32 {
    let base = if current < GROW_FLOOR { GROW_FLOOR } else { current };
    base * 6 / 5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness_sigils() {
        assert_eq!(Adjustment::brightness("-"), Adjustment::Decrease);
        assert_eq!(Adjustment::brightness(" "), Adjustment::Increase);
        assert_eq!(Adjustment::brightness("120"), Adjustment::Set(120));
        assert_eq!(Adjustment::brightness(""), Adjustment::Set(0));
        assert_eq!(Adjustment::brightness("--"), Adjustment::Decrease);
    }

    #[test]
    fn speed_sigils_are_inverted() {
        assert_eq!(Adjustment::speed("-"), Adjustment::Increase);
        assert_eq!(Adjustment::speed(" "), Adjustment::Decrease);
        assert_eq!(Adjustment::speed("2000"), Adjustment::Set(2000));
    }

    #[test]
    fn brightness_steps() {
        assert_eq!(Adjustment::<u8>::Decrease.apply(100), 80);
        assert_eq!(Adjustment::<u8>::Decrease.apply(1), 0);
        assert_eq!(Adjustment::<u8>::Increase.apply(3), 6);
        assert_eq!(Adjustment::<u8>::Increase.apply(0), 6);
        assert_eq!(Adjustment::<u8>::Increase.apply(100), 120);
        assert_eq!(Adjustment::<u8>::Increase.apply(250), 255);
    }

    #[test]
    fn speed_steps_saturate() {
        assert_eq!(Adjustment::<u16>::Decrease.apply(1000), 800);
        assert_eq!(Adjustment::<u16>::Increase.apply(1000), 1200);
        assert_eq!(Adjustment::<u16>::Increase.apply(60_000), u16::MAX);
    }
}
