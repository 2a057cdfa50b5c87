//! LED driver abstraction layer
//!
//! The effect engine writes finished frames through this trait, so it can run
//! on any hardware backend (or a test double).

use crate::color::Rgb;

/// Abstract LED strip driver
pub trait LedDriver<const N: usize> {
    /// Write one frame to the strip
    fn write(&mut self, colors: &[Rgb; N]);
}
