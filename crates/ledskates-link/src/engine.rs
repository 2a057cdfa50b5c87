//! Effect engine port
//!
//! The dispatcher and the auto-cycle scheduler drive the LED effect engine
//! only through this trait, so the protocol core stays hardware-agnostic.

use embassy_time::Instant;

/// Largest color a command may set (24-bit RGB)
pub const COLOR_MAX: u32 = 0xFF_FFFF;

/// LED effect engine capabilities required by the protocol core
pub trait EffectEngine {
    /// Set the effect color (`0xRRGGBB`)
    fn set_color(&mut self, color: u32);

    /// Switch to the mode with the given index
    fn set_mode(&mut self, mode: u8);

    fn set_brightness(&mut self, brightness: u8);

    fn set_speed(&mut self, speed: u16);

    fn color(&self) -> u32;

    /// Index of the active mode
    fn mode(&self) -> u8;

    /// Number of available modes
    fn mode_count(&self) -> u8;

    /// Display name of the mode with the given index
    fn mode_name(&self, mode: u8) -> &str;

    fn brightness(&self) -> u8;

    fn speed(&self) -> u16;

    /// Advance the animation by one tick.
    ///
    /// Called on every loop iteration, whether or not auto-cycling is enabled.
    fn tick(&mut self, now: Instant);
}
