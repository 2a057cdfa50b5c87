#![cfg_attr(not(test), no_std)]

//! LedSkates effects - LED effect engine for the skate strips
//!
//! Layers:
//! - `driver` - Hardware abstraction ([`LedDriver`] trait)
//! - `mode` - Mode table and per-mode frame rendering
//! - `engine` - [`FxEngine`], implementing the link's effect engine port
//! - `color` / `math8` - Color and 8-bit fixed point helpers
//!
//! The engine is generic over `LedDriver`, allowing different hardware backends.

pub mod color;
pub mod driver;
pub mod engine;
pub mod math8;
pub mod mode;

pub use color::Rgb;
pub use driver::LedDriver;
pub use engine::{DEFAULT_FRAME_INTERVAL, FxConfig, FxEngine, SPEED_MIN};
pub use mode::ModeId;
