//! Effect engine - renders the active mode to the LED driver
//!
//! The engine holds the effect parameters set by commands and renders one
//! frame per frame interval when ticked. It never reads the clock itself;
//! the caller passes the current time into [`FxEngine::tick`].

use embassy_time::{Duration, Instant};
use ledskates_link::EffectEngine;

use crate::color::{Rgb, rgb_from_u32, scale_color};
use crate::driver::LedDriver;
use crate::math8::phase8;
use crate::mode::ModeId;

/// Shortest animation cycle in milliseconds
pub const SPEED_MIN: u16 = 10;

/// Default interval between rendered frames (about 60 FPS)
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Initial effect parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FxConfig {
    pub mode: ModeId,
    /// Effect color (`0xRRGGBB`)
    pub color: u32,
    /// Animation cycle length in milliseconds
    pub speed: u16,
    pub brightness: u8,
    pub frame_interval: Duration,
}

impl FxConfig {
    pub const fn new() -> Self {
        Self {
            mode: ModeId::Static,
            color: 0x00FF00,
            speed: 1000,
            brightness: 128,
            frame_interval: DEFAULT_FRAME_INTERVAL,
        }
    }
}

impl Default for FxConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// LED effect engine
///
/// Generic over `D: LedDriver` to support different hardware backends.
pub struct FxEngine<D: LedDriver<N>, const N: usize> {
    driver: D,
    mode: ModeId,
    color: u32,
    speed: u16,
    brightness: u8,
    frame_interval: Duration,
    /// Start of the current mode's animation, set on the first tick after a
    /// mode change
    mode_started: Option<Instant>,
    last_frame: Option<Instant>,
}

impl<D: LedDriver<N>, const N: usize> FxEngine<D, N> {
    pub fn new(driver: D, config: FxConfig) -> Self {
        Self {
            driver,
            mode: config.mode,
            color: config.color & ledskates_link::COLOR_MAX,
            speed: config.speed.max(SPEED_MIN),
            brightness: config.brightness,
            frame_interval: config.frame_interval,
            mode_started: None,
            last_frame: None,
        }
    }

    /// Active mode
    pub fn mode_id(&self) -> ModeId {
        self.mode
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Restart the animation and force a frame on the next tick
    fn restart(&mut self) {
        self.mode_started = None;
        self.last_frame = None;
    }

    fn frame_due(&self, now: Instant) -> bool {
        match self.last_frame {
            None => true,
            Some(last) => now
                .checked_duration_since(last)
                .is_some_and(|elapsed| elapsed >= self.frame_interval),
        }
    }

    fn render(&self, now: Instant) -> [Rgb; N] {
        let started = self.mode_started.unwrap_or(now);
        let elapsed = now.checked_duration_since(started).unwrap_or(Duration::from_ticks(0));
        let period = Duration::from_millis(u64::from(self.speed));
        let phase = phase8(elapsed, period);

        let mut frame = self.mode.render::<N>(rgb_from_u32(self.color), phase);
        if self.brightness < u8::MAX {
            for led in &mut frame {
                *led = scale_color(*led, self.brightness);
            }
        }
        frame
    }
}

impl<D: LedDriver<N>, const N: usize> EffectEngine for FxEngine<D, N> {
    fn set_color(&mut self, color: u32) {
        self.color = color & ledskates_link::COLOR_MAX;
        self.last_frame = None;
    }

    fn set_mode(&mut self, mode: u8) {
        let Some(mode) = ModeId::from_raw(mode) else {
            log::warn!("fx: ignoring unknown mode {mode}");
            return;
        };
        self.mode = mode;
        self.restart();
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
        self.last_frame = None;
    }

    fn set_speed(&mut self, speed: u16) {
        self.speed = speed.max(SPEED_MIN);
    }

    fn color(&self) -> u32 {
        self.color
    }

    fn mode(&self) -> u8 {
        self.mode.as_raw()
    }

    fn mode_count(&self) -> u8 {
        ModeId::COUNT
    }

    fn mode_name(&self, mode: u8) -> &str {
        ModeId::from_raw(mode).map_or("", ModeId::name)
    }

    fn brightness(&self) -> u8 {
        self.brightness
    }

    fn speed(&self) -> u16 {
        self.speed
    }

    fn tick(&mut self, now: Instant) {
        if self.mode_started.is_none() {
            self.mode_started = Some(now);
        }
        if !self.frame_due(now) {
            return;
        }

        let frame = self.render(now);
        self.driver.write(&frame);
        self.last_frame = Some(now);
    }
}
