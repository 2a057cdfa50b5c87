//! Integration tests for the effect engine.

use embassy_time::{Duration, Instant};
use ledskates_fx::color::{BLACK, rgb_from_u32};
use ledskates_fx::{FxConfig, FxEngine, LedDriver, ModeId, Rgb, SPEED_MIN};
use ledskates_link::EffectEngine;

const LEDS: usize = 6;

#[derive(Default)]
struct RecordingDriver {
    frames: Vec<[Rgb; LEDS]>,
}

impl LedDriver<LEDS> for RecordingDriver {
    fn write(&mut self, colors: &[Rgb; LEDS]) {
        self.frames.push(*colors);
    }
}

fn at(ms: u64) -> Instant {
    Instant::from_millis(ms)
}

fn engine(config: FxConfig) -> FxEngine<RecordingDriver, LEDS> {
    FxEngine::new(RecordingDriver::default(), config)
}

fn full_brightness() -> FxConfig {
    FxConfig {
        brightness: 255,
        ..FxConfig::new()
    }
}

#[test]
fn defaults_match_power_on_state() {
    let engine = engine(FxConfig::default());

    assert_eq!(engine.mode(), 0);
    assert_eq!(engine.color(), 0x00FF00);
    assert_eq!(engine.brightness(), 128);
    assert_eq!(engine.speed(), 1000);
    assert_eq!(engine.mode_count(), 10);
}

#[test]
fn mode_names_follow_table() {
    let engine = engine(FxConfig::default());

    assert_eq!(engine.mode_name(0), "Static");
    assert_eq!(engine.mode_name(4), "Rainbow");
    assert_eq!(engine.mode_name(9), "Running Lights");
    assert_eq!(engine.mode_name(10), "");
}

#[test]
fn first_tick_writes_a_frame() {
    let mut engine = engine(full_brightness());

    engine.tick(at(0));

    let frames = &engine.driver().frames;
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0], [rgb_from_u32(0x00FF00); LEDS]);
}

#[test]
fn frames_are_rate_limited() {
    let mut engine = engine(FxConfig::default());

    engine.tick(at(0));
    engine.tick(at(5));
    engine.tick(at(15));
    assert_eq!(engine.driver().frames.len(), 1);

    engine.tick(at(16));
    assert_eq!(engine.driver().frames.len(), 2);
}

#[test]
fn brightness_scales_output() {
    let mut engine = engine(FxConfig::default());
    engine.set_color(0xFF_FFFF);
    engine.set_brightness(0);

    engine.tick(at(0));

    assert_eq!(engine.driver().frames[0], [BLACK; LEDS]);
}

#[test]
fn parameter_change_forces_next_frame() {
    let mut engine = engine(full_brightness());

    engine.tick(at(0));
    engine.set_color(0xFF0000);
    engine.tick(at(1));

    let frames = &engine.driver().frames;
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[1][0], rgb_from_u32(0xFF0000));
}

#[test]
fn unknown_mode_is_ignored() {
    let mut engine = engine(FxConfig::default());
    engine.set_mode(3);

    engine.set_mode(ModeId::COUNT);

    assert_eq!(engine.mode(), 3);
}

#[test]
fn mode_change_restarts_animation() {
    let mut engine = engine(FxConfig {
        mode: ModeId::Blink,
        ..full_brightness()
    });

    engine.tick(at(0));
    engine.tick(at(600));
    assert_eq!(engine.driver().frames[1], [BLACK; LEDS]);

    // Blink starts over in its lit half
    engine.set_mode(ModeId::Blink.as_raw());
    engine.tick(at(601));
    assert_eq!(engine.driver().frames[2], [rgb_from_u32(0x00FF00); LEDS]);
}

#[test]
fn speed_sets_cycle_length() {
    let mut engine = engine(FxConfig {
        mode: ModeId::Blink,
        speed: 100,
        ..full_brightness()
    });

    engine.tick(at(0));
    engine.tick(at(60));
    engine.tick(at(110));

    let frames = &engine.driver().frames;
    assert_eq!(frames[1], [BLACK; LEDS]);
    assert_eq!(frames[2], [rgb_from_u32(0x00FF00); LEDS]);
}

#[test]
fn speed_has_a_floor() {
    let mut engine = engine(FxConfig::default());

    engine.set_speed(0);

    assert_eq!(engine.speed(), SPEED_MIN);
}

#[test]
fn custom_frame_interval() {
    let mut engine = engine(FxConfig {
        frame_interval: Duration::from_millis(100),
        ..FxConfig::default()
    });

    engine.tick(at(0));
    engine.tick(at(50));
    engine.tick(at(100));

    assert_eq!(engine.driver().frames.len(), 2);
}
