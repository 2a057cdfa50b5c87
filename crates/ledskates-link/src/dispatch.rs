//! Command dispatcher
//!
//! Applies a [`Command`] to the effect engine and the auto-cycle scheduler.
//! Dispatch never fails: malformed values fall back to safe defaults,
//! out-of-range colors and unknown keys are dropped.

use embassy_time::Instant;
use log::{debug, info};

use crate::adjust::Adjustment;
use crate::auto_cycle::AutoCycle;
use crate::command::{Command, CommandKey};
use crate::engine::{COLOR_MAX, EffectEngine};
use crate::numeric::{parse_u8, parse_u32};

/// Apply `command` to the engine and scheduler state
pub fn dispatch<E: EffectEngine>(
    command: &Command,
    engine: &mut E,
    auto_cycle: &mut AutoCycle,
    now: Instant,
) {
    debug!("dispatch: command {}", command);

    let value = command.value();
    match command.key() {
        CommandKey::Color => apply_color(engine, value),
        CommandKey::Mode => {
            apply_mode(engine, value);
            auto_cycle.disable();
        }
        CommandKey::Brightness => {
            let brightness = Adjustment::brightness(value).apply(engine.brightness());
            engine.set_brightness(brightness);
            info!("dispatch: brightness is {}", engine.brightness());
        }
        CommandKey::Speed => {
            let speed = Adjustment::speed(value).apply(engine.speed());
            engine.set_speed(speed);
            info!("dispatch: speed is {}", engine.speed());
        }
        CommandKey::AutoCycle => {
            if value.starts_with('-') {
                auto_cycle.disable();
                info!("dispatch: auto cycle disabled");
            } else {
                auto_cycle.enable(now);
                info!("dispatch: auto cycle enabled");
            }
        }
        CommandKey::Unrecognized(key) => {
            debug!("dispatch: ignoring unknown key {:?}", key);
        }
    }
}

fn apply_color<E: EffectEngine>(engine: &mut E, value: &str) {
    let color = parse_u32(value);
    if color > COLOR_MAX {
        debug!("dispatch: color {} out of range, ignored", color);
        return;
    }
    engine.set_color(color);
    info!("dispatch: color is {:06X}", engine.color());
}

fn apply_mode<E: EffectEngine>(engine: &mut E, value: &str) {
    let count = engine.mode_count();
    if count == 0 {
        return;
    }
    engine.set_mode(parse_u8(value) % count);
    info!("dispatch: mode is {}", engine.mode_name(engine.mode()));
}
