//! Auto-cycle scheduler
//!
//! Advances the effect mode on a fixed period while enabled. The check is a
//! cheap poll run once per loop iteration.

use embassy_time::{Duration, Instant};
use log::info;

use crate::engine::EffectEngine;

/// Time between automatic mode changes
pub const AUTO_CYCLE_PERIOD: Duration = Duration::from_millis(4000);

/// Scheduler state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoCycleState {
    /// Modes change only on request
    Idle,
    /// Modes advance every period
    Cycling,
}

/// Auto-cycle scheduler
#[derive(Debug, Clone)]
pub struct AutoCycle {
    enabled: bool,
    last_change: Instant,
    period: Duration,
}

impl AutoCycle {
    /// Create an idle scheduler with the default period
    pub const fn new() -> Self {
        Self {
            enabled: false,
            last_change: Instant::from_ticks(0),
            period: AUTO_CYCLE_PERIOD,
        }
    }

    /// Override the cycling period
    #[must_use]
    pub const fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    pub const fn state(&self) -> AutoCycleState {
        if self.enabled {
            AutoCycleState::Cycling
        } else {
            AutoCycleState::Idle
        }
    }

    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub const fn last_change(&self) -> Instant {
        self.last_change
    }

    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Start cycling. The first change happens one full period after `now`.
    pub fn enable(&mut self, now: Instant) {
        self.enabled = true;
        self.last_change = now;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Advance the engine mode if cycling and the period has elapsed.
    ///
    /// Returns the new mode index when a change was made.
    pub fn poll<E: EffectEngine>(&mut self, engine: &mut E, now: Instant) -> Option<u8> {
        if !self.enabled {
            return None;
        }
        let elapsed = now.checked_duration_since(self.last_change)?;
        if elapsed <= self.period {
            return None;
        }

        let count = engine.mode_count();
        if count == 0 {
            return None;
        }
        #[allow(clippy::cast_possible_truncation)]
        let next = ((u16::from(engine.mode()) + 1) % u16::from(count)) as u8;
        engine.set_mode(next);
        self.last_change = now;
        info!("auto_cycle: mode is {}", engine.mode_name(engine.mode()));

        Some(next)
    }
}

impl Default for AutoCycle {
    fn default() -> Self {
        Self::new()
    }
}
