//! Mode system with compile-time known mode variants
//!
//! Every mode is a pure function of the effect color and the animation phase
//! (0-255 over one speed cycle), so modes keep no state of their own.

mod chase;
mod pulse;
mod rainbow;

use crate::color::Rgb;

/// Effect mode identifier, in mode table order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ModeId {
    Static = 0,
    Blink = 1,
    Breath = 2,
    ColorWipe = 3,
    Rainbow = 4,
    RainbowCycle = 5,
    TheaterChase = 6,
    Scan = 7,
    Fade = 8,
    RunningLights = 9,
}

impl ModeId {
    /// All modes, indexed by their raw value
    pub const ALL: [ModeId; 10] = [
        ModeId::Static,
        ModeId::Blink,
        ModeId::Breath,
        ModeId::ColorWipe,
        ModeId::Rainbow,
        ModeId::RainbowCycle,
        ModeId::TheaterChase,
        ModeId::Scan,
        ModeId::Fade,
        ModeId::RunningLights,
    ];

    #[allow(clippy::cast_possible_truncation)]
    pub const COUNT: u8 = Self::ALL.len() as u8;

    pub const fn from_raw(raw: u8) -> Option<Self> {
        if raw < Self::COUNT {
            Some(Self::ALL[raw as usize])
        } else {
            None
        }
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            ModeId::Static => "Static",
            ModeId::Blink => "Blink",
            ModeId::Breath => "Breath",
            ModeId::ColorWipe => "Color Wipe",
            ModeId::Rainbow => "Rainbow",
            ModeId::RainbowCycle => "Rainbow Cycle",
            ModeId::TheaterChase => "Theater Chase",
            ModeId::Scan => "Scan",
            ModeId::Fade => "Fade",
            ModeId::RunningLights => "Running Lights",
        }
    }

    /// Render one frame of this mode
    ///
    /// # Arguments
    /// * `color` - Effect color (ignored by rainbow modes)
    /// * `phase` - Position within the current animation cycle
    pub fn render<const N: usize>(self, color: Rgb, phase: u8) -> [Rgb; N] {
        match self {
            ModeId::Static => [color; N],
            ModeId::Blink => pulse::blink(color, phase),
            ModeId::Breath => pulse::breath(color, phase),
            ModeId::Fade => pulse::fade(color, phase),
            ModeId::ColorWipe => chase::color_wipe(color, phase),
            ModeId::TheaterChase => chase::theater_chase(color, phase),
            ModeId::Scan => chase::scan(color, phase),
            ModeId::RunningLights => chase::running_lights(color, phase),
            ModeId::Rainbow => rainbow::rainbow(phase),
            ModeId::RainbowCycle => rainbow::rainbow_cycle(phase),
        }
    }
}

/// Offset of LED `index` along the strip, as a fraction 0-255
#[allow(clippy::cast_possible_truncation)]
fn strip_offset8(index: usize, len: usize) -> u8 {
    if len == 0 {
        return 0;
    }
    ((index * 256) / len) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLACK, rgb_from_u32};

    const RED: Rgb = rgb_from_u32(0xFF0000);

    fn lit<const N: usize>(frame: &[Rgb; N]) -> usize {
        frame.iter().filter(|led| **led != BLACK).count()
    }

    #[test]
    fn raw_values_match_table_order() {
        for (index, mode) in ModeId::ALL.iter().enumerate() {
            assert_eq!(usize::from(mode.as_raw()), index);
            assert_eq!(ModeId::from_raw(mode.as_raw()), Some(*mode));
        }
        assert_eq!(ModeId::from_raw(ModeId::COUNT), None);
    }

    #[test]
    fn static_fills_strip() {
        assert_eq!(ModeId::Static.render::<5>(RED, 77), [RED; 5]);
    }

    #[test]
    fn blink_toggles_at_half_cycle() {
        assert_eq!(lit(&ModeId::Blink.render::<4>(RED, 0)), 4);
        assert_eq!(lit(&ModeId::Blink.render::<4>(RED, 200)), 0);
    }

    #[test]
    fn color_wipe_fills_then_clears() {
        assert_eq!(lit(&ModeId::ColorWipe.render::<10>(RED, 0)), 0);
        assert_eq!(lit(&ModeId::ColorWipe.render::<10>(RED, 127)), 10);
        let clearing = ModeId::ColorWipe.render::<10>(RED, 192);
        assert_eq!(clearing[0], BLACK);
        assert_eq!(clearing[9], RED);
    }

    #[test]
    fn scan_lights_single_led_at_both_ends() {
        let start = ModeId::Scan.render::<8>(RED, 0);
        assert_eq!(lit(&start), 1);
        assert_eq!(start[0], RED);

        let middle = ModeId::Scan.render::<8>(RED, 128);
        assert_eq!(lit(&middle), 1);
        assert_eq!(middle[7], RED);
    }

    #[test]
    fn theater_chase_lights_every_third() {
        assert_eq!(lit(&ModeId::TheaterChase.render::<9>(RED, 0)), 3);
    }

    #[test]
    fn rainbow_cycle_spreads_hues() {
        let frame = ModeId::RainbowCycle.render::<4>(RED, 0);
        assert_ne!(frame[0], frame[2]);
    }

    #[test]
    fn empty_strip_renders() {
        for mode in ModeId::ALL {
            assert!(mode.render::<0>(RED, 100).is_empty());
        }
    }
}
