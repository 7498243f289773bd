// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Tilt classification from a single accelerometer sample.
//!
//! Works in `no_std` and touches no hardware.

use micromath::F32Ext;

/// 8-bit reading of 1 g in the ±2 g range (128 counts full scale, halved).
pub const RAW_MAX: f32 = 127.0 / 2.0;

/// Number of LEDs used to show the tilt direction.
pub const TILT_LEDS: usize = 4;

/// Direction the board is tilted, as read from gravity on the x/y/z axes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Tilt {
    Right,
    Left,
    Forward,
    Back,
    None,
}

impl Tilt {
    /// LED lit for this direction, if any.
    pub fn led_index(self) -> Option<usize> {
        match self {
            Tilt::Right => Some(1),
            Tilt::Left => Some(2),
            Tilt::Forward => Some(3),
            Tilt::Back => Some(0),
            Tilt::None => None,
        }
    }

    /// Pattern on LEDs 0..3 with exactly the direction LED set.
    pub fn led_pattern(self) -> u32 {
        self.led_index().map_or(0, |i| 1 << i)
    }
}

/// Scale a raw reading to whole g, clamped to {-1, 0, 1}.
pub fn normalize(raw: i8) -> i8 {
    let g = F32Ext::round(raw as f32 / RAW_MAX);
    (g as i8).clamp(-1, 1)
}

/// Map a normalized (x, y, z) triple to a direction.
pub fn classify(x: i8, y: i8, z: i8) -> Tilt {
    match (x, y, z) {
        (0, -1, 0) => Tilt::Right,
        (-1, 0, 0) => Tilt::Left,
        (0, 1, 0) => Tilt::Forward,
        (1, 0, 0) => Tilt::Back,
        _ => Tilt::None,
    }
}

/// Normalize and classify a raw sample.
pub fn tilt_of(raw: [i8; 3]) -> Tilt {
    let [x, y, z] = raw.map(normalize);
    classify(x, y, z)
}
