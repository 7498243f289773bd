// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Eight-digit seven-segment display core.
//!
//! Each digit takes an active-low 8-bit pattern: bits 6..0 are segments g..a and bit 7 is
//! the decimal point. Digits 0..3 are packed into the low data register and 4..7 into the
//! high one, one byte per digit.

use super::IoBus;

const DATA_LOW_REG: usize = 0;
const DATA_HIGH_REG: usize = 1;

pub const NUM_DIGITS: usize = 8;

/// Pattern with every segment and the decimal point off.
pub const BLANK: u8 = 0xff;

const HEX_TABLE: [u8; 16] = [
    0xc0, 0xf9, 0xa4, 0xb0, 0x99, 0x92, 0x82, 0xf8, 0x80, 0x90, 0x88, 0x83, 0xc6, 0xa1, 0x86,
    0x8e,
];

/// Segment pattern for a hex digit; anything above 0xf is blank.
pub fn h2s(hex: u8) -> u8 {
    HEX_TABLE.get(hex as usize).copied().unwrap_or(BLANK)
}

pub struct SsegCore<B: IoBus> {
    io: B,
    ptn_buf: [u8; NUM_DIGITS],
    dp: u8,
}

impl<B: IoBus> SsegCore<B> {
    /// Take the core and blank the display.
    pub fn new(io: B) -> Self {
        let mut sseg = Self {
            io,
            ptn_buf: [BLANK; NUM_DIGITS],
            dp: 0x00,
        };
        sseg.write_led();
        sseg
    }

    fn write_led(&mut self) {
        let mut words = [0u32; 2];
        for (i, &ptn) in self.ptn_buf.iter().enumerate() {
            let dp_off = if self.dp & (1 << i) != 0 { 0x00 } else { 0x80 };
            let byte = (ptn & 0x7f) | dp_off;
            words[i / 4] |= (byte as u32) << (8 * (i % 4));
        }
        self.io.write_reg(DATA_LOW_REG, words[0]);
        self.io.write_reg(DATA_HIGH_REG, words[1]);
    }

    /// Set all eight digit patterns, digit 0 first.
    pub fn write_8ptn(&mut self, ptn_array: &[u8; NUM_DIGITS]) {
        self.ptn_buf = *ptn_array;
        self.write_led();
    }

    /// Set the pattern of a single digit. Out-of-range positions are ignored.
    pub fn write_1ptn(&mut self, pattern: u8, pos: usize) {
        if let Some(slot) = self.ptn_buf.get_mut(pos) {
            *slot = pattern;
            self.write_led();
        }
    }

    /// Light the decimal point of every digit whose bit is set in `pt`.
    pub fn set_dp(&mut self, pt: u8) {
        self.dp = pt;
        self.write_led();
    }

    /// Current pattern of digit `pos`, as written (decimal point not merged).
    pub fn pattern(&self, pos: usize) -> Option<u8> {
        self.ptn_buf.get(pos).copied()
    }

    pub fn free(self) -> B {
        self.io
    }
}
