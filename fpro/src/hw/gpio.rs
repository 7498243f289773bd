// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! General-purpose output (LED) and input (switch) cores.
//!
//! Both cores expose a single 32-bit data register. The output core cannot be read back, so
//! `GpoCore` remembers the last pattern it wrote in order to update single bits.

use super::IoBus;

const DATA_REG: usize = 0;

/// Single-bit mask for a 32-bit data register, if `bit_pos` fits.
pub(crate) fn bit_mask(bit_pos: usize) -> Option<u32> {
    u32::try_from(bit_pos).ok().and_then(|n| 1u32.checked_shl(n))
}

/// GPO core driving up to 32 output bits (LEDs on the vanilla board).
pub struct GpoCore<B: IoBus> {
    io: B,
    wr_data: u32,
}

impl<B: IoBus> GpoCore<B> {
    pub fn new(io: B) -> Self {
        Self { io, wr_data: 0 }
    }

    /// Drive all outputs with `data`.
    pub fn write(&mut self, data: u32) {
        self.wr_data = data;
        self.io.write_reg(DATA_REG, data);
    }

    /// Drive output `bit_pos` high (`on`) or low, leaving the other bits untouched.
    /// Positions past bit 31 are ignored.
    pub fn write_bit(&mut self, on: bool, bit_pos: usize) {
        let Some(mask) = bit_mask(bit_pos) else {
            return;
        };
        if on {
            self.wr_data |= mask;
        } else {
            self.wr_data &= !mask;
        }
        self.io.write_reg(DATA_REG, self.wr_data);
    }

    /// Last pattern written.
    #[inline]
    pub fn pattern(&self) -> u32 {
        self.wr_data
    }

    pub fn free(self) -> B {
        self.io
    }
}

/// GPI core sampling up to 32 input bits (slide switches on the vanilla board).
pub struct GpiCore<B: IoBus> {
    io: B,
}

impl<B: IoBus> GpiCore<B> {
    pub fn new(io: B) -> Self {
        Self { io }
    }

    pub fn read(&mut self) -> u32 {
        self.io.read_reg(DATA_REG)
    }

    /// Positions past bit 31 read as low.
    pub fn read_bit(&mut self, bit_pos: usize) -> bool {
        bit_mask(bit_pos).is_some_and(|mask| self.read() & mask != 0)
    }

    pub fn free(self) -> B {
        self.io
    }
}
