// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! SPI master core.
//!
//! - 8-bit full-duplex shifter with a programmable clock divisor and mode.
//! - Up to 32 active-low slave-select lines driven from the `SS_n` register.
//!
//! Chip selects are manual: callers bracket each transaction with `assert_ss` /
//! `deassert_ss`.

use core::convert::Infallible;
use nb::block;

use super::{gpio::bit_mask, IoBus};
use crate::board::SYS_CLK_FREQ_MHZ;

const RD_DATA_REG: usize = 0;
const SS_REG: usize = 1;
const WR_DATA_REG: usize = 2;
const CTRL_REG: usize = 3;

const READY_FIELD: u32 = 0x0000_0100;
const RX_DATA_FIELD: u32 = 0x0000_00ff;
const DVSR_FIELD: u32 = 0x0000_ffff;
const CPOL_BIT: u32 = 16;
const CPHA_BIT: u32 = 17;

/// Default SCLK after construction, in Hz.
pub const DEFAULT_FREQ_HZ: u32 = 400_000;

pub struct SpiCore<B: IoBus> {
    io: B,
    ss_n: u32,
    ctrl: u32,
}

impl<B: IoBus> SpiCore<B> {
    /// Take the core with every slave deselected, 400 kHz and mode (0, 0).
    pub fn new(io: B) -> Self {
        let mut spi = Self {
            io,
            ss_n: 0xffff_ffff,
            ctrl: 0,
        };
        spi.write_ss_n(0xffff_ffff);
        spi.set_freq(DEFAULT_FREQ_HZ);
        spi.set_mode(false, false);
        spi
    }

    /// Set SCLK to `freq` Hz. The core divides the system clock by `2 * dvsr`.
    pub fn set_freq(&mut self, freq: u32) {
        let dvsr = (SYS_CLK_FREQ_MHZ * 1_000_000 / freq.max(1)) / 2;
        self.ctrl = (self.ctrl & !DVSR_FIELD) | (dvsr & DVSR_FIELD);
        self.io.write_reg(CTRL_REG, self.ctrl);
    }

    /// Set clock polarity (idle high when `cpol`) and phase (sample on second edge when
    /// `cpha`).
    pub fn set_mode(&mut self, cpol: bool, cpha: bool) {
        self.ctrl &= !((1 << CPOL_BIT) | (1 << CPHA_BIT));
        self.ctrl |= (cpol as u32) << CPOL_BIT | (cpha as u32) << CPHA_BIT;
        self.io.write_reg(CTRL_REG, self.ctrl);
    }

    /// Drive all slave-select lines at once.
    pub fn write_ss_n(&mut self, data: u32) {
        self.ss_n = data;
        self.io.write_reg(SS_REG, self.ss_n);
    }

    /// Select slave `n` (drive its line low). Lines past 31 do not exist and are ignored.
    pub fn assert_ss(&mut self, n: usize) {
        if let Some(mask) = bit_mask(n) {
            self.write_ss_n(self.ss_n & !mask);
        }
    }

    /// Deselect slave `n`.
    pub fn deassert_ss(&mut self, n: usize) {
        if let Some(mask) = bit_mask(n) {
            self.write_ss_n(self.ss_n | mask);
        }
    }

    fn poll_ready(&mut self) -> nb::Result<(), Infallible> {
        if self.io.read_reg(RD_DATA_REG) & READY_FIELD != 0 {
            Ok(())
        } else {
            Err(nb::Error::WouldBlock)
        }
    }

    /// Perform a blocking, full-duplex transfer of one byte.
    pub fn transfer(&mut self, byte: u8) -> u8 {
        let _ = block!(self.poll_ready());
        self.io.write_reg(WR_DATA_REG, byte as u32);
        let _ = block!(self.poll_ready());
        (self.io.read_reg(RD_DATA_REG) & RX_DATA_FIELD) as u8
    }

    /// Read a byte, sending 0x00.
    #[inline]
    pub fn read_byte(&mut self) -> u8 {
        self.transfer(0x00)
    }

    /// Transfer a byte buffer in-place.
    pub fn transfer_in_place(&mut self, buf: &mut [u8]) {
        for b in buf.iter_mut() {
            *b = self.transfer(*b);
        }
    }

    pub fn free(self) -> B {
        self.io
    }
}
