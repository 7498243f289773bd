// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! ADXL362 3-axis accelerometer on the SPI core.
//!
//! This module handles the command framing for register reads. Every read is a single
//! chip-select window: read opcode, start address, then one dummy byte per register wanted.
//! Consecutive registers auto-increment.

use crate::hw::{IoBus, SpiCore};

// Command
pub const RD_CMD: u8 = 0x0b;

// Register addresses
pub mod reg {
    pub const DEVID_AD: u8 = 0x00;
    pub const PART_ID: u8 = 0x02;
    /// 8 MSBs of x; y and z follow.
    pub const XDATA: u8 = 0x08;
}

/// Part id the datasheet gives for the ADXL362.
pub const PART_ID_ADXL362: u8 = 0xf2;

/// SCLK used for the sensor.
pub const SPI_FREQ_HZ: u32 = 400_000;

/// ADXL362 driver bound to one slave-select line of the SPI core.
///
/// The SPI core is passed in as &mut to each method so the sensor can share the core with
/// other slaves.
pub struct Adxl362 {
    ss: usize,
}

impl Adxl362 {
    pub fn new(ss: usize) -> Self {
        Self { ss }
    }

    /// Program the core for the sensor: 400 kHz, CPOL=0, CPHA=0.
    pub fn configure<B: IoBus>(&self, spi: &mut SpiCore<B>) {
        spi.set_freq(SPI_FREQ_HZ);
        spi.set_mode(false, false);
    }

    /// Read `buf.len()` consecutive registers starting at `addr`.
    pub fn read_regs<B: IoBus>(&self, spi: &mut SpiCore<B>, addr: u8, buf: &mut [u8]) {
        buf.fill(0x00);

        spi.assert_ss(self.ss);
        spi.transfer(RD_CMD);
        spi.transfer(addr);
        spi.transfer_in_place(buf);
        spi.deassert_ss(self.ss);
    }

    pub fn read_reg<B: IoBus>(&self, spi: &mut SpiCore<B>, addr: u8) -> u8 {
        let mut buf = [0u8];
        self.read_regs(spi, addr, &mut buf);
        buf[0]
    }

    /// Read the part id register. The value is not checked here.
    pub fn read_part_id<B: IoBus>(&self, spi: &mut SpiCore<B>) -> u8 {
        self.read_reg(spi, reg::PART_ID)
    }

    /// Read the 8-bit x, y, z samples in one burst.
    pub fn read_xyz<B: IoBus>(&self, spi: &mut SpiCore<B>) -> [i8; 3] {
        let mut buf = [0u8; 3];
        self.read_regs(spi, reg::XDATA, &mut buf);
        buf.map(|b| b as i8)
    }
}
