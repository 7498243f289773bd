// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! UART core.
//!
//! Provides printing helpers for decimal numbers and ASCII strings to an attached serial
//! terminal, plus a non-blocking receive. Anything fancier goes through `write!`.
//!
//! Note: When using `writeln!`, be sure to include `\r` (CR) in the format string to ensure correct
//! line endings on the terminal.
//!
//! To access the terminal on the host machine, connect to the board's USB-UART port and use
//! ```text
//! $ screen /dev/ttyUSB1 9600
//! ```

use core::{convert::Infallible, fmt};
use nb::block;

use super::IoBus;
use crate::board::{DEFAULT_BAUD, SYS_CLK_FREQ_MHZ};

const RD_DATA_REG: usize = 0;
const DVSR_REG: usize = 1;
const WR_DATA_REG: usize = 2;
const RM_RD_DATA_REG: usize = 3;

const RX_DATA_FIELD: u32 = 0x0000_00ff;
const RX_EMPT_FIELD: u32 = 0x0000_0100;
const TX_FULL_FIELD: u32 = 0x0000_0200;

pub struct UartCore<B: IoBus> {
    io: B,
    baud: u32,
}

impl<B: IoBus> UartCore<B> {
    /// Take the core and program the default baud rate.
    pub fn new(io: B) -> Self {
        let mut uart = Self { io, baud: 0 };
        uart.set_baud_rate(DEFAULT_BAUD);
        uart
    }

    /// The core oversamples 16x: `dvsr = clk / 16 / baud - 1`.
    pub fn set_baud_rate(&mut self, baud: u32) {
        let dvsr = (SYS_CLK_FREQ_MHZ * 1_000_000 / 16 / baud.max(1)).saturating_sub(1);
        self.baud = baud;
        self.io.write_reg(DVSR_REG, dvsr);
    }

    #[inline]
    pub fn baud_rate(&self) -> u32 {
        self.baud
    }

    #[inline]
    fn tx_full(&mut self) -> bool {
        self.io.read_reg(RD_DATA_REG) & TX_FULL_FIELD != 0
    }

    /// Queue a byte if the transmit FIFO has room.
    pub fn try_tx_byte(&mut self, b: u8) -> nb::Result<(), Infallible> {
        if self.tx_full() {
            return Err(nb::Error::WouldBlock);
        }
        self.io.write_reg(WR_DATA_REG, b as u32);
        Ok(())
    }

    #[inline]
    pub fn write_byte(&mut self, b: u8) {
        let _ = block!(self.try_tx_byte(b));
    }

    /// Pop one received byte, if any.
    pub fn rx_byte(&mut self) -> nb::Result<u8, Infallible> {
        let data = self.io.read_reg(RD_DATA_REG);
        if data & RX_EMPT_FIELD != 0 {
            return Err(nb::Error::WouldBlock);
        }
        self.io.write_reg(RM_RD_DATA_REG, 0);
        Ok((data & RX_DATA_FIELD) as u8)
    }

    pub fn write_str(&mut self, s: &str) {
        for &b in s.as_bytes() {
            self.write_byte(b);
        }
    }

    pub fn print_u64(&mut self, mut n: u64) {
        let mut buf = [0u8; 20];
        let mut i = buf.len();
        if n == 0 {
            self.write_byte(b'0');
            return;
        }
        while n > 0 {
            i -= 1;
            buf[i] = b'0' + (n % 10) as u8;
            n /= 10;
        }
        for &b in &buf[i..] {
            self.write_byte(b);
        }
    }

    pub fn free(self) -> B {
        self.io
    }
}

// Implement `core::fmt::Write` so we can use `write!` / `writeln!` on `UartCore`.
impl<B: IoBus> fmt::Write for UartCore<B> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        UartCore::write_str(self, s);
        Ok(())
    }
}
