// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! System timer core.
//!
//! A 48-bit free-running tick counter clocked at `SYS_CLK_FREQ_MHZ`. It provides uptime and
//! the busy-wait delays used by every check. A delay always runs to completion.

use embedded_hal::delay::DelayNs;

use super::IoBus;
use crate::board::SYS_CLK_FREQ_MHZ;

const COUNTER_LOWER_REG: usize = 0;
const COUNTER_UPPER_REG: usize = 1;
const CTRL_REG: usize = 2;

const GO_FIELD: u32 = 0x0000_0001;
const CLR_FIELD: u32 = 0x0000_0002;

pub struct TimerCore<B: IoBus> {
    io: B,
    ctrl: u32,
}

impl<B: IoBus> TimerCore<B> {
    /// Take the timer and start it counting.
    pub fn new(io: B) -> Self {
        let mut timer = Self { io, ctrl: 0 };
        timer.go();
        timer
    }

    pub fn go(&mut self) {
        self.ctrl |= GO_FIELD;
        self.io.write_reg(CTRL_REG, self.ctrl);
    }

    pub fn pause(&mut self) {
        self.ctrl &= !GO_FIELD;
        self.io.write_reg(CTRL_REG, self.ctrl);
    }

    /// Reset the counter to zero; the clear bit is self-clearing from our side.
    pub fn clear(&mut self) {
        self.io.write_reg(CTRL_REG, self.ctrl | CLR_FIELD);
        self.io.write_reg(CTRL_REG, self.ctrl);
    }

    pub fn read_tick(&mut self) -> u64 {
        let lower = self.io.read_reg(COUNTER_LOWER_REG) as u64;
        let upper = (self.io.read_reg(COUNTER_UPPER_REG) & 0xffff) as u64;
        (upper << 32) | lower
    }

    /// Uptime in microseconds.
    #[inline]
    pub fn now_us(&mut self) -> u64 {
        self.read_tick() / SYS_CLK_FREQ_MHZ as u64
    }

    /// Uptime in milliseconds.
    #[inline]
    pub fn now_ms(&mut self) -> u64 {
        self.now_us() / 1000
    }

    /// Busy-wait for at least `us` microseconds.
    pub fn sleep_us(&mut self, us: u64) {
        let start = self.now_us();
        while self.now_us().wrapping_sub(start) < us {
            core::hint::spin_loop();
        }
    }

    #[inline]
    pub fn sleep_ms(&mut self, ms: u64) {
        self.sleep_us(ms * 1000);
    }

    pub fn free(self) -> B {
        self.io
    }
}

impl<B: IoBus> DelayNs for TimerCore<B> {
    fn delay_ns(&mut self, ns: u32) {
        self.sleep_us(u64::from(ns).div_ceil(1000));
    }

    fn delay_us(&mut self, us: u32) {
        self.sleep_us(us.into());
    }

    fn delay_ms(&mut self, ms: u32) {
        self.sleep_ms(ms.into());
    }
}
