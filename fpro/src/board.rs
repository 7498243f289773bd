// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Board configuration for the FPro vanilla system.
//!
//! All I/O cores hang off a single bus bridge. Each core owns one slot of 32 32-bit
//! registers, so a slot's base address is `BRIDGE_BASE + slot * 32 * 4`.

use crate::hw::{GpiCore, GpoCore, Mmio, SpiCore, SsegCore, TimerCore, UartCore};

/// Base address of the I/O bus bridge as seen by the CPU.
pub const BRIDGE_BASE: usize = 0xc000_0000;

/// System clock feeding every I/O core, in MHz.
pub const SYS_CLK_FREQ_MHZ: u32 = 100;

/// Baud rate the UART core is programmed with at construction.
pub const DEFAULT_BAUD: u32 = 9600;

/// Number of registers in one slot.
pub const SLOT_WORDS: usize = 32;

/// Number of LEDs wired to the GPO core.
pub const NUM_LEDS: usize = 16;

// Slot assignment
pub const S0_SYS_TIMER: usize = 0;
pub const S1_UART1: usize = 1;
pub const S2_LED: usize = 2;
pub const S3_SW: usize = 3;
pub const S8_SSEG: usize = 8;
pub const S9_SPI: usize = 9;

/// Byte address of the register block for `slot`.
#[inline]
pub const fn get_slot_addr(base: usize, slot: usize) -> usize {
    base + slot * SLOT_WORDS * 4
}

/// Every I/O core used by the bring-up program, each owning its slot.
pub struct Board {
    pub timer: TimerCore<Mmio>,
    pub uart: UartCore<Mmio>,
    pub led: GpoCore<Mmio>,
    pub sw: GpiCore<Mmio>,
    pub sseg: SsegCore<Mmio>,
    pub spi: SpiCore<Mmio>,
}

impl Board {
    /// Construct all cores at their fixed slot addresses.
    ///
    /// # Safety
    ///
    /// The caller must guarantee the board is only constructed once, since every core
    /// assumes exclusive ownership of its registers. Use a singleton at the call site.
    pub unsafe fn steal() -> Self {
        let slot = |s| Mmio::new(get_slot_addr(BRIDGE_BASE, s));
        Self {
            timer: TimerCore::new(slot(S0_SYS_TIMER)),
            uart: UartCore::new(slot(S1_UART1)),
            led: GpoCore::new(slot(S2_LED)),
            sw: GpiCore::new(slot(S3_SW)),
            sseg: SsegCore::new(slot(S8_SSEG)),
            spi: SpiCore::new(slot(S9_SPI)),
        }
    }
}
