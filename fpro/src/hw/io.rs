// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Register access for FPro I/O slots.
//!
//! - `IoBus` is the seam every core driver is written against: 32-bit register reads and
//!   writes addressed by register index within one slot.
//! - `Mmio` is the real implementation, doing volatile accesses at `base + 4 * reg`.

use core::ptr;

/// Word-addressed register access within a single slot.
pub trait IoBus {
    fn read_reg(&mut self, reg: usize) -> u32;
    fn write_reg(&mut self, reg: usize, data: u32);
}

/// Memory-mapped register block of one slot.
pub struct Mmio {
    base: usize,
}

impl Mmio {
    /// # Safety
    ///
    /// `base` must be the address of a slot register block, and no other `Mmio` may be
    /// created for the same slot.
    pub const unsafe fn new(base: usize) -> Self {
        Self { base }
    }
}

impl IoBus for Mmio {
    #[inline]
    fn read_reg(&mut self, reg: usize) -> u32 {
        unsafe { ptr::read_volatile((self.base + reg * 4) as *const u32) }
    }

    #[inline]
    fn write_reg(&mut self, reg: usize, data: u32) {
        unsafe { ptr::write_volatile((self.base + reg * 4) as *mut u32, data) }
    }
}
