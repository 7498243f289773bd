// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # FPro I/O Cores
//!
//! Register-level wrappers for the cores the bring-up program talks to. Every core owns the
//! `IoBus` of its slot; on hardware that is [`Mmio`], in host tests an in-memory model.

pub mod gpio;
pub mod io;
pub mod sseg;
pub mod spi;
pub mod timer;
pub mod uart;

#[cfg(test)]
pub(crate) mod sim;

pub use gpio::{GpiCore, GpoCore};
pub use io::{IoBus, Mmio};
pub use spi::SpiCore;
pub use sseg::SsegCore;
pub use timer::TimerCore;
pub use uart::UartCore;
