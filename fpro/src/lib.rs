// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # FPro Vanilla Bring-Up
//!
//! This crate contains the pieces of the vanilla I/O bring-up firmware for an FPGA board
//! built around the FPro bus bridge: register-level wrappers for the I/O cores, the
//! accelerometer read sequence, and the check routines the firmware runs.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`board`] | Slot map, clock and baud configuration, `Board` construction |
//! | [`hw`] | Core-level wrappers around GPO, GPI, SPI, seven-segment, UART, timer |
//! | [`drivers`] | Device-level drivers (ADXL362) |
//! | [`tilt`] | Accelerometer normalization and tilt classification |
//! | [`checks`] | The bring-up check routines |
//!
//! ## Getting Started
//!
//! Run the host tests:
//!
//! ```bash
//! cargo test -p fpro
//! ```
//!
//! Build the firmware (from `vanilla_test/`):
//!
//! ```bash
//! cargo build --release
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod board;
pub mod checks;
pub mod debug;
pub mod drivers;
pub mod hw;
pub mod tilt;

pub use board::Board;
