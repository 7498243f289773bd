// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Device-Specific Drivers
//!
//! Drivers for off-chip devices wired to the FPro cores. They sit above the raw `hw/` layer
//! and below the checks.
//!
//! ## Existing drivers
//!
//! - [`adxl362`] – Analog Devices ADXL362 SPI accelerometer

pub mod adxl362;

pub use adxl362::Adxl362;
