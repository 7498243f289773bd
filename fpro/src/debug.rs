// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Debug lines on the UART.
//!
//! `debug!(uart, "label: ", n1, n2)` prints `debug: label: <n1> (0x<n1>) / <n2>` followed by
//! `\n\r`. Lines are only emitted with the `debug` feature; the arguments are evaluated
//! either way.

use core::fmt;

/// Emit a debug line on `$out` (anything implementing `core::fmt::Write`).
#[macro_export]
macro_rules! debug {
    ($out:expr, $msg:expr, $n1:expr, $n2:expr $(,)?) => {
        $crate::debug::emit($out, $msg, ($n1) as i64, ($n2) as i64)
    };
}

/// Write one debug line unconditionally.
pub fn write_line<W: fmt::Write>(out: &mut W, msg: &str, n1: i64, n2: i64) -> fmt::Result {
    write!(out, "debug: {msg}{n1} (0x{n1:x}) / {n2}\n\r")
}

#[inline]
pub fn emit<W: fmt::Write>(out: &mut W, msg: &str, n1: i64, n2: i64) {
    if cfg!(feature = "debug") {
        write_line(out, msg, n1, n2).ok();
    }
}
