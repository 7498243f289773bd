// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Bring-up checks for the vanilla I/O cores.
//!
//! Each check runs a fixed sequence against the cores it is handed, with hardcoded delays.
//! Nothing is verified on the board side; the result is meant to be watched (LEDs, display)
//! or read on the serial terminal.

use core::fmt;

use embedded_hal::delay::DelayNs;

use crate::drivers::{adxl362, Adxl362};
use crate::hw::{sseg, GpiCore, GpoCore, IoBus, SpiCore, SsegCore, TimerCore, UartCore};
use crate::tilt::{self, Tilt, TILT_LEDS};

/// Slave-select line the accelerometer sits on.
pub const GSENSOR_SS: usize = 0;

/// Blink every LED once per second, five times, as a sanity check of the timer against the
/// system clock.
pub fn timer_check<L, T, W>(led: &mut GpoCore<L>, timer: &mut TimerCore<T>, out: &mut W)
where
    L: IoBus,
    T: IoBus,
    W: fmt::Write,
{
    for i in 0..5u32 {
        led.write(0xffff);
        timer.sleep_ms(500);
        led.write(0x0000);
        timer.sleep_ms(500);
        let now = timer.now_ms();
        crate::debug!(out, "timer check - (loop #)/now: ", i, now);
    }
}

/// Flash LEDs `0..n` one at a time.
pub fn led_check<L: IoBus, D: DelayNs>(led: &mut GpoCore<L>, delay: &mut D, n: usize) {
    for i in 0..n {
        led.write_bit(true, i);
        delay.delay_ms(200);
        led.write_bit(false, i);
        delay.delay_ms(200);
    }
}

/// Flash the LEDs matching the switch positions sampled at the start, 30 times.
pub fn sw_check<L, S, D>(led: &mut GpoCore<L>, sw: &mut GpiCore<S>, delay: &mut D)
where
    L: IoBus,
    S: IoBus,
    D: DelayNs,
{
    let s = sw.read();
    for _ in 0..30 {
        led.write(s);
        delay.delay_ms(50);
        led.write(0);
        delay.delay_ms(50);
    }
}

/// Numbered UART test line; the count survives between runs.
#[derive(Default)]
pub struct UartCheck {
    pass: u32,
}

impl UartCheck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transmit `uart test #<n>` and bump the count.
    pub fn run<U: IoBus>(&mut self, uart: &mut UartCore<U>) {
        uart.write_str("uart test #");
        uart.print_u64(self.pass.into());
        uart.write_str("\n\r");
        self.pass = self.pass.wrapping_add(1);
    }

    #[inline]
    pub fn passes(&self) -> u32 {
        self.pass
    }
}

/// One pass of [`gsensor_check`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct GsensorReading {
    /// Raw part id register; not validated.
    pub part_id: u8,
    pub raw: [i8; 3],
    pub tilt: Tilt,
}

impl GsensorReading {
    /// Whether the part id is the ADXL362 one. Only used for reporting.
    pub fn is_adxl362(&self) -> bool {
        self.part_id == adxl362::PART_ID_ADXL362
    }
}

/// Read the accelerometer once and show its tilt on LEDs 0..3, after blanking the display.
pub fn gsensor_check<P, L, S>(
    spi: &mut SpiCore<P>,
    led: &mut GpoCore<L>,
    sseg: &mut SsegCore<S>,
) -> GsensorReading
where
    P: IoBus,
    L: IoBus,
    S: IoBus,
{
    let accel = Adxl362::new(GSENSOR_SS);
    accel.configure(spi);
    let part_id = accel.read_part_id(spi);
    let raw = accel.read_xyz(spi);
    let tilt = tilt::tilt_of(raw);

    for pos in 0..sseg::NUM_DIGITS {
        sseg.write_1ptn(sseg::BLANK, pos);
    }

    show_tilt(led, tilt);

    GsensorReading { part_id, raw, tilt }
}

/// Light the LED for `tilt` first, then clear the other direction LEDs in order.
pub fn show_tilt<L: IoBus>(led: &mut GpoCore<L>, tilt: Tilt) {
    let lit = tilt.led_index();
    if let Some(i) = lit {
        led.write_bit(true, i);
    }
    for i in (0..TILT_LEDS).filter(|&i| Some(i) != lit) {
        led.write_bit(false, i);
    }
}
