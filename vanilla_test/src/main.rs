#![no_main]
#![no_std]

use cortex_m_rt::entry;
use panic_halt as _;

use fpro::{checks, drivers::adxl362::PART_ID_ADXL362, Board};

#[entry]
fn main() -> ! {
    // Cores
    let board = cortex_m::singleton!(: Board = unsafe { Board::steal() }).unwrap();
    let Board {
        timer,
        uart,
        led,
        sw,
        sseg,
        spi,
    } = board;

    #[cfg(feature = "self-test")]
    {
        checks::timer_check(led, timer, uart);
        checks::led_check(led, timer, fpro::board::NUM_LEDS);
        checks::sw_check(led, sw, timer);
        checks::UartCheck::new().run(uart);
    }

    loop {
        let reading = checks::gsensor_check(spi, led, sseg);
        if !reading.is_adxl362() {
            fpro::debug!(uart, "main - part id / expected : ", reading.part_id, PART_ID_ADXL362);
        }
        let s = sw.read();
        let now = timer.now_ms();
        fpro::debug!(uart, "main - switch value / up time : ", s, now);
    }
}
