#![no_main]
#![no_std]

use panic_rtt_target as _;
use rtt_target::rprintln;

use cortex_m_rt::entry;
use embedded_hal::delay::DelayNs;
use log::LevelFilter;
use microbit::{board::Board, hal::timer};

use mb2_captouch::{
    TouchEvent, TouchSensor, TouchTracker,
    board::{Mb2TouchPin, init_logging},
};

/// Time in milliseconds between touch checks.
const POLL_INTERVAL: u32 = 100;

/// Time in milliseconds to let the board settle before
/// calibrating.
const SETTLE_TIME: u32 = 500;

#[entry]
fn main() -> ! {
    init_logging(LevelFilter::Debug);
    let board = Board::take().unwrap();
    let touch_pin = Mb2TouchPin::new(board.pins.p1_04.into_floating_input().degrade());
    let timer0 = timer::Timer::new(board.TIMER0);
    let mut timer1 = timer::Timer::new(board.TIMER1);

    let mut sensor = TouchSensor::new(touch_pin, timer0);
    timer1.delay_ms(SETTLE_TIME);
    // Don't touch the logo while this runs.
    let baseline = sensor.configure();
    rprintln!("baseline {} threshold {}", baseline, sensor.threshold());

    let mut tracker = TouchTracker::new();
    loop {
        match sensor.poll(&mut tracker) {
            Some(TouchEvent::Press) => rprintln!("touched"),
            Some(TouchEvent::Release) => rprintln!("released"),
            None => (),
        }
        timer1.delay_ms(POLL_INTERVAL);
    }
}
