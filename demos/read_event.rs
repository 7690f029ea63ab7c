#![no_main]
#![no_std]

use panic_rtt_target as _;
use rtt_target::rprintln;

use cortex_m_rt::entry;
use embedded_hal::delay::DelayNs;
use log::LevelFilter;
use microbit::{board::Board, hal::timer};

use mb2_captouch::{
    TouchSensor, TouchTracker,
    board::{Mb2TouchPin, init_logging},
};

#[entry]
fn main() -> ! {
    init_logging(LevelFilter::Info);
    let board = Board::take().unwrap();
    let touch_pin = Mb2TouchPin::new(board.pins.p1_04.into_floating_input().degrade());
    let timer0 = timer::Timer::new(board.TIMER0);
    let mut timer1 = timer::Timer::new(board.TIMER1);

    let mut touchpad = TouchSensor::new(touch_pin, timer0);
    touchpad.configure();

    let mut tracker = TouchTracker::new();
    loop {
        if let Some(event) = touchpad.poll(&mut tracker) {
            rprintln!("{:?}", event);
        }
        timer1.delay_ms(20);
    }
}
