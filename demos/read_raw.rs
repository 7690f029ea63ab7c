#![no_main]
#![no_std]

use panic_rtt_target as _;
use rtt_target::rprintln;

use cortex_m_rt::entry;
use embedded_hal::delay::DelayNs;
use log::LevelFilter;
use microbit::{board::Board, hal::timer};

use mb2_captouch::{
    SensorConfig, TouchSensor,
    board::{Mb2TouchPin, init_logging},
};

#[entry]
fn main() -> ! {
    init_logging(LevelFilter::Trace);
    let board = Board::take().unwrap();
    let touch_pin = Mb2TouchPin::new(board.pins.p1_04.into_floating_input().degrade());
    let timer0 = timer::Timer::new(board.TIMER0);
    let mut timer1 = timer::Timer::new(board.TIMER1);

    // Longer samples make the raw numbers easier to eyeball.
    let config = SensorConfig::default().with_samples(10);
    let mut touchpad = TouchSensor::with_config(touch_pin, timer0, config).unwrap();
    touchpad.configure();
    rprintln!("summing {} samples per reading", touchpad.config().samples);

    loop {
        let reading = touchpad.read();
        rprintln!("{} (threshold {})", reading, touchpad.threshold());
        timer1.delay_ms(500);
    }
}
