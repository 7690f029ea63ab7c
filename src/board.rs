//! micro:bit v2 binding: the touch logo pin and RTT logging.

use embedded_hal::digital::{InputPin, OutputPin, StatefulOutputPin};
use log::{LevelFilter, debug};
use microbit::hal::gpio::{self, Floating, Input, Level, Output, PushPull};
use rtt_target::rtt_init_log;

use crate::pin::{Direction, SensePin};

/// The touch pin may be either "writing" or "reading".
enum TouchPin {
    /// "writing"
    Output(gpio::Pin<Output<PushPull>>),
    /// "reading"
    Input(gpio::Pin<Input<Floating>>),
}

/// An nRF GPIO pin that switches between push-pull output and
/// floating input on demand.
///
/// On the micro:bit v2 the gold logo is wired to `P1_04`.
pub struct Mb2TouchPin {
    pin: Option<TouchPin>,
}

impl Mb2TouchPin {
    pub fn new(pin: gpio::Pin<Input<Floating>>) -> Self {
        Self {
            pin: Some(TouchPin::Input(pin)),
        }
    }

    fn take(&mut self) -> TouchPin {
        // Only ever empty between a take and the put-back below.
        self.pin.take().expect("missing pin")
    }
}

impl SensePin for Mb2TouchPin {
    fn set_direction(&mut self, direction: Direction) {
        let pin = match (self.take(), direction) {
            (TouchPin::Input(pin), Direction::Output) => {
                TouchPin::Output(pin.into_push_pull_output(Level::Low))
            }
            (TouchPin::Output(pin), Direction::Input) => TouchPin::Input(pin.into_floating_input()),
            (pin, _) => pin,
        };
        self.pin = Some(pin);
    }

    fn set_high(&mut self) {
        match self.pin.as_mut() {
            Some(TouchPin::Output(pin)) => {
                let Ok(()) = pin.set_high();
            }
            Some(TouchPin::Input(_)) => debug!("set_high on an input pin ignored"),
            None => panic!("missing pin"),
        }
    }

    fn is_high(&mut self) -> bool {
        match self.pin.as_mut() {
            Some(TouchPin::Input(pin)) => {
                let Ok(level) = pin.is_high();
                level
            }
            Some(TouchPin::Output(pin)) => {
                let Ok(level) = pin.is_set_high();
                level
            }
            None => panic!("missing pin"),
        }
    }
}

/// Set up RTT printing and route the `log` facade through it. Call
/// once, first thing in `main`.
pub fn init_logging(level: LevelFilter) {
    rtt_init_log!(level);
}
