//! # GPIO capacitive touch
//!
//! Turns a plain GPIO pin into a capacitive touch input. The pin is
//! charged as an output, switched to input, and polled until the
//! charge drains away through a high-value resistor to ground.
//! Touching the pad adds capacitance, so the drain takes longer.
//!
//! The sensor is generic over a [`SensePin`] and an `embedded-hal`
//! [`DelayNs`](embedded_hal::delay::DelayNs). With the `board`
//! feature, [`board::Mb2TouchPin`] drives the micro:bit v2 touch logo.
//!
//! ```ignore
//! let mut sensor = TouchSensor::new(pin, delay);
//! // Hands off the pad while this runs.
//! sensor.configure();
//! loop {
//!     if sensor.get() {
//!         // touched
//!     }
//! }
//! ```

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod event;
pub mod pin;
pub mod sensor;

#[cfg(feature = "board")]
pub mod board;

#[cfg(test)]
mod sim;

pub use config::{ConfigError, SensorConfig};
pub use event::{TouchEvent, TouchTracker};
pub use pin::{Direction, SensePin};
pub use sensor::TouchSensor;
