use embedded_hal::delay::DelayNs;
use log::{debug, trace, warn};

use crate::config::{ConfigError, SensorConfig};
use crate::event::{TouchEvent, TouchTracker};
use crate::pin::{Direction, SensePin};

/// Capacitive touch input on a single GPIO pin.
///
/// A reading charges the pin, lets it float, and counts polls until
/// it reads low. The pad needs a high-impedance drain (around 1MΩ to
/// ground) for the charge to leak away; a finger adds capacitance
/// and stretches the drain.
pub struct TouchSensor<P, D> {
    pin: P,
    delay: D,
    config: SensorConfig,
    /// Readings strictly above this count as a touch.
    threshold: i32,
}

impl<P, D> TouchSensor<P, D>
where
    P: SensePin,
    D: DelayNs,
{
    /// Bind a sensor to `pin` with the default tunables. The pin is
    /// not touched until the first reading.
    pub fn new(pin: P, delay: D) -> Self {
        Self {
            pin,
            delay,
            config: SensorConfig::default(),
            threshold: 0,
        }
    }

    pub fn with_config(pin: P, delay: D, config: SensorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            pin,
            delay,
            config,
            threshold: 0,
        })
    }

    /// Calibrate against the current, untouched, pad and return the
    /// baseline reading.
    ///
    /// The threshold becomes the baseline times the calibration
    /// multiplier, truncated toward zero and clamped to the timeout.
    /// Calibrating while the pad is touched gives a threshold that
    /// later touches may never reach.
    pub fn configure(&mut self) -> u16 {
        let baseline = self.read();
        if baseline == self.config.timeout {
            warn!(
                "baseline reading hit the timeout ({}); is the pin missing its drain resistor?",
                self.config.timeout
            );
        }
        self.threshold = calibrated_threshold(
            baseline,
            self.config.calibration_multiplier,
            self.config.timeout,
        );
        debug!("calibrated: baseline {} threshold {}", baseline, self.threshold);
        baseline
    }

    /// Override the threshold. Any value is accepted, including
    /// negative ones, which make every reading a touch.
    pub fn set_threshold(&mut self, threshold: i32) {
        self.threshold = threshold;
    }

    pub fn threshold(&self) -> i32 {
        self.threshold
    }

    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    /// Measure the pad's capacitance.
    ///
    /// The result is the number of high polls summed over all
    /// samples. It never exceeds the timeout: the whole reading is
    /// abandoned the moment the running count reaches it.
    pub fn read(&mut self) -> u16 {
        let timeout = self.config.timeout;
        let mut count: u16 = 0;

        for sample in 0..self.config.samples {
            // Charge the pin.
            self.pin.set_direction(Direction::Output);
            self.pin.set_high();
            self.delay.delay_us(self.config.charge_hold_us);

            // Count until it drains.
            self.pin.set_direction(Direction::Input);
            while self.pin.is_high() {
                count += 1;
                if count >= timeout {
                    trace!("drain timed out in sample {}", sample);
                    return timeout;
                }
            }
        }
        count
    }

    /// True if the pad is being touched. Takes a fresh reading on
    /// every call.
    pub fn get(&mut self) -> bool {
        i32::from(self.read()) > self.threshold
    }

    /// Take a reading and feed it to `tracker`, returning any
    /// press or release it produces.
    pub fn poll(&mut self, tracker: &mut TouchTracker) -> Option<TouchEvent> {
        let touched = self.get();
        tracker.update(touched)
    }

    /// Give back the pin and delay. The pin is left in whatever
    /// direction the last reading left it (input).
    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }
}

fn calibrated_threshold(baseline: u16, multiplier: f64, timeout: u16) -> i32 {
    // `as` truncates toward zero and saturates.
    let scaled = (f64::from(baseline) * multiplier) as i32;
    scaled.clamp(0, i32::from(timeout))
}
