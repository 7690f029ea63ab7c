//! Measurement tunables.

use thiserror::Error;

/// Number of charge/drain cycles summed into one reading.
pub const DEFAULT_SAMPLES: u8 = 5;

/// Time in microseconds the pin is held high before draining.
pub const DEFAULT_CHARGE_HOLD_US: u32 = 10;

/// Poll count at which a reading is abandoned. Also the largest
/// value a reading can take.
pub const DEFAULT_TIMEOUT: u16 = 10_000;

/// Factor applied to the untouched baseline to get the touch
/// threshold.
pub const DEFAULT_CALIBRATION_MULTIPLIER: f64 = 1.5;

/// Rejected [`SensorConfig`] values.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("sample count must be at least 1")]
    NoSamples,
    #[error("timeout must be at least 1 poll")]
    ZeroTimeout,
    #[error("calibration multiplier {0} is not a finite non-negative number")]
    BadMultiplier(f64),
}

/// Tunables for a [`TouchSensor`](crate::TouchSensor).
///
/// The defaults suit a bare pad with a high-value (around 1MΩ)
/// drain resistor to ground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorConfig {
    pub samples: u8,
    pub charge_hold_us: u32,
    pub timeout: u16,
    pub calibration_multiplier: f64,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            charge_hold_us: DEFAULT_CHARGE_HOLD_US,
            timeout: DEFAULT_TIMEOUT,
            calibration_multiplier: DEFAULT_CALIBRATION_MULTIPLIER,
        }
    }
}

impl SensorConfig {
    #[must_use]
    pub fn with_samples(mut self, samples: u8) -> Self {
        self.samples = samples;
        self
    }

    #[must_use]
    pub fn with_charge_hold_us(mut self, charge_hold_us: u32) -> Self {
        self.charge_hold_us = charge_hold_us;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: u16) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_calibration_multiplier(mut self, multiplier: f64) -> Self {
        self.calibration_multiplier = multiplier;
        self
    }

    /// Check that a sensor built from this configuration can
    /// produce meaningful readings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.samples == 0 {
            return Err(ConfigError::NoSamples);
        }
        if self.timeout == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        let m = self.calibration_multiplier;
        if !m.is_finite() || m < 0.0 {
            return Err(ConfigError::BadMultiplier(m));
        }
        Ok(())
    }
}
