//! The pin capability a touch sensor drives.

/// Which way the pin is currently configured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// "writing": charging the pad.
    Output,
    /// "reading": letting the pad drain.
    Input,
}

/// A GPIO line that can be flipped between output and input at
/// runtime.
///
/// Implementations are expected to be infallible. A pin whose HAL
/// reports errors should map a failed read to `false` so that the
/// sensor's drain loop terminates.
pub trait SensePin {
    /// Reconfigure the line's direction.
    fn set_direction(&mut self, direction: Direction);

    /// Drive the line high. Only meaningful in [`Direction::Output`].
    fn set_high(&mut self);

    /// Sample the current logic level.
    fn is_high(&mut self) -> bool;
}

impl<T: SensePin + ?Sized> SensePin for &mut T {
    fn set_direction(&mut self, direction: Direction) {
        T::set_direction(self, direction)
    }

    fn set_high(&mut self) {
        T::set_high(self)
    }

    fn is_high(&mut self) -> bool {
        T::is_high(self)
    }
}
