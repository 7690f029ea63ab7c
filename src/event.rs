/// Touch press and release events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchEvent {
    Press,
    Release,
}

/// Turns a stream of touched/untouched samples into edge events.
#[derive(Clone, Copy, Debug, Default)]
pub struct TouchTracker {
    /// Currently pressed or released.
    touched: bool,
}

impl TouchTracker {
    /// Starts out released.
    pub const fn new() -> Self {
        Self { touched: false }
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Record the latest state, returning an event only when it
    /// differs from the previous one.
    pub fn update(&mut self, touched: bool) -> Option<TouchEvent> {
        if touched == self.touched {
            return None;
        }
        self.touched = touched;
        Some(if touched {
            TouchEvent::Press
        } else {
            TouchEvent::Release
        })
    }
}
