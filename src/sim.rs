//! Deterministic stand-ins for the hardware, used by the tests.

use embedded_hal::delay::DelayNs;

use crate::pin::{Direction, SensePin};

/// Everything the sensor asked of the pin, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinOp {
    Direction(Direction),
    High,
    Poll(bool),
}

/// Drain count that never runs out.
pub const NEVER_DRAINS: u32 = u32::MAX;

/// A pad whose charge lasts a scripted number of high polls.
///
/// Each charge cycle takes the next entry of `drain`, wrapping
/// around at the end. A cycle only counts as charged if the pin was
/// driven high while in output mode.
pub struct SimPin {
    drain: Vec<u32>,
    cycle: usize,
    direction: Direction,
    driven_high: bool,
    remaining: u32,
    pub ops: Vec<PinOp>,
}

impl SimPin {
    pub fn new(drain: &[u32]) -> Self {
        assert!(!drain.is_empty());
        Self {
            drain: drain.to_vec(),
            cycle: 0,
            direction: Direction::Input,
            driven_high: false,
            remaining: 0,
            ops: Vec::new(),
        }
    }

    /// Every charge cycle drains after `polls` high reads.
    pub fn fixed(polls: u32) -> Self {
        Self::new(&[polls])
    }

    /// Swap in a new drain script, e.g. to simulate a finger.
    pub fn set_drain(&mut self, drain: &[u32]) {
        assert!(!drain.is_empty());
        self.drain = drain.to_vec();
        self.cycle = 0;
    }

    pub fn polls(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, PinOp::Poll(_)))
            .count()
    }
}

impl SensePin for SimPin {
    fn set_direction(&mut self, direction: Direction) {
        self.ops.push(PinOp::Direction(direction));
        if direction == Direction::Input && self.direction == Direction::Output {
            self.remaining = if self.driven_high {
                let polls = self.drain[self.cycle % self.drain.len()];
                self.cycle += 1;
                polls
            } else {
                0
            };
        }
        self.driven_high = false;
        self.direction = direction;
    }

    fn set_high(&mut self) {
        self.ops.push(PinOp::High);
        if self.direction == Direction::Output {
            self.driven_high = true;
        }
    }

    fn is_high(&mut self) -> bool {
        let level = match self.direction {
            Direction::Output => self.driven_high,
            Direction::Input if self.remaining > 0 => {
                if self.remaining != NEVER_DRAINS {
                    self.remaining -= 1;
                }
                true
            }
            Direction::Input => false,
        };
        self.ops.push(PinOp::Poll(level));
        level
    }
}

/// Delay that returns immediately and remembers what it was asked.
#[derive(Default)]
pub struct RecordingDelay {
    pub waits_ns: Vec<u32>,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.waits_ns.push(ns);
    }
}
