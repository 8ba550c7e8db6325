pub mod clock;

pub use clock::{Clock, MonotonicClock};

use std::fmt;

/// Physical direction of one floor of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Signed floor delta for one step in this direction.
    #[inline]
    pub fn delta(self) -> i8 {
        match self {
            Direction::Up => 1,
            Direction::Down => -1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => f.write_str("up"),
            Direction::Down => f.write_str("down"),
        }
    }
}

/// Moves the car through exactly one floor and blocks until it has arrived.
pub trait Drive {
    fn travel(
        &mut self,
        direction: Direction,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

impl<D: Drive + ?Sized> Drive for Box<D> {
    fn travel(
        &mut self,
        direction: Direction,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        (**self).travel(direction)
    }
}
