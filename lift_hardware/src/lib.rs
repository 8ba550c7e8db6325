//! Simulated lift drive.
//!
//! The drive does no kinematics: every floor costs a fixed duration that only
//! depends on the direction of travel. Time is spent on an injected `Clock`,
//! so tests can run whole trips on a manual clock.

pub mod error;

use std::time::Duration;

use lift_traits::clock::{Clock, MonotonicClock};
use lift_traits::{Direction, Drive};

use crate::error::HwError;

/// Time to pass one floor going down.
pub const DEFAULT_DOWN_MS: u64 = 5;
/// Time to pass one floor going up.
pub const DEFAULT_UP_MS: u64 = 8;

/// Simulated drive implementation
pub struct SimulatedDrive<C: Clock = MonotonicClock> {
    clock: C,
    down: Duration,
    up: Duration,
    steps: usize,
    jam_at: Option<usize>,
}

impl SimulatedDrive<MonotonicClock> {
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock::new())
    }
}

impl Default for SimulatedDrive<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> SimulatedDrive<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            down: Duration::from_millis(DEFAULT_DOWN_MS),
            up: Duration::from_millis(DEFAULT_UP_MS),
            steps: 0,
            jam_at: None,
        }
    }

    /// Override the per-floor travel times.
    pub fn with_timing(mut self, down: Duration, up: Duration) -> Self {
        self.down = down;
        self.up = up;
        self
    }

    /// Fail every travel request once `steps` floors have been passed.
    /// `Some(0)` jams before the first floor.
    pub fn jam_after(mut self, steps: Option<usize>) -> Self {
        self.jam_at = steps;
        self
    }

    /// Floors passed so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Fixed travel time for one floor in `direction`.
    #[inline]
    pub fn floor_time(&self, direction: Direction) -> Duration {
        match direction {
            Direction::Down => self.down,
            Direction::Up => self.up,
        }
    }
}

impl<C: Clock> Drive for SimulatedDrive<C> {
    fn travel(
        &mut self,
        direction: Direction,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if self.jam_at.is_some_and(|n| self.steps >= n) {
            tracing::error!(steps = self.steps, %direction, "simulated drive jammed");
            return Err(Box::new(HwError::Jammed { steps: self.steps }));
        }
        let d = self.floor_time(direction);
        tracing::trace!(%direction, ms = d.as_millis() as u64, "passing floor (simulated)");
        self.clock.sleep(d);
        self.steps += 1;
        Ok(())
    }
}
