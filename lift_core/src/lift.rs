//! The lift car and its call-to-floor state machine.
//!
//! The car moves one floor per step until it reaches the requested level.
//! Each step is delegated to a `Drive`, which owns the travel time. Speed
//! and acceleration are stored for reporting only; they do not influence
//! timing.

use std::cmp::Ordering;

use lift_hardware::SimulatedDrive;
use lift_traits::{Direction, Drive};
use serde::Serialize;

use crate::building::{BuildingObject, FLOOR_HEIGHT_M};
use crate::builder::LiftBuilder;
use crate::capabilities::{Driven, Geometry, Lifting};
use crate::error::{LiftError, MovementError, Result};
use crate::hw_error::map_drive_error;
use crate::params::LiftOptions;
use crate::status::CallStatus;

/// Lowest reachable level.
pub const MIN_LEVEL_DOWN: u8 = 0;
/// Highest reachable level; a new car starts here.
pub const MAX_LEVEL_UP: u8 = 5;

#[derive(Serialize)]
pub struct Lift {
    dimensions: Option<Vec<f64>>,
    speed: Option<f64>,
    accelerate: Option<f64>,
    capacity: Option<u32>,
    options: Option<LiftOptions>,
    level: u8,
    #[serde(skip)]
    drive: Box<dyn Drive>,
}

impl core::fmt::Debug for Lift {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Lift")
            .field("dimensions", &self.dimensions)
            .field("speed", &self.speed)
            .field("accelerate", &self.accelerate)
            .field("capacity", &self.capacity)
            .field("options", &self.options)
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

impl Default for Lift {
    fn default() -> Self {
        Self::new()
    }
}

impl Lift {
    /// A bare car at the top floor with the real-time simulated drive.
    pub fn new() -> Self {
        Self::with_drive(SimulatedDrive::new())
    }

    /// A bare car at the top floor moved by `drive`.
    pub fn with_drive(drive: impl Drive + 'static) -> Self {
        Self {
            dimensions: None,
            speed: None,
            accelerate: None,
            capacity: None,
            options: None,
            level: MAX_LEVEL_UP,
            drive: Box::new(drive),
        }
    }

    /// Start building a Lift.
    pub fn builder() -> LiftBuilder {
        LiftBuilder::default()
    }

    pub(crate) fn from_parts(
        dimensions: Option<Vec<f64>>,
        speed: Option<f64>,
        accelerate: Option<f64>,
        capacity: Option<u32>,
        options: Option<LiftOptions>,
        level: u8,
        drive: Box<dyn Drive>,
    ) -> Self {
        debug_assert!((MIN_LEVEL_DOWN..=MAX_LEVEL_UP).contains(&level));
        Self {
            dimensions,
            speed,
            accelerate,
            capacity,
            options,
            level,
            drive,
        }
    }

    /// Current floor.
    #[inline]
    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn dimensions(&self) -> Option<&[f64]> {
        self.dimensions.as_deref()
    }

    pub fn speed(&self) -> Option<f64> {
        self.speed
    }

    pub fn accelerate(&self) -> Option<f64> {
        self.accelerate
    }

    pub fn capacity(&self) -> Option<u32> {
        self.capacity
    }

    pub fn options(&self) -> Option<&LiftOptions> {
        self.options.as_ref()
    }

    /// Attach the car's equipment options.
    pub fn set_options(&mut self, options: LiftOptions) {
        self.options = Some(options);
    }

    /// Validate `level` against the shaft bounds.
    pub fn check_level(level: i64) -> Result<u8> {
        u8::try_from(level)
            .ok()
            .filter(|l| (MIN_LEVEL_DOWN..=MAX_LEVEL_UP).contains(l))
            .ok_or_else(|| {
                eyre::Report::new(LiftError::InvalidLevel {
                    level,
                    min: MIN_LEVEL_DOWN,
                    max: MAX_LEVEL_UP,
                })
            })
    }

    /// Bring the car to `level`, reporting how the trip went.
    ///
    /// An out-of-range level is an error and leaves the car where it is.
    /// A failing step is not an error: the trip stops and the status says why.
    pub fn call(&mut self, level: i64) -> Result<CallStatus> {
        let target = Self::check_level(level)?;
        if target == self.level {
            tracing::debug!(level = target, "lift already at requested level");
            return Ok(CallStatus::AlreadyThere);
        }

        let from = self.level;
        tracing::info!(
            from,
            to = target,
            distance_m = f64::from(from.abs_diff(target)) * FLOOR_HEIGHT_M,
            "lift called"
        );

        let mut floors = 0usize;
        while self.level != target {
            if let Err(e) = self.step(target) {
                tracing::warn!(error = %e, level = self.level, to = target, "lift call aborted");
                return Ok(CallStatus::Aborted(e));
            }
            floors += 1;
        }

        tracing::info!(level = self.level, floors, "lift arrived");
        Ok(CallStatus::Arrived { floors })
    }

    /// Move one floor towards `target`.
    fn step(&mut self, target: u8) -> std::result::Result<(), MovementError> {
        let direction = match target.cmp(&self.level) {
            Ordering::Greater => Direction::Up,
            Ordering::Less => Direction::Down,
            Ordering::Equal => return Ok(()),
        };
        let next = next_level(self.level, direction).ok_or(MovementError::OutOfShaft {
            from: self.level,
            direction,
        })?;

        self.drive
            .travel(direction)
            .map_err(|e| map_drive_error(&*e))?;

        tracing::debug!(from = self.level, to = next, %direction, "passed floor");
        self.level = next;
        Ok(())
    }
}

/// Level reached by one step in `direction`, if it stays inside the shaft.
///
/// `call` checks the target and `step` heads towards it, so `None` only
/// shows up if the direction rule in `step` is broken.
#[inline]
fn next_level(level: u8, direction: Direction) -> Option<u8> {
    let next = i16::from(level) + i16::from(direction.delta());
    if (i16::from(MIN_LEVEL_DOWN)..=i16::from(MAX_LEVEL_UP)).contains(&next) {
        u8::try_from(next).ok()
    } else {
        None
    }
}

impl BuildingObject for Lift {
    const ATTRIBUTES: &'static [&'static str] = &[
        "dimensions",
        "speed",
        "accelerate",
        "capacity",
        "options",
        "level",
    ];

    fn attribute(&self, name: &str) -> Option<serde_json::Value> {
        use serde_json::json;
        let v = match name {
            "dimensions" => json!(self.dimensions),
            "speed" => json!(self.speed),
            "accelerate" => json!(self.accelerate),
            "capacity" => json!(self.capacity),
            "options" => json!(self.options),
            "level" => json!(self.level),
            _ => return None,
        };
        Some(v)
    }
}

impl Driven for Lift {
    fn set_speed(&mut self, speed: f64) {
        self.speed = Some(speed);
    }

    fn set_accelerate(&mut self, accelerate: f64) {
        self.accelerate = Some(accelerate);
    }

    fn call_lift(&mut self, level: i64) -> Result<bool> {
        self.call(level).map(|status| status.succeeded())
    }
}

impl Lifting for Lift {
    fn set_lifting_capacity(&mut self, capacity: u32) {
        self.capacity = Some(capacity);
    }
}

impl Geometry for Lift {
    fn set_dimensions(&mut self, dimensions: Vec<f64>) {
        self.dimensions = Some(dimensions);
    }

    /// Volume of the car. The argument is not consulted: the stored
    /// dimensions are always used.
    fn get_volume(&self, _dimensions: &[f64]) -> Option<f64> {
        self.volume_of(self.dimensions.as_deref().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_level_stays_in_shaft() {
        assert_eq!(next_level(0, Direction::Down), None);
        assert_eq!(next_level(0, Direction::Up), Some(1));
        assert_eq!(next_level(5, Direction::Up), None);
        assert_eq!(next_level(5, Direction::Down), Some(4));
    }

    #[test]
    fn check_level_bounds() {
        assert_eq!(Lift::check_level(0).unwrap(), 0);
        assert_eq!(Lift::check_level(5).unwrap(), 5);
        assert!(Lift::check_level(-1).is_err());
        assert!(Lift::check_level(6).is_err());
    }
}
