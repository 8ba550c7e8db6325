//! Builder for `Lift`.
//!
//! Every field is optional. `try_build()` validates what was supplied; a
//! missing drive falls back to the real-time simulated drive.

use lift_hardware::SimulatedDrive;
use lift_traits::Drive;

use crate::error::{BuildError, Result};
use crate::lift::{Lift, MAX_LEVEL_UP, MIN_LEVEL_DOWN};
use crate::params::{LiftOptions, ParamValue, ParameterSet};

#[derive(Default)]
pub struct LiftBuilder {
    dimensions: Option<Vec<f64>>,
    speed: Option<f64>,
    accelerate: Option<f64>,
    capacity: Option<u32>,
    options: Option<LiftOptions>,
    start_level: Option<i64>,
    drive: Option<Box<dyn Drive>>,
}

impl LiftBuilder {
    pub fn with_dimensions(mut self, dimensions: impl Into<Vec<f64>>) -> Self {
        self.dimensions = Some(dimensions.into());
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }

    pub fn with_accelerate(mut self, accelerate: f64) -> Self {
        self.accelerate = Some(accelerate);
        self
    }

    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    pub fn with_options(mut self, options: LiftOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Build the options from key/value pairs (unknown keys are dropped).
    pub fn with_params<I, K>(self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, ParamValue)>,
        K: AsRef<str>,
    {
        self.with_options(LiftOptions::from_params(params))
    }

    /// Level the car starts at. Defaults to the top floor.
    pub fn with_start_level(mut self, level: i64) -> Self {
        self.start_level = Some(level);
        self
    }

    pub fn with_drive(mut self, drive: impl Drive + 'static) -> Self {
        self.drive = Some(Box::new(drive));
        self
    }

    pub fn try_build(self) -> Result<Lift> {
        let level = match self.start_level {
            None => MAX_LEVEL_UP,
            Some(l) => u8::try_from(l)
                .ok()
                .filter(|l| (MIN_LEVEL_DOWN..=MAX_LEVEL_UP).contains(l))
                .ok_or_else(|| {
                    eyre::Report::new(BuildError::InvalidConfig("start level out of range"))
                })?,
        };
        if let Some(dims) = &self.dimensions
            && dims.iter().any(|d| !d.is_finite() || d.is_sign_negative())
        {
            return Err(eyre::Report::new(BuildError::InvalidConfig(
                "dimensions must be finite and >= 0",
            )));
        }
        if self.speed.is_some_and(|s| !s.is_finite()) {
            return Err(eyre::Report::new(BuildError::InvalidConfig(
                "speed must be finite",
            )));
        }
        if self.accelerate.is_some_and(|a| !a.is_finite()) {
            return Err(eyre::Report::new(BuildError::InvalidConfig(
                "accelerate must be finite",
            )));
        }

        let drive = self
            .drive
            .unwrap_or_else(|| Box::new(SimulatedDrive::new()));

        Ok(Lift::from_parts(
            self.dimensions,
            self.speed,
            self.accelerate,
            self.capacity,
            self.options,
            level,
            drive,
        ))
    }
}
