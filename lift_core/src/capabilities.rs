//! Capability traits a lift implements on top of `BuildingObject`.

use crate::error::Result;

pub trait Driven {
    fn set_speed(&mut self, speed: f64);
    fn set_accelerate(&mut self, accelerate: f64);
    /// Bring the car to `level`. `Ok(false)` means the trip was aborted.
    fn call_lift(&mut self, level: i64) -> Result<bool>;
}

pub trait Lifting {
    fn set_lifting_capacity(&mut self, capacity: u32);
}

pub trait Geometry {
    fn set_dimensions(&mut self, dimensions: Vec<f64>);
    fn get_volume(&self, dimensions: &[f64]) -> Option<f64>;
}
