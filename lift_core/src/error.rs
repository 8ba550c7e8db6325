use lift_traits::Direction;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LiftError {
    #[error("not correctly selected level: {level} (expected {min}..={max})")]
    InvalidLevel { level: i64, min: u8, max: u8 },
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),
}

/// Failure of a single-step move. Never escapes `call_lift`; it is turned
/// into a `false` result there.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MovementError {
    #[error("drive fault: {0}")]
    Drive(String),
    #[error("drive jammed: {0}")]
    Jammed(String),
    /// Unreachable while `step` heads towards a range-checked target; turns a
    /// wrong direction into a failed call instead of an endless loop.
    #[error("moving {direction} from level {from} leaves the shaft")]
    OutOfShaft { from: u8, direction: Direction },
}

#[derive(Debug, Error, Clone)]
pub enum BuildError {
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T> = eyre::Result<T>;
pub use eyre::Report;
