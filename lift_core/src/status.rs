//! Outcome of a call to a floor.

use crate::error::MovementError;

#[derive(Debug, Clone, PartialEq)]
pub enum CallStatus {
    /// The car was already at the requested level; nothing moved.
    AlreadyThere,
    /// Arrived after passing `floors` floors.
    Arrived { floors: usize },
    /// A step failed; the car stays at the last level it reached.
    Aborted(MovementError),
}

impl CallStatus {
    #[inline]
    pub fn succeeded(&self) -> bool {
        !matches!(self, CallStatus::Aborted(_))
    }
}
