//! Test and helper drives for lift_core

use std::cell::RefCell;
use std::rc::Rc;

use lift_traits::{Direction, Drive};

/// A drive that moves instantly and records every direction it was asked
/// to travel. Clones share the log. With `failing_at(n)` the n-th request
/// (0-based) and all later ones fail.
#[derive(Debug, Clone, Default)]
pub struct RecordingDrive {
    log: Rc<RefCell<Vec<Direction>>>,
    fail_at: Option<usize>,
}

impl RecordingDrive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(n: usize) -> Self {
        Self {
            fail_at: Some(n),
            ..Self::default()
        }
    }

    /// Directions of the floors actually travelled, in order.
    pub fn directions(&self) -> Vec<Direction> {
        self.log.borrow().clone()
    }
}

impl Drive for RecordingDrive {
    fn travel(
        &mut self,
        direction: Direction,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if self.fail_at.is_some_and(|n| self.log.borrow().len() >= n) {
            return Err(Box::new(std::io::Error::other("recording drive fault")));
        }
        self.log.borrow_mut().push(direction);
        Ok(())
    }
}
