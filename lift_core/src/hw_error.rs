//! Maps `Box<dyn Error>` from the `Drive` boundary to a typed `MovementError`.

use lift_hardware::error::HwError;

use crate::error::MovementError;

/// Downcast known drive errors first, then fall back to string heuristics.
pub fn map_drive_error(e: &(dyn std::error::Error + Send + Sync + 'static)) -> MovementError {
    if let Some(hw) = e.downcast_ref::<HwError>() {
        return match hw {
            HwError::Jammed { .. } => MovementError::Jammed(hw.to_string()),
            HwError::Fault(msg) => MovementError::Drive(msg.clone()),
        };
    }

    let s = e.to_string();
    if s.to_lowercase().contains("jam") {
        MovementError::Jammed(s)
    } else {
        MovementError::Drive(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_and_untyped_errors() {
        let jam: Box<dyn std::error::Error + Send + Sync> = Box::new(HwError::Jammed { steps: 3 });
        assert!(matches!(map_drive_error(&*jam), MovementError::Jammed(_)));

        let fault: Box<dyn std::error::Error + Send + Sync> =
            Box::new(HwError::Fault("brake".into()));
        assert_eq!(
            map_drive_error(&*fault),
            MovementError::Drive("brake".into())
        );

        let other: Box<dyn std::error::Error + Send + Sync> = "door jammed".into();
        assert!(matches!(map_drive_error(&*other), MovementError::Jammed(_)));
    }
}
