use lift_core::mocks::RecordingDrive;
use lift_core::{CallStatus, Driven, Lift};
use lift_traits::Direction;
use proptest::prelude::*;
use rstest::rstest;

fn lift_at(level: i64, drive: RecordingDrive) -> Lift {
    Lift::builder()
        .with_start_level(level)
        .with_drive(drive)
        .try_build()
        .expect("valid start level")
}

#[test]
fn new_lift_starts_at_top_floor() {
    let lift = Lift::with_drive(RecordingDrive::new());
    assert_eq!(lift.level(), 5);
}

/// The demo trip. The car moves towards the requested floor (down from 5 to
/// 1), one floor per step, and reports success.
/// The PHP original stepped away from the target and never arrived; this
/// workspace deliberately moves towards it instead.
#[test]
fn call_from_five_to_one_moves_down_and_succeeds() {
    let drive = RecordingDrive::new();
    let mut lift = Lift::with_drive(drive.clone());

    let ok = lift.call_lift(1).expect("1 is a valid level");

    assert!(ok);
    assert_eq!(lift.level(), 1);
    assert_eq!(drive.directions(), vec![Direction::Down; 4]);
}

#[rstest]
#[case(0, 5, Direction::Up, 5)]
#[case(2, 3, Direction::Up, 1)]
#[case(4, 0, Direction::Down, 4)]
#[case(5, 4, Direction::Down, 1)]
fn call_travels_towards_target(
    #[case] start: i64,
    #[case] target: i64,
    #[case] direction: Direction,
    #[case] floors: usize,
) {
    let drive = RecordingDrive::new();
    let mut lift = lift_at(start, drive.clone());

    let status = lift.call(target).expect("valid level");

    assert_eq!(status, CallStatus::Arrived { floors });
    assert_eq!(i64::from(lift.level()), target);
    assert_eq!(drive.directions(), vec![direction; floors]);
}

#[rstest]
#[case(0)]
#[case(3)]
#[case(5)]
fn call_to_current_level_is_a_no_op(#[case] level: i64) {
    let drive = RecordingDrive::new();
    let mut lift = lift_at(level, drive.clone());

    assert_eq!(lift.call(level).unwrap(), CallStatus::AlreadyThere);
    assert!(lift.call_lift(level).unwrap());
    assert_eq!(i64::from(lift.level()), level);
    assert!(drive.directions().is_empty());
}

#[test]
fn consecutive_calls_continue_from_last_level() {
    let drive = RecordingDrive::new();
    let mut lift = Lift::with_drive(drive.clone());

    assert!(lift.call_lift(2).unwrap());
    assert!(lift.call_lift(4).unwrap());

    assert_eq!(lift.level(), 4);
    assert_eq!(
        drive.directions(),
        vec![
            Direction::Down,
            Direction::Down,
            Direction::Down,
            Direction::Up,
            Direction::Up
        ]
    );
}

proptest! {
    #[test]
    fn every_valid_trip_terminates_at_target(start in 0i64..=5, target in 0i64..=5) {
        let drive = RecordingDrive::new();
        let mut lift = lift_at(start, drive.clone());

        let ok = lift.call_lift(target).unwrap();

        prop_assert!(ok);
        prop_assert_eq!(i64::from(lift.level()), target);
        prop_assert_eq!(drive.directions().len() as i64, (target - start).abs());
    }

    #[test]
    fn out_of_range_never_moves(start in 0i64..=5, target in prop_oneof![i64::MIN..0, 6i64..i64::MAX]) {
        let drive = RecordingDrive::new();
        let mut lift = lift_at(start, drive.clone());

        prop_assert!(lift.call_lift(target).is_err());
        prop_assert_eq!(i64::from(lift.level()), start);
        prop_assert!(drive.directions().is_empty());
    }
}
