use lift_config::load_toml;
use lift_core::mocks::RecordingDrive;
use lift_core::{BuildError, Lift, LiftBuilder};
use rstest::rstest;

fn expect_invalid_config(b: LiftBuilder, needle: &str) {
    let err = b.try_build().expect_err("should fail");
    match err.downcast_ref::<BuildError>() {
        Some(BuildError::InvalidConfig(msg)) => assert!(msg.contains(needle), "{msg}"),
        other => panic!("expected InvalidConfig, got: {other:?}"),
    }
}

#[rstest]
#[case(-1)]
#[case(6)]
fn builder_rejects_start_level_outside_shaft(#[case] level: i64) {
    expect_invalid_config(
        Lift::builder().with_start_level(level),
        "start level out of range",
    );
}

#[test]
fn builder_rejects_bad_geometry_and_motion() {
    expect_invalid_config(Lift::builder().with_dimensions([1.0, -2.0]), "dimensions");
    expect_invalid_config(Lift::builder().with_speed(f64::NAN), "speed");
    expect_invalid_config(Lift::builder().with_accelerate(f64::INFINITY), "accelerate");
}

#[test]
fn builder_from_config_applies_everything() {
    let cfg = load_toml(
        r#"
options = [{ mirror = true }, { handrail = false }, { forInvalids = true }, { music = "on" }]

[lift]
dimensions = [1.0, 2.0, 3.0]
speed = 2.5
accelerate = 1.0
capacity = 630
"#,
    )
    .unwrap();

    let lift = LiftBuilder::from(&cfg)
        .with_drive(RecordingDrive::new())
        .try_build()
        .unwrap();

    assert_eq!(lift.dimensions(), Some(&[1.0, 2.0, 3.0][..]));
    assert_eq!(lift.speed(), Some(2.5));
    assert_eq!(lift.accelerate(), Some(1.0));
    assert_eq!(lift.capacity(), Some(630));
    let opts = lift.options().unwrap();
    assert_eq!(opts.mirror(), Some(true));
    assert_eq!(opts.handrail(), Some(false));
    assert_eq!(opts.for_invalids(), Some(true));
    assert_eq!(lift.level(), 5);
}

#[test]
fn builder_from_default_config_sets_only_options() {
    let cfg = lift_config::Config::default();
    let lift = LiftBuilder::from(&cfg)
        .with_drive(RecordingDrive::new())
        .try_build()
        .unwrap();
    assert!(lift.dimensions().is_none());
    assert!(lift.speed().is_none());
    assert_eq!(lift.options().and_then(|o| o.mirror()), Some(true));
}
