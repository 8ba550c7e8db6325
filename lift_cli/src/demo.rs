//! Composition root: config mapping, drive assembly and the demo trip.

use std::io::Write;

use eyre::WrapErr;
use lift_config::Config;
use lift_core::conversions::floor_times;
use lift_core::error::Result as CoreResult;
use lift_core::{BuildingObject, CallStatus, Geometry, Lift, LiftBuilder};
use lift_hardware::SimulatedDrive;
use serde_json::json;

pub fn status_name(s: &CallStatus) -> &'static str {
    match s {
        CallStatus::AlreadyThere => "already_there",
        CallStatus::Arrived { .. } => "arrived",
        CallStatus::Aborted(_) => "aborted",
    }
}

/// Construct the lift described by `cfg` on a real-time simulated drive.
/// `jam_after` injects a drive jam after that many floors.
pub fn build_lift(cfg: &Config, jam_after: Option<usize>) -> CoreResult<Lift> {
    let (down, up) = floor_times(&cfg.timing);
    let drive = SimulatedDrive::new()
        .with_timing(down, up)
        .jam_after(jam_after);
    LiftBuilder::from(cfg).with_drive(drive).try_build()
}

/// Write the lift's state line.
pub fn show(lift: &Lift, out: &mut impl Write) -> CoreResult<()> {
    let state = lift.to_text()?;
    writeln!(out, "{state}").wrap_err("write state line")?;
    Ok(())
}

/// Write the volume line: the number, or `none` without dimensions.
pub fn volume(lift: &Lift, json_mode: bool, out: &mut impl Write) -> CoreResult<()> {
    let v = lift.get_volume(&[]);
    if json_mode {
        writeln!(out, "{}", json!({ "volume": v })).wrap_err("write volume line")?;
    } else {
        let written = match v {
            Some(v) => writeln!(out, "{v}"),
            None => writeln!(out, "none"),
        };
        written.wrap_err("write volume line")?;
    }
    Ok(())
}

/// The documented scenario: print the state, call the lift to `target`,
/// print the outcome. Returns whether the call succeeded.
///
/// An out-of-range `target` is returned as an error after the state line
/// has been written.
pub fn run_demo(
    lift: &mut Lift,
    target: i64,
    json_mode: bool,
    out: &mut impl Write,
) -> CoreResult<bool> {
    show(lift, out)?;
    out.flush().wrap_err("flush state line")?;

    let status = lift.call(target)?;
    let level = lift.level();

    if json_mode {
        let mut obj = json!({
            "target": target,
            "level": level,
            "success": status.succeeded(),
            "status": status_name(&status),
        });
        match &status {
            CallStatus::Arrived { floors } => obj["floors"] = json!(floors),
            CallStatus::Aborted(e) => obj["error"] = json!(e.to_string()),
            CallStatus::AlreadyThere => {}
        }
        writeln!(out, "{obj}").wrap_err("write result line")?;
    } else {
        let written = match &status {
            CallStatus::AlreadyThere => writeln!(out, "Lift already at level {level}"),
            CallStatus::Arrived { floors } => {
                writeln!(out, "Lift arrived at level {level} after {floors} floor(s)")
            }
            CallStatus::Aborted(e) => writeln!(
                out,
                "Lift call to level {target} failed at level {level}: {e}"
            ),
        };
        written.wrap_err("write result line")?;
    }
    Ok(status.succeeded())
}
