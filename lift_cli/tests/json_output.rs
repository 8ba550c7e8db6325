use assert_cmd::prelude::*;
use rstest::rstest;
use std::process::Command;

fn run_json(args: &[&str]) -> (Option<i32>, String, String) {
    let mut cmd = Command::cargo_bin("lift_cli").unwrap();
    cmd.arg("--json").args(args);
    let out = cmd.output().unwrap();
    (
        out.status.code(),
        String::from_utf8(out.stdout).unwrap(),
        String::from_utf8(out.stderr).unwrap(),
    )
}

/// Validate the JSON lines of a successful demo run.
#[rstest]
fn json_demo_schema() {
    let (code, stdout, _) = run_json(&[]);
    assert_eq!(code, Some(0));

    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).expect("each line is JSON"))
        .collect();
    assert_eq!(lines.len(), 2);

    let state = &lines[0];
    assert_eq!(state["level"], 5);
    assert_eq!(state["options"]["forInvalids"], false);

    let result = &lines[1];
    assert_eq!(result["success"], true);
    assert_eq!(result["status"], "arrived");
    assert_eq!(result["target"], 1);
    assert_eq!(result["level"], 1);
    assert_eq!(result["floors"], 4);
}

#[rstest]
fn json_error_schema() {
    let (code, _, stderr) = run_json(&["call", "--level", "42"]);
    assert_eq!(code, Some(3));

    let err_line = stderr
        .lines()
        .filter_map(|l| serde_json::from_str::<serde_json::Value>(l).ok())
        .find(|v| v.get("reason").is_some())
        .expect("an error object on stderr");
    assert_eq!(err_line["reason"], "InvalidLevel");
    assert!(
        err_line["message"]
            .as_str()
            .unwrap()
            .contains("Level 42 does not exist")
    );
}

#[rstest]
fn json_volume_without_dimensions_is_null() {
    let (code, stdout, _) = run_json(&["volume"]);
    assert_eq!(code, Some(0));
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert!(v["volume"].is_null());
}
