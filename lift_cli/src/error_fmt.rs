//! Human-readable error descriptions and structured JSON error formatting.

use lift_core::error::{BuildError, LiftError};

/// Stable name of the error kind, used in JSON output.
pub fn reason_name(err: &eyre::Report) -> &'static str {
    if let Some(le) = err.downcast_ref::<LiftError>() {
        return match le {
            LiftError::InvalidLevel { .. } => "InvalidLevel",
            LiftError::UnknownAttribute(_) => "UnknownAttribute",
        };
    }
    if err.downcast_ref::<BuildError>().is_some() {
        return "InvalidConfig";
    }
    "Error"
}

/// Map an eyre::Report to a human-readable explanation with likely causes and fix hints.
pub fn humanize(err: &eyre::Report) -> String {
    // Typed matches first
    if let Some(le) = err.downcast_ref::<LiftError>() {
        return match le {
            LiftError::InvalidLevel { level, min, max } => format!(
                "What happened: Level {level} does not exist.\nLikely causes: The requested floor is outside the shaft ({min}..={max}).\nHow to fix: Pass a level between {min} and {max} (e.g., `lift call --level 1`) or fix demo.target_level in the config."
            ),
            LiftError::UnknownAttribute(name) => format!(
                "What happened: The lift has no attribute named '{name}'.\nLikely causes: A typo in the attribute name.\nHow to fix: Use one of dimensions, speed, accelerate, capacity, options, level."
            ),
        };
    }

    if let Some(BuildError::InvalidConfig(msg)) = err.downcast_ref::<BuildError>() {
        return format!(
            "What happened: Invalid configuration ({msg}).\nLikely causes: Out-of-range values in the TOML.\nHow to fix: Edit the config file, then rerun."
        );
    }

    // String-based heuristics for errors coming from config loading
    let msg = err.to_string();
    let lower = msg.to_ascii_lowercase();

    if lower.contains("read config file") {
        return format!(
            "What happened: The config file could not be read ({msg}).\nLikely causes: Wrong --config path or missing permissions.\nHow to fix: Check the path, or omit --config to run the built-in demo."
        );
    }

    if lower.contains("invalid configuration") || lower.contains("parse config") {
        let cause = err
            .chain()
            .nth(1)
            .map(|c| format!(" Cause: {c}"))
            .unwrap_or_default();
        return format!(
            "What happened: Configuration is invalid.{cause}\nLikely causes: Wrong types or out-of-range values in the TOML.\nHow to fix: Edit the config file and try again."
        );
    }

    // Generic fallback
    let mut cause = String::new();
    if let Some(src) = err.source() {
        cause = format!(" Cause: {src}");
    }
    format!(
        "Something went wrong.{cause}\nHow to fix: Re-run with --log-level=debug for details. Original: {msg}"
    )
}

/// Non-zero exit codes per error kind; a failed (aborted) trip is not an error.
pub fn exit_code_for_error(err: &eyre::Report) -> u8 {
    match reason_name(err) {
        "InvalidLevel" => 3,
        "InvalidConfig" => 4,
        _ => 1,
    }
}

/// Structured JSON for errors when --json is enabled.
pub fn format_error_json(err: &eyre::Report) -> String {
    serde_json::json!({ "reason": reason_name(err), "message": humanize(err) }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_level_is_explained() {
        let err = eyre::Report::new(LiftError::InvalidLevel {
            level: 9,
            min: 0,
            max: 5,
        });
        assert!(humanize(&err).contains("Level 9 does not exist"));
        assert_eq!(exit_code_for_error(&err), 3);
        let v: serde_json::Value = serde_json::from_str(&format_error_json(&err)).unwrap();
        assert_eq!(v["reason"], "InvalidLevel");
    }

    #[test]
    fn validation_errors_keep_their_cause() {
        let err = eyre::eyre!("timing.down_ms must be >= 1").wrap_err("invalid configuration");
        let text = humanize(&err);
        assert!(text.contains("Configuration is invalid"));
        assert!(text.contains("timing.down_ms"));
        assert_eq!(exit_code_for_error(&err), 1);
    }
}
