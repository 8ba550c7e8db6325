//! Bridges `lift_config` types to `lift_core` types.

use std::time::Duration;

use lift_config::{Config, ParamEntry, Timing};

use crate::builder::LiftBuilder;
use crate::params::ParamValue;

/// Scalar TOML values map onto parameter values; arrays, tables and
/// datetimes have no parameter counterpart.
pub fn param_value(v: &toml::Value) -> Option<ParamValue> {
    match v {
        toml::Value::Boolean(b) => Some(ParamValue::Bool(*b)),
        toml::Value::Integer(i) => Some(ParamValue::Int(*i)),
        toml::Value::Float(f) => Some(ParamValue::Float(*f)),
        toml::Value::String(s) => Some(ParamValue::Text(s.clone())),
        _ => None,
    }
}

/// Flatten the ordered option entries into key/value pairs, keeping order.
pub fn option_params(entries: &[ParamEntry]) -> Vec<(String, ParamValue)> {
    let mut out = Vec::with_capacity(entries.len());
    for entry in entries {
        for (key, raw) in entry {
            match param_value(raw) {
                Some(v) => out.push((key.clone(), v)),
                None => tracing::warn!(key = %key, "ignoring non-scalar option value"),
            }
        }
    }
    out
}

/// Per-floor travel times `(down, up)`.
pub fn floor_times(t: &Timing) -> (Duration, Duration) {
    (
        Duration::from_millis(t.down_ms),
        Duration::from_millis(t.up_ms),
    )
}

impl From<&Config> for LiftBuilder {
    /// Geometry, motion figures and options from config. The drive is left
    /// to the caller.
    fn from(cfg: &Config) -> Self {
        let mut b = LiftBuilder::default().with_params(option_params(&cfg.options));
        if let Some(dims) = &cfg.lift.dimensions {
            b = b.with_dimensions(dims.clone());
        }
        if let Some(speed) = cfg.lift.speed {
            b = b.with_speed(speed);
        }
        if let Some(acc) = cfg.lift.accelerate {
            b = b.with_accelerate(acc);
        }
        if let Some(capacity) = cfg.lift.capacity {
            b = b.with_capacity(capacity);
        }
        b
    }
}
