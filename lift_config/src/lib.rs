#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Config schema for the lift simulation.
//!
//! - `Config` and sub-structs are deserialized from TOML and validated.
//! - Every section is optional; `Config::default()` is the built-in demo.
use serde::Deserialize;
use std::collections::BTreeMap;

/// One entry of the options sequence, e.g. `{ mirror = true }`.
///
/// Entries are kept as raw TOML values; the core decides which keys it
/// recognises and ignores the rest.
pub type ParamEntry = BTreeMap<String, toml::Value>;

/// Upper bound for a single floor of simulated travel.
pub const MAX_FLOOR_TIME_MS: u64 = 60_000;

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct LiftCfg {
    /// Car geometry: width, height, depth (metres).
    pub dimensions: Option<Vec<f64>>,
    /// Nominal speed (m/s); stored only, travel time does not depend on it.
    pub speed: Option<f64>,
    /// Nominal acceleration (m/s²); stored only.
    pub accelerate: Option<f64>,
    /// Lifting capacity (kg).
    pub capacity: Option<u32>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Timing {
    /// Time to pass one floor going down
    pub down_ms: u64,
    /// Time to pass one floor going up
    pub up_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            down_ms: 5,
            up_ms: 8,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Demo {
    /// Floor requested by the demo call. Not range-checked here.
    pub target_level: i64,
}

impl Default for Demo {
    fn default() -> Self {
        Self { target_level: 1 }
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct Logging {
    pub file: Option<String>,  // path to .log (JSON lines)
    pub level: Option<String>, // "info","debug"
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub lift: LiftCfg,
    /// Ordered single-key option entries applied to the lift's options.
    pub options: Vec<ParamEntry>,
    pub timing: Timing,
    pub demo: Demo,
    pub logging: Logging,
}

impl Default for Config {
    fn default() -> Self {
        let entry = |k: &str, v: bool| {
            let mut m = ParamEntry::new();
            m.insert(k.to_string(), toml::Value::Boolean(v));
            m
        };
        Self {
            lift: LiftCfg::default(),
            options: vec![
                entry("mirror", true),
                entry("handrail", true),
                entry("forInvalids", false),
            ],
            timing: Timing::default(),
            demo: Demo::default(),
            logging: Logging::default(),
        }
    }
}

pub fn load_toml(s: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(s)
}

impl Config {
    pub fn validate(&self) -> eyre::Result<()> {
        // Lift
        if let Some(dims) = &self.lift.dimensions {
            for (i, d) in dims.iter().enumerate() {
                if !d.is_finite() || d.is_sign_negative() {
                    eyre::bail!("lift.dimensions[{i}] must be a finite value >= 0");
                }
            }
        }
        if let Some(speed) = self.lift.speed
            && !speed.is_finite()
        {
            eyre::bail!("lift.speed must be finite");
        }
        if let Some(acc) = self.lift.accelerate
            && !acc.is_finite()
        {
            eyre::bail!("lift.accelerate must be finite");
        }

        // Timing
        if self.timing.down_ms == 0 {
            eyre::bail!("timing.down_ms must be >= 1");
        }
        if self.timing.up_ms == 0 {
            eyre::bail!("timing.up_ms must be >= 1");
        }
        if self.timing.down_ms > MAX_FLOOR_TIME_MS || self.timing.up_ms > MAX_FLOOR_TIME_MS {
            eyre::bail!("timing per floor is unreasonably large (>1min)");
        }

        // Options: each entry is a single key/value pair
        for (i, entry) in self.options.iter().enumerate() {
            if entry.len() != 1 {
                eyre::bail!(
                    "options[{i}] must hold exactly one key, got {}",
                    entry.len()
                );
            }
        }

        // Logging
        if let Some(level) = &self.logging.level
            && !matches!(
                level.to_ascii_lowercase().as_str(),
                "error" | "warn" | "info" | "debug" | "trace"
            )
        {
            eyre::bail!("logging.level must be one of error|warn|info|debug|trace");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_the_builtin_demo() {
        let cfg = Config::default();
        cfg.validate().expect("default config is valid");
        assert_eq!(cfg.demo.target_level, 1);
        assert_eq!(cfg.timing.down_ms, 5);
        assert_eq!(cfg.timing.up_ms, 8);
        let keys: Vec<&str> = cfg
            .options
            .iter()
            .flat_map(|m| m.keys().map(String::as_str))
            .collect();
        assert_eq!(keys, ["mirror", "handrail", "forInvalids"]);
    }

    #[test]
    fn empty_document_uses_defaults() {
        let cfg = load_toml("").expect("empty TOML parses");
        assert!(cfg.lift.dimensions.is_none());
        assert_eq!(cfg.options.len(), 3);
    }
}
