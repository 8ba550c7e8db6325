//! CLI argument definitions and shared statics.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::OnceLock;

/// Whether the user asked for JSON output (controls structured error output).
pub static JSON_MODE: OnceLock<bool> = OnceLock::new();

/// Environment knob for tests: the simulated drive jams after this many floors.
pub const SIM_JAM_ENV: &str = "LIFT_TEST_SIM_JAM_AFTER";

#[derive(Parser, Debug)]
#[command(name = "lift", version, about = "Lift simulation CLI")]
pub struct Cli {
    /// Path to config TOML (built-in demo values when omitted)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print results and errors as JSON instead of text
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,

    /// Console log level (error|warn|info|debug|trace); overrides logging.level
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Command to execute (default: demo)
    #[command(subcommand)]
    pub cmd: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the lift state, then call it to the configured demo level
    Demo,
    /// Print the lift state, then call it to LEVEL
    Call {
        /// Target floor
        #[arg(long, allow_negative_numbers = true)]
        level: i64,
    },
    /// Print the lift state only
    Show,
    /// Print the car volume computed from the configured dimensions
    Volume,
}
