mod cli;
mod demo;
mod error_fmt;

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use eyre::{Result, WrapErr};
use lift_config::Config;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

use crate::cli::{Cli, Commands, JSON_MODE, SIM_JAM_ENV};
use crate::error_fmt::{exit_code_for_error, format_error_json, humanize};

fn main() -> ExitCode {
    let _ = color_eyre::install();
    let cli = Cli::parse();
    let _ = JSON_MODE.set(cli.json);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if JSON_MODE.get().copied().unwrap_or(false) {
                eprintln!("{}", format_error_json(&e));
            } else {
                eprintln!("{}", humanize(&e));
            }
            ExitCode::from(exit_code_for_error(&e))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let cfg = load_config(cli.config.as_deref())?;
    let level = cli
        .log_level
        .clone()
        .or_else(|| cfg.logging.level.clone())
        .unwrap_or_else(|| "warn".to_string());
    // Dropping the guard flushes the log file; it must outlive every record.
    let _guard = init_tracing(&level, cli.json, cfg.logging.file.as_deref())?;

    let result = execute(cli, &cfg);
    if let Err(e) = &result {
        tracing::error!(error = %e, "lift command failed");
    }
    result
}

fn execute(cli: Cli, cfg: &Config) -> Result<()> {
    let jam_after = std::env::var(SIM_JAM_ENV)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok());
    if let Some(n) = jam_after {
        tracing::warn!(floors = n, "simulated drive will jam");
    }

    let mut lift = demo::build_lift(cfg, jam_after)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.cmd.unwrap_or(Commands::Demo) {
        Commands::Demo => {
            demo::run_demo(&mut lift, cfg.demo.target_level, cli.json, &mut out)?;
        }
        Commands::Call { level } => {
            demo::run_demo(&mut lift, level, cli.json, &mut out)?;
        }
        Commands::Show => demo::show(&lift, &mut out)?,
        Commands::Volume => demo::volume(&lift, cli.json, &mut out)?,
    }
    out.flush().wrap_err("flush stdout")?;
    Ok(())
}

/// Built-in demo config when no path is given; otherwise parse and validate the file.
fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let text = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("read config file {}", path.display()))?;
    let cfg = lift_config::load_toml(&text)
        .map_err(|e| eyre::eyre!("{e}"))
        .wrap_err("parse config")?;
    cfg.validate().wrap_err("invalid configuration")?;
    Ok(cfg)
}

/// Console logs go to stderr so stdout only carries result lines.
/// `RUST_LOG` takes precedence over `level`. The returned guard flushes the
/// optional log file when dropped.
fn init_tracing(level: &str, json: bool, file: Option<&str>) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console = if json {
        fmt::layer().json().with_writer(std::io::stderr).boxed()
    } else {
        fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
            .boxed()
    };

    let mut guard = None;
    let file_layer = match file {
        Some(path) => {
            let path = Path::new(path);
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let name = path
                .file_name()
                .ok_or_else(|| eyre::eyre!("logging.file has no file name: {}", path.display()))?;
            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, file_guard) = tracing_appender::non_blocking(appender);
            guard = Some(file_guard);
            Some(fmt::layer().json().with_ansi(false).with_writer(writer).boxed())
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file_layer)
        .try_init()
        .map_err(|e| eyre::eyre!("init tracing: {e}"))?;
    Ok(guard)
}
