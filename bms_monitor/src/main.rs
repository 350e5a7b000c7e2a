//! # BMS Monitor
//!
//! Direct-invocation entry point for the battery validator.
//!
//! - Without a reading: runs the built-in self-check scenarios.
//! - With `--temperature`, `--soc` and `--charge-rate`: evaluates that
//!   snapshot, prints warnings and the verdict.
//!
//! Exit codes: `0` OK, `1` fatal error or self-check mismatch,
//! `2` battery out of range.

use bms_common::config::{ConfigLoader, MonitorConfig, OutputFormat};
use bms_monitor::battery::Battery;
use bms_monitor::report::{trace_verdict, write_verdict, write_warnings};
use bms_monitor::selfcheck::run_self_check;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

/// Exit code when the evaluated battery is out of range.
const EXIT_NOT_OK: i32 = 2;

/// BMS Monitor — battery telemetry range validator
#[derive(Parser, Debug)]
#[command(name = "bms_monitor")]
#[command(author = "RTS007")]
#[command(version)]
#[command(about = "Validate battery telemetry against the safe operating envelope")]
struct Args {
    /// Path to monitor configuration TOML.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Cell temperature [°C].
    #[arg(long, allow_negative_numbers = true, requires_all = ["soc", "charge_rate"])]
    temperature: Option<f64>,

    /// State of charge [%].
    #[arg(long, allow_negative_numbers = true, requires_all = ["temperature", "charge_rate"])]
    soc: Option<f64>,

    /// Charge rate [C].
    #[arg(long, allow_negative_numbers = true, requires_all = ["temperature", "soc"])]
    charge_rate: Option<f64>,

    /// Disable early-warning bands.
    #[arg(long)]
    no_warnings: bool,

    /// Enable verbose logging (DEBUG level).
    #[arg(short, long)]
    verbose: bool,

    /// Output logs and the verdict in JSON format.
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();

    let config = match args.config {
        Some(ref path) => MonitorConfig::load(path),
        None => Ok(MonitorConfig::default()),
    };
    let level = match (&config, args.verbose) {
        (_, true) => Level::DEBUG,
        (Ok(cfg), false) => cfg.shared.log_level.into(),
        (Err(_), false) => Level::INFO,
    };
    setup_tracing(level, args.json);

    info!("BMS Monitor v{} starting...", env!("CARGO_PKG_VERSION"));

    let result = config
        .and_then(|cfg| cfg.validate().map(|()| cfg))
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
        .and_then(|cfg| run(&args, &cfg));

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(EXIT_NOT_OK),
        Err(e) => {
            error!("FATAL: {e}");
            process::exit(1);
        }
    }
}

/// Returns whether the battery (or self-check) is OK.
fn run(args: &Args, config: &MonitorConfig) -> Result<bool, Box<dyn std::error::Error>> {
    let (Some(temperature), Some(soc), Some(charge_rate)) =
        (args.temperature, args.soc, args.charge_rate)
    else {
        let passed = run_self_check()?;
        info!("Self-check OK: {passed} scenarios");
        return Ok(true);
    };

    let warnings = config.warnings.enabled && !args.no_warnings;
    let format = if args.json {
        OutputFormat::Json
    } else {
        config.output
    };

    let battery = Battery::new(temperature, soc, charge_rate)?.with_warnings(warnings);
    let verdict = battery.evaluate();
    trace_verdict(&verdict);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if format == OutputFormat::Text {
        write_warnings(&verdict, &mut out)?;
    }
    write_verdict(&verdict, format, &mut out)?;
    out.flush()?;

    Ok(verdict.ok)
}

/// Setup tracing subscriber. Logs go to stderr; stdout carries the verdict.
fn setup_tracing(level: Level, json: bool) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .compact()
            .init();
    }
}
