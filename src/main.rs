//! Circuitlab - series vs. parallel bulb laboratory
//!
//! Reads commands from a script or stdin and prints both circuits after
//! every change.
//!
//! # Usage
//!
//! ```bash
//! printf 'power series on\ntoggle series 1\n' | circuitlab --bulbs 3 --voltage 12
//! circuitlab lesson.lab --json
//! ```

use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::Parser;
use circuitlab_core::{
    error::{LabError, Result},
    session::{run_session, OutputFormat},
    Lab, LabConfig, DEFAULT_BULB_COUNT, DEFAULT_VOLTAGE,
};
use log::info;

/// Series and parallel circuit laboratory
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Command script to run (reads stdin when omitted)
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Number of bulbs in each circuit (1-5)
    #[arg(short, long, default_value_t = DEFAULT_BULB_COUNT)]
    bulbs: usize,

    /// Source voltage in volts (1-24)
    #[arg(short, long, default_value_t = DEFAULT_VOLTAGE)]
    voltage: f64,

    /// Start with the series switch closed
    #[arg(long)]
    series_on: bool,

    /// Start with the parallel switch closed
    #[arg(long)]
    parallel_on: bool,

    /// Print JSON snapshots instead of text panels
    #[arg(long)]
    json: bool,

    /// Log every state change to stderr
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    // Build the laboratory
    let config = LabConfig::new()
        .with_bulb_count(args.bulbs)
        .with_voltage(args.voltage)
        .with_series_power(args.series_on)
        .with_parallel_power(args.parallel_on);
    let mut lab = Lab::new(config)?;

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let stdout = io::stdout().lock();

    // Run the commands
    let stats = match &args.script {
        Some(path) => {
            let file = std::fs::File::open(path).map_err(|e| LabError::FileReadError {
                path: path.display().to_string(),
                source: e,
            })?;
            info!("running script {}", path.display());
            run_session(&mut lab, BufReader::new(file), stdout, format)?
        }
        None => run_session(&mut lab, io::stdin().lock(), stdout, format)?,
    };

    if stats.rejected > 0 {
        info!("{} command(s) were rejected", stats.rejected);
    }

    Ok(())
}
