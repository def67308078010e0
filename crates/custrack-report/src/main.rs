//! custrack report binary.
//!
//! Loads the config, records the seed file, and prints the report.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use custrack_core::Result;
use custrack_report::cli::Args;
use custrack_report::config::{self, TrackerConfig};
use custrack_report::Tracker;

fn main() -> ExitCode {
    let args = Args::parse();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.code().as_str(), error = %e, "report failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let cfg = match args.config_path() {
        Some(path) => config::load_from_file(&path)?,
        None => TrackerConfig::default(),
    };

    let tracker = Tracker::from_config(cfg)?;
    tracing::info!(events = tracker.ledger().len(), "custrack-report starting");

    print!("{}", tracker.report()?);
    Ok(())
}
