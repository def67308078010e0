//! Command-line arguments for the report binary.

use std::path::{Path, PathBuf};

use clap::Parser;

/// Config used when none is given and it exists in the working directory.
pub const DEFAULT_CONFIG: &str = "custrack.yaml";

#[derive(Debug, Parser)]
#[command(name = "custrack-report", version)]
#[command(about = "Print the customer interaction ledger, summaries, and metrics", long_about = None)]
pub struct Args {
    /// YAML config file (defaults to ./custrack.yaml when present)
    pub config: Option<PathBuf>,
}

impl Args {
    /// Explicit path, else the default file if it exists, else `None` (built-in defaults).
    pub fn config_path(&self) -> Option<PathBuf> {
        match &self.config {
            Some(p) => Some(p.clone()),
            None if Path::new(DEFAULT_CONFIG).exists() => Some(PathBuf::from(DEFAULT_CONFIG)),
            None => None,
        }
    }
}
