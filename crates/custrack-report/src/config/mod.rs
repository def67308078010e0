//! Tracker config: strict YAML, validated right after parsing.
//!
//! Errors from a file load name the file so a bad seed path or typo can be
//! traced back to the config that caused it.

pub mod schema;

use std::fs;
use std::path::Path;

use custrack_core::error::{Result, TrackerError};

pub use schema::{ReportFormat, ReportSection, TrackerConfig};

pub fn load_from_file(path: impl AsRef<Path>) -> Result<TrackerConfig> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|e| {
        TrackerError::Internal(format!("read config failed ({}): {e}", path.display()))
    })?;
    load_from_str(&raw).map_err(|e| match e {
        TrackerError::InvalidConfig(msg) => {
            TrackerError::InvalidConfig(format!("{}: {msg}", path.display()))
        }
        other => other,
    })
}

pub fn load_from_str(s: &str) -> Result<TrackerConfig> {
    let cfg: TrackerConfig = serde_yaml::from_str(s)
        .map_err(|e| TrackerError::InvalidConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
