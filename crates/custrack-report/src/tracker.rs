//! Tracker: the ledger plus the settings that drive its report.
//!
//! The presentation layer receives a `Tracker` instead of reaching for a
//! process-wide instance. Seed submissions from config are recorded here.

use std::fs;

use custrack_core::error::{Result, TrackerError};
use custrack_core::{Event, Ledger, Submission};

use crate::config::{ReportFormat, TrackerConfig};
use crate::report::render;

pub struct Tracker {
    cfg: TrackerConfig,
    ledger: Ledger,
}

impl Tracker {
    /// Empty tracker; `seed_file` is ignored.
    pub fn new(cfg: TrackerConfig) -> Self {
        Self {
            cfg,
            ledger: Ledger::new(),
        }
    }

    /// Build a tracker and record the configured seed file, if any.
    pub fn from_config(cfg: TrackerConfig) -> Result<Self> {
        let seed = cfg.seed_file.clone();
        let mut tracker = Self::new(cfg);
        if let Some(path) = seed {
            let n = tracker.load_seed(&path)?;
            tracing::info!(path = %path, events = n, "seed file loaded");
        }
        Ok(tracker)
    }

    /// Record every submission in a JSON array file. All or nothing: one bad
    /// entry leaves the ledger untouched.
    pub fn load_seed(&mut self, path: &str) -> Result<usize> {
        let raw = fs::read_to_string(path)
            .map_err(|e| TrackerError::Internal(format!("read seed failed ({path}): {e}")))?;
        let submissions: Vec<Submission> = serde_json::from_str(&raw)
            .map_err(|e| TrackerError::MalformedInput(format!("seed {path}: {e}")))?;

        let events = submissions
            .into_iter()
            .enumerate()
            .map(|(i, s)| {
                s.into_event().map_err(|e| match e {
                    TrackerError::MalformedInput(msg) => {
                        TrackerError::MalformedInput(format!("seed {path} entry {i}: {msg}"))
                    }
                    other => other,
                })
            })
            .collect::<Result<Vec<Event>>>()?;

        let n = events.len();
        self.ledger.extend(events);
        Ok(n)
    }

    pub fn track_event(&mut self, submission: Submission) -> Result<&Event> {
        self.ledger.track_event(submission)
    }

    pub fn cfg(&self) -> &TrackerConfig {
        &self.cfg
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Render the report in the configured format.
    pub fn report(&self) -> Result<String> {
        match self.cfg.report.format {
            ReportFormat::Text => render::render_text(self),
            ReportFormat::Json => render::render_json(self),
        }
    }
}
