//! JSON ledger vector loader shared by metric tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs;

use serde::Deserialize;

use custrack_core::{Ledger, Submission};

#[derive(Debug, Deserialize)]
pub struct LedgerVector {
    pub description: String,
    pub events: Vec<Submission>,
    /// Metric name (snake_case) -> expected value; `null` means undefined.
    pub expect: BTreeMap<String, Option<f64>>,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

fn default_tolerance() -> f64 {
    1e-9
}

impl LedgerVector {
    pub fn ledger(&self) -> Ledger {
        let mut ledger = Ledger::new();
        for s in &self.events {
            ledger
                .track_event(s.clone())
                .unwrap_or_else(|e| panic!("vector={} bad submission: {e}", self.description));
        }
        ledger
    }
}

pub fn load(name: &str) -> LedgerVector {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}
