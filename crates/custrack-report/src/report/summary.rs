use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use custrack_core::Ledger;

/// Label used for events that lack a demographic attribute.
pub const UNSPECIFIED: &str = "unspecified";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyRow {
    pub label: String,
    pub count: usize,
}

/// Most frequent first; ties broken by label.
fn frequency<I>(labels: I) -> Vec<FrequencyRow>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for l in labels {
        *counts.entry(l.into()).or_default() += 1;
    }
    let mut rows: Vec<FrequencyRow> = counts
        .into_iter()
        .map(|(label, count)| FrequencyRow { label, count })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    rows
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemographicSummary {
    pub by_age_bracket: Vec<FrequencyRow>,
    pub by_region: Vec<FrequencyRow>,
}

impl DemographicSummary {
    pub fn from_ledger(ledger: &Ledger) -> Self {
        let by_age_bracket = frequency(ledger.all_events().map(|e| {
            e.demographics.age_bracket.map_or(UNSPECIFIED, |a| a.as_str())
        }));
        let by_region = frequency(
            ledger
                .all_events()
                .map(|e| e.demographics.region.map_or(UNSPECIFIED, |r| r.as_str())),
        );
        Self { by_age_bracket, by_region }
    }
}

/// Event count per event type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventHistogram {
    pub bars: Vec<FrequencyRow>,
}

impl EventHistogram {
    pub fn from_ledger(ledger: &Ledger) -> Self {
        Self {
            bars: frequency(ledger.all_events().map(|e| e.event_type.as_str())),
        }
    }

    pub fn max(&self) -> usize {
        self.bars.iter().map(|b| b.count).max().unwrap_or(0)
    }
}

/// Event type x user id occurrence counts, zero-filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OccurrenceMatrix {
    pub event_types: Vec<String>,
    pub users: Vec<String>,
    /// `counts[row][col]` for `event_types[row]` and `users[col]`.
    pub counts: Vec<Vec<usize>>,
}

impl OccurrenceMatrix {
    pub fn from_ledger(ledger: &Ledger) -> Self {
        let event_types: BTreeSet<&str> = ledger.all_events().map(|e| e.event_type.as_str()).collect();
        let users = ledger.distinct_users();

        let row_of: BTreeMap<&str, usize> = event_types.iter().enumerate().map(|(i, k)| (*k, i)).collect();
        let col_of: BTreeMap<&str, usize> = users.iter().enumerate().map(|(i, u)| (*u, i)).collect();

        let mut counts = vec![vec![0usize; users.len()]; event_types.len()];
        for e in ledger.all_events() {
            if let (Some(&r), Some(&c)) = (row_of.get(e.event_type.as_str()), col_of.get(e.user_id.as_str())) {
                counts[r][c] += 1;
            }
        }

        Self {
            event_types: event_types.into_iter().map(str::to_string).collect(),
            users: users.into_iter().map(str::to_string).collect(),
            counts,
        }
    }

    pub fn get(&self, event_type: &str, user: &str) -> usize {
        let r = self.event_types.iter().position(|k| k == event_type);
        let c = self.users.iter().position(|u| u == user);
        match (r, c) {
            (Some(r), Some(c)) => self.counts[r][c],
            _ => 0,
        }
    }
}
