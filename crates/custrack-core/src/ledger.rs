//! Append-only in-memory event ledger.

use std::collections::BTreeSet;

use chrono::NaiveDateTime;

use crate::error::{Result, TrackerError};
use crate::event::Event;
use crate::intake::Submission;

/// Ordered collection of recorded events. There is no update or delete.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    events: Vec<Event>,
}

impl Ledger {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Append one event.
    pub fn record(&mut self, event: Event) {
        tracing::debug!(
            event_type = %event.event_type,
            user_id = %event.user_id,
            timestamp = %event.timestamp_display(),
            "event recorded"
        );
        self.events.push(event);
    }

    /// Run intake on a form submission and append the result.
    pub fn track_event(&mut self, submission: Submission) -> Result<&Event> {
        let event = submission.into_event()?;
        self.push(event)
    }

    /// Like [`Ledger::track_event`] with an explicit clock for blank timestamps.
    pub fn track_event_at(&mut self, submission: Submission, now: NaiveDateTime) -> Result<&Event> {
        let event = submission.into_event_at(now)?;
        self.push(event)
    }

    fn push(&mut self, event: Event) -> Result<&Event> {
        self.record(event);
        self.events
            .last()
            .ok_or_else(|| TrackerError::Internal("ledger empty after append".into()))
    }

    /// Events in insertion order. The iterator is `Clone`, so it can be restarted.
    pub fn all_events(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Distinct user ids across every event.
    pub fn distinct_users(&self) -> BTreeSet<&str> {
        self.events.iter().map(|e| e.user_id.as_str()).collect()
    }
}

impl FromIterator<Event> for Ledger {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        let mut ledger = Ledger::new();
        ledger.extend(iter);
        ledger
    }
}

impl Extend<Event> for Ledger {
    fn extend<I: IntoIterator<Item = Event>>(&mut self, iter: I) {
        for event in iter {
            self.record(event);
        }
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.all_events()
    }
}
