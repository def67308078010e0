//! Form submission → typed `Event`.
//!
//! Every field arrives as free text. Blank optional fields become `None`;
//! anything non-blank must parse, otherwise the submission is rejected with
//! `MalformedInput` before it reaches the ledger.

use chrono::{Local, NaiveDateTime, Timelike};
use serde::Deserialize;

use crate::error::{Result, TrackerError};
use crate::event::{
    AgeBracket, CheckoutStatus, Demographics, Event, EventKind, Region, ResolutionStatus,
    TIMESTAMP_FORMAT,
};

const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Raw form fields as entered by the user.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Submission {
    #[serde(default)]
    pub timestamp: String,
    pub event_type: String,
    pub user_id: String,
    #[serde(default)]
    pub age_bracket: String,
    #[serde(default)]
    pub region: String,

    #[serde(default)]
    pub revenue: Option<String>,
    #[serde(default)]
    pub resolution_status: Option<String>,
    #[serde(default)]
    pub resolution_time: Option<String>,
    #[serde(default)]
    pub repeat: Option<String>,
    #[serde(default)]
    pub checkout_status: Option<String>,
}

impl Submission {
    pub fn new(event_type: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            user_id: user_id.into(),
            ..Self::default()
        }
    }

    pub fn timestamp(mut self, ts: impl Into<String>) -> Self {
        self.timestamp = ts.into();
        self
    }

    pub fn age_bracket(mut self, age: impl Into<String>) -> Self {
        self.age_bracket = age.into();
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn revenue(mut self, revenue: impl Into<String>) -> Self {
        self.revenue = Some(revenue.into());
        self
    }

    pub fn resolution(mut self, status: impl Into<String>, time: impl Into<String>) -> Self {
        self.resolution_status = Some(status.into());
        self.resolution_time = Some(time.into());
        self
    }

    pub fn repeat(mut self, repeat: impl Into<String>) -> Self {
        self.repeat = Some(repeat.into());
        self
    }

    pub fn checkout_status(mut self, status: impl Into<String>) -> Self {
        self.checkout_status = Some(status.into());
        self
    }

    /// Build an event, filling a blank timestamp with the current local time.
    pub fn into_event(self) -> Result<Event> {
        self.into_event_at(Local::now().naive_local())
    }

    /// Build an event, filling a blank timestamp with `now` (second precision).
    pub fn into_event_at(self, now: NaiveDateTime) -> Result<Event> {
        let timestamp = match non_blank(&self.timestamp) {
            Some(raw) => parse_timestamp(raw)?,
            None => now.with_nanosecond(0).unwrap_or(now),
        };

        let event_type = self.event_type.trim();
        let user_id = self.user_id.trim();
        if event_type.is_empty() || user_id.is_empty() {
            tracing::warn!(event_type = %event_type, user_id = %user_id, "submission with blank identifier");
        }

        let demographics = Demographics {
            age_bracket: non_blank(&self.age_bracket).map(AgeBracket::parse).transpose()?,
            region: non_blank(&self.region).map(Region::parse).transpose()?,
        };

        let mut event = Event::new(timestamp, EventKind::from(event_type), user_id)
            .with_demographics(demographics);

        event.revenue = optional(self.revenue.as_deref())
            .map(|s| parse_number("revenue", s))
            .transpose()?;
        event.resolution_status =
            optional(self.resolution_status.as_deref()).map(|s| ResolutionStatus::from(s.to_string()));
        event.resolution_time = optional(self.resolution_time.as_deref())
            .map(|s| parse_number("resolution_time", s))
            .transpose()?;
        event.repeat_flag = optional(self.repeat.as_deref()).map(parse_flag).transpose()?;
        event.checkout_status =
            optional(self.checkout_status.as_deref()).map(|s| CheckoutStatus::from(s.to_string()));

        Ok(event)
    }
}

fn non_blank(s: &str) -> Option<&str> {
    let s = s.trim();
    (!s.is_empty()).then_some(s)
}

fn optional(s: Option<&str>) -> Option<&str> {
    s.and_then(non_blank)
}

fn parse_timestamp(raw: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, ISO_FORMAT))
        .map_err(|e| TrackerError::MalformedInput(format!("timestamp {raw:?}: {e}")))
}

fn parse_number(field: &str, raw: &str) -> Result<f64> {
    let v: f64 = raw
        .parse()
        .map_err(|_| TrackerError::MalformedInput(format!("{field} is not a number: {raw:?}")))?;
    if !v.is_finite() {
        return Err(TrackerError::MalformedInput(format!("{field} must be finite: {raw:?}")));
    }
    Ok(v)
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(TrackerError::MalformedInput(format!("repeat flag: {raw:?}"))),
    }
}
