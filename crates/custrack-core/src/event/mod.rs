//! Interaction event model.
//!
//! An `Event` is one row of the ledger. Fields that only some metrics read
//! (revenue, resolution, repeat, checkout) are explicit `Option`s so a missing
//! value is visible in the type rather than discovered at lookup time.

pub mod demographics;
pub mod kind;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub use demographics::{AgeBracket, Demographics, Region};
pub use kind::{CheckoutStatus, EventKind, ResolutionStatus};

/// Fixed display/parse format for event timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One recorded customer interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(with = "timestamp_format")]
    pub timestamp: NaiveDateTime,
    pub event_type: EventKind,
    pub user_id: String,
    #[serde(default)]
    pub demographics: Demographics,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution_status: Option<ResolutionStatus>,
    /// Time to resolve an inquiry, in whatever unit the caller records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_flag: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkout_status: Option<CheckoutStatus>,
}

impl Event {
    /// Event with only the mandatory fields set.
    pub fn new(timestamp: NaiveDateTime, event_type: EventKind, user_id: impl Into<String>) -> Self {
        Self {
            timestamp,
            event_type,
            user_id: user_id.into(),
            demographics: Demographics::default(),
            revenue: None,
            resolution_status: None,
            resolution_time: None,
            repeat_flag: None,
            checkout_status: None,
        }
    }

    pub fn with_demographics(mut self, demographics: Demographics) -> Self {
        self.demographics = demographics;
        self
    }

    pub fn with_revenue(mut self, revenue: f64) -> Self {
        self.revenue = Some(revenue);
        self
    }

    pub fn with_resolution(mut self, status: ResolutionStatus, time: Option<f64>) -> Self {
        self.resolution_status = Some(status);
        self.resolution_time = time;
        self
    }

    pub fn with_repeat_flag(mut self, repeat: bool) -> Self {
        self.repeat_flag = Some(repeat);
        self
    }

    pub fn with_checkout_status(mut self, status: CheckoutStatus) -> Self {
        self.checkout_status = Some(status);
        self
    }

    /// Timestamp rendered in [`TIMESTAMP_FORMAT`].
    pub fn timestamp_display(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn is(&self, kind: &EventKind) -> bool {
        &self.event_type == kind
    }
}

mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S: Serializer>(ts: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&ts.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
