//! Open-ended string tags: event type and the status fields metrics filter on.
//!
//! Known tags get their own variant; anything else is kept verbatim in
//! `Other` so the caller's exact text survives a round trip.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Event type tag. Matching is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventKind {
    Visit,
    FirstVisit,
    LastVisit,
    Purchase,
    Churn,
    Inquiry,
    Checkout,
    Other(String),
}

impl EventKind {
    pub fn as_str(&self) -> &str {
        match self {
            EventKind::Visit => "Visit",
            EventKind::FirstVisit => "First Visit",
            EventKind::LastVisit => "Last Visit",
            EventKind::Purchase => "Purchase",
            EventKind::Churn => "Churn",
            EventKind::Inquiry => "Inquiry",
            EventKind::Checkout => "Checkout",
            EventKind::Other(s) => s,
        }
    }
}

impl From<&str> for EventKind {
    fn from(s: &str) -> Self {
        match s {
            "Visit" => EventKind::Visit,
            "First Visit" => EventKind::FirstVisit,
            "Last Visit" => EventKind::LastVisit,
            "Purchase" => EventKind::Purchase,
            "Churn" => EventKind::Churn,
            "Inquiry" => EventKind::Inquiry,
            "Checkout" => EventKind::Checkout,
            other => EventKind::Other(other.to_string()),
        }
    }
}

impl From<String> for EventKind {
    fn from(s: String) -> Self {
        match EventKind::from(s.as_str()) {
            EventKind::Other(_) => EventKind::Other(s),
            known => known,
        }
    }
}

impl From<EventKind> for String {
    fn from(k: EventKind) -> Self {
        match k {
            EventKind::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of an inquiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResolutionStatus {
    FirstContact,
    Resolved,
    Other(String),
}

impl ResolutionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ResolutionStatus::FirstContact => "First Contact",
            ResolutionStatus::Resolved => "Resolved",
            ResolutionStatus::Other(s) => s,
        }
    }
}

impl From<String> for ResolutionStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "First Contact" => ResolutionStatus::FirstContact,
            "Resolved" => ResolutionStatus::Resolved,
            _ => ResolutionStatus::Other(s),
        }
    }
}

impl From<ResolutionStatus> for String {
    fn from(r: ResolutionStatus) -> Self {
        match r {
            ResolutionStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

/// Checkout outcome. Only `Completed` is meaningful to the abandonment rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CheckoutStatus {
    Completed,
    Other(String),
}

impl CheckoutStatus {
    pub fn as_str(&self) -> &str {
        match self {
            CheckoutStatus::Completed => "Completed",
            CheckoutStatus::Other(s) => s,
        }
    }
}

impl From<String> for CheckoutStatus {
    fn from(s: String) -> Self {
        if s == "Completed" {
            CheckoutStatus::Completed
        } else {
            CheckoutStatus::Other(s)
        }
    }
}

impl From<CheckoutStatus> for String {
    fn from(c: CheckoutStatus) -> Self {
        match c {
            CheckoutStatus::Completed => "Completed".to_string(),
            CheckoutStatus::Other(s) => s,
        }
    }
}
