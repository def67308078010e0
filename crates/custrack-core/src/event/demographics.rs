//! Closed demographic attribute sets offered by the intake form.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeBracket {
    #[serde(rename = "Under 18")]
    Under18,
    #[serde(rename = "18-26")]
    From18To26,
    #[serde(rename = "27-35")]
    From27To35,
    #[serde(rename = "40-99")]
    From40To99,
}

impl AgeBracket {
    pub const ALL: [AgeBracket; 4] = [
        AgeBracket::Under18,
        AgeBracket::From18To26,
        AgeBracket::From27To35,
        AgeBracket::From40To99,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AgeBracket::Under18 => "Under 18",
            AgeBracket::From18To26 => "18-26",
            AgeBracket::From27To35 => "27-35",
            AgeBracket::From40To99 => "40-99",
        }
    }

    /// Parse a form value. En-dash ranges (`18–26`) are accepted.
    pub fn parse(s: &str) -> Result<Self> {
        let normalized = s.trim().replace('\u{2013}', "-");
        Self::ALL
            .into_iter()
            .find(|b| b.as_str() == normalized)
            .ok_or_else(|| TrackerError::MalformedInput(format!("unknown age bracket: {s}")))
    }
}

impl fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "Region A")]
    A,
    #[serde(rename = "Region B")]
    B,
    #[serde(rename = "Region C")]
    C,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::A, Region::B, Region::C];

    pub fn as_str(self) -> &'static str {
        match self {
            Region::A => "Region A",
            Region::B => "Region B",
            Region::C => "Region C",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| TrackerError::MalformedInput(format!("unknown region: {s}")))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional per-event demographic attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Demographics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_bracket: Option<AgeBracket>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
}
