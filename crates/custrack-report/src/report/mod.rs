//! Reporting: tabular summaries and their text/JSON renderings.
//!
//! `summary` builds plain data (frequency tables, the event histogram, the
//! event-by-user matrix); `render` turns a tracker into the final report.

pub mod render;
pub mod summary;

pub use summary::{DemographicSummary, EventHistogram, FrequencyRow, OccurrenceMatrix};
