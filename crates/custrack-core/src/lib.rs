//! custrack core: event model, intake, the event ledger, and the metrics engine.
//!
//! This crate owns the data contracts and the pure aggregate computations. It
//! performs no I/O and carries no presentation concerns, so the report layer
//! (or any other caller) can drive it directly.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Malformed input is
//! reported as `TrackerError`; zero denominators in ratio metrics yield `0.0`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod event;
pub mod intake;
pub mod ledger;
pub mod metrics;

/// Shared result type.
pub use error::{Result, TrackerError};
pub use event::{AgeBracket, CheckoutStatus, Demographics, Event, EventKind, Region, ResolutionStatus};
pub use intake::Submission;
pub use ledger::Ledger;
pub use metrics::{Metric, MetricsReport};
