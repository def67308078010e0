//! custrack report library entry.
//!
//! Wires configuration, the tracker (ledger + report settings), summaries,
//! and renderers. Consumed by the binary (`main.rs`) and by integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod cli;
pub mod config;
pub mod report;
pub mod tracker;

pub use tracker::Tracker;
